use yew::prelude::*;

use crate::config;
use crate::motion::{use_reveal, RevealMode};

/// Where a revealed element slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
}

impl RevealFrom {
    fn class(self) -> &'static str {
        match self {
            RevealFrom::Below => "reveal-below",
            RevealFrom::Left => "reveal-left",
            RevealFrom::Right => "reveal-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub from: RevealFrom,
    #[prop_or_default]
    pub mode: RevealMode,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(config::REVEAL_DURATION_MS)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), props.mode);

    let style = format!(
        "transition-duration: {}ms; transition-delay: {}ms;",
        props.duration_ms, props.delay_ms
    );

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.from.class(),
                visible.then_some("revealed"),
                props.class.clone()
            )}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}
