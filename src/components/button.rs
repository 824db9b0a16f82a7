use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "glow-button-primary",
            ButtonVariant::Secondary => "glow-button-secondary",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GlowButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Decorative call-to-action button with a soft glow on hover. It carries no
/// action of its own; navigation lives on the deposit button.
#[function_component(GlowButton)]
pub fn glow_button(props: &GlowButtonProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!("glow-button", props.variant.class(), props.class.clone())}
        >
            { for props.children.iter() }
        </button>
    }
}
