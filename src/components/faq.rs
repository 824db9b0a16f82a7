use web_sys::MouseEvent;
use yew::prelude::*;

use crate::accordion::AccordionState;
use crate::components::icon::{Icon, IconView};
use crate::content::FaqEntry;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then_some("open"))}>
            <button class="faq-question" aria-expanded={props.is_open.to_string()} onclick={onclick}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">
                    <IconView icon={Icon::Plus} />
                </span>
            </button>
            <div class="faq-answer">
                <div class="faq-answer-inner">
                    <p>{props.entry.answer}</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
}

/// Accordion over `entries`; opening one closes the others.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let accordion = use_state(AccordionState::default);

    html! {
        <div class="faq-list glass-panel">
            {
                for props.entries.iter().enumerate().map(|(index, entry)| {
                    let on_toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |_: ()| accordion.set(accordion.toggled(index)))
                    };
                    html! {
                        <FaqItem
                            key={index}
                            entry={*entry}
                            is_open={accordion.is_open(index)}
                            on_toggle={on_toggle}
                        />
                    }
                })
            }
        </div>
    }
}
