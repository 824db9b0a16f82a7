use yew::prelude::*;

use crate::components::icon::IconView;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::StepContent;

#[derive(Properties, PartialEq)]
pub struct StepCardProps {
    pub step: StepContent,
}

/// One how-it-works step. Cards in a row reveal one after another through
/// their per-step delay.
#[function_component(StepCard)]
pub fn step_card(props: &StepCardProps) -> Html {
    let step = &props.step;

    html! {
        <Reveal
            class="step-card glass-panel"
            delay_ms={step.delay_ms}
            duration_ms={config::STEP_REVEAL_DURATION_MS}
        >
            <div class="step-card-hover"></div>
            <div class="step-card-body">
                <div class="step-card-head">
                    <div class="icon-badge icon-badge-round">
                        <IconView icon={step.icon} />
                    </div>
                    <div class="step-ordinal">{format!("{:02}", step.ordinal)}</div>
                </div>
                <h3>{step.title}</h3>
                <p>{step.description}</p>
            </div>
        </Reveal>
    }
}
