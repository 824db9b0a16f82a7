use yew::prelude::*;

use crate::components::icon::IconView;
use crate::content::FeatureContent;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: FeatureContent,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = &props.feature;

    html! {
        <div class="feature-card glass-panel">
            <div class="icon-badge">
                <IconView icon={feature.icon} />
            </div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}
