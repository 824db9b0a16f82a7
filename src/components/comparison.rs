use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::content::{ComparisonClaim, ComparisonColumn, Indicator};

fn marker(indicator: Indicator) -> Html {
    match indicator {
        Indicator::Positive => html! {
            <IconView icon={Icon::CheckCircle} class={indicator.css_class()} />
        },
        Indicator::Negative | Indicator::Caution => html! {
            <span class={classes!("indicator-dot", indicator.css_class())}></span>
        },
    }
}

fn claim_row(claim: &ComparisonClaim) -> Html {
    html! {
        <li class="comparison-claim">
            { marker(claim.indicator) }
            <span>{claim.label}</span>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct ComparisonTableProps {
    pub columns: &'static [ComparisonColumn],
}

#[function_component(ComparisonTable)]
pub fn comparison_table(props: &ComparisonTableProps) -> Html {
    html! {
        <div class="comparison-grid">
            {
                for props.columns.iter().map(|column| html! {
                    <div class={classes!("comparison-column", column.featured.then_some("featured"))}>
                        <div class="comparison-badge">{column.badge}</div>
                        <h3>{column.title}</h3>
                        <ul>
                            { for column.claims.iter().map(claim_row) }
                        </ul>
                    </div>
                })
            }
        </div>
    }
}
