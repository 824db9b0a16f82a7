use yew::prelude::*;

/// Stroke icons drawn on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    CheckCircle,
    ChevronRight,
    CreditCard,
    PiggyBank,
    Plus,
    RefreshCw,
    Shield,
    Target,
    TrendingUp,
    Wallet,
    Zap,
}

impl Icon {
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::ArrowRight => &["M5 12h14", "M12 5l7 7-7 7"],
            Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4L12 14.01l-3-3"],
            Icon::ChevronRight => &["M9 18l6-6-6-6"],
            Icon::CreditCard => &[
                "M4 5h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2z",
                "M2 10h20",
            ],
            Icon::PiggyBank => &[
                "M19 5c-1.5 0-2.8 1.4-3 2-3.5-1.5-11-.3-11 5 0 1.8 0 3 2 4.5V20h4v-2h3v2h4v-4c1-.5 1.7-1 2-2h2v-4h-2c0-1-.5-1.5-1-2V5z",
                "M2 9v1c0 1.1.9 2 2 2h1",
                "M16 11h.01",
            ],
            Icon::Plus => &["M5 12h14", "M12 5v14"],
            Icon::RefreshCw => &[
                "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8",
                "M21 3v5h-5",
                "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16",
                "M8 16H3v5",
            ],
            Icon::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            Icon::Target => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M6 12a6 6 0 1 0 12 0a6 6 0 1 0-12 0",
                "M10 12a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Icon::TrendingUp => &["M22 7l-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            Icon::Wallet => &[
                "M21 12V7H5a2 2 0 0 1 0-4h14v4",
                "M3 5v14a2 2 0 0 0 2 2h16v-5",
                "M18 12a2 2 0 0 0 0 4h4v-4z",
            ],
            Icon::Zap => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
