use yew::prelude::*;

use crate::components::button::{ButtonVariant, GlowButton};
use crate::components::card_visual::CardVisual;
use crate::components::icon::{Icon, IconView};
use crate::motion::{use_scroll_progress, MappedVisualState};

/// Owns the page's scroll subscription so only the hero re-renders while
/// the user scrolls.
#[function_component(Hero)]
pub fn hero() -> Html {
    let progress = use_scroll_progress();
    let state = MappedVisualState::at(progress);

    html! {
        <section class="hero">
            <div class="hero-backdrop" style={state.hero_backdrop_style()}></div>

            <div class="hero-content">
                <div class="rise-in">
                    <h1 class="gradient-title hero-title">
                        {"Crypto Credit Card."}
                        <br />
                        {"Spend Without Selling."}
                    </h1>
                    <p class="hero-subtitle">
                        {"Get instant crypto-backed credit using your USDC. Earn yield on collateral while spending crypto in real life with tap-to-pay technology. No selling required."}
                    </p>
                </div>

                <div class="rise-in rise-in-late hero-actions">
                    <GlowButton variant={ButtonVariant::Primary}>
                        {"Start Borrowing"}
                        <IconView icon={Icon::ArrowRight} />
                    </GlowButton>
                    <GlowButton variant={ButtonVariant::Secondary}>
                        {"Start Lending"}
                        <IconView icon={Icon::TrendingUp} />
                    </GlowButton>
                </div>

                <CardVisual state={state} />
            </div>
        </section>
    }
}
