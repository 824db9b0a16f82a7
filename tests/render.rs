use aion_frontend::components::button::{ButtonVariant, GlowButton, GlowButtonProps};
use aion_frontend::components::card_visual::{CardVisual, CardVisualProps};
use aion_frontend::components::comparison::{ComparisonTable, ComparisonTableProps};
use aion_frontend::components::faq::{FaqList, FaqListProps};
use aion_frontend::content::{COMPARISON, FAQS, STEPS};
use aion_frontend::motion::{MappedVisualState, ScrollProgress};
use aion_frontend::pages::landing::Landing;
use yew::prelude::*;
use yew::ServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

#[function_component(LandingInMemoryRouter)]
fn landing_in_memory_router() -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! {
        <Router history={history}>
            <Landing />
        </Router>
    }
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{:?} missing from rendered page", needle))
}

/// The opening tag around the byte offset `at`.
fn enclosing_tag(html: &str, at: usize) -> &str {
    let start = html[..at].rfind('<').expect("no tag opens before offset");
    let end = at + html[at..].find('>').expect("tag never closes");
    &html[start..=end]
}

/// Opening tags, in document order, whose markup contains `needle`.
fn tags_with<'a>(html: &'a str, needle: &str) -> Vec<&'a str> {
    html.match_indices(needle)
        .map(|(at, _)| enclosing_tag(html, at))
        .collect()
}

fn transition_delay_ms(tag: &str) -> u32 {
    let rest = tag
        .split("transition-delay: ")
        .nth(1)
        .unwrap_or_else(|| panic!("no transition-delay in {}", tag));
    rest[..rest.find("ms").expect("delay has no unit")]
        .parse()
        .expect("delay is not a number")
}

#[tokio::test]
async fn faq_list_renders_five_collapsed_items() {
    let html = ServerRenderer::<FaqList>::with_props(|| FaqListProps { entries: FAQS })
        .hydratable(false)
        .render()
        .await;

    assert_eq!(html.matches("class=\"faq-item\"").count(), 5);
    assert_eq!(html.matches("aria-expanded=\"false\"").count(), 5);
    assert!(!html.contains("faq-item open"));
    assert!(html.contains("How does the crypto credit card work?"));
}

#[tokio::test]
async fn comparison_renders_three_columns_of_five_claims() {
    let html = ServerRenderer::<ComparisonTable>::with_props(|| ComparisonTableProps {
        columns: COMPARISON,
    })
    .hydratable(false)
    .render()
    .await;

    assert_eq!(html.matches("comparison-column").count(), 3);
    assert_eq!(html.matches("comparison-claim").count(), 15);
    assert_eq!(html.matches("indicator-positive").count(), 5);
    assert_eq!(html.matches("indicator-negative").count(), 8);
    assert_eq!(html.matches("indicator-caution").count(), 2);
}

#[tokio::test]
async fn landing_sections_render_in_order() {
    let html = ServerRenderer::<LandingInMemoryRouter>::new()
        .hydratable(false)
        .render()
        .await;

    let order = [
        "class=\"top-nav\"",
        "class=\"hero\"",
        "id=\"how-it-works\"",
        "id=\"lending\"",
        "id=\"features\"",
        "Transparency",
        "Over Other Crypto Cards",
        "id=\"faq\"",
        "Ready for the best crypto credit card",
        "class=\"site-footer\"",
    ];
    let positions: Vec<usize> = order.iter().map(|needle| position(&html, needle)).collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "sections out of order: {:?}",
        positions
    );

    assert_eq!(html.matches("Deposit Now").count(), 1);
    assert_eq!(html.matches("class=\"step-ordinal\"").count(), 4);
    assert!(html.contains(">01<"));
    assert_eq!(html.matches("class=\"feature-card glass-panel\"").count(), 4);

    let step_delays: Vec<u32> = tags_with(&html, "step-card glass-panel")
        .into_iter()
        .map(transition_delay_ms)
        .collect();
    assert_eq!(step_delays.len(), 4);
    assert!(
        step_delays.windows(2).all(|w| w[0] < w[1]),
        "step cards must reveal one after another: {:?}",
        step_delays
    );
    assert_eq!(
        step_delays,
        STEPS.iter().map(|s| s.delay_ms).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn card_scroll_layers_render_before_entrance_starts() {
    let html = ServerRenderer::<CardVisual>::with_props(|| CardVisualProps {
        state: MappedVisualState::at(ScrollProgress::TOP),
    })
    .hydratable(false)
    .render()
    .await;

    let entrance = enclosing_tag(&html, position(&html, "class=\"card-entrance"));
    assert!(entrance.contains("class=\"card-entrance\""), "{}", entrance);
    assert!(!entrance.contains("entered"));

    let motion = enclosing_tag(&html, position(&html, "class=\"card-motion\""));
    assert!(
        motion.contains("translateY(150.00px) scale(0.7500)"),
        "{}",
        motion
    );
    assert!(position(&html, "class=\"card-entrance") < position(&html, "class=\"card-motion\""));
    assert!(html.contains("src=\"/assets/card.svg\""));
}

#[tokio::test]
async fn glow_button_is_a_plain_button() {
    let html = ServerRenderer::<GlowButton>::with_props(|| GlowButtonProps {
        variant: ButtonVariant::Secondary,
        class: Classes::new(),
        children: Children::new(vec![html! { "Start Lending" }]),
    })
    .hydratable(false)
    .render()
    .await;

    let button = enclosing_tag(&html, position(&html, "<button") + 1);
    assert!(button.contains("type=\"button\""), "{}", button);
    assert!(button.contains("glow-button glow-button-secondary"), "{}", button);
    assert!(html.contains("Start Lending"));
}
