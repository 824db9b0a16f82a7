use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::*;

use crate::components::button::{ButtonVariant, GlowButton};
use crate::components::comparison::ComparisonTable;
use crate::components::faq::FaqList;
use crate::components::feature_card::FeatureCard;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::icon::{Icon, IconView};
use crate::components::nav::Nav;
use crate::components::reveal::{Reveal, RevealFrom};
use crate::components::step_card::StepCard;
use crate::content::{
    COMPARISON, FAQS, FEATURES, LANDING_META, SECURITY_BADGES, STAKING_BENEFITS, STEPS,
    YIELD_SNAPSHOT,
};
use crate::seo;
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    let navigator = use_navigator();

    // Start at the top so the card choreography plays from progress 0
    use_mount(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        seo::apply_page_meta(&LANDING_META);
    });

    let on_deposit = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        match &navigator {
            Some(navigator) => {
                info!("Navigating to deposit flow");
                navigator.push(&Route::LendDeposit);
            }
            None => warn!("no router available for deposit navigation"),
        }
    });

    html! {
        <div class="landing-page">
            <Nav />

            <Hero />

            <section id="how-it-works" class="section">
                <div class="section-inner">
                    <Reveal class="section-heading">
                        <h2 class="gradient-title">{"How It Works"}</h2>
                        <p>{"Get started in minutes with our seamless Web3 credit experience"}</p>
                    </Reveal>
                    <div class="card-grid">
                        { for STEPS.iter().map(|step| html! { <StepCard step={*step} /> }) }
                    </div>
                </div>
            </section>

            <section id="lending" class="section section-tinted">
                <div class="section-inner lending-grid">
                    <Reveal from={RevealFrom::Left}>
                        <h2 class="gradient-title">{"Stake USDC for Credit"}</h2>
                        <p class="lending-copy">
                            {"Stake your USDC as collateral to unlock crypto credit lines. Earn competitive APY while your assets back real-world crypto spending power."}
                        </p>
                        <ul class="benefit-list">
                            {
                                for STAKING_BENEFITS.iter().map(|benefit| html! {
                                    <li>
                                        <IconView icon={Icon::CheckCircle} />
                                        <span>{*benefit}</span>
                                    </li>
                                })
                            }
                        </ul>
                        <GlowButton variant={ButtonVariant::Primary}>
                            {"Start Lending"}
                            <IconView icon={Icon::TrendingUp} />
                        </GlowButton>
                    </Reveal>

                    <Reveal from={RevealFrom::Right} class="yield-panel glass-panel">
                        <h3>{"Yield"}</h3>
                        <div class="yield-apy">
                            <div class="yield-row">
                                <span class="muted">{"Current APY"}</span>
                                <span class="yield-apy-value">{format!("{}%", YIELD_SNAPSHOT.apy_percent)}</span>
                            </div>
                            <div class="yield-bar">
                                <div
                                    class="yield-bar-fill"
                                    style={format!("width: {}%;", YIELD_SNAPSHOT.apy_bar_fill_percent)}
                                ></div>
                            </div>
                        </div>
                        <div class="yield-stats">
                            <div class="yield-stat">
                                <div class="muted">{"Your Deposits"}</div>
                                <div class="yield-stat-value">{YIELD_SNAPSHOT.deposits}</div>
                            </div>
                            <div class="yield-stat">
                                <div class="muted">{"Total Earned"}</div>
                                <div class="yield-stat-value">{YIELD_SNAPSHOT.earned}</div>
                            </div>
                        </div>
                        <button class="deposit-button" onclick={on_deposit}>
                            {"Deposit Now"}
                        </button>
                    </Reveal>
                </div>
            </section>

            <section id="features" class="section">
                <div class="section-inner">
                    <Reveal class="section-heading">
                        <h2 class="gradient-title">{"Why Choose Us?"}</h2>
                    </Reveal>
                    <div class="card-grid">
                        { for FEATURES.iter().map(|feature| html! { <FeatureCard feature={*feature} /> }) }
                    </div>
                </div>
            </section>

            <section class="section section-tinted">
                <div class="section-inner centered">
                    <Reveal>
                        <h2 class="gradient-title">{"Security & Transparency"}</h2>
                        <p class="section-lead">
                            {"Your crypto credit is fully self-custodial and transparent. Avoid capital gains while spending crypto for everyday purchases."}
                        </p>
                        <div class="security-badges">
                            {
                                for SECURITY_BADGES.iter().map(|badge| html! {
                                    <div class="security-badge">
                                        <IconView icon={badge.icon} />
                                        <span>{badge.label}</span>
                                    </div>
                                })
                            }
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="section section-fade">
                <div class="section-inner">
                    <Reveal class="section-heading">
                        <h2 class="gradient-title">{"Why Choose Aion Over Other Crypto Cards?"}</h2>
                        <p>{"Compare Aion's crypto credit card with traditional crypto debit cards and centralized lending platforms"}</p>
                    </Reveal>
                    <Reveal delay_ms={200} class="glass-panel comparison-panel">
                        <ComparisonTable columns={COMPARISON} />
                    </Reveal>
                </div>
            </section>

            <section id="faq" class="section">
                <div class="section-inner narrow">
                    <Reveal class="section-heading">
                        <h2 class="gradient-title">{"Crypto Credit Card FAQ"}</h2>
                    </Reveal>
                    <FaqList entries={FAQS} />
                </div>
            </section>

            <section class="section section-tinted">
                <div class="section-inner narrow centered">
                    <Reveal>
                        <h2 class="gradient-title cta-title">{"Ready for the best crypto credit card 2025?"}</h2>
                        <p class="section-lead">
                            {"Experience crypto credit without selling your assets. Start spending crypto in stores with our stablecoin credit card."}
                        </p>
                        <GlowButton variant={ButtonVariant::Primary} class="cta-large">
                            {"Start Now"}
                            <IconView icon={Icon::ChevronRight} />
                        </GlowButton>
                    </Reveal>
                </div>
            </section>

            <Footer />

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #ffffff;
                    color: #000000;
                    overflow-x: hidden;
                    font-family: system-ui, -apple-system, sans-serif;
                }

                .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                    flex-shrink: 0;
                }

                /* nav */
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1rem 0;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.85);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 0 rgba(0, 0, 0, 0.06);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #000;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    gap: 2rem;
                }

                .nav-link {
                    color: #4b5563;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: #000;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #000;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(255, 255, 255, 0.97);
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }

                /* shared */
                .section {
                    padding: 6rem 1rem;
                }

                .section-tinted {
                    background: linear-gradient(to bottom, transparent, rgba(243, 244, 246, 0.3));
                }

                .section-fade {
                    background: linear-gradient(to bottom, transparent, rgba(249, 250, 251, 0.5));
                }

                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .section-inner.narrow {
                    max-width: 56rem;
                }

                .centered {
                    text-align: center;
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-heading p,
                .section-lead {
                    font-size: 1.25rem;
                    color: #9ca3af;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                }

                .gradient-title {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(to right, #1f2937, #6b7280, #1f2937);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .glass-panel {
                    background: rgba(249, 250, 251, 0.8);
                    backdrop-filter: blur(20px);
                    border: 1px solid rgba(229, 231, 235, 0.4);
                    border-radius: 1rem;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.04), inset 0 1px 0 rgba(255, 255, 255, 0.1);
                }

                .muted {
                    color: #9ca3af;
                }

                .icon-badge {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    color: #ffffff;
                    background: linear-gradient(to right, #4b5563, #6b7280);
                    box-shadow: 0 10px 15px rgba(209, 213, 219, 0.4);
                    margin-bottom: 1rem;
                }

                .icon-badge-round {
                    border-radius: 9999px;
                    margin-bottom: 0;
                }

                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
                    gap: 2rem;
                }

                /* viewport reveals */
                .reveal {
                    opacity: 0;
                    transition-property: opacity, transform;
                    transition-timing-function: ease-out;
                }

                .reveal-below { transform: translateY(30px); }
                .reveal-left { transform: translateX(-50px); }
                .reveal-right { transform: translateX(50px); }

                .reveal.revealed {
                    opacity: 1;
                    transform: none;
                }

                @keyframes rise-in {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .rise-in {
                    animation: rise-in 0.8s ease-out both;
                }

                .rise-in-late {
                    animation-delay: 0.2s;
                }

                /* buttons */
                .glow-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    font-size: 1.125rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: box-shadow 0.3s ease, transform 0.3s ease;
                }

                .glow-button-primary {
                    color: #ffffff;
                    border: none;
                    background: linear-gradient(to right, #4b5563, #6b7280);
                }

                .glow-button-secondary {
                    color: #111827;
                    background: rgba(255, 255, 255, 0.8);
                    border: 1px solid rgba(0, 0, 0, 0.15);
                }

                .glow-button:hover {
                    transform: translateY(-1px);
                    box-shadow: 0 0 24px rgba(107, 114, 128, 0.35);
                }

                .cta-large {
                    font-size: 1.25rem;
                    padding: 1.5rem 3rem;
                }

                /* hero */
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0 1rem;
                    margin-top: 10rem;
                }

                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, transparent, rgba(249, 250, 251, 0.3), transparent);
                }

                .hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .hero-title {
                    font-size: clamp(3.75rem, 9vw, 6rem);
                    background: linear-gradient(to right, #111827, #4b5563, #111827);
                    -webkit-background-clip: text;
                    background-clip: text;
                }

                .hero-subtitle {
                    font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                    color: #374151;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                    line-height: 1.6;
                }

                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    justify-content: center;
                }

                /* steps and features */
                .step-card {
                    position: relative;
                    padding: 2rem;
                }

                .step-card-hover {
                    position: absolute;
                    inset: 0;
                    border-radius: 1rem;
                    background: linear-gradient(to right, rgba(243, 244, 246, 0.5), rgba(229, 231, 235, 0.3));
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .step-card:hover .step-card-hover {
                    opacity: 1;
                }

                .step-card-body {
                    position: relative;
                }

                .step-card-head {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }

                .step-ordinal {
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .step-card h3,
                .feature-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                }

                .step-card p,
                .feature-card p {
                    color: #9ca3af;
                    line-height: 1.6;
                }

                .feature-card {
                    padding: 1.5rem;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }

                .feature-card:hover {
                    transform: scale(1.05);
                    border-color: rgba(209, 213, 219, 0.6);
                }

                /* lending */
                .lending-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                    gap: 4rem;
                    align-items: center;
                }

                .lending-copy {
                    font-size: 1.25rem;
                    color: #9ca3af;
                    margin-bottom: 2rem;
                    line-height: 1.6;
                }

                .benefit-list {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .benefit-list li {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    color: #374151;
                }

                .yield-panel {
                    padding: 2rem;
                    border-color: rgba(0, 0, 0, 0.2);
                }

                .yield-panel h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .yield-apy,
                .yield-stat {
                    background: rgba(243, 244, 246, 0.5);
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                }

                .yield-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1rem;
                }

                .yield-apy-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                }

                .yield-bar {
                    width: 100%;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #374151;
                }

                .yield-bar-fill {
                    height: 100%;
                    border-radius: 9999px;
                    background: linear-gradient(to right, #4b5563, #6b7280);
                }

                .yield-stats {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    margin: 1.5rem 0;
                }

                .yield-stat {
                    padding: 1rem;
                }

                .yield-stat-value {
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .deposit-button {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 0.75rem;
                    color: #ffffff;
                    font-weight: 500;
                    background: linear-gradient(to right, #4b5563, #6b7280);
                    cursor: pointer;
                    transition: box-shadow 0.3s ease;
                }

                .deposit-button:hover {
                    box-shadow: 0 10px 15px rgba(209, 213, 219, 0.4);
                }

                /* security */
                .security-badges {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                }

                .security-badge {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(229, 231, 235, 0.4);
                    background: rgba(243, 244, 246, 0.8);
                    font-size: 1.125rem;
                    font-weight: 500;
                }

                .security-badge .icon {
                    width: 2rem;
                    height: 2rem;
                }

                /* comparison */
                .comparison-panel {
                    padding: 2rem;
                    border-color: #e5e7eb;
                }

                .comparison-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
                    gap: 2rem;
                }

                .comparison-column {
                    text-align: center;
                }

                .comparison-badge {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1rem;
                    background: #9ca3af;
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 0.875rem;
                }

                .comparison-column.featured .comparison-badge {
                    background: linear-gradient(to right, #4b5563, #6b7280);
                    font-size: 1.25rem;
                }

                .comparison-column h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #4b5563;
                    margin-bottom: 1rem;
                }

                .comparison-column.featured h3 {
                    color: #000000;
                }

                .comparison-column ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                }

                .comparison-claim {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #6b7280;
                }

                .comparison-column.featured .comparison-claim {
                    color: #374151;
                }

                .comparison-claim .icon {
                    width: 1rem;
                    height: 1rem;
                }

                .indicator-positive { color: #22c55e; }

                .indicator-dot {
                    width: 1rem;
                    height: 1rem;
                    border-radius: 9999px;
                    flex-shrink: 0;
                }

                .indicator-dot.indicator-negative { background: #ef4444; }
                .indicator-dot.indicator-caution { background: #eab308; }

                /* faq */
                .faq-list {
                    padding: 2rem;
                }

                .faq-item {
                    border-bottom: 1px solid rgba(229, 231, 235, 0.4);
                }

                .faq-item:last-child {
                    border-bottom: none;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem 0;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    text-align: left;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .question-text {
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #000000;
                }

                .toggle-icon {
                    display: flex;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(45deg);
                }

                .faq-answer {
                    display: grid;
                    grid-template-rows: 0fr;
                    transition: grid-template-rows 0.3s ease;
                }

                .faq-item.open .faq-answer {
                    grid-template-rows: 1fr;
                }

                .faq-answer-inner {
                    overflow: hidden;
                }

                .faq-answer p {
                    color: #374151;
                    line-height: 1.6;
                    padding-bottom: 1.5rem;
                    margin: 0;
                }

                /* cta and footer */
                .cta-title {
                    font-size: clamp(2.25rem, 6vw, 3.75rem);
                }

                .site-footer {
                    border-top: 1px solid #e5e7eb;
                    padding: 3rem 1.5rem 2rem;
                }

                .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 2rem;
                }

                .footer-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .footer-brand p,
                .footer-legal {
                    color: #9ca3af;
                }

                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-links a {
                    color: #4b5563;
                    text-decoration: none;
                }

                .footer-legal {
                    text-align: center;
                    font-size: 0.875rem;
                    margin-top: 2rem;
                }

                @media (prefers-reduced-motion: reduce) {
                    .reveal,
                    .rise-in {
                        transition: none;
                        animation: none;
                        opacity: 1;
                        transform: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
