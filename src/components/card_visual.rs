use yew::prelude::*;

use crate::config;
use crate::motion::{use_entrance, EntrancePhase, MappedVisualState};

#[derive(Properties, PartialEq)]
pub struct CardVisualProps {
    pub state: MappedVisualState,
}

/// The hero card. Scroll drives the layers from the first frame; the mount
/// entrance runs on an outer wrapper so it never holds them back.
#[function_component(CardVisual)]
pub fn card_visual(props: &CardVisualProps) -> Html {
    let phase = use_entrance(config::CARD_ENTRANCE_DELAY_MS, config::CARD_ENTRANCE_DURATION_MS);
    let state = &props.state;

    let entrance_class = classes!(
        "card-entrance",
        phase.has_started().then_some("entered"),
        (phase == EntrancePhase::Settled).then_some("settled")
    );
    let entrance_style = format!(
        "transition: opacity {ms}ms {ease}, transform {ms}ms {ease};",
        ms = config::CARD_ENTRANCE_DURATION_MS,
        ease = config::CARD_ENTRANCE_EASING,
    );

    html! {
        <div class="card-stage">
            <div class={entrance_class} style={entrance_style}>
                <div class="card-motion" style={state.card_style()}>
                    <div class="card-frame">
                        <div class="card-shadow" style={state.shadow_style()}></div>

                        <img
                            src={config::asset_url(config::CARD_IMAGE)}
                            alt="AION Credit Card"
                            class="card-image"
                            draggable="false"
                        />

                        <div class="card-shimmer card-shimmer-primary" style={state.primary_shimmer_style()}></div>
                        <div class="card-shimmer card-shimmer-secondary" style={state.secondary_shimmer_style()}></div>
                        <div class="card-glow" style={state.glow_style()}></div>
                        <div class="card-particles" style={state.particle_style()}></div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .card-stage {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    width: 100%;
                    padding: 4rem 0;
                }

                .card-entrance {
                    opacity: 0;
                    transform: translateY(150px) scale(0.6);
                    will-change: opacity, transform;
                }

                .card-entrance.entered {
                    opacity: 1;
                    transform: translateY(0) scale(1);
                }

                .card-entrance.settled {
                    will-change: auto;
                }

                .card-frame {
                    position: relative;
                }

                .card-image {
                    position: relative;
                    z-index: 10;
                    display: block;
                    width: 400px;
                    height: 252px;
                    max-width: 90vw;
                    border-radius: 1rem;
                    object-fit: cover;
                    user-select: none;
                    filter: brightness(1.03) contrast(1.08) saturate(1.1);
                    box-shadow:
                        0 25px 50px rgba(0, 0, 0, 0.15),
                        0 15px 30px rgba(0, 0, 0, 0.1),
                        0 8px 15px rgba(0, 0, 0, 0.08),
                        inset 0 1px 0 rgba(255, 255, 255, 0.2),
                        0 0 0 1px rgba(0, 0, 0, 0.05);
                }

                .card-shadow {
                    position: absolute;
                    inset: 0;
                    border-radius: 1rem;
                    background: radial-gradient(ellipse 120% 60% at center 120%, rgba(0, 0, 0, 0.15) 0%, transparent 70%);
                    filter: blur(15px);
                    transform: translateY(15px);
                }

                .card-shimmer {
                    position: absolute;
                    inset: 0;
                    border-radius: 1rem;
                    overflow: hidden;
                    pointer-events: none;
                }

                .card-shimmer-primary {
                    z-index: 20;
                    width: 120%;
                    margin-left: -10%;
                    background: linear-gradient(125deg, transparent 15%, rgba(255, 255, 255, 0.8) 45%, rgba(255, 255, 255, 1) 50%, rgba(255, 255, 255, 0.8) 55%, transparent 85%);
                    mix-blend-mode: overlay;
                }

                .card-shimmer-secondary {
                    z-index: 15;
                    background: linear-gradient(135deg, transparent 30%, rgba(255, 255, 255, 0.4) 50%, transparent 70%);
                    mix-blend-mode: soft-light;
                }

                .card-glow {
                    position: absolute;
                    inset: 0;
                    z-index: 5;
                    border-radius: 1rem;
                    pointer-events: none;
                    background: radial-gradient(ellipse at center, rgba(255, 255, 255, 0.15) 0%, rgba(255, 255, 255, 0.05) 40%, transparent 70%);
                    filter: blur(2px);
                }

                .card-particles {
                    position: absolute;
                    inset: -2rem;
                    z-index: 1;
                    border-radius: 1.5rem;
                    pointer-events: none;
                    background:
                        radial-gradient(circle at 20% 30%, rgba(255, 255, 255, 0.1) 0%, transparent 30%),
                        radial-gradient(circle at 80% 20%, rgba(255, 255, 255, 0.08) 0%, transparent 25%),
                        radial-gradient(circle at 60% 80%, rgba(255, 255, 255, 0.06) 0%, transparent 20%);
                    animation: card-float 6s ease-in-out infinite;
                }

                @keyframes card-float {
                    0%, 100% { transform: translateY(0px) rotate(0deg); }
                    33% { transform: translateY(-5px) rotate(1deg); }
                    66% { transform: translateY(3px) rotate(-1deg); }
                }

                @media (prefers-reduced-motion: reduce) {
                    .card-particles { animation: none; }
                    .card-entrance { transition: none !important; }
                }
                "#}
            </style>
        </div>
    }
}
