use aion_frontend::motion::card::{self, MappedVisualState};
use aion_frontend::motion::{Percent, ScrollProgress};
use rstest::rstest;

#[test]
fn top_of_page_shows_small_low_card_without_effects() {
    let state = MappedVisualState::at(ScrollProgress::TOP);

    let min_scale = card::SCALE.outputs().iter().cloned().fold(f64::INFINITY, f64::min);
    let max_offset = card::OFFSET_Y.outputs().iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(state.scale, min_scale);
    assert_eq!(state.offset_y, max_offset);
    assert_eq!(state.primary_shimmer_x, Percent(-500.0));
    assert_eq!(state.secondary_shimmer_x, Percent(-300.0));
    assert!(state.fade_in_opacities().iter().all(|&o| o == 0.0));
    assert_eq!(state.hero_backdrop_opacity, 1.0);
}

#[test]
fn bottom_of_page_shows_swept_shimmer_and_faded_layers() {
    let top = MappedVisualState::at(ScrollProgress::TOP);
    let bottom = MappedVisualState::at(ScrollProgress::BOTTOM);

    assert_eq!(bottom.primary_shimmer_x, Percent(500.0));
    assert_eq!(bottom.secondary_shimmer_x, Percent(300.0));
    assert_eq!(bottom.primary_shimmer_x.0, -top.primary_shimmer_x.0);

    assert_eq!(bottom.primary_shimmer_opacity, 0.0);
    assert_eq!(bottom.secondary_shimmer_opacity, 0.0);
    assert_eq!(bottom.glow_opacity, 0.3);
    assert_eq!(bottom.particle_opacity, 0.4);
    assert_eq!(bottom.shadow_intensity, 0.5);
    assert_eq!(bottom.hero_backdrop_opacity, 0.0);
}

#[test]
fn card_grows_while_rising_then_holds() {
    let mut previous = MappedVisualState::at(ScrollProgress::TOP);
    for step in 1..=50 {
        let state = MappedVisualState::at(ScrollProgress::new(step as f64 / 100.0));
        assert!(state.scale >= previous.scale);
        assert!(state.offset_y <= previous.offset_y);
        previous = state;
    }
    let settled = MappedVisualState::at(ScrollProgress::new(0.5));
    let later = MappedVisualState::at(ScrollProgress::new(0.9));
    assert_eq!(settled.scale, later.scale);
    assert_eq!(settled.offset_y, later.offset_y);
}

#[test]
fn shimmer_sweeps_once_per_scroll() {
    let mut previous = MappedVisualState::at(ScrollProgress::TOP).primary_shimmer_x;
    for step in 1..=100 {
        let x = MappedVisualState::at(ScrollProgress::new(step as f64 / 100.0)).primary_shimmer_x;
        assert!(x > previous, "shimmer must move forward monotonically");
        previous = x;
    }
}

#[rstest]
#[case(0.3)]
#[case(0.4)]
#[case(0.5)]
fn opacity_effects_are_visible_in_the_middle(#[case] progress: f64) {
    let state = MappedVisualState::at(ScrollProgress::new(progress));
    assert!(state.fade_in_opacities().iter().all(|&o| o > 0.25));
}

#[rstest]
#[case(card::GLOW_OPACITY, 0.3, 0.8)]
#[case(card::PARTICLE_OPACITY, 0.4, 0.9)]
#[case(card::PRIMARY_SHIMMER_OPACITY, 0.6, 0.9)]
#[case(card::SECONDARY_SHIMMER_OPACITY, 0.7, 0.9)]
fn opacity_partially_fades_late(
    #[case] table: aion_frontend::motion::BreakpointTable<f64>,
    #[case] peak_at: f64,
    #[case] late: f64,
) {
    let peak = table.at(peak_at);
    let faded = table.at(late);
    assert!(faded < peak);
    assert!(faded > 0.0, "only partially faded at {}", late);
}

#[test]
fn backdrop_is_gone_by_thirty_percent() {
    assert_eq!(card::HERO_BACKDROP_OPACITY.at(0.3), 0.0);
    assert!(card::HERO_BACKDROP_OPACITY.at(0.15) > 0.0);
}
