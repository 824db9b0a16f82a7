//! Scroll choreography for the hero card.
//!
//! The card starts small and low, grows while rising until about 45 % of the
//! page, and the two shimmer bands cross the card exactly once over a full
//! scroll. Opacity effects fade in before 30 % and partly fade after 70 %.

use super::interpolate::{BreakpointTable, Percent, TableError};
use super::scroll::ScrollProgress;

pub const SCALE: BreakpointTable<f64> = BreakpointTable::new(&[0.0, 0.4], &[0.75, 1.2]);

/// Vertical offset in px; positive is down.
pub const OFFSET_Y: BreakpointTable<f64> = BreakpointTable::new(&[0.0, 0.5], &[150.0, -60.0]);

pub const PRIMARY_SHIMMER_X: BreakpointTable<Percent> =
    BreakpointTable::new(&[0.0, 1.0], &[Percent(-500.0), Percent(500.0)]);

pub const PRIMARY_SHIMMER_OPACITY: BreakpointTable<f64> =
    BreakpointTable::new(&[0.0, 0.2, 0.6, 0.8, 1.0], &[0.0, 0.9, 1.0, 0.9, 0.0]);

pub const SECONDARY_SHIMMER_X: BreakpointTable<Percent> =
    BreakpointTable::new(&[0.0, 1.0], &[Percent(-300.0), Percent(300.0)]);

pub const SECONDARY_SHIMMER_OPACITY: BreakpointTable<f64> =
    BreakpointTable::new(&[0.0, 0.3, 0.7, 1.0], &[0.0, 0.6, 0.6, 0.0]);

pub const GLOW_OPACITY: BreakpointTable<f64> =
    BreakpointTable::new(&[0.0, 0.3, 0.7], &[0.0, 0.6, 0.3]);

pub const SHADOW_INTENSITY: BreakpointTable<f64> = BreakpointTable::new(&[0.0, 0.4], &[0.2, 0.5]);

pub const PARTICLE_OPACITY: BreakpointTable<f64> =
    BreakpointTable::new(&[0.0, 0.4, 0.8], &[0.0, 0.7, 0.4]);

/// Backdrop gradient behind the hero copy, gone by 30 %.
pub const HERO_BACKDROP_OPACITY: BreakpointTable<f64> =
    BreakpointTable::new(&[0.0, 0.3], &[1.0, 0.0]);

pub const NUMERIC_TABLES: [(&str, BreakpointTable<f64>); 8] = [
    ("scale", SCALE),
    ("offset_y", OFFSET_Y),
    ("primary_shimmer_opacity", PRIMARY_SHIMMER_OPACITY),
    ("secondary_shimmer_opacity", SECONDARY_SHIMMER_OPACITY),
    ("glow_opacity", GLOW_OPACITY),
    ("shadow_intensity", SHADOW_INTENSITY),
    ("particle_opacity", PARTICLE_OPACITY),
    ("hero_backdrop_opacity", HERO_BACKDROP_OPACITY),
];

pub const PERCENT_TABLES: [(&str, BreakpointTable<Percent>); 2] = [
    ("primary_shimmer_x", PRIMARY_SHIMMER_X),
    ("secondary_shimmer_x", SECONDARY_SHIMMER_X),
];

/// Checks every table above, returning the first offender's name.
pub fn check_tables() -> Result<(), (&'static str, TableError)> {
    for (name, table) in NUMERIC_TABLES {
        table.validate().map_err(|e| (name, e))?;
    }
    for (name, table) in PERCENT_TABLES {
        table.validate().map_err(|e| (name, e))?;
    }
    Ok(())
}

/// Every scroll-mapped value of the hero for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappedVisualState {
    pub progress: ScrollProgress,
    pub scale: f64,
    pub offset_y: f64,
    pub primary_shimmer_x: Percent,
    pub primary_shimmer_opacity: f64,
    pub secondary_shimmer_x: Percent,
    pub secondary_shimmer_opacity: f64,
    pub glow_opacity: f64,
    pub shadow_intensity: f64,
    pub particle_opacity: f64,
    pub hero_backdrop_opacity: f64,
}

impl MappedVisualState {
    pub fn at(progress: ScrollProgress) -> Self {
        let p = progress.value();
        Self {
            progress,
            scale: SCALE.at(p),
            offset_y: OFFSET_Y.at(p),
            primary_shimmer_x: PRIMARY_SHIMMER_X.at(p),
            primary_shimmer_opacity: PRIMARY_SHIMMER_OPACITY.at(p),
            secondary_shimmer_x: SECONDARY_SHIMMER_X.at(p),
            secondary_shimmer_opacity: SECONDARY_SHIMMER_OPACITY.at(p),
            glow_opacity: GLOW_OPACITY.at(p),
            shadow_intensity: SHADOW_INTENSITY.at(p),
            particle_opacity: PARTICLE_OPACITY.at(p),
            hero_backdrop_opacity: HERO_BACKDROP_OPACITY.at(p),
        }
    }

    /// Opacities that start hidden and fade in with scrolling.
    pub fn fade_in_opacities(&self) -> [f64; 4] {
        [
            self.primary_shimmer_opacity,
            self.secondary_shimmer_opacity,
            self.glow_opacity,
            self.particle_opacity,
        ]
    }

    pub fn card_style(&self) -> String {
        format!(
            "transform: translateY({:.2}px) scale({:.4}); perspective: 3000px; transform-style: preserve-3d;",
            self.offset_y, self.scale
        )
    }

    pub fn shadow_style(&self) -> String {
        format!("opacity: {:.3};", self.shadow_intensity)
    }

    pub fn primary_shimmer_style(&self) -> String {
        format!(
            "transform: translateX({}) skewX(-25deg); opacity: {:.3};",
            self.primary_shimmer_x, self.primary_shimmer_opacity
        )
    }

    pub fn secondary_shimmer_style(&self) -> String {
        format!(
            "transform: translateX({}) skewX(-15deg); opacity: {:.3};",
            self.secondary_shimmer_x, self.secondary_shimmer_opacity
        )
    }

    pub fn glow_style(&self) -> String {
        format!("opacity: {:.3};", self.glow_opacity)
    }

    pub fn particle_style(&self) -> String {
        format!("opacity: {:.3};", self.particle_opacity)
    }

    pub fn hero_backdrop_style(&self) -> String {
        format!("opacity: {:.3};", self.hero_backdrop_opacity)
    }
}

impl Default for MappedVisualState {
    fn default() -> Self {
        Self::at(ScrollProgress::TOP)
    }
}
