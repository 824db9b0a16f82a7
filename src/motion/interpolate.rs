//! Piecewise-linear breakpoint tables.
//!
//! A table maps an input (normally scroll progress) onto an output by linear
//! interpolation between the two knots that bracket it. Inputs before the
//! first knot or past the last one take the boundary output; nothing is
//! extrapolated.

use std::fmt;
use thiserror::Error;

/// Values that can be blended between two knots.
pub trait Lerp: Copy {
    /// `t` is always within `0.0..=1.0`.
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        let (lo, hi) = if self <= other { (self, other) } else { (other, self) };
        (self + (other - self) * t).clamp(lo, hi)
    }
}

/// A percentage output, rendered as `"<n>%"` in CSS.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percent(pub f64);

impl Lerp for Percent {
    fn lerp(self, other: Self, t: f64) -> Self {
        Percent(self.0.lerp(other.0, t))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("knot inputs are not strictly increasing at index {0}")]
    NotIncreasing(usize),
    #[error("knot input at index {0} is not finite")]
    NotFinite(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointTable<T: 'static> {
    input: &'static [f64],
    output: &'static [T],
}

impl<T> BreakpointTable<T> {
    /// Panics (at compile time for `const` tables) when the knot lists are
    /// empty or differ in length.
    pub const fn new(input: &'static [f64], output: &'static [T]) -> Self {
        assert!(!input.is_empty(), "breakpoint table needs at least one knot");
        assert!(
            input.len() == output.len(),
            "breakpoint table input and output lengths differ"
        );
        Self { input, output }
    }

    pub fn inputs(&self) -> &'static [f64] {
        self.input
    }

    pub fn outputs(&self) -> &'static [T] {
        self.output
    }

    pub fn validate(&self) -> Result<(), TableError> {
        for (i, x) in self.input.iter().enumerate() {
            if !x.is_finite() {
                return Err(TableError::NotFinite(i));
            }
        }
        match self.input.windows(2).position(|w| w[0] >= w[1]) {
            Some(i) => Err(TableError::NotIncreasing(i + 1)),
            None => Ok(()),
        }
    }
}

impl<T: Lerp> BreakpointTable<T> {
    pub fn first(&self) -> T {
        self.output[0]
    }

    pub fn last(&self) -> T {
        self.output[self.output.len() - 1]
    }

    /// Evaluates the table at `x`. NaN is treated as "before the first knot".
    pub fn at(&self, x: f64) -> T {
        let last = self.input.len() - 1;
        if !(x > self.input[0]) {
            return self.first();
        }
        if x >= self.input[last] {
            return self.last();
        }

        // x is strictly inside the domain, so 1 <= upper <= last
        let upper = self.input.partition_point(|&knot| knot <= x);
        let lower = upper - 1;
        let (x0, x1) = (self.input[lower], self.input[upper]);
        let t = (x - x0) / (x1 - x0);
        self.output[lower].lerp(self.output[upper], t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE: BreakpointTable<f64> =
        BreakpointTable::new(&[0.0, 0.2, 0.6, 0.8, 1.0], &[0.0, 0.9, 1.0, 0.9, 0.0]);
    const SWEEP: BreakpointTable<Percent> =
        BreakpointTable::new(&[0.0, 1.0], &[Percent(-500.0), Percent(500.0)]);

    #[test]
    fn knots_return_authored_values_exactly() {
        for (x, y) in FADE.inputs().iter().zip(FADE.outputs()) {
            assert_eq!(FADE.at(*x), *y);
        }
    }

    #[test]
    fn interpolates_between_knots() {
        assert!((FADE.at(0.1) - 0.45).abs() < 1e-12);
        assert!((FADE.at(0.7) - 0.95).abs() < 1e-12);
        assert_eq!(SWEEP.at(0.5), Percent(0.0));
        assert_eq!(SWEEP.at(0.75), Percent(250.0));
    }

    #[test]
    fn clamps_outside_domain() {
        let late = BreakpointTable::new(&[0.2, 0.4], &[1.0, 3.0]);
        assert_eq!(late.at(0.0), 1.0);
        assert_eq!(late.at(-4.0), 1.0);
        assert_eq!(late.at(0.9), 3.0);
        assert_eq!(late.at(f64::INFINITY), 3.0);
        assert_eq!(late.at(f64::NAN), 1.0);
    }

    #[test]
    fn single_knot_is_constant() {
        let flat = BreakpointTable::new(&[0.5], &[7.0]);
        assert_eq!(flat.at(0.0), 7.0);
        assert_eq!(flat.at(0.5), 7.0);
        assert_eq!(flat.at(1.0), 7.0);
    }

    #[test]
    fn percent_renders_as_css() {
        assert_eq!(Percent(-500.0).to_string(), "-500%");
        assert_eq!(SWEEP.at(0.25).to_string(), "-250%");
    }

    #[test]
    fn validate_rejects_unordered_knots() {
        let bad = BreakpointTable::new(&[0.0, 0.5, 0.5], &[0.0, 1.0, 2.0]);
        assert_eq!(bad.validate(), Err(TableError::NotIncreasing(2)));
        let nan = BreakpointTable::new(&[0.0, f64::NAN], &[0.0, 1.0]);
        assert_eq!(nan.validate(), Err(TableError::NotFinite(1)));
        assert_eq!(FADE.validate(), Ok(()));
    }
}
