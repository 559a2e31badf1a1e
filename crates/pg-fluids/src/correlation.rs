//! Breakpoint-linear property correlation.

use crate::error::{FluidError, FluidResult};
use pg_core::units::Pressure;

/// Pascals per bar; the correlations are fitted against gauge-like bar offsets.
pub const PA_PER_BAR: f64 = 100_000.0;

/// A property that varies linearly with pressure up to a breakpoint and stays
/// constant above it:
///
/// ```text
/// y(P) = (change * (P / 1e5 - 1)) / span + base    for P <= breakpoint
/// y(P) = above                                      otherwise
/// ```
///
/// `change` is the property change over `span` bar, starting from `base` at 1 bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearBreakpoint {
    breakpoint_pa: f64,
    change: f64,
    span_bar: f64,
    base: f64,
    above: f64,
}

impl LinearBreakpoint {
    /// Build a correlation, rejecting non-finite coefficients and a zero span.
    pub fn new(
        breakpoint: Pressure,
        change: f64,
        span_bar: f64,
        base: f64,
        above: f64,
    ) -> FluidResult<Self> {
        for (value, what) in [
            (breakpoint.value, "correlation breakpoint must be finite"),
            (change, "correlation change must be finite"),
            (span_bar, "correlation span must be finite"),
            (base, "correlation base value must be finite"),
            (above, "correlation value above breakpoint must be finite"),
        ] {
            if !value.is_finite() {
                return Err(FluidError::NonPhysical { what });
            }
        }
        if span_bar == 0.0 {
            return Err(FluidError::InvalidArg {
                what: "correlation span must be non-zero",
            });
        }
        Ok(Self::new_unchecked(
            breakpoint.value,
            change,
            span_bar,
            base,
            above,
        ))
    }

    pub(crate) const fn new_unchecked(
        breakpoint_pa: f64,
        change: f64,
        span_bar: f64,
        base: f64,
        above: f64,
    ) -> Self {
        Self {
            breakpoint_pa,
            change,
            span_bar,
            base,
            above,
        }
    }

    /// Evaluate at pressure `p_pa` [Pa]. Defined for every real input.
    #[inline]
    pub fn eval(&self, p_pa: f64) -> f64 {
        if p_pa <= self.breakpoint_pa {
            (self.change * (p_pa / PA_PER_BAR - 1.0)) / self.span_bar + self.base
        } else {
            self.above
        }
    }
}
