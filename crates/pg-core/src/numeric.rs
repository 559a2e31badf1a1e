use crate::PgError;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Purely absolute tolerance.
    pub fn absolute(abs: Real) -> Self {
        Self { abs, rel: 0.0 }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PgError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PgError::NonFinite { what, value: v })
    }
}

/// Require `v > 0`. NaN is rejected as well.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, PgError> {
    if v > 0.0 {
        Ok(v)
    } else {
        Err(PgError::InvalidArg { what })
    }
}
