//! Common utilities for pipe calculations.

use crate::error::{PipeError, PipeResult};
use pg_core::numeric::{ensure_finite, ensure_positive};

/// Ensure a value is finite, returning PipeError if not.
pub fn check_finite(value: f64, what: &'static str) -> PipeResult<()> {
    ensure_finite(value, what).map_err(|_| PipeError::NonPhysical { what })?;
    Ok(())
}

/// Ensure a value is strictly positive, reporting `what` as invalid input.
pub fn check_positive(value: f64, what: &'static str) -> PipeResult<()> {
    ensure_positive(value, what).map_err(|_| PipeError::InvalidInput { what })?;
    Ok(())
}
