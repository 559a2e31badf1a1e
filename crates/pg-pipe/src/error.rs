//! Error types for pipe calculations.

use thiserror::Error;

/// Errors that can occur during a pipe calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipeError {
    /// Input that makes a formula undefined (zero diameter, zero Reynolds
    /// number, segment longer than the pipe, ...).
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    /// A computed value left the finite range.
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

impl PipeError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PipeError::InvalidInput { .. })
    }
}

pub type PipeResult<T> = Result<T, PipeError>;
