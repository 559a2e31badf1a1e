//! Error types for the pg-app service layer.

use std::path::PathBuf;

use pg_pipe::PipeError;

/// Application error type that wraps errors from the calculation crates
/// and the file layer behind one interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Input file not found: {path}")]
    InputMissing { path: PathBuf },

    #[error("Failed to read input file: {path}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse input: {0}")]
    Parse(String),

    #[error("Failed to serialize output: {0}")]
    Serialize(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    Calculation(String),

    #[error("Fluid definition error: {0}")]
    Fluid(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Message shown to the user.
    ///
    /// Missing input and rejected input get fixed wording; everything else
    /// is reported with its own message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InputMissing { .. } => "Input data file is missing!".to_string(),
            AppError::InvalidInput(what) => format!("Invalid input data ({what})"),
            other => other.to_string(),
        }
    }
}

/// Result type for pg-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<PipeError> for AppError {
    fn from(err: PipeError) -> Self {
        match err {
            PipeError::InvalidInput { what } => AppError::InvalidInput(what.to_string()),
            other => AppError::Calculation(other.to_string()),
        }
    }
}

impl From<pg_fluids::FluidError> for AppError {
    fn from(err: pg_fluids::FluidError) -> Self {
        AppError::Fluid(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}
