//! Application service layer for pipegrad.
//!
//! Sits between the command-line front end and the calculation crates:
//! case file schema, loading/saving, and run orchestration with logging.

pub mod case_service;
pub mod error;
pub mod run_service;
pub mod schema;

// Re-export key types for convenience
pub use case_service::{DEFAULT_INPUT, DEFAULT_OUTPUT, FileFormat, load_case, save_result};
pub use error::{AppError, AppResult};
pub use run_service::{
    RunOptions, RunRequest, RunResponse, profile, run, solve_case, validate_case,
};
pub use schema::{CorrelationDef, FluidDef, PipeCase, PipeResultFile, ProfileRow};
