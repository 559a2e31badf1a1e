use thiserror::Error;

pub type PgResult<T> = Result<T, PgError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PgError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
