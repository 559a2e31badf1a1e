//! pg-core: shared foundation for pipegrad.
//!
//! Contains:
//! - units (uom SI types + constructors + standard gravity)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{PgError, PgResult};
pub use numeric::*;
pub use units::*;
