//! pg-fluids: pressure-dependent fluid properties for pipegrad.
//!
//! Provides:
//! - `FluidModel` trait for density and viscosity as functions of local pressure
//! - `LinearBreakpoint`, a single property correlation that is linear up to a
//!   breakpoint pressure and constant above it
//! - `BreakpointFluid`, a liquid described by one such correlation per property
//!
//! # Example
//!
//! ```
//! use pg_fluids::{BreakpointFluid, FluidModel};
//! use pg_core::units::pa;
//!
//! let fluid = BreakpointFluid::default();
//! let rho = fluid.rho(pa(1_500_000.0));
//! let mu = fluid.mu(pa(1_500_000.0));
//! assert!(rho.value > 800.0);
//! assert!(mu.value > 6.0);
//! ```

pub mod correlation;
pub mod error;
pub mod model;

pub use correlation::LinearBreakpoint;
pub use error::{FluidError, FluidResult};
pub use model::{BreakpointFluid, FluidModel, PropertyPack};
