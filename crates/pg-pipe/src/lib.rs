//! pg-pipe: pressure gradient along a single inclined pipe.
//!
//! Provides:
//! - Flow kinematics (mean velocity from flow rate and bore)
//! - Reynolds number from pressure-dependent fluid properties
//! - Local pressure gradient: hydrostatic head plus laminar friction
//! - A fixed-width segment march that carries pressure from inlet to outlet
//!
//! Every function is deterministic and free of I/O; failures surface as
//! [`PipeError::InvalidInput`] before any state is produced.
//!
//! # Example
//!
//! ```
//! use pg_pipe::{PipeFlowInput, single_pipe_pressure_gradient};
//! use pg_core::units::{deg, m, m3ps, pa};
//!
//! let input = PipeFlowInput {
//!     flow_rate: m3ps(4.6296296296296296e-4),
//!     diameter: m(0.1143),
//!     inclination: deg(90.0),
//!     inlet_pressure: pa(1_500_000.0),
//!     length: m(900.0),
//!     max_segment: m(300.0),
//! };
//!
//! let out = single_pipe_pressure_gradient(&input).unwrap();
//! assert!(out.outlet_pressure < input.inlet_pressure);
//! println!("P_out = {} Pa, Re = {}", out.outlet_pressure.value, out.reynolds);
//! ```

pub mod common;
pub mod error;
pub mod gradient;
pub mod kinematics;
pub mod pipe;
pub mod reynolds;
pub mod segment;

// Re-exports
pub use error::{PipeError, PipeResult};
pub use gradient::{
    GradientBreakdown, friction_factor, friction_loss, gravity_change, pressure_gradient,
};
pub use kinematics::{flow_area, velocity};
pub use pipe::{
    PipeFlowInput, PipeFlowOutput, PipeSolution, single_pipe_pressure_gradient,
    single_pipe_pressure_gradient_with, solve, validate,
};
pub use reynolds::{reynolds_at, reynolds_number};
pub use segment::{MarchOutcome, SegmentRecord, SegmentState, march};
