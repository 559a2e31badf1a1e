//! Reynolds number from pressure-dependent fluid properties.

use crate::error::{PipeError, PipeResult};
use crate::kinematics::velocity;
use crate::pipe::PipeFlowInput;
use pg_core::units::{Length, Pressure, Velocity};
use pg_fluids::FluidModel;

pub const VISCOSITY_ZERO: &str = "fluid viscosity is zero";

fn viscosity_guard(fluid: &dyn FluidModel, p: Pressure) -> PipeResult<f64> {
    let mu = fluid.mu(p).value;
    if mu == 0.0 {
        return Err(PipeError::InvalidInput {
            what: VISCOSITY_ZERO,
        });
    }
    Ok(mu)
}

/// `Re = ρ(P) v D / μ(P)`.
pub fn reynolds_number(
    fluid: &dyn FluidModel,
    p: Pressure,
    diameter: Length,
    v: Velocity,
) -> PipeResult<f64> {
    let mu = viscosity_guard(fluid, p)?;

    Ok((fluid.rho(p).value * v.value * diameter.value) / mu)
}

/// Reynolds number of the input's flow evaluated at pressure `p`.
///
/// The viscosity guard runs before the velocity checks.
pub fn reynolds_at(fluid: &dyn FluidModel, input: &PipeFlowInput, p: Pressure) -> PipeResult<f64> {
    let mu = viscosity_guard(fluid, p)?;
    let rho = fluid.rho(p).value;
    let v = velocity(input.flow_rate, input.diameter)?.value;

    Ok((rho * v * input.diameter.value) / mu)
}
