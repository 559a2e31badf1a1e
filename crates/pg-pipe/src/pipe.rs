//! Single-pipe pressure gradient calculation.

use crate::error::PipeResult;
use crate::kinematics::velocity;
use crate::reynolds::reynolds_at;
use crate::segment::{MarchOutcome, SegmentState, march};
use pg_core::units::{Angle, Length, Pressure, Velocity, VolumeRate};
use pg_fluids::{BreakpointFluid, FluidModel};

/// Flow and geometry of one inclined pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeFlowInput {
    /// Volumetric flow rate
    pub flow_rate: VolumeRate,
    /// Inner diameter
    pub diameter: Length,
    /// Inclination from horizontal, positive when the flow climbs
    pub inclination: Angle,
    /// Pressure at the pipe inlet
    pub inlet_pressure: Pressure,
    /// Total pipe length
    pub length: Length,
    /// Maximum segment length for the march
    pub max_segment: Length,
}

/// Outlet conditions of a pipe calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeFlowOutput {
    pub outlet_pressure: Pressure,
    /// Mean velocity; depends on flow rate and bore only
    pub velocity: Velocity,
    /// Reynolds number at the outlet pressure
    pub reynolds: f64,
}

/// Outlet conditions plus the march that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeSolution {
    pub output: PipeFlowOutput,
    pub march: MarchOutcome,
}

/// Check everything that can be checked without marching: segment
/// preconditions, then flow rate and bore.
pub fn validate(input: &PipeFlowInput) -> PipeResult<()> {
    SegmentState::initial(input)?;
    velocity(input.flow_rate, input.diameter)?;
    Ok(())
}

/// Pressure gradient calculation for one pipe with the default fluid.
pub fn single_pipe_pressure_gradient(input: &PipeFlowInput) -> PipeResult<PipeFlowOutput> {
    single_pipe_pressure_gradient_with(&BreakpointFluid::default(), input)
}

/// Pressure gradient calculation for one pipe with a caller-supplied fluid.
pub fn single_pipe_pressure_gradient_with(
    fluid: &dyn FluidModel,
    input: &PipeFlowInput,
) -> PipeResult<PipeFlowOutput> {
    Ok(solve(fluid, input, false)?.output)
}

/// March the pipe, then evaluate velocity and the Reynolds number at the
/// outlet pressure.
pub fn solve(
    fluid: &dyn FluidModel,
    input: &PipeFlowInput,
    record_profile: bool,
) -> PipeResult<PipeSolution> {
    let march = march(fluid, input, record_profile)?;
    let velocity = velocity(input.flow_rate, input.diameter)?;
    let reynolds = reynolds_at(fluid, input, march.outlet_pressure)?;

    Ok(PipeSolution {
        output: PipeFlowOutput {
            outlet_pressure: march.outlet_pressure,
            velocity,
            reynolds,
        },
        march,
    })
}

#[cfg(test)]
impl PipeFlowInput {
    /// 40 m³/day up a 900 m vertical 4.5" line from 15 bar.
    pub(crate) fn golden() -> Self {
        use pg_core::units::{deg, m, m3ps, pa};
        Self {
            flow_rate: m3ps(4.6296296296296296e-4),
            diameter: m(0.1143),
            inclination: deg(90.0),
            inlet_pressure: pa(1_500_000.0),
            length: m(900.0),
            max_segment: m(300.0),
        }
    }
}
