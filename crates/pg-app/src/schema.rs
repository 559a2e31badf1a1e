//! Case and result file schema.
//!
//! Field names follow the established file format (`Q`, `D`, `alpha`, `PIn`,
//! `L`, `dL` in; `POut`, `v`, `Re` out). All values are SI, angles in degrees.

use pg_core::units::{deg, m, m3ps, pa};
use pg_fluids::{BreakpointFluid, FluidResult, LinearBreakpoint};
use pg_pipe::{PipeFlowInput, PipeFlowOutput, SegmentRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipeCase {
    /// Flow rate [m³/s]
    #[serde(rename = "Q")]
    pub flow_rate: f64,
    /// Inner diameter [m]
    #[serde(rename = "D")]
    pub diameter: f64,
    /// Inclination [deg]
    #[serde(rename = "alpha")]
    pub inclination_deg: f64,
    /// Inlet pressure [Pa]
    #[serde(rename = "PIn")]
    pub inlet_pressure: f64,
    /// Pipe length [m]
    #[serde(rename = "L")]
    pub length: f64,
    /// Maximum segment length [m]
    #[serde(rename = "dL")]
    pub max_segment: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluid: Option<FluidDef>,
}

impl PipeCase {
    pub fn to_input(&self) -> PipeFlowInput {
        PipeFlowInput {
            flow_rate: m3ps(self.flow_rate),
            diameter: m(self.diameter),
            inclination: deg(self.inclination_deg),
            inlet_pressure: pa(self.inlet_pressure),
            length: m(self.length),
            max_segment: m(self.max_segment),
        }
    }

    /// Fluid for this case; the default breakpoint oil when none is given.
    pub fn build_fluid(&self) -> FluidResult<BreakpointFluid> {
        match &self.fluid {
            Some(def) => def.build(),
            None => Ok(BreakpointFluid::default()),
        }
    }
}

/// Optional fluid override: one breakpoint-linear correlation per property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    #[serde(default = "default_fluid_name")]
    pub name: String,
    pub density: CorrelationDef,
    pub viscosity: CorrelationDef,
}

fn default_fluid_name() -> String {
    "custom".to_string()
}

impl FluidDef {
    pub fn build(&self) -> FluidResult<BreakpointFluid> {
        Ok(BreakpointFluid::new(
            self.name.clone(),
            self.density.build()?,
            self.viscosity.build()?,
        ))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorrelationDef {
    /// Pressure [Pa] above which the property is constant
    pub breakpoint_pa: f64,
    /// Change over `span_bar`
    pub change: f64,
    pub span_bar: f64,
    /// Value at 1 bar
    pub base: f64,
    /// Value above the breakpoint
    pub above: f64,
}

impl CorrelationDef {
    pub fn build(&self) -> FluidResult<LinearBreakpoint> {
        LinearBreakpoint::new(
            pa(self.breakpoint_pa),
            self.change,
            self.span_bar,
            self.base,
            self.above,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipeResultFile {
    /// Outlet pressure [Pa]
    #[serde(rename = "POut")]
    pub outlet_pressure: f64,
    /// Velocity [m/s]
    #[serde(rename = "v")]
    pub velocity: f64,
    /// Reynolds number at the outlet pressure
    #[serde(rename = "Re")]
    pub reynolds: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Vec<ProfileRow>>,
}

impl From<&PipeFlowOutput> for PipeResultFile {
    fn from(out: &PipeFlowOutput) -> Self {
        Self {
            outlet_pressure: out.outlet_pressure.value,
            velocity: out.velocity.value,
            reynolds: out.reynolds,
            profile: None,
        }
    }
}

/// One segment of the march, flattened to SI numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileRow {
    pub index: usize,
    pub start_m: f64,
    pub width_m: f64,
    pub consumed_m: f64,
    pub p_in_pa: f64,
    pub p_out_pa: f64,
    pub density_kg_m3: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub gravity_pa_per_m: f64,
    pub friction_pa_per_m: f64,
    pub gradient_pa_per_m: f64,
}

impl From<&SegmentRecord> for ProfileRow {
    fn from(r: &SegmentRecord) -> Self {
        Self {
            index: r.index,
            start_m: r.start.value,
            width_m: r.width.value,
            consumed_m: r.consumed.value,
            p_in_pa: r.pressure_in.value,
            p_out_pa: r.pressure_out.value,
            density_kg_m3: r.gradient.density.value,
            reynolds: r.gradient.reynolds,
            friction_factor: r.gradient.friction_factor,
            gravity_pa_per_m: r.gradient.gravity,
            friction_pa_per_m: r.gradient.friction,
            gradient_pa_per_m: r.gradient.total(),
        }
    }
}
