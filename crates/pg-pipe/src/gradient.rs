//! Pressure gradient per unit length: gravity head plus laminar friction.

use crate::common::check_positive;
use crate::error::{PipeError, PipeResult};
use crate::kinematics::{DIAMETER_NOT_POSITIVE, velocity};
use crate::pipe::PipeFlowInput;
use crate::reynolds::reynolds_at;
use pg_core::units::constants::G0_MPS2;
use pg_core::units::{Angle, Density, Length, Pressure, Velocity};
use pg_fluids::FluidModel;

pub const REYNOLDS_ZERO: &str = "Reynolds number is zero";

/// Laminar Darcy friction factor `64 / Re`.
pub fn friction_factor(reynolds: f64) -> PipeResult<f64> {
    if reynolds == 0.0 {
        return Err(PipeError::InvalidInput {
            what: REYNOLDS_ZERO,
        });
    }
    Ok(64.0 / reynolds)
}

/// Frictional pressure change per unit length [Pa/m], `-f ρ v² / (2 D)`.
pub fn friction_loss(f: f64, rho: Density, v: Velocity, diameter: Length) -> PipeResult<f64> {
    check_positive(diameter.value, DIAMETER_NOT_POSITIVE)?;

    Ok((-0.5 * f * rho.value * v.value.powi(2)) / diameter.value)
}

/// Hydrostatic pressure change per unit length [Pa/m], `-ρ g sin α`.
///
/// Positive inclination means the flow climbs, so pressure falls.
pub fn gravity_change(rho: Density, inclination: Angle) -> f64 {
    -rho.value * G0_MPS2 * inclination.value.sin()
}

/// Terms of the local pressure gradient, all evaluated at one pressure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientBreakdown {
    pub pressure: Pressure,
    pub density: Density,
    pub reynolds: f64,
    pub friction_factor: f64,
    /// Gravity term [Pa/m]
    pub gravity: f64,
    /// Friction term [Pa/m]
    pub friction: f64,
}

impl GradientBreakdown {
    /// Total gradient [Pa/m].
    #[inline]
    pub fn total(&self) -> f64 {
        self.gravity + self.friction
    }
}

/// Local pressure gradient of the input's flow at pressure `p`.
pub fn pressure_gradient(
    fluid: &dyn FluidModel,
    input: &PipeFlowInput,
    p: Pressure,
) -> PipeResult<GradientBreakdown> {
    let rho = fluid.rho(p);
    let gravity = gravity_change(rho, input.inclination);

    let reynolds = reynolds_at(fluid, input, p)?;
    let f = friction_factor(reynolds)?;
    let v = velocity(input.flow_rate, input.diameter)?;
    let friction = friction_loss(f, rho, v, input.diameter)?;

    Ok(GradientBreakdown {
        pressure: p,
        density: rho,
        reynolds,
        friction_factor: f,
        gravity,
        friction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_core::units::{deg, kgpm3, m, mps};
    use pg_fluids::BreakpointFluid;

    #[test]
    fn laminar_friction_factor() {
        assert_eq!(friction_factor(64.0).unwrap(), 1.0);
        assert_eq!(friction_factor(1000.0).unwrap(), 0.064);
        assert_eq!(
            friction_factor(0.0).unwrap_err(),
            PipeError::InvalidInput {
                what: REYNOLDS_ZERO
            }
        );
    }

    #[test]
    fn friction_always_opposes_flow() {
        let loss = friction_loss(0.05, kgpm3(800.0), mps(2.0), m(0.1)).unwrap();
        assert!((loss - (-0.5 * 0.05 * 800.0 * 4.0 / 0.1)).abs() < 1e-12);
        assert!(loss < 0.0);
    }

    #[test]
    fn friction_loss_rejects_bad_diameter() {
        assert!(friction_loss(0.05, kgpm3(800.0), mps(2.0), m(0.0)).is_err());
        assert!(friction_loss(0.05, kgpm3(800.0), mps(2.0), m(-0.1)).is_err());
    }

    #[test]
    fn gravity_sign_follows_inclination() {
        let rho = kgpm3(1000.0);
        assert!((gravity_change(rho, deg(90.0)) + 1000.0 * G0_MPS2).abs() < 1e-9);
        assert!((gravity_change(rho, deg(-90.0)) - 1000.0 * G0_MPS2).abs() < 1e-9);
        assert!(gravity_change(rho, deg(0.0)).abs() < 1e-12);
        assert!((gravity_change(rho, deg(30.0)) + 0.5 * 1000.0 * G0_MPS2).abs() < 1e-9);
    }

    #[test]
    fn golden_inlet_gradient() {
        let fluid = BreakpointFluid::default();
        let input = PipeFlowInput::golden();
        let g = pressure_gradient(&fluid, &input, input.inlet_pressure).unwrap();
        assert!((g.total() - (-8_712.119_305_105_742)).abs() < 1e-6);
        assert_eq!(g.total(), g.gravity + g.friction);
        assert!(g.gravity < 0.0 && g.friction < 0.0);
        assert_eq!(g.friction_factor, 64.0 / g.reynolds);
    }

    #[test]
    fn horizontal_pipe_has_only_friction() {
        let fluid = BreakpointFluid::default();
        let mut input = PipeFlowInput::golden();
        input.inclination = deg(0.0);
        let g = pressure_gradient(&fluid, &input, input.inlet_pressure).unwrap();
        assert_eq!(g.gravity, 0.0);
        assert!(g.friction < 0.0);
    }
}
