//! Fluid property model trait and the breakpoint-linear liquid.

use crate::correlation::LinearBreakpoint;
use pg_core::units::{Density, DynVisc, Pressure, kgpm3, pas};

/// Density and viscosity evaluated at one pressure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyPack {
    /// Pressure [Pa]
    pub p: Pressure,

    /// Density [kg/m³]
    pub rho: Density,

    /// Dynamic viscosity
    pub mu: DynVisc,
}

impl PropertyPack {
    /// Return a summary string of all contained properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Pack(P={:.0}Pa,ρ={:.3}kg/m³,μ={:.4})",
            self.p.value, self.rho.value, self.mu.value
        )
    }
}

/// Trait for pressure-dependent fluid property models.
///
/// Implementations must be thread-safe (Send + Sync) so a single model can be
/// shared between independent pipe calculations. Properties are total
/// functions of pressure: every real pressure yields a value.
pub trait FluidModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Density [kg/m³] at pressure `p`.
    fn rho(&self, p: Pressure) -> Density;

    /// Dynamic viscosity at pressure `p`.
    fn mu(&self, p: Pressure) -> DynVisc;

    /// Density and viscosity in one call.
    fn property_pack(&self, p: Pressure) -> PropertyPack {
        PropertyPack {
            p,
            rho: self.rho(p),
            mu: self.mu(p),
        }
    }
}

/// Liquid whose density and viscosity each follow a [`LinearBreakpoint`].
///
/// The default coefficients describe a light crude: density falls from
/// 823.4 kg/m³ at 1 bar by 57.8 kg/m³ over 93 bar and is held at 765.57 above
/// 94 bar; viscosity falls from 7.6 by 5.76 over 76 bar and is held at 1.854
/// above 77 bar. Viscosity values are used as Pa·s by the Reynolds number.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointFluid {
    name: String,
    density: LinearBreakpoint,
    viscosity: LinearBreakpoint,
}

impl BreakpointFluid {
    pub const DEFAULT_DENSITY: LinearBreakpoint =
        LinearBreakpoint::new_unchecked(9_400_000.0, -57.8, 93.0, 823.4, 765.57);
    pub const DEFAULT_VISCOSITY: LinearBreakpoint =
        LinearBreakpoint::new_unchecked(7_700_000.0, -5.76, 76.0, 7.6, 1.854);

    pub fn new(name: String, density: LinearBreakpoint, viscosity: LinearBreakpoint) -> Self {
        Self {
            name,
            density,
            viscosity,
        }
    }
}

impl Default for BreakpointFluid {
    fn default() -> Self {
        Self::new(
            "breakpoint-oil".into(),
            Self::DEFAULT_DENSITY,
            Self::DEFAULT_VISCOSITY,
        )
    }
}

impl FluidModel for BreakpointFluid {
    fn name(&self) -> &str {
        &self.name
    }

    fn rho(&self, p: Pressure) -> Density {
        kgpm3(self.density.eval(p.value))
    }

    fn mu(&self, p: Pressure) -> DynVisc {
        pas(self.viscosity.eval(p.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_core::units::pa;

    #[test]
    fn default_density_branches() {
        let fluid = BreakpointFluid::default();
        let expected = (-57.8 * (1_500_000.0 / 100_000.0 - 1.0)) / 93.0 + 823.4;
        assert_eq!(fluid.rho(pa(1_500_000.0)).value, expected);
        assert_eq!(fluid.rho(pa(9_400_001.0)).value, 765.57);
        assert_eq!(fluid.rho(pa(5e7)).value, 765.57);
    }

    #[test]
    fn default_viscosity_branches() {
        let fluid = BreakpointFluid::default();
        let expected = (-5.76 * (1_500_000.0 / 100_000.0 - 1.0)) / 76.0 + 7.6;
        assert_eq!(fluid.mu(pa(1_500_000.0)).value, expected);
        assert_eq!(fluid.mu(pa(7_700_001.0)).value, 1.854);
    }

    #[test]
    fn between_breakpoints_only_viscosity_is_constant() {
        let fluid = BreakpointFluid::default();
        let p = pa(8_000_000.0);
        assert_eq!(fluid.mu(p).value, 1.854);
        assert!(fluid.rho(p).value > 765.57);
    }

    #[test]
    fn property_pack_matches_individual_queries() {
        let fluid = BreakpointFluid::default();
        let p = pa(2_000_000.0);
        let pack = fluid.property_pack(p);
        assert_eq!(pack.rho, fluid.rho(p));
        assert_eq!(pack.mu, fluid.mu(p));
        assert!(pack.summary().starts_with("Pack(P=2000000Pa"));
    }

    #[test]
    fn default_fluid_name() {
        assert_eq!(BreakpointFluid::default().name(), "breakpoint-oil");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use pg_core::units::pa;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn properties_are_pure(p in -1e7_f64..2e8_f64) {
            let fluid = BreakpointFluid::default();
            prop_assert_eq!(fluid.rho(pa(p)), fluid.rho(pa(p)));
            prop_assert_eq!(fluid.mu(pa(p)), fluid.mu(pa(p)));
        }

        #[test]
        fn properties_stay_positive_for_physical_pressures(p in 0.0_f64..2e8_f64) {
            let fluid = BreakpointFluid::default();
            prop_assert!(fluid.rho(pa(p)).value >= 765.57 - 1e-9);
            prop_assert!(fluid.mu(pa(p)).value > 1.8);
        }
    }
}
