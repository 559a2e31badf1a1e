//! Mean flow velocity from volumetric flow rate and bore.

use crate::common::check_positive;
use crate::error::PipeResult;
use pg_core::units::{Area, Length, Velocity, VolumeRate, mps};
use std::f64::consts::PI;

pub const DIAMETER_NOT_POSITIVE: &str = "pipe inner diameter must be positive and non-zero";
pub const FLOW_RATE_NOT_POSITIVE: &str = "flow rate must be positive and non-zero";

/// Cross-sectional area of a circular bore.
pub fn flow_area(diameter: Length) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(0.25 * PI * diameter.value.powi(2))
}

/// Mean velocity `Q / (π D² / 4)`.
///
/// Diameter is checked before flow rate.
pub fn velocity(flow_rate: VolumeRate, diameter: Length) -> PipeResult<Velocity> {
    check_positive(diameter.value, DIAMETER_NOT_POSITIVE)?;
    check_positive(flow_rate.value, FLOW_RATE_NOT_POSITIVE)?;

    Ok(mps(flow_rate.value / flow_area(diameter).value))
}
