//! Fixed-width segment march along the pipe.
//!
//! The march is a fold over immutable [`SegmentState`]s. Each step evaluates the
//! gradient at the state's inlet pressure, carries `p + g * width` forward as
//! the next inlet pressure, then consumes length:
//!
//! - `remaining >= width`: `remaining -= width`, width unchanged
//! - otherwise: `width = remaining`, `remaining = 0`
//!
//! The pressure update of a step always uses the width the step started
//! with; the shrunken width only shows up in the state the step returns.
//! `remaining` is set to exactly zero on the remainder path, so termination
//! never depends on subtraction happening to land on zero. A step that leaves
//! `remaining` unchanged (width below its rounding step) ends the march with
//! [`SEGMENT_TOO_SMALL`].

use crate::common::{check_finite, check_positive};
use crate::error::{PipeError, PipeResult};
use crate::gradient::{GradientBreakdown, pressure_gradient};
use crate::pipe::PipeFlowInput;
use pg_core::units::{Length, Pressure, m, pa};
use pg_fluids::FluidModel;

pub const SEGMENT_NOT_POSITIVE: &str = "maximum segment length must be positive and non-zero";
pub const LENGTH_NOT_POSITIVE: &str = "pipe length must be positive and non-zero";
pub const LENGTH_NOT_FINITE: &str = "pipe length must be finite";
pub const SEGMENT_EXCEEDS_LENGTH: &str = "segment length cannot exceed pipe length";
pub const SEGMENT_TOO_SMALL: &str = "segment length too small relative to pipe length";

/// State at the start of a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentState {
    /// Pressure at the segment inlet
    pub pressure_in: Pressure,
    /// Pipe length not yet consumed
    pub remaining: Length,
    /// Width used for the next pressure update
    pub width: Length,
}

impl SegmentState {
    /// Initial state for `input`, after checking segment preconditions.
    ///
    /// Checks run in order: segment length, pipe length, segment vs pipe length.
    pub fn initial(input: &PipeFlowInput) -> PipeResult<Self> {
        check_positive(input.max_segment.value, SEGMENT_NOT_POSITIVE)?;
        check_positive(input.length.value, LENGTH_NOT_POSITIVE)?;
        if !input.length.value.is_finite() {
            return Err(PipeError::InvalidInput {
                what: LENGTH_NOT_FINITE,
            });
        }
        if input.max_segment > input.length {
            return Err(PipeError::InvalidInput {
                what: SEGMENT_EXCEEDS_LENGTH,
            });
        }

        Ok(Self {
            pressure_in: input.inlet_pressure,
            remaining: input.length,
            width: input.max_segment,
        })
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.remaining.value == 0.0
    }

    /// Apply one step with local gradient `gradient` [Pa/m].
    pub fn advance(&self, gradient: f64) -> Self {
        let pressure_out = pa(self.pressure_in.value + gradient * self.width.value);

        let (remaining, width) = if self.remaining >= self.width {
            (self.remaining - self.width, self.width)
        } else {
            (m(0.0), self.remaining)
        };

        Self {
            pressure_in: pressure_out,
            remaining,
            width,
        }
    }
}

/// One evaluated segment of the march.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentRecord {
    /// 0-based segment index
    pub index: usize,
    /// Distance from the pipe inlet where the segment starts
    pub start: Length,
    /// Width used in the pressure update
    pub width: Length,
    /// Pipe length actually consumed by the segment
    pub consumed: Length,
    pub pressure_in: Pressure,
    pub pressure_out: Pressure,
    pub gradient: GradientBreakdown,
}

/// Result of marching the whole pipe.
#[derive(Clone, Debug, PartialEq)]
pub struct MarchOutcome {
    pub outlet_pressure: Pressure,
    /// State after the last step; its width is the last consumed length.
    pub final_state: SegmentState,
    pub segment_count: usize,
    /// Per-segment records, empty unless requested.
    pub profile: Vec<SegmentRecord>,
}

/// March from the input's inlet to the outlet.
pub fn march(
    fluid: &dyn FluidModel,
    input: &PipeFlowInput,
    record_profile: bool,
) -> PipeResult<MarchOutcome> {
    let mut state = SegmentState::initial(input)?;
    let mut profile = Vec::new();
    let mut segment_count = 0;

    loop {
        let gradient = pressure_gradient(fluid, input, state.pressure_in)?;
        let next = state.advance(gradient.total());
        check_finite(next.pressure_in.value, "segment outlet pressure")?;
        if !next.is_done() && next.remaining == state.remaining {
            return Err(PipeError::InvalidInput {
                what: SEGMENT_TOO_SMALL,
            });
        }

        if record_profile {
            profile.push(SegmentRecord {
                index: segment_count,
                start: input.length - state.remaining,
                width: state.width,
                consumed: state.remaining - next.remaining,
                pressure_in: state.pressure_in,
                pressure_out: next.pressure_in,
                gradient,
            });
        }

        segment_count += 1;
        state = next;
        if state.is_done() {
            break;
        }
    }

    Ok(MarchOutcome {
        outlet_pressure: state.pressure_in,
        final_state: state,
        segment_count,
        profile,
    })
}
