//! Integration tests for pg-pipe with the default breakpoint fluid.

use pg_core::units::{deg, m, m3ps, pa};
use pg_core::{Tolerances, nearly_equal};
use pg_fluids::BreakpointFluid;
use pg_pipe::{
    PipeError, PipeFlowInput, march, pressure_gradient, single_pipe_pressure_gradient, solve,
    velocity,
};
use proptest::prelude::*;

fn vertical_well() -> PipeFlowInput {
    PipeFlowInput {
        flow_rate: m3ps(4.6296296296296296e-4),
        diameter: m(0.1143),
        inclination: deg(90.0),
        inlet_pressure: pa(1_500_000.0),
        length: m(900.0),
        max_segment: m(300.0),
    }
}

#[test]
fn vertical_well_golden_values() {
    let input = vertical_well();
    let out = single_pipe_pressure_gradient(&input).unwrap();
    let tol = Tolerances::absolute(1e-3);

    assert!(nearly_equal(out.velocity.value, 0.045_119_461_394_375_52, tol));
    assert!(nearly_equal(
        out.outlet_pressure.value,
        -6_686_224.843_759_874,
        tol
    ));
    assert!(nearly_equal(out.reynolds, 0.350_296_436_018_519, tol));
}

#[test]
fn manual_fold_matches_march() {
    let fluid = BreakpointFluid::default();
    let input = vertical_well();

    // Three 300 m steps, each evaluated at the carried pressure.
    let mut p = input.inlet_pressure;
    for _ in 0..3 {
        let g = pressure_gradient(&fluid, &input, p).unwrap();
        p = pa(p.value + g.total() * 300.0);
    }

    let outcome = march(&fluid, &input, false).unwrap();
    assert_eq!(outcome.outlet_pressure, p);
}

#[test]
fn finer_segments_change_the_answer_slightly() {
    let coarse = single_pipe_pressure_gradient(&vertical_well()).unwrap();
    let fine = single_pipe_pressure_gradient(&PipeFlowInput {
        max_segment: m(10.0),
        ..vertical_well()
    })
    .unwrap();

    let rel = (fine.outlet_pressure.value - coarse.outlet_pressure.value).abs()
        / coarse.outlet_pressure.value.abs();
    assert!(rel > 0.0);
    assert!(rel < 0.05, "relative change {rel}");
}

#[test]
fn shared_input_across_threads() {
    let input = vertical_well();
    let expected = single_pipe_pressure_gradient(&input).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| single_pipe_pressure_gradient(&input).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn profile_records_every_segment() {
    let fluid = BreakpointFluid::default();
    let input = PipeFlowInput {
        length: m(1000.0),
        ..vertical_well()
    };
    let solution = solve(&fluid, &input, true).unwrap();

    assert_eq!(solution.march.segment_count, 4);
    assert_eq!(solution.march.profile.len(), 4);
    assert_eq!(solution.march.final_state.width.value, 100.0);
    assert_eq!(
        solution.march.profile.last().unwrap().pressure_out,
        solution.output.outlet_pressure
    );
}

#[test]
fn error_messages_are_distinct() {
    let cases = [
        PipeFlowInput {
            max_segment: m(-1.0),
            ..vertical_well()
        },
        PipeFlowInput {
            length: m(-1.0),
            max_segment: m(1.0),
            ..vertical_well()
        },
        PipeFlowInput {
            max_segment: m(1_000.0),
            ..vertical_well()
        },
        PipeFlowInput {
            diameter: m(-0.1),
            ..vertical_well()
        },
        PipeFlowInput {
            flow_rate: m3ps(-1.0),
            ..vertical_well()
        },
    ];

    let mut messages: Vec<String> = cases
        .iter()
        .map(|input| match single_pipe_pressure_gradient(input) {
            Err(PipeError::InvalidInput { what }) => what.to_string(),
            other => panic!("expected invalid input, got {other:?}"),
        })
        .collect();
    messages.sort();
    messages.dedup();
    assert_eq!(messages.len(), cases.len());
}

proptest! {
    #[test]
    fn velocity_ignores_pressure_angle_and_lengths(
        p in 1e5_f64..2e7,
        alpha in -90.0_f64..90.0,
        length in 1.0_f64..5_000.0,
        frac in 0.01_f64..1.0,
    ) {
        let input = PipeFlowInput {
            inlet_pressure: pa(p),
            inclination: deg(alpha),
            length: m(length),
            max_segment: m(length * frac),
            ..vertical_well()
        };
        let out = single_pipe_pressure_gradient(&input).unwrap();
        let v = velocity(input.flow_rate, input.diameter).unwrap();
        prop_assert_eq!(out.velocity, v);
    }

    #[test]
    fn consumed_length_equals_pipe_length(
        length in 1.0_f64..2_000.0,
        frac in 0.05_f64..1.0,
    ) {
        let fluid = BreakpointFluid::default();
        let input = PipeFlowInput {
            inclination: deg(0.0),
            length: m(length),
            max_segment: m(length * frac),
            ..vertical_well()
        };
        let outcome = march(&fluid, &input, true).unwrap();
        let consumed: f64 = outcome.profile.iter().map(|r| r.consumed.value).sum();
        let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
        prop_assert!(nearly_equal(consumed, length, tol));
        prop_assert!(outcome.final_state.width.value <= length * frac);
        prop_assert!(outcome.final_state.width.value > 0.0);
    }
}
