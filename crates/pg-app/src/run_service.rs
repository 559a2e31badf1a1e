//! Calculation runs: load a case, solve it, persist the result.

use std::path::Path;
use std::time::Instant;

use pg_fluids::FluidModel;
use pg_pipe::{PipeFlowOutput, PipeSolution};
use tracing::{debug, info};

use crate::case_service;
use crate::error::AppResult;
use crate::schema::{PipeCase, PipeResultFile, ProfileRow};

/// Options for running a calculation.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Add the per-segment profile to the result file
    pub include_profile: bool,
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub input_path: &'a Path,
    pub output_path: &'a Path,
    pub options: RunOptions,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub output: PipeFlowOutput,
    pub segment_count: usize,
    pub result: PipeResultFile,
    pub elapsed_s: f64,
}

/// Solve a case that is already in memory.
pub fn solve_case(case: &PipeCase, record_profile: bool) -> AppResult<PipeSolution> {
    let fluid = case.build_fluid()?;
    let input = case.to_input();
    debug!(
        fluid = fluid.name(),
        inlet = %fluid.property_pack(input.inlet_pressure).summary(),
        "solving pipe case"
    );

    let solution = pg_pipe::solve(&fluid, &input, record_profile)?;

    for record in &solution.march.profile {
        debug!(
            index = record.index,
            start_m = record.start.value,
            p_in_pa = record.pressure_in.value,
            p_out_pa = record.pressure_out.value,
            gradient_pa_per_m = record.gradient.total(),
            "segment"
        );
    }

    Ok(solution)
}

/// Build the result file contents for a solution.
pub fn result_file(solution: &PipeSolution, include_profile: bool) -> PipeResultFile {
    let mut result = PipeResultFile::from(&solution.output);
    if include_profile {
        result.profile = Some(solution.march.profile.iter().map(ProfileRow::from).collect());
    }
    result
}

/// Load, solve and save.
pub fn run(request: &RunRequest<'_>) -> AppResult<RunResponse> {
    let start = Instant::now();

    let case = case_service::load_case(request.input_path)?;
    info!(path = %request.input_path.display(), "loaded pipe case");

    let solution = solve_case(&case, request.options.include_profile)?;
    let result = result_file(&solution, request.options.include_profile);

    case_service::save_result(request.output_path, &result, request.options.pretty)?;
    let elapsed_s = start.elapsed().as_secs_f64();
    info!(
        path = %request.output_path.display(),
        segments = solution.march.segment_count,
        p_out_pa = solution.output.outlet_pressure.value,
        elapsed_s,
        "wrote result"
    );

    Ok(RunResponse {
        output: solution.output,
        segment_count: solution.march.segment_count,
        result,
        elapsed_s,
    })
}

/// Load a case and check it without marching.
pub fn validate_case(path: &Path) -> AppResult<PipeCase> {
    let case = case_service::load_case(path)?;
    case.build_fluid()?;
    pg_pipe::validate(&case.to_input())?;
    info!(path = %path.display(), "case is valid");
    Ok(case)
}

/// Load a case and solve it with the per-segment profile recorded.
pub fn profile(path: &Path) -> AppResult<PipeSolution> {
    let case = case_service::load_case(path)?;
    solve_case(&case, true)
}
