use clap::{Parser, Subcommand};
use pg_app::{AppResult, DEFAULT_INPUT, DEFAULT_OUTPUT, RunOptions, RunRequest, run_service};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pg-cli")]
#[command(about = "pipegrad CLI - single pipe pressure gradient calculator", long_about = None)]
struct Cli {
    /// Defaults to `run` with the default file names
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute outlet pressure, velocity and Reynolds number and save them
    Run {
        /// Path to the input case (JSON, or YAML by extension)
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
        /// Path to the result file
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
        /// Include the per-segment profile in the result file
        #[arg(long)]
        profile: bool,
    },
    /// Check an input case without computing it
    Validate {
        /// Path to the input case
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },
    /// Print the pressure profile segment by segment
    Profile {
        /// Path to the input case
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
        /// Output CSV file path (optional, defaults to a table on stdout)
        #[arg(short, long)]
        csv: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_run(
            Path::new(DEFAULT_INPUT),
            Path::new(DEFAULT_OUTPUT),
            RunOptions::default(),
        ),
        Some(Commands::Run {
            input,
            output,
            pretty,
            profile,
        }) => cmd_run(
            &input,
            &output,
            RunOptions {
                pretty,
                include_profile: profile,
            },
        ),
        Some(Commands::Validate { input }) => cmd_validate(&input),
        Some(Commands::Profile { input, csv }) => cmd_profile(&input, csv.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

fn cmd_run(input: &Path, output: &Path, options: RunOptions) -> AppResult<()> {
    let request = RunRequest {
        input_path: input,
        output_path: output,
        options,
    };
    let response = run_service::run(&request)?;

    println!("✓ Result written to {}", output.display());
    println!("  POut = {:.3} Pa", response.output.outlet_pressure.value);
    println!("  v    = {:.6} m/s", response.output.velocity.value);
    println!("  Re   = {:.6}", response.output.reynolds);
    println!(
        "  Segments: {}  ({:.3} ms)",
        response.segment_count,
        response.elapsed_s * 1000.0
    );
    Ok(())
}

fn cmd_validate(input: &Path) -> AppResult<()> {
    println!("Validating case: {}", input.display());
    run_service::validate_case(input)?;
    println!("✓ Case is valid");
    Ok(())
}

fn cmd_profile(input: &Path, csv_path: Option<&Path>) -> AppResult<()> {
    let solution = run_service::profile(input)?;
    let rows = run_service::result_file(&solution, true).profile.unwrap_or_default();

    if let Some(path) = csv_path {
        let mut csv = String::from(
            "index,start_m,width_m,consumed_m,p_in_pa,p_out_pa,density_kg_m3,reynolds,gradient_pa_per_m\n",
        );
        for r in &rows {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{}\n",
                r.index,
                r.start_m,
                r.width_m,
                r.consumed_m,
                r.p_in_pa,
                r.p_out_pa,
                r.density_kg_m3,
                r.reynolds,
                r.gradient_pa_per_m
            ));
        }
        std::fs::write(path, csv)?;
        println!("✓ Exported {} segments to {}", rows.len(), path.display());
        return Ok(());
    }

    println!(
        "{:>4} {:>10} {:>10} {:>16} {:>16} {:>12} {:>14}",
        "#", "start [m]", "width [m]", "P in [Pa]", "P out [Pa]", "Re", "dP/dL [Pa/m]"
    );
    for r in &rows {
        println!(
            "{:>4} {:>10.3} {:>10.3} {:>16.3} {:>16.3} {:>12.6} {:>14.3}",
            r.index, r.start_m, r.width_m, r.p_in_pa, r.p_out_pa, r.reynolds, r.gradient_pa_per_m
        );
    }
    println!(
        "\nPOut = {:.3} Pa, v = {:.6} m/s, Re = {:.6}",
        solution.output.outlet_pressure.value,
        solution.output.velocity.value,
        solution.output.reynolds
    );
    Ok(())
}
