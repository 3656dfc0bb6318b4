#![warn(missing_docs)]
//! PiBench CLI Library
//!
//! Argument surface and harness wiring for the `pibench` binary. The
//! run proceeds through fixed phases: parse, validate, execute,
//! report. Any validation failure is terminal - the process exits
//! with code 1 before any computation begins.

mod config;
mod executor;

pub use config::{CliError, RunConfig};
pub use executor::{build_report, execute};

use clap::error::ErrorKind;
use clap::Parser;
use pibench_core::MonotonicClock;
use pibench_report::{format_human_output, generate_json_report, OutputFormat};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

/// PiBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "pibench")]
#[command(version, about = "pibench - pi calculation CPU benchmark")]
pub struct Cli {
    /// Estimation method: 1 (Leibniz series), 2 (Monte Carlo), 3 (Machin formula)
    pub method: i64,

    /// Decimal digits after the point, 1-15
    pub precision: i64,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Fixed seed for the Monte Carlo sampler (default: wall-clock seconds)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the PiBench CLI. This is the entry point for the binary.
///
/// Returns the process exit code: 0 on success, 1 on missing or
/// invalid arguments.
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if err.kind() == ErrorKind::DisplayHelp
                || err.kind() == ErrorKind::DisplayVersion =>
        {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            // Missing, extra, or unparseable positional arguments all
            // land here: usage to stdout, exit 1.
            println!("{}", CliError::ArgumentCount);
            print!("{}", usage());
            return ExitCode::from(1);
        }
    };
    run_with_cli(cli)
}

/// Run the PiBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> ExitCode {
    let filter = if cli.verbose {
        "pibench=debug"
    } else {
        "pibench=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match RunConfig::new(cli.method, cli.precision) {
        Ok(config) => config,
        Err(err) => {
            println!("{err}");
            if matches!(err, CliError::MethodRange(_)) {
                print!("{}", usage());
            }
            return ExitCode::from(1);
        }
    };

    match run_benchmark(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

/// Execute the validated run and print the report.
fn run_benchmark(cli: &Cli, config: &RunConfig) -> anyhow::Result<()> {
    let format: OutputFormat = cli
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let seed = cli.seed.unwrap_or_else(wall_clock_seed);

    tracing::info!(
        method = config.method.label(),
        precision = config.precision,
        "starting estimation"
    );

    let clock = MonotonicClock::new();
    let result = executor::execute(config, &clock, seed);
    let report = executor::build_report(config, &result);

    let output = match format {
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Human => format_human_output(&report),
    };
    print!("{output}");

    Ok(())
}

/// Coarse wall-clock seed for the Monte Carlo sampler.
///
/// Second granularity: runs within the same second share a seed. Pass
/// `--seed` for reproducible runs.
fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Usage text printed on argument errors.
fn usage() -> String {
    "\
Usage: pibench <method> <precision>

Methods:
  1 - Leibniz series (slow but simple)
  2 - Monte Carlo sampling (randomized)
  3 - Machin formula (fast convergence)

Precision: decimal digits after the point (1-15)
Example: pibench 3 10
"
    .to_string()
}
