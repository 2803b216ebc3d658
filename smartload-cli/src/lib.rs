//! Command-line interface for the SmartLoad optimiser.
//!
//! Reads a JSON request describing one truck and its candidate orders,
//! validates it, and prints the chosen load (`optimize`) or the
//! payout/utilisation frontier (`pareto`) as JSON on stdout. Options layer
//! CLI flags over `SMARTLOAD_*` environment variables and configuration
//! files.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use smartload_core::{ConstraintChecker, PickupWindow};
use tracing_subscriber::EnvFilter;

mod error;
mod fs;
mod optimize;
mod pareto;
pub mod request;
pub mod response;

pub use error::CliError;

use optimize::{OptimizeArgs, run_optimize};
use pareto::{ParetoArgs, run_pareto};

pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_ALGORITHM: &str = "algorithm";
pub(crate) const ARG_PICKUP_WINDOW_DAYS: &str = "pickup-window-days";
pub(crate) const ARG_MAX_SOLUTIONS: &str = "max-solutions";
pub(crate) const ENV_OPTIMIZE_REQUEST: &str = "SMARTLOAD_CMDS_OPTIMIZE_REQUEST_PATH";
pub(crate) const ENV_PARETO_REQUEST: &str = "SMARTLOAD_CMDS_PARETO_REQUEST_PATH";

/// Default number of frontier points printed by `pareto`.
pub(crate) const DEFAULT_MAX_SOLUTIONS: usize = 5;

/// Run the SmartLoad CLI with the current process arguments and environment.
///
/// # Errors
/// Returns the first [`CliError`] raised while parsing options, reading the
/// request, solving or writing the response.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging()?;
    match cli.command {
        Command::Optimize(args) => run_optimize(args),
        Command::Pareto(args) => run_pareto(args),
    }
}

/// Install a stderr formatter filtered by `RUST_LOG` (default `info`).
///
/// Records emitted through the `log` facade are forwarded as well.
fn init_logging() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

#[derive(Debug, Parser)]
#[command(
    name = "smartload",
    about = "Choose the most profitable compatible load for a truck",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Select the best load for one truck.
    Optimize(OptimizeArgs),
    /// List non-dominated payout/utilisation trade-offs.
    Pareto(ParetoArgs),
}

/// The constraint rules implied by an optional pickup window in days.
pub(crate) const fn checker_for(pickup_window_days: Option<u32>) -> ConstraintChecker {
    match pickup_window_days {
        Some(days) => ConstraintChecker::new().with_pickup_window(PickupWindow::WithinDays(days)),
        None => ConstraintChecker::new(),
    }
}

/// Ensure `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;
