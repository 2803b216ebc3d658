//! Pareto command implementation for the SmartLoad CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use smartload_core::ConstraintChecker;
use smartload_solver::LoadOptimizer;

use crate::request::load_validated_request;
use crate::response::{ParetoResponse, write_response};
use crate::{
    ARG_MAX_SOLUTIONS, ARG_PICKUP_WINDOW_DAYS, ARG_REQUEST, CliError, DEFAULT_MAX_SOLUTIONS,
    ENV_PARETO_REQUEST, checker_for, require_existing,
};

/// CLI arguments for the `pareto` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Solve the request under several payout/utilisation \
                 weightings and print the loads no other load beats on \
                 payout and both utilisation measures.",
    about = "List non-dominated payout/utilisation trade-offs"
)]
#[ortho_config(prefix = "SMARTLOAD")]
pub(crate) struct ParetoArgs {
    /// Path to a JSON file containing the request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Maximum number of loads to print (default 5).
    #[arg(long = ARG_MAX_SOLUTIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_solutions: Option<usize>,
    /// Only combine orders whose pickups are at most this many days apart.
    #[arg(long = ARG_PICKUP_WINDOW_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) pickup_window_days: Option<u32>,
}

impl ParetoArgs {
    pub(crate) fn into_config(self) -> Result<ParetoConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ParetoConfig::try_from(merged)
    }
}

/// Resolved `pareto` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParetoConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Upper bound on printed loads.
    pub(crate) max_solutions: usize,
    /// Compatibility rules to apply.
    pub(crate) checker: ConstraintChecker,
}

impl ParetoConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)
    }
}

impl TryFrom<ParetoArgs> for ParetoConfig {
    type Error = CliError;

    fn try_from(args: ParetoArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_PARETO_REQUEST,
        })?;
        Ok(Self {
            request_path,
            max_solutions: args.max_solutions.unwrap_or(DEFAULT_MAX_SOLUTIONS),
            checker: checker_for(args.pickup_window_days),
        })
    }
}

pub(crate) fn run_pareto(args: ParetoArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_pareto_with(args, &mut stdout)
}

pub(crate) fn run_pareto_with(args: ParetoArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let response = execute_pareto(&config)?;
    write_response(writer, &response)
}

pub(crate) fn execute_pareto(config: &ParetoConfig) -> Result<ParetoResponse, CliError> {
    let request = load_validated_request(&config.request_path)?;
    let frontier = LoadOptimizer::new(config.checker)
        .pareto_solutions(&request.truck, &request.orders, config.max_solutions)
        .map_err(|source| CliError::Solve { source })?;
    Ok(ParetoResponse::new(&request.truck, frontier))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ParetoConfig, CliError> {
    let merged = ParetoArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ParetoConfig::try_from(merged)
}
