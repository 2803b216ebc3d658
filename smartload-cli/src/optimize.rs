//! Optimize command implementation for the SmartLoad CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use smartload_core::{Algorithm, ConstraintChecker, OptimizationConfig};
use smartload_solver::LoadOptimizer;

use crate::request::load_validated_request;
use crate::response::{OptimizeResponse, write_response};
use crate::{
    ARG_ALGORITHM, ARG_PICKUP_WINDOW_DAYS, ARG_REQUEST, CliError, ENV_OPTIMIZE_REQUEST,
    checker_for, require_existing,
};

/// CLI arguments for the `optimize` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Select the highest-payout compatible set of orders for a \
                 truck. The request is a JSON document with `truck`, \
                 `orders` and an optional `optimization_config`.",
    about = "Select the best load for one truck"
)]
#[ortho_config(prefix = "SMARTLOAD")]
pub(crate) struct OptimizeArgs {
    /// Path to a JSON file containing the request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Override the request's algorithm (dp, backtracking, greedy, auto).
    #[arg(long = ARG_ALGORITHM, value_name = "name")]
    #[serde(default)]
    pub(crate) algorithm: Option<String>,
    /// Only combine orders whose pickups are at most this many days apart.
    #[arg(long = ARG_PICKUP_WINDOW_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) pickup_window_days: Option<u32>,
}

impl OptimizeArgs {
    pub(crate) fn into_config(self) -> Result<OptimizeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimizeConfig::try_from(merged)
    }
}

/// Resolved `optimize` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptimizeConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Algorithm forced on top of the request's settings.
    pub(crate) algorithm: Option<Algorithm>,
    /// Compatibility rules to apply.
    pub(crate) checker: ConstraintChecker,
}

impl OptimizeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)
    }

    /// Merge the algorithm override into the request's settings.
    pub(crate) fn effective_config(
        &self,
        requested: Option<OptimizationConfig>,
    ) -> Option<OptimizationConfig> {
        match self.algorithm {
            Some(algorithm) => Some(requested.unwrap_or_default().with_algorithm(algorithm)),
            None => requested,
        }
    }
}

impl TryFrom<OptimizeArgs> for OptimizeConfig {
    type Error = CliError;

    fn try_from(args: OptimizeArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_OPTIMIZE_REQUEST,
        })?;
        let algorithm = args
            .algorithm
            .as_deref()
            .map(str::parse::<Algorithm>)
            .transpose()?;
        Ok(Self {
            request_path,
            algorithm,
            checker: checker_for(args.pickup_window_days),
        })
    }
}

pub(crate) fn run_optimize(args: OptimizeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_optimize_with(args, &mut stdout)
}

pub(crate) fn run_optimize_with(args: OptimizeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let response = execute_optimize(&config)?;
    write_response(writer, &response)
}

pub(crate) fn execute_optimize(config: &OptimizeConfig) -> Result<OptimizeResponse, CliError> {
    let request = load_validated_request(&config.request_path)?;
    let settings = config.effective_config(request.config);
    let result = LoadOptimizer::new(config.checker)
        .optimize(&request.truck, &request.orders, settings.as_ref())
        .map_err(|source| CliError::Solve { source })?;
    Ok(OptimizeResponse::new(&request.truck, &result))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimizeConfig, CliError> {
    let merged = OptimizeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimizeConfig::try_from(merged)
}
