//! JSON responses written to stdout.

use std::io::Write;

use serde::Serialize;
use smartload_core::{Algorithm, OptimizationResult, Truck, round_half_up};
use smartload_solver::ParetoSolution;

use crate::CliError;

/// Outcome of the `optimize` subcommand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizeResponse {
    /// Truck the load was built for.
    pub truck_id: String,
    /// Selected order ids in solver output order.
    pub selected_order_ids: Vec<String>,
    /// Sum of selected payouts in cents.
    pub total_payout_cents: i64,
    /// Sum of selected weights in pounds.
    pub total_weight_lbs: u64,
    /// Sum of selected volumes in cubic feet.
    pub total_volume_cuft: u64,
    /// Weight utilisation, two decimals.
    pub utilization_weight_percent: f64,
    /// Volume utilisation, two decimals.
    pub utilization_volume_percent: f64,
    /// Algorithm that produced the load.
    pub algorithm: Algorithm,
    /// Wall-clock solve time in milliseconds.
    pub compute_time_ms: u64,
}

impl OptimizeResponse {
    /// Summarise `result` for `truck`.
    #[must_use]
    pub fn new(truck: &Truck, result: &OptimizationResult) -> Self {
        Self {
            truck_id: truck.id.clone(),
            selected_order_ids: result
                .selected
                .iter()
                .map(|order| order.id.clone())
                .collect(),
            total_payout_cents: result.total_payout.cents(),
            total_weight_lbs: result.total_weight,
            total_volume_cuft: result.total_volume,
            utilization_weight_percent: round_half_up(result.weight_utilization_percent(truck)),
            utilization_volume_percent: round_half_up(result.volume_utilization_percent(truck)),
            algorithm: result.algorithm,
            compute_time_ms: u64::try_from(result.compute_time.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// One frontier point in a `pareto` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParetoSolutionPayload {
    /// Selected order ids.
    pub order_ids: Vec<String>,
    /// Sum of selected payouts in cents.
    pub total_payout_cents: i64,
    /// Sum of selected weights in pounds.
    pub total_weight_lbs: u64,
    /// Sum of selected volumes in cubic feet.
    pub total_volume_cuft: u64,
    /// Weight utilisation, two decimals.
    pub utilization_weight_percent: f64,
    /// Volume utilisation, two decimals.
    pub utilization_volume_percent: f64,
    /// Display score, two decimals.
    pub score: f64,
}

impl From<ParetoSolution> for ParetoSolutionPayload {
    fn from(solution: ParetoSolution) -> Self {
        Self {
            order_ids: solution.order_ids,
            total_payout_cents: solution.total_payout.cents(),
            total_weight_lbs: solution.total_weight,
            total_volume_cuft: solution.total_volume,
            utilization_weight_percent: solution.weight_utilization_percent,
            utilization_volume_percent: solution.volume_utilization_percent,
            score: solution.score,
        }
    }
}

/// Outcome of the `pareto` subcommand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParetoResponse {
    /// Truck the loads were built for.
    pub truck_id: String,
    /// Non-dominated loads, payout-heavy first.
    pub solutions: Vec<ParetoSolutionPayload>,
    /// Number of solutions.
    pub count: usize,
}

impl ParetoResponse {
    /// Wrap a frontier for `truck`.
    #[must_use]
    pub fn new(truck: &Truck, frontier: Vec<ParetoSolution>) -> Self {
        let solutions: Vec<ParetoSolutionPayload> =
            frontier.into_iter().map(ParetoSolutionPayload::from).collect();
        Self {
            truck_id: truck.id.clone(),
            count: solutions.len(),
            solutions,
        }
    }
}

/// Write `response` as pretty JSON followed by a newline.
pub(crate) fn write_response<T: Serialize>(
    writer: &mut dyn Write,
    response: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(response).map_err(CliError::SerialiseResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
