//! Trade-off frontier between payout and capacity utilisation.

use smartload_core::{Money, ObjectiveWeights, OptimizationResult, Truck, round_half_up};

/// Weight vectors sampled when building the frontier, payout-heavy first.
pub const FRONTIER_WEIGHTS: [ObjectiveWeights; 5] = [
    ObjectiveWeights::new(1.0, 0.0),
    ObjectiveWeights::new(0.8, 0.2),
    ObjectiveWeights::new(0.6, 0.4),
    ObjectiveWeights::new(0.4, 0.6),
    ObjectiveWeights::new(0.2, 0.8),
];

/// Multiplier applied to the summed utilisation percentages in the score.
const SCORE_UTILIZATION_SCALE: f64 = 1_000.0;

/// One candidate load on the payout/utilisation frontier.
///
/// Totals describe the original orders; percentages and score are rounded
/// half-up to two decimals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParetoSolution {
    /// Selected order identifiers.
    pub order_ids: Vec<String>,
    /// Payout of the selected orders.
    pub total_payout: Money,
    /// Weight of the selected orders.
    pub total_weight: u64,
    /// Volume of the selected orders.
    pub total_volume: u64,
    /// Weight utilisation percentage.
    pub weight_utilization_percent: f64,
    /// Volume utilisation percentage.
    pub volume_utilization_percent: f64,
    /// Display score under the weights that produced this load.
    pub score: f64,
}

impl ParetoSolution {
    /// Summarise `result` as a frontier point produced under `weights`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the display score is a floating-point blend"
    )]
    pub fn from_result(truck: &Truck, result: &OptimizationResult, weights: ObjectiveWeights) -> Self {
        let weight_percent = result.weight_utilization_percent(truck);
        let volume_percent = result.volume_utilization_percent(truck);
        let score = weights.revenue * result.total_payout.cents() as f64
            + weights.utilization * (weight_percent + volume_percent) * SCORE_UTILIZATION_SCALE;
        Self {
            order_ids: result
                .selected
                .iter()
                .map(|order| order.id.clone())
                .collect(),
            total_payout: result.total_payout,
            total_weight: result.total_weight,
            total_volume: result.total_volume,
            weight_utilization_percent: round_half_up(weight_percent),
            volume_utilization_percent: round_half_up(volume_percent),
            score: round_half_up(score),
        }
    }

    /// Whether `self` is at least as good as `other` on payout and both
    /// utilisation percentages, and strictly better on one of them.
    ///
    /// Comparisons use the rounded percentages.
    #[must_use]
    pub fn dominates(&self, other: &Self) -> bool {
        let no_worse = self.total_payout >= other.total_payout
            && self.weight_utilization_percent >= other.weight_utilization_percent
            && self.volume_utilization_percent >= other.volume_utilization_percent;
        let better = self.total_payout > other.total_payout
            || self.weight_utilization_percent > other.weight_utilization_percent
            || self.volume_utilization_percent > other.volume_utilization_percent;
        no_worse && better
    }
}

/// Keep the solutions no other candidate dominates, preserving order.
#[must_use]
pub fn non_dominated(solutions: Vec<ParetoSolution>) -> Vec<ParetoSolution> {
    let keep: Vec<bool> = solutions
        .iter()
        .map(|candidate| !solutions.iter().any(|other| other.dominates(candidate)))
        .collect();
    solutions
        .into_iter()
        .zip(keep)
        .filter_map(|(solution, kept)| kept.then_some(solution))
        .collect()
}
