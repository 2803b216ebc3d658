//! Solve outcomes and utilisation reporting.

use std::time::Duration;

use crate::{Algorithm, Money, Order, Truck};

/// The orders chosen by a solver together with their aggregate totals.
///
/// Results are built per call and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// Selected orders in solver output order.
    pub selected: Vec<Order>,
    /// Sum of the selected payouts.
    pub total_payout: Money,
    /// Sum of the selected weights.
    pub total_weight: u64,
    /// Sum of the selected volumes.
    pub total_volume: u64,
    /// Wall-clock time spent solving.
    pub compute_time: Duration,
    /// The concrete strategy that produced the selection.
    pub algorithm: Algorithm,
}

impl OptimizationResult {
    /// An empty selection with zero totals.
    #[must_use]
    pub const fn empty(algorithm: Algorithm, compute_time: Duration) -> Self {
        Self {
            selected: Vec::new(),
            total_payout: Money::ZERO,
            total_weight: 0,
            total_volume: 0,
            compute_time,
            algorithm,
        }
    }

    /// Build a result by summing the attributes of `selected`.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use smartload_core::{Algorithm, Money, OptimizationResult};
    ///
    /// let result = OptimizationResult::from_orders(Vec::new(), Algorithm::Dp, Duration::ZERO);
    /// assert_eq!(result.total_payout, Money::ZERO);
    /// assert!(result.is_empty());
    /// ```
    #[must_use]
    pub fn from_orders(selected: Vec<Order>, algorithm: Algorithm, compute_time: Duration) -> Self {
        let total_payout = selected.iter().map(|order| order.payout).sum();
        let total_weight = selected.iter().map(|order| u64::from(order.weight)).sum();
        let total_volume = selected.iter().map(|order| u64::from(order.volume)).sum();
        Self {
            selected,
            total_payout,
            total_weight,
            total_volume,
            compute_time,
            algorithm,
        }
    }

    /// Whether nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Identifiers of the selected orders.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<&str> {
        self.selected.iter().map(|order| order.id.as_str()).collect()
    }

    /// Weight utilisation as a percentage of `truck` capacity, unrounded.
    #[must_use]
    pub fn weight_utilization_percent(&self, truck: &Truck) -> f64 {
        utilization_percent(self.total_weight, truck.max_weight)
    }

    /// Volume utilisation as a percentage of `truck` capacity, unrounded.
    #[must_use]
    pub fn volume_utilization_percent(&self, truck: &Truck) -> f64 {
        utilization_percent(self.total_volume, truck.max_volume)
    }
}

/// `used / capacity * 100`, or zero for a zero capacity.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "utilisation is reported as a floating-point percentage of bounded totals"
)]
pub fn utilization_percent(used: u64, capacity: u32) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    used as f64 / f64::from(capacity) * 100.0
}

/// Round a non-negative value half-up to two decimal places.
///
/// # Examples
/// ```
/// use smartload_core::round_half_up;
///
/// assert_eq!(round_half_up(68.181_818), 68.18);
/// assert_eq!(round_half_up(12.345), 12.35);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "reporting rounds percentages and scores to cents"
)]
pub fn round_half_up(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::order;
    use rstest::rstest;

    #[rstest]
    fn totals_sum_selected_orders() {
        let result = OptimizationResult::from_orders(
            vec![order("O1", 250_000, 18_000, 1_200), order("O2", 180_000, 12_000, 900)],
            Algorithm::Dp,
            Duration::ZERO,
        );
        assert_eq!(result.total_payout, Money::from_cents(430_000));
        assert_eq!(result.total_weight, 30_000);
        assert_eq!(result.total_volume, 2_100);
        assert_eq!(result.selected_ids(), ["O1", "O2"]);
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "rounded values are exact at two decimals")]
    fn utilisation_is_relative_to_truck() {
        let truck = Truck::new("T1", 44_000, 3_000);
        let result = OptimizationResult::from_orders(
            vec![order("O1", 1, 30_000, 2_100)],
            Algorithm::Dp,
            Duration::ZERO,
        );
        assert_eq!(round_half_up(result.weight_utilization_percent(&truck)), 68.18);
        assert_eq!(round_half_up(result.volume_utilization_percent(&truck)), 70.0);
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "zero is exact")]
    fn zero_capacity_reports_zero() {
        assert_eq!(utilization_percent(10, 0), 0.0);
    }
}
