//! Request-level orchestration: preprocessing, objectives and the frontier.

use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use log::{Level, debug, info, log_enabled, warn};
use smartload_core::{
    Algorithm, ConstraintChecker, ObjectiveWeights, OptimizationConfig, OptimizationResult, Order,
    Truck, filter_feasible_orders, group_orders_by_route, separate_hazmat_orders,
};

use crate::objective::scalarize_orders;
use crate::pareto::{FRONTIER_WEIGHTS, ParetoSolution, non_dominated};
use crate::{SolveError, Strategy};

/// Entry point tying the constraint rules to a solving strategy.
///
/// Holds only immutable configuration, so one optimizer can serve concurrent
/// callers; every solve allocates its own working state.
///
/// # Examples
/// ```
/// use smartload_core::{Money, Order, Truck};
/// use smartload_solver::LoadOptimizer;
/// use time::macros::date;
///
/// # fn order(id: &str, payout: i64, weight: u32, volume: u32) -> Order {
/// #     Order {
/// #         id: id.to_owned(),
/// #         payout: Money::from_cents(payout),
/// #         weight,
/// #         volume,
/// #         origin: "Los Angeles, CA".to_owned(),
/// #         destination: "Dallas, TX".to_owned(),
/// #         pickup_date: date!(2025 - 01 - 10),
/// #         delivery_date: date!(2025 - 01 - 12),
/// #         hazmat: false,
/// #     }
/// # }
/// let truck = Truck::new("T1", 44_000, 3_000);
/// let orders = vec![
///     order("O1", 250_000, 18_000, 1_200),
///     order("O2", 180_000, 12_000, 900),
/// ];
/// let result = LoadOptimizer::default().optimize(&truck, &orders, None)?;
/// assert_eq!(result.selected_ids(), ["O1", "O2"]);
/// assert_eq!(result.total_payout, Money::from_cents(430_000));
/// # Ok::<(), smartload_solver::SolveError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptimizer {
    checker: ConstraintChecker,
    strategy: Strategy,
}

impl LoadOptimizer {
    /// An optimizer applying `checker` with the [`Strategy::Auto`] default.
    #[must_use]
    pub const fn new(checker: ConstraintChecker) -> Self {
        Self {
            checker,
            strategy: Strategy::Auto,
        }
    }

    /// Replace the strategy used when a request does not name one.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The compatibility rules in force.
    #[must_use]
    pub const fn checker(&self) -> &ConstraintChecker {
        &self.checker
    }

    /// The strategy used when a request does not name one.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Choose the best load of `orders` for `truck`.
    ///
    /// Without a configuration the default strategy maximises payout. With
    /// one, its algorithm picks the strategy ([`Algorithm::Auto`] defers to
    /// the default) and non-revenue weights switch to a scalarised payout.
    /// Reported totals always describe the original orders.
    ///
    /// # Errors
    /// Returns [`SolveError::TooManyOrders`] when an exact algorithm is
    /// requested for more orders than it supports.
    pub fn optimize(
        &self,
        truck: &Truck,
        orders: &[Order],
        config: Option<&OptimizationConfig>,
    ) -> Result<OptimizationResult, SolveError> {
        let started_at = Instant::now();
        let feasible = Self::preprocess(truck, orders);
        let (strategy, weights) = config.map_or(
            (self.strategy, ObjectiveWeights::REVENUE_ONLY),
            |config| (self.strategy_for(config.algorithm), config.weights()),
        );

        info!(
            "Optimizing {} orders for truck {}",
            feasible.len(),
            truck.id
        );
        let mut result = self.solve_weighted(truck, &feasible, strategy, weights)?;
        result.compute_time = started_at.elapsed();
        info!(
            "Found solution with {} orders, {} payout in {}ms",
            result.selected.len(),
            result.total_payout,
            result.compute_time.as_millis()
        );
        Ok(result)
    }

    /// Sample the payout/utilisation frontier.
    ///
    /// Solves under each of [`FRONTIER_WEIGHTS`] with the default strategy,
    /// drops repeated selections, keeps the non-dominated loads and returns
    /// at most `max_solutions` of them, payout-heavy first.
    ///
    /// # Errors
    /// Returns [`SolveError::TooManyOrders`] when the default strategy is an
    /// exact one and the input is too large for it.
    pub fn pareto_solutions(
        &self,
        truck: &Truck,
        orders: &[Order],
        max_solutions: usize,
    ) -> Result<Vec<ParetoSolution>, SolveError> {
        let feasible = Self::preprocess(truck, orders);
        let mut seen: BTreeSet<BTreeSet<String>> = BTreeSet::new();
        let mut candidates = Vec::with_capacity(FRONTIER_WEIGHTS.len());
        for weights in FRONTIER_WEIGHTS {
            let result = self.solve_weighted(truck, &feasible, self.strategy, weights)?;
            let key = result
                .selected
                .iter()
                .map(|order| order.id.clone())
                .collect();
            if !seen.insert(key) {
                continue;
            }
            candidates.push(ParetoSolution::from_result(truck, &result, weights));
        }

        let mut frontier = non_dominated(candidates);
        frontier.truncate(max_solutions);
        debug!(
            "pareto frontier holds {} of {} distinct loads",
            frontier.len(),
            seen.len()
        );
        Ok(frontier)
    }

    fn strategy_for(&self, algorithm: Algorithm) -> Strategy {
        match algorithm {
            Algorithm::Auto => self.strategy,
            concrete => Strategy::from(concrete),
        }
    }

    /// Drop orders that can never fit and report on the remainder.
    fn preprocess(truck: &Truck, orders: &[Order]) -> Vec<Order> {
        let feasible: Vec<Order> = filter_feasible_orders(truck, orders)
            .into_iter()
            .cloned()
            .collect();
        let dropped = orders.len().saturating_sub(feasible.len());
        if dropped > 0 {
            debug!("dropped {dropped} orders exceeding the capacity of truck {}", truck.id);
        }

        let (hazmat, non_hazmat) = separate_hazmat_orders(&feasible);
        if !hazmat.is_empty() && !non_hazmat.is_empty() {
            warn!(
                "Mixed hazmat/non-hazmat orders detected: {} hazmat, {} non-hazmat",
                hazmat.len(),
                non_hazmat.len()
            );
        }

        if log_enabled!(Level::Debug) {
            for (route, group) in group_orders_by_route(&feasible) {
                debug!("route {route}: {} orders", group.len());
            }
        }
        feasible
    }

    /// Solve under `weights`, reporting the original orders' totals.
    fn solve_weighted(
        &self,
        truck: &Truck,
        orders: &[Order],
        strategy: Strategy,
        weights: ObjectiveWeights,
    ) -> Result<OptimizationResult, SolveError> {
        if weights.is_revenue_only() {
            return strategy.solve(&self.checker, truck, orders);
        }

        let scaled = scalarize_orders(truck, orders, weights);
        let result = strategy.solve(&self.checker, truck, &scaled)?;
        let originals: HashMap<&str, &Order> = orders
            .iter()
            .map(|order| (order.id.as_str(), order))
            .collect();
        let selected = result
            .selected
            .iter()
            .filter_map(|order| originals.get(order.id.as_str()).map(|&original| original.clone()))
            .collect();
        Ok(OptimizationResult::from_orders(
            selected,
            result.algorithm,
            result.compute_time,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use smartload_core::test_support::order;
    use smartload_core::{Money, Objective};

    /// Two incompatible loads: one pays more, the other fills the truck.
    #[fixture]
    fn rich_or_full() -> (Truck, Vec<Order>) {
        let truck = Truck::new("T1", 100, 100);
        let orders = vec![
            order("rich", 1_000, 10, 10),
            order("full", 500, 90, 90).with_route("Dallas, TX", "Atlanta, GA"),
        ];
        (truck, orders)
    }

    #[rstest]
    fn optimizer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LoadOptimizer>();
    }

    #[rstest]
    fn revenue_objective_prefers_payout(rich_or_full: (Truck, Vec<Order>)) {
        let (truck, orders) = rich_or_full;
        let result = LoadOptimizer::default()
            .optimize(&truck, &orders, None)
            .expect("optimize");
        assert_eq!(result.selected_ids(), ["rich"]);
        assert_eq!(result.algorithm, Algorithm::Dp);
    }

    #[rstest]
    fn utilization_objective_reports_original_payout(rich_or_full: (Truck, Vec<Order>)) {
        let (truck, orders) = rich_or_full;
        let config = OptimizationConfig::new(Objective::Utilization);
        let result = LoadOptimizer::default()
            .optimize(&truck, &orders, Some(&config))
            .expect("optimize");
        assert_eq!(result.selected_ids(), ["full"]);
        assert_eq!(result.total_payout, Money::from_cents(500));
        assert_eq!(result.total_weight, 90);
        assert_eq!(result.total_volume, 90);
    }

    #[rstest]
    #[case(Algorithm::Greedy, Algorithm::Greedy)]
    #[case(Algorithm::Backtracking, Algorithm::Backtracking)]
    #[case(Algorithm::Auto, Algorithm::Greedy)]
    fn configured_algorithm_overrides_default(
        rich_or_full: (Truck, Vec<Order>),
        #[case] requested: Algorithm,
        #[case] expected: Algorithm,
    ) {
        let (truck, orders) = rich_or_full;
        let optimizer = LoadOptimizer::default().with_strategy(Strategy::Heuristic);
        let config = OptimizationConfig::default().with_algorithm(requested);
        let result = optimizer
            .optimize(&truck, &orders, Some(&config))
            .expect("optimize");
        assert_eq!(result.algorithm, expected);
    }

    #[rstest]
    fn infeasible_orders_are_dropped_before_solving() {
        let truck = Truck::new("T1", 44_000, 3_000);
        let orders = vec![
            order("heavy", 900_000, 50_000, 100),
            order("ok", 100_000, 1_000, 100),
        ];
        let result = LoadOptimizer::default()
            .optimize(&truck, &orders, None)
            .expect("optimize");
        assert_eq!(result.selected_ids(), ["ok"]);
    }

    #[rstest]
    fn frontier_keeps_both_trade_offs(rich_or_full: (Truck, Vec<Order>)) {
        let (truck, orders) = rich_or_full;
        let frontier = LoadOptimizer::default()
            .pareto_solutions(&truck, &orders, 5)
            .expect("pareto");
        let ids: Vec<String> = frontier.iter().map(|s| s.order_ids.join(",")).collect();
        assert_eq!(ids, ["rich", "full"]);
        assert!(frontier.iter().all(|s| s.total_payout.cents() > 0));
    }

    #[rstest]
    fn frontier_is_truncated_after_filtering(rich_or_full: (Truck, Vec<Order>)) {
        let (truck, orders) = rich_or_full;
        let frontier = LoadOptimizer::default()
            .pareto_solutions(&truck, &orders, 1)
            .expect("pareto");
        let ids: Vec<String> = frontier.iter().map(|s| s.order_ids.join(",")).collect();
        assert_eq!(ids, ["rich"]);
    }

    #[rstest]
    fn single_load_frontier_collapses_duplicates() {
        let truck = Truck::new("T1", 44_000, 3_000);
        let orders = vec![
            order("O1", 250_000, 18_000, 1_200),
            order("O2", 180_000, 12_000, 900),
        ];
        let frontier = LoadOptimizer::default()
            .pareto_solutions(&truck, &orders, 5)
            .expect("pareto");
        assert_eq!(frontier.len(), 1);
    }
}
