//! Behavioural tests for `LoadOptimizer` using rstest-bdd.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use smartload_core::test_support::order;
use smartload_core::{
    Algorithm, Money, Objective, OptimizationConfig, OptimizationResult, Order, Truck,
};
use smartload_solver::{LoadOptimizer, MAX_EXACT_ORDERS, SolveError};

#[derive(Debug)]
struct OptimizerWorld {
    truck: RefCell<Truck>,
    orders: RefCell<Vec<Order>>,
    config: RefCell<Option<OptimizationConfig>>,
    outcome: RefCell<Option<Result<OptimizationResult, SolveError>>>,
}

impl OptimizerWorld {
    fn new() -> Self {
        Self {
            truck: RefCell::new(Truck::new("T1", 44_000, 3_000)),
            orders: RefCell::new(Vec::new()),
            config: RefCell::new(None),
            outcome: RefCell::new(None),
        }
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<OptimizationResult, SolveError> {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_result(&self) -> OptimizationResult {
        self.expect_outcome().expect("expected optimize success")
    }
}

#[fixture]
fn world() -> OptimizerWorld {
    OptimizerWorld::new()
}

#[given("a standard truck")]
fn given_standard_truck(world: &OptimizerWorld) {
    world.truck.replace(Truck::new("T1", 44_000, 3_000));
}

#[given("a small truck")]
fn given_small_truck(world: &OptimizerWorld) {
    world.truck.replace(Truck::new("T2", 100, 100));
}

#[given("two compatible orders on the same lane")]
fn given_two_compatible_orders(world: &OptimizerWorld) {
    world.orders.replace(vec![
        order("O1", 250_000, 18_000, 1_200),
        order("O2", 180_000, 12_000, 900),
    ]);
}

#[given("a single order heavier than the truck")]
fn given_oversized_order(world: &OptimizerWorld) {
    world
        .orders
        .replace(vec![order("heavy", 500_000, 50_000, 100)]);
}

#[given("a hazmat order and a better-paying dry order on the same lane")]
fn given_hazmat_mix(world: &OptimizerWorld) {
    world.orders.replace(vec![
        order("hazmat", 100_000, 1_000, 100).with_hazmat(true),
        order("dry", 150_000, 1_000, 100),
    ]);
}

#[given("twenty-three orders where greedy takes the bait")]
fn given_greedy_trap(world: &OptimizerWorld) {
    let mut orders = vec![
        order("half-a", 50, 50, 10),
        order("big", 60, 51, 10),
        order("half-b", 50, 50, 10),
    ];
    let fillers = MAX_EXACT_ORDERS.saturating_sub(orders.len()).saturating_add(1);
    orders.extend((0..fillers).map(|i| {
        order(&format!("filler-{i}"), 1, 10, 1).with_route("Dallas, TX", "Atlanta, GA")
    }));
    world.orders.replace(orders);
}

#[given("a rich order and a truck-filling order on different lanes")]
fn given_rich_or_full(world: &OptimizerWorld) {
    world.orders.replace(vec![
        order("rich", 1_000, 10, 10),
        order("full", 500, 90, 90).with_route("Dallas, TX", "Atlanta, GA"),
    ]);
}

#[given("a utilisation objective")]
fn given_utilisation_objective(world: &OptimizerWorld) {
    world
        .config
        .replace(Some(OptimizationConfig::new(Objective::Utilization)));
}

#[given("the DP algorithm is requested")]
fn given_dp_requested(world: &OptimizerWorld) {
    world
        .config
        .replace(Some(OptimizationConfig::default().with_algorithm(Algorithm::Dp)));
}

#[when("the load optimizer runs")]
fn when_optimizer_runs(world: &OptimizerWorld) {
    let truck = world.truck.borrow().clone();
    let orders = world.orders.borrow().clone();
    let config = *world.config.borrow();
    let outcome = LoadOptimizer::default().optimize(&truck, &orders, config.as_ref());
    world.outcome.replace(Some(outcome));
}

#[then("both orders are selected")]
fn then_both_selected(world: &OptimizerWorld) {
    assert_eq!(world.expect_result().selected_ids(), ["O1", "O2"]);
}

#[then("no orders are selected")]
fn then_none_selected(world: &OptimizerWorld) {
    let result = world.expect_result();
    assert!(result.is_empty());
    assert_eq!(result.total_weight, 0);
    assert_eq!(result.total_volume, 0);
}

#[then("only the dry order is selected")]
fn then_dry_selected(world: &OptimizerWorld) {
    assert_eq!(world.expect_result().selected_ids(), ["dry"]);
}

#[then("only the truck-filling order is selected")]
fn then_full_selected(world: &OptimizerWorld) {
    assert_eq!(world.expect_result().selected_ids(), ["full"]);
}

#[then("the greedy heuristic produced the load")]
fn then_greedy_used(world: &OptimizerWorld) {
    let result = world.expect_result();
    assert_eq!(result.algorithm, Algorithm::Greedy);
    assert_eq!(result.selected_ids(), ["big"]);
}

#[then("the payout is 430000 cents")]
fn then_payout_430000(world: &OptimizerWorld) {
    assert_eq!(world.expect_result().total_payout, Money::from_cents(430_000));
}

#[then("the payout is 0 cents")]
fn then_payout_zero(world: &OptimizerWorld) {
    assert_eq!(world.expect_result().total_payout, Money::ZERO);
}

#[then("the payout is 60 cents")]
fn then_payout_60(world: &OptimizerWorld) {
    assert_eq!(world.expect_result().total_payout, Money::from_cents(60));
}

#[then("the payout is 500 cents")]
fn then_payout_500(world: &OptimizerWorld) {
    assert_eq!(world.expect_result().total_payout, Money::from_cents(500));
}

#[then("the solve fails with too many orders")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_too_many_orders(world: &OptimizerWorld) {
    let err = world
        .expect_outcome()
        .expect_err("expected TooManyOrders error");
    assert!(matches!(
        err,
        SolveError::TooManyOrders {
            count: 23,
            limit: MAX_EXACT_ORDERS
        }
    ));
}

#[scenario(path = "tests/features/load_optimizer.feature", index = 0)]
fn compatible_pair(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/load_optimizer.feature", index = 1)]
fn oversized_order(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/load_optimizer.feature", index = 2)]
fn hazmat_isolation(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/load_optimizer.feature", index = 3)]
fn greedy_fallback(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/load_optimizer.feature", index = 4)]
fn utilisation_objective(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/load_optimizer.feature", index = 5)]
fn dp_refuses_oversized(world: OptimizerWorld) {
    let _ = world;
}
