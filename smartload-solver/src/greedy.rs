//! Single-pass heuristic ranked by payout density.
//!
//! Orders are ranked by payout per pound, highest first, and accepted
//! whenever they still fit and are compatible with everything accepted so
//! far. Fast and size-unbounded, but not optimal: a dense order can block a
//! better-paying pair.

use std::cmp::Ordering;
use std::time::Instant;

use log::debug;
use smartload_core::{
    Algorithm, ConstraintChecker, OptimizationResult, Order, Truck, filter_feasible_orders,
};

/// Compare `payout / weight` of two orders without floating point.
///
/// Zero-weight orders rank above every weighted order with positive payout.
fn density_cmp(a: &Order, b: &Order) -> Ordering {
    let lhs = i128::from(a.payout.cents()) * i128::from(b.weight);
    let rhs = i128::from(b.payout.cents()) * i128::from(a.weight);
    lhs.cmp(&rhs)
}

/// Rank feasible orders by descending density and accept greedily.
///
/// Equal densities keep their input order.
#[must_use]
pub fn solve(checker: &ConstraintChecker, truck: &Truck, orders: &[Order]) -> OptimizationResult {
    let started_at = Instant::now();
    let mut ranked = filter_feasible_orders(truck, orders);
    ranked.sort_by(|a, b| density_cmp(b, a));
    debug!("greedy pass over {} orders", ranked.len());

    let mut accepted: Vec<&Order> = Vec::new();
    let mut weight = 0_u64;
    let mut volume = 0_u64;
    for order in ranked {
        if !checker.can_fit(truck, weight, volume, order) {
            continue;
        }
        if !accepted
            .iter()
            .all(|selected| checker.can_combine(selected, order))
        {
            continue;
        }
        weight = weight.saturating_add(u64::from(order.weight));
        volume = volume.saturating_add(u64::from(order.volume));
        accepted.push(order);
    }

    OptimizationResult::from_orders(
        accepted.into_iter().cloned().collect(),
        Algorithm::Greedy,
        started_at.elapsed(),
    )
}
