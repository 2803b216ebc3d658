//! Exact include/exclude search with a payout bound.
//!
//! Visits orders in input order, branching on whether each one joins the
//! load. A branch is abandoned once the payout still obtainable from the
//! remaining orders cannot beat the incumbent. The incumbent lives in a
//! call-local accumulator threaded through the recursion.

use std::time::Instant;

use log::{debug, warn};
use smartload_core::{
    Algorithm, ConstraintChecker, OptimizationResult, Order, Truck, filter_feasible_orders,
};

use crate::{MAX_EXACT_ORDERS, SolveError};

#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    payout: i64,
    weight: u64,
    volume: u64,
}

impl Totals {
    fn add(self, order: &Order) -> Self {
        Self {
            payout: self.payout.saturating_add(order.payout.cents()),
            weight: self.weight.saturating_add(u64::from(order.weight)),
            volume: self.volume.saturating_add(u64::from(order.volume)),
        }
    }
}

/// Best selection seen so far.
struct Incumbent<'a> {
    payout: i64,
    selection: Vec<&'a Order>,
}

/// Read-only search context.
struct Search<'s, 'a> {
    checker: &'s ConstraintChecker,
    truck: &'s Truck,
    orders: &'s [&'a Order],
    /// `remaining_payout[i]` is the payout sum of `orders[i..]`.
    remaining_payout: Vec<i64>,
}

impl<'s, 'a> Search<'s, 'a> {
    fn new(checker: &'s ConstraintChecker, truck: &'s Truck, orders: &'s [&'a Order]) -> Self {
        let mut remaining_payout = vec![0_i64; orders.len().saturating_add(1)];
        for (index, order) in orders.iter().enumerate().rev() {
            let tail = remaining_payout
                .get(index.saturating_add(1))
                .copied()
                .unwrap_or_default();
            if let Some(slot) = remaining_payout.get_mut(index) {
                *slot = tail.saturating_add(order.payout.cents());
            }
        }
        Self {
            checker,
            truck,
            orders,
            remaining_payout,
        }
    }

    fn explore(
        &self,
        index: usize,
        totals: Totals,
        current: &mut Vec<&'a Order>,
        best: &mut Incumbent<'a>,
    ) {
        if totals.payout > best.payout {
            best.payout = totals.payout;
            best.selection.clone_from(current);
        }
        let Some(&order) = self.orders.get(index) else {
            return;
        };
        let bound = self
            .remaining_payout
            .get(index)
            .copied()
            .unwrap_or_default();
        if totals.payout.saturating_add(bound) <= best.payout {
            return;
        }

        let next = index.saturating_add(1);
        if self.admits(totals, current, order) {
            current.push(order);
            self.explore(next, totals.add(order), current, best);
            current.pop();
        }
        self.explore(next, totals, current, best);
    }

    fn admits(&self, totals: Totals, current: &[&Order], order: &Order) -> bool {
        self.checker
            .can_fit(self.truck, totals.weight, totals.volume, order)
            && current
                .iter()
                .all(|selected| self.checker.can_combine(selected, order))
    }
}

/// Select the highest-payout compatible subset by bounded search.
///
/// Agrees with [`dp::solve`](crate::dp::solve) on payout for every input,
/// though tied optima may differ in the orders chosen.
///
/// # Errors
/// Returns [`SolveError::TooManyOrders`] when more than
/// [`MAX_EXACT_ORDERS`] orders remain after filtering.
pub fn solve(
    checker: &ConstraintChecker,
    truck: &Truck,
    orders: &[Order],
) -> Result<OptimizationResult, SolveError> {
    let started_at = Instant::now();
    let feasible = filter_feasible_orders(truck, orders);
    if feasible.len() > MAX_EXACT_ORDERS {
        warn!(
            "refusing exact backtracking over {} orders (limit {MAX_EXACT_ORDERS})",
            feasible.len()
        );
        return Err(SolveError::TooManyOrders {
            count: feasible.len(),
            limit: MAX_EXACT_ORDERS,
        });
    }

    debug!("backtracking over {} orders", feasible.len());
    let search = Search::new(checker, truck, &feasible);
    let mut best = Incumbent {
        payout: 0,
        selection: Vec::new(),
    };
    let mut current = Vec::with_capacity(feasible.len());
    search.explore(0, Totals::default(), &mut current, &mut best);

    let selected = best.selection.into_iter().cloned().collect();
    Ok(OptimizationResult::from_orders(
        selected,
        Algorithm::Backtracking,
        started_at.elapsed(),
    ))
}
