//! Exact subset dynamic programming over order bitmasks.
//!
//! Every subset of the feasible orders is identified by a bitmask. The solver
//! sweeps masks in increasing numeric order, so each subset is final before
//! any superset reads it, and extends reachable subsets one compatible order
//! at a time. The best subset is the highest payout over all reachable masks;
//! ties go to the lowest mask because writes only happen on strict
//! improvement.
//!
//! The table needs `2^n` entries, so inputs are capped at
//! [`MAX_EXACT_ORDERS`].

use std::time::Instant;

use log::{debug, warn};
use smartload_core::{
    Algorithm, ConstraintChecker, OptimizationResult, Order, Truck, filter_feasible_orders,
};

use crate::SolveError;

/// Largest number of feasible orders the bitmask table supports.
pub const MAX_EXACT_ORDERS: usize = 22;

/// Accumulated totals for one subset of orders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct State {
    mask: usize,
    payout: i64,
    weight: u32,
    volume: u32,
}

impl State {
    const fn include(self, index: usize, order: &Order) -> Self {
        Self {
            mask: self.mask | (1 << index),
            payout: self.payout.saturating_add(order.payout.cents()),
            weight: self.weight.saturating_add(order.weight),
            volume: self.volume.saturating_add(order.volume),
        }
    }

    const fn contains(self, index: usize) -> bool {
        self.mask & (1 << index) != 0
    }
}

/// Flat per-mask buffers, allocated per solve and dropped with it.
struct SubsetTable {
    payout: Vec<i64>,
    weight: Vec<u32>,
    volume: Vec<u32>,
    reachable: Vec<bool>,
}

impl SubsetTable {
    fn new(order_count: usize) -> Self {
        let size = 1_usize << order_count;
        let mut reachable = vec![false; size];
        if let Some(empty) = reachable.first_mut() {
            *empty = true;
        }
        Self {
            payout: vec![0; size],
            weight: vec![0; size],
            volume: vec![0; size],
            reachable,
        }
    }

    const fn len(&self) -> usize {
        self.reachable.len()
    }

    fn state(&self, mask: usize) -> Option<State> {
        if !self.reachable.get(mask).copied().unwrap_or(false) {
            return None;
        }
        Some(State {
            mask,
            payout: self.payout.get(mask).copied().unwrap_or_default(),
            weight: self.weight.get(mask).copied().unwrap_or_default(),
            volume: self.volume.get(mask).copied().unwrap_or_default(),
        })
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "candidate masks are built from in-range order bits"
    )]
    fn offer(&mut self, candidate: State) {
        let mask = candidate.mask;
        if self.reachable[mask] && candidate.payout <= self.payout[mask] {
            return;
        }
        self.payout[mask] = candidate.payout;
        self.weight[mask] = candidate.weight;
        self.volume[mask] = candidate.volume;
        self.reachable[mask] = true;
    }

    fn best(&self) -> State {
        (0..self.len())
            .filter_map(|mask| self.state(mask))
            .fold(State::default(), |best, state| {
                if state.payout > best.payout {
                    state
                } else {
                    best
                }
            })
    }
}

/// Bitmask of the orders each order cannot share a load with.
fn incompatibility_masks(checker: &ConstraintChecker, orders: &[&Order]) -> Vec<usize> {
    orders
        .iter()
        .enumerate()
        .map(|(i, order)| {
            orders
                .iter()
                .enumerate()
                .filter(|&(j, other)| i != j && !checker.can_combine(order, other))
                .fold(0, |mask, (j, _)| mask | (1 << j))
        })
        .collect()
}

fn sweep(
    checker: &ConstraintChecker,
    truck: &Truck,
    orders: &[&Order],
    incompatible: &[usize],
) -> State {
    let mut table = SubsetTable::new(orders.len());
    for mask in 0..table.len() {
        let Some(state) = table.state(mask) else {
            continue;
        };
        for (index, (order, conflicts)) in orders.iter().zip(incompatible).enumerate() {
            if state.contains(index) || mask & conflicts != 0 {
                continue;
            }
            if !checker.can_fit(
                truck,
                u64::from(state.weight),
                u64::from(state.volume),
                order,
            ) {
                continue;
            }
            table.offer(state.include(index, order));
        }
    }
    table.best()
}

/// Select the highest-payout compatible subset exactly.
///
/// Orders that cannot fit the empty truck are dropped first; the remaining
/// count must not exceed [`MAX_EXACT_ORDERS`].
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
    if feasible.is_empty() {
        return Ok(OptimizationResult::empty(
            Algorithm::Dp,
            started_at.elapsed(),
        ));
    }
    if feasible.len() > MAX_EXACT_ORDERS {
        warn!(
            "refusing exact DP over {} orders (limit {MAX_EXACT_ORDERS})",
            feasible.len()
        );
        return Err(SolveError::TooManyOrders {
            count: feasible.len(),
            limit: MAX_EXACT_ORDERS,
        });
    }

    debug!(
        "dp sweep over {} orders ({} subsets)",
        feasible.len(),
        1_usize << feasible.len()
    );
    let incompatible = incompatibility_masks(checker, &feasible);
    let best = sweep(checker, truck, &feasible, &incompatible);

    let selected = feasible
        .iter()
        .enumerate()
        .filter(|&(index, _)| best.contains(index))
        .map(|(_, order)| (*order).clone())
        .collect();
    let result = OptimizationResult::from_orders(selected, Algorithm::Dp, started_at.elapsed());
    debug_assert_eq!(result.total_payout.cents(), best.payout);
    Ok(result)
}
