//! Load selection solvers for SmartLoad.
//!
//! Three interchangeable algorithms choose which orders a truck should carry:
//! [`dp`] sweeps every subset exactly, [`backtracking`] reaches the same
//! optimum by bounded search, and [`greedy`] trades optimality for a single
//! density-ranked pass. [`Strategy`] is the closed set of choices, including
//! the size-based [`Strategy::Auto`].
//!
//! [`LoadOptimizer`] sits above the strategies. It filters infeasible orders,
//! applies weighted objectives by scalarising payouts, and samples a Pareto
//! frontier between payout and capacity utilisation.
//!
//! Everything is synchronous and allocation-per-call; no state survives a
//! solve.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod backtracking;
pub mod dp;
mod error;
pub mod greedy;
mod objective;
mod optimizer;
mod pareto;
mod strategy;

pub use dp::MAX_EXACT_ORDERS;
pub use error::SolveError;
pub use objective::{UTILIZATION_SCALE, scalarize_orders, scalarized_payout};
pub use optimizer::LoadOptimizer;
pub use pareto::{FRONTIER_WEIGHTS, ParetoSolution, non_dominated};
pub use strategy::Strategy;
