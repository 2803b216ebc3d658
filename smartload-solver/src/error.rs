//! Errors raised by the solvers.

use thiserror::Error;

/// Errors returned by [`Strategy::solve`](crate::Strategy::solve) and the
/// [`LoadOptimizer`](crate::LoadOptimizer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The exact bitmask solver was asked to handle more orders than its
    /// subset table can hold.
    #[error("exact solver accepts at most {limit} feasible orders (got {count})")]
    TooManyOrders {
        /// Feasible orders supplied.
        count: usize,
        /// Largest supported input.
        limit: usize,
    },
}
