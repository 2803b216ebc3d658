//! Closed set of solving strategies and their dispatch.

use log::debug;
use smartload_core::{Algorithm, ConstraintChecker, OptimizationResult, Order, Truck};

use crate::{MAX_EXACT_ORDERS, SolveError, backtracking, dp, greedy};

/// Which solver handles a request.
///
/// [`Strategy::Auto`] picks the exact bitmask solver for inputs of at most
/// [`MAX_EXACT_ORDERS`] orders and the greedy heuristic beyond that. The
/// threshold applies to the count passed in, before feasibility filtering.
///
/// # Examples
/// ```
/// use smartload_solver::Strategy;
///
/// assert_eq!(Strategy::Auto.resolve(22), Strategy::ExactDp);
/// assert_eq!(Strategy::Auto.resolve(23), Strategy::Heuristic);
/// assert_eq!(Strategy::ExactBacktracking.resolve(23), Strategy::ExactBacktracking);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Subset dynamic programming over bitmasks.
    ExactDp,
    /// Branch-and-bound include/exclude search.
    ExactBacktracking,
    /// Density-ranked single pass.
    Heuristic,
    /// Size-based choice between [`Strategy::ExactDp`] and
    /// [`Strategy::Heuristic`].
    #[default]
    Auto,
}

impl Strategy {
    /// The concrete strategy used for `order_count` orders.
    #[must_use]
    pub const fn resolve(self, order_count: usize) -> Self {
        match self {
            Self::Auto if order_count <= MAX_EXACT_ORDERS => Self::ExactDp,
            Self::Auto => Self::Heuristic,
            concrete => concrete,
        }
    }

    /// Select the best load of `orders` for `truck`.
    ///
    /// # Errors
    /// Propagates [`SolveError::TooManyOrders`] when an exact strategy is
    /// requested explicitly for an oversized input.
    pub fn solve(
        self,
        checker: &ConstraintChecker,
        truck: &Truck,
        orders: &[Order],
    ) -> Result<OptimizationResult, SolveError> {
        let concrete = self.resolve(orders.len());
        if self == Self::Auto {
            debug!("auto strategy chose {concrete:?} for {} orders", orders.len());
        }
        match concrete {
            Self::ExactDp | Self::Auto => dp::solve(checker, truck, orders),
            Self::ExactBacktracking => backtracking::solve(checker, truck, orders),
            Self::Heuristic => Ok(greedy::solve(checker, truck, orders)),
        }
    }
}

impl From<Algorithm> for Strategy {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Dp => Self::ExactDp,
            Algorithm::Backtracking => Self::ExactBacktracking,
            Algorithm::Greedy => Self::Heuristic,
            Algorithm::Auto => Self::Auto,
        }
    }
}
