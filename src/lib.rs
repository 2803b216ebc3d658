//! Facade crate for the SmartLoad truck-load optimiser.
//!
//! This crate re-exports the core domain types and, behind the `solver`
//! feature, the load optimiser and its solvers.

#![forbid(unsafe_code)]

pub use smartload_core::{
    Algorithm, ConstraintChecker, Money, Objective, ObjectiveWeights, OptimizationConfig,
    OptimizationResult, Order, PickupWindow, Truck,
};

#[cfg(feature = "solver")]
pub use smartload_solver::{
    LoadOptimizer, MAX_EXACT_ORDERS, ParetoSolution, SolveError, Strategy,
};
