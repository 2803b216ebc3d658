//! Core domain types for the SmartLoad engine.
//!
//! The crate defines the inputs a load optimiser works on ([`Truck`],
//! [`Order`], [`OptimizationConfig`]), the [`ConstraintChecker`] deciding
//! which orders may share a load, and the [`OptimizationResult`] solvers
//! return. Inputs are assumed to be validated by the caller; nothing here
//! re-checks request bounds.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod constraints;
mod money;
mod order;
mod result;
mod truck;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use config::{
    Algorithm, Objective, ObjectiveWeights, OptimizationConfig, ParseAlgorithmError,
    ParseObjectiveError,
};
pub use constraints::{
    ConstraintChecker, PickupWindow, filter_feasible_orders, group_orders_by_route,
    separate_hazmat_orders,
};
pub use money::Money;
pub use order::{Order, RouteKey};
pub use result::{OptimizationResult, round_half_up, utilization_percent};
pub use truck::Truck;
