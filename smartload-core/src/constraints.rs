//! Load compatibility and capacity predicates.
//!
//! A single [`ConstraintChecker`] covers every rule that decides whether two
//! orders may share a truck. Strictness is configuration: the default checker
//! matches routes, isolates hazmat and ignores pickup dates, while
//! [`ConstraintChecker::strict`] additionally requires pickups within one day
//! of each other.
//!
//! Capacity filtering does not depend on the checker's rules and is exposed
//! as free functions.

use std::collections::BTreeMap;

use crate::{Order, RouteKey, Truck};

/// Tolerance on the gap between two orders' pickup dates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickupWindow {
    /// Pickup dates never prevent a combination.
    #[default]
    Unbounded,
    /// Pickups must be at most this many days apart.
    WithinDays(u32),
}

impl PickupWindow {
    fn admits(self, a: &Order, b: &Order) -> bool {
        match self {
            Self::Unbounded => true,
            Self::WithinDays(days) => {
                let gap = (a.pickup_date - b.pickup_date).whole_days().unsigned_abs();
                gap <= u64::from(days)
            }
        }
    }
}

/// Pairwise compatibility and capacity rules.
///
/// # Examples
/// ```
/// use smartload_core::{ConstraintChecker, PickupWindow};
///
/// let strict = ConstraintChecker::strict();
/// assert_eq!(strict.pickup_window(), PickupWindow::WithinDays(1));
/// assert_eq!(ConstraintChecker::default().pickup_window(), PickupWindow::Unbounded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintChecker {
    match_routes: bool,
    exclusive_hazmat: bool,
    pickup_window: PickupWindow,
}

impl Default for ConstraintChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintChecker {
    /// Route matching and hazmat isolation with no pickup-date rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            match_routes: true,
            exclusive_hazmat: true,
            pickup_window: PickupWindow::Unbounded,
        }
    }

    /// The default rules plus a one-day pickup window.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new().with_pickup_window(PickupWindow::WithinDays(1))
    }

    /// Replace the pickup-date tolerance.
    #[must_use]
    pub const fn with_pickup_window(mut self, pickup_window: PickupWindow) -> Self {
        self.pickup_window = pickup_window;
        self
    }

    /// Enable or disable the same-route requirement.
    #[must_use]
    pub const fn with_route_matching(mut self, enabled: bool) -> Self {
        self.match_routes = enabled;
        self
    }

    /// Enable or disable hazmat isolation.
    #[must_use]
    pub const fn with_hazmat_isolation(mut self, enabled: bool) -> Self {
        self.exclusive_hazmat = enabled;
        self
    }

    /// The configured pickup-date tolerance.
    #[must_use]
    pub const fn pickup_window(&self) -> PickupWindow {
        self.pickup_window
    }

    /// Whether `a` and `b` may travel in the same load.
    ///
    /// # Examples
    /// ```
    /// use smartload_core::{ConstraintChecker, Money, Order};
    /// use time::macros::date;
    ///
    /// let dry = Order {
    ///     id: "A".to_owned(),
    ///     payout: Money::from_cents(100),
    ///     weight: 10,
    ///     volume: 10,
    ///     origin: "Los Angeles, CA".to_owned(),
    ///     destination: "Dallas, TX".to_owned(),
    ///     pickup_date: date!(2025 - 01 - 10),
    ///     delivery_date: date!(2025 - 01 - 12),
    ///     hazmat: false,
    /// };
    /// let hazmat = dry.clone().with_hazmat(true);
    /// let checker = ConstraintChecker::default();
    /// assert!(checker.can_combine(&dry, &dry));
    /// assert!(!checker.can_combine(&dry, &hazmat));
    /// ```
    #[must_use]
    pub fn can_combine(&self, a: &Order, b: &Order) -> bool {
        if self.match_routes && a.route_key() != b.route_key() {
            return false;
        }
        if self.exclusive_hazmat && a.hazmat != b.hazmat {
            return false;
        }
        self.pickup_window.admits(a, b)
    }

    /// Whether `order` fits on top of the current load.
    #[must_use]
    pub fn can_fit(
        &self,
        truck: &Truck,
        current_weight: u64,
        current_volume: u64,
        order: &Order,
    ) -> bool {
        let weight = current_weight.saturating_add(u64::from(order.weight));
        let volume = current_volume.saturating_add(u64::from(order.volume));
        weight <= u64::from(truck.max_weight) && volume <= u64::from(truck.max_volume)
    }

    /// Whether every pair in `orders` is compatible.
    ///
    /// Quadratic; intended for assertions rather than the search itself.
    #[must_use]
    pub fn validate_order_set(&self, orders: &[Order]) -> bool {
        orders.iter().enumerate().all(|(i, first)| {
            orders
                .iter()
                .skip(i.saturating_add(1))
                .all(|second| self.can_combine(first, second))
        })
    }
}

/// Drop orders that cannot fit in the truck on their own.
///
/// # Examples
/// ```
/// use smartload_core::{Money, Order, Truck, filter_feasible_orders};
/// use time::macros::date;
///
/// # fn order(id: &str, weight: u32) -> Order {
/// #     Order {
/// #         id: id.to_owned(),
/// #         payout: Money::from_cents(100),
/// #         weight,
/// #         volume: 10,
/// #         origin: "Los Angeles, CA".to_owned(),
/// #         destination: "Dallas, TX".to_owned(),
/// #         pickup_date: date!(2025 - 01 - 10),
/// #         delivery_date: date!(2025 - 01 - 12),
/// #         hazmat: false,
/// #     }
/// # }
/// let truck = Truck::new("T1", 44_000, 3_000);
/// let orders = vec![order("A", 50_000), order("B", 1_000)];
/// let feasible = filter_feasible_orders(&truck, &orders);
/// assert_eq!(feasible.len(), 1);
/// ```
#[must_use]
pub fn filter_feasible_orders<'a>(truck: &Truck, orders: &'a [Order]) -> Vec<&'a Order> {
    orders.iter().filter(|order| truck.can_carry(order)).collect()
}

/// Bucket orders by route key, preserving input order within each bucket.
#[must_use]
pub fn group_orders_by_route(orders: &[Order]) -> BTreeMap<RouteKey<'_>, Vec<&Order>> {
    let mut groups: BTreeMap<RouteKey<'_>, Vec<&Order>> = BTreeMap::new();
    for order in orders {
        groups.entry(order.route_key()).or_default().push(order);
    }
    groups
}

/// Split orders into `(hazmat, non_hazmat)`.
#[must_use]
pub fn separate_hazmat_orders(orders: &[Order]) -> (Vec<&Order>, Vec<&Order>) {
    orders.iter().partition(|order| order.hazmat)
}
