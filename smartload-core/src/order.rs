//! Shipment orders and their route keys.

use std::fmt;

use time::Date;

use crate::Money;

/// A shipment offered to the truck.
///
/// Orders are immutable for the duration of a solve. Routes are opaque:
/// two orders share a route only when their origin and destination strings
/// are identical.
///
/// # Examples
/// ```
/// use smartload_core::{Money, Order};
/// use time::macros::date;
///
/// let order = Order {
///     id: "O1".to_owned(),
///     payout: Money::from_cents(250_000),
///     weight: 18_000,
///     volume: 1_200,
///     origin: "Los Angeles, CA".to_owned(),
///     destination: "Dallas, TX".to_owned(),
///     pickup_date: date!(2025 - 01 - 10),
///     delivery_date: date!(2025 - 01 - 12),
///     hazmat: false,
/// };
/// assert_eq!(order.route_key().to_string(), "Los Angeles, CA->Dallas, TX");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Unique identifier within one request.
    pub id: String,
    /// Payout in minor currency units.
    pub payout: Money,
    /// Weight in pounds.
    pub weight: u32,
    /// Volume in cubic feet.
    pub volume: u32,
    /// Pickup location.
    pub origin: String,
    /// Delivery location.
    pub destination: String,
    /// Calendar day the load is collected.
    pub pickup_date: Date,
    /// Calendar day the load is delivered.
    pub delivery_date: Date,
    /// Whether the load is hazardous material.
    pub hazmat: bool,
}

impl Order {
    /// The origin/destination pairing used for compatibility checks.
    #[must_use]
    pub fn route_key(&self) -> RouteKey<'_> {
        RouteKey {
            origin: &self.origin,
            destination: &self.destination,
        }
    }

    /// Replace the route.
    #[must_use]
    pub fn with_route(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.origin = origin.into();
        self.destination = destination.into();
        self
    }

    /// Replace the pickup and delivery dates.
    #[must_use]
    pub const fn with_dates(mut self, pickup_date: Date, delivery_date: Date) -> Self {
        self.pickup_date = pickup_date;
        self.delivery_date = delivery_date;
        self
    }

    /// Mark the order as hazardous (or not).
    #[must_use]
    pub const fn with_hazmat(mut self, hazmat: bool) -> Self {
        self.hazmat = hazmat;
        self
    }

    /// Replace the payout.
    #[must_use]
    pub const fn with_payout(mut self, payout: Money) -> Self {
        self.payout = payout;
        self
    }

    /// Whether the order fits in the given remaining capacity.
    #[must_use]
    pub const fn fits_in(&self, available_weight: u64, available_volume: u64) -> bool {
        (self.weight as u64) <= available_weight && (self.volume as u64) <= available_volume
    }
}

/// Borrowed origin/destination pair identifying a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteKey<'a> {
    /// Pickup location.
    pub origin: &'a str,
    /// Delivery location.
    pub destination: &'a str,
}

impl fmt::Display for RouteKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::order;
    use rstest::rstest;

    #[rstest]
    fn route_keys_compare_by_exact_strings() {
        let a = order("A", 100, 10, 10).with_route("LA", "DAL");
        let b = order("B", 100, 10, 10).with_route("LA", "DAL");
        let c = order("C", 100, 10, 10).with_route("la", "DAL");
        assert_eq!(a.route_key(), b.route_key());
        assert_ne!(a.route_key(), c.route_key());
    }

    #[rstest]
    #[case(100, 50, true)]
    #[case(99, 50, false)]
    #[case(100, 49, false)]
    fn fits_in_checks_both_dimensions(
        #[case] weight: u64,
        #[case] volume: u64,
        #[case] expected: bool,
    ) {
        let candidate = order("A", 1, 100, 50);
        assert_eq!(candidate.fits_in(weight, volume), expected);
    }
}
