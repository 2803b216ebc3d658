//! Order fixtures shared by unit, property and behaviour tests.
//!
//! Available under `cfg(test)` and the `test-support` feature.

use time::Date;
use time::macros::date;

use crate::{Money, Order};

/// Origin used by [`order`] unless overridden.
pub const DEFAULT_ORIGIN: &str = "Los Angeles, CA";
/// Destination used by [`order`] unless overridden.
pub const DEFAULT_DESTINATION: &str = "Dallas, TX";
/// Pickup date used by [`order`] unless overridden.
pub const DEFAULT_PICKUP: Date = date!(2025 - 01 - 10);
/// Delivery date used by [`order`] unless overridden.
pub const DEFAULT_DELIVERY: Date = date!(2025 - 01 - 12);

/// A non-hazmat order on the default route and dates.
///
/// Chain [`Order::with_route`], [`Order::with_hazmat`] or
/// [`Order::with_dates`] to vary it.
#[must_use]
pub fn order(id: &str, payout_cents: i64, weight: u32, volume: u32) -> Order {
    Order {
        id: id.to_owned(),
        payout: Money::from_cents(payout_cents),
        weight,
        volume,
        origin: DEFAULT_ORIGIN.to_owned(),
        destination: DEFAULT_DESTINATION.to_owned(),
        pickup_date: DEFAULT_PICKUP,
        delivery_date: DEFAULT_DELIVERY,
        hazmat: false,
    }
}
