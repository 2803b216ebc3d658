//! Payout scalarisation for weighted objectives.
//!
//! A weighted objective is solved by temporarily replacing each order's
//! payout with a blend of its revenue and its share of truck capacity, then
//! running an ordinary payout-maximising strategy on the rewritten orders.

use smartload_core::{Money, ObjectiveWeights, Order, Truck};

/// Multiplier turning an average capacity fraction into minor units.
pub const UTILIZATION_SCALE: f64 = 10_000.0;

/// The substitute payout used while solving under `weights`.
///
/// `revenue * payout + utilization * avg_fraction * 10000`, where
/// `avg_fraction` averages the order's weight and volume shares of the truck.
/// The result is truncated toward zero.
///
/// # Examples
/// ```
/// use smartload_core::{Money, ObjectiveWeights, Order, Truck};
/// use smartload_solver::scalarized_payout;
/// use time::macros::date;
///
/// let truck = Truck::new("T1", 100, 100);
/// let order = Order {
///     id: "A".to_owned(),
///     payout: Money::from_cents(1_000),
///     weight: 50,
///     volume: 50,
///     origin: "Los Angeles, CA".to_owned(),
///     destination: "Dallas, TX".to_owned(),
///     pickup_date: date!(2025 - 01 - 10),
///     delivery_date: date!(2025 - 01 - 12),
///     hazmat: false,
/// };
/// let payout = scalarized_payout(&truck, &order, ObjectiveWeights::new(0.5, 0.5));
/// assert_eq!(payout, Money::from_cents(3_000));
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "scalarisation blends revenue and capacity share in floating point and truncates to cents"
)]
pub fn scalarized_payout(truck: &Truck, order: &Order, weights: ObjectiveWeights) -> Money {
    let weight_share = share(order.weight, truck.max_weight);
    let volume_share = share(order.volume, truck.max_volume);
    let utilization = (weight_share + volume_share) / 2.0;
    let score = weights.revenue * order.payout.cents() as f64
        + weights.utilization * utilization * UTILIZATION_SCALE;
    Money::from_cents(score as i64)
}

#[expect(
    clippy::float_arithmetic,
    reason = "capacity shares are fractional"
)]
fn share(amount: u32, capacity: u32) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    f64::from(amount) / f64::from(capacity)
}

/// Copies of `orders` with payouts replaced by [`scalarized_payout`].
#[must_use]
pub fn scalarize_orders(truck: &Truck, orders: &[Order], weights: ObjectiveWeights) -> Vec<Order> {
    orders
        .iter()
        .map(|order| {
            order
                .clone()
                .with_payout(scalarized_payout(truck, order, weights))
        })
        .collect()
}
