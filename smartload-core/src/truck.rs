//! The vehicle being loaded.

use crate::Order;

/// A truck with fixed weight and volume capacity.
///
/// # Examples
/// ```
/// use smartload_core::Truck;
///
/// let truck = Truck::new("T1", 44_000, 3_000);
/// assert_eq!(truck.max_weight, 44_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Truck {
    /// Identifier echoed back in responses.
    pub id: String,
    /// Maximum payload weight in pounds.
    pub max_weight: u32,
    /// Maximum payload volume in cubic feet.
    pub max_volume: u32,
}

impl Truck {
    /// Construct a truck.
    pub fn new(id: impl Into<String>, max_weight: u32, max_volume: u32) -> Self {
        Self {
            id: id.into(),
            max_weight,
            max_volume,
        }
    }

    /// Whether the order fits in an otherwise empty truck.
    #[must_use]
    pub const fn can_carry(&self, order: &Order) -> bool {
        order.weight <= self.max_weight && order.volume <= self.max_volume
    }
}
