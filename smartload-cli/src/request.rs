//! Wire format for optimisation requests and its validation.
//!
//! Requests arrive as loosely typed JSON: numbers are signed so that negative
//! or oversized values surface as field-level validation errors rather than
//! opaque decoder failures. [`OptimizeRequest::into_domain`] checks every
//! bound and converts the payload into core types.

use std::collections::HashSet;
use std::io::BufReader;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use smartload_core::{
    Algorithm, Money, Objective, OptimizationConfig, Order, ParseAlgorithmError,
    ParseObjectiveError, Truck,
};
use thiserror::Error;
use time::Date;
use time::macros::format_description;

use crate::CliError;
use crate::fs::open_utf8_file;

/// Largest accepted truck weight capacity in pounds.
pub const MAX_TRUCK_WEIGHT: i64 = 1_000_000;
/// Largest accepted truck volume capacity in cubic feet.
pub const MAX_TRUCK_VOLUME: i64 = 100_000;
/// Largest number of orders in one request.
pub const MAX_ORDERS: usize = 22;
/// Longest accepted order identifier.
pub const MAX_ORDER_ID_LEN: usize = 100;
/// Largest accepted payout in cents.
pub const MAX_PAYOUT_CENTS: i64 = 100_000_000_000;
/// Largest accepted order weight in pounds.
pub const MAX_ORDER_WEIGHT: i64 = 1_000_000;
/// Largest accepted order volume in cubic feet.
pub const MAX_ORDER_VOLUME: i64 = 100_000;
/// Longest accepted origin or destination.
pub const MAX_LOCATION_LEN: usize = 200;

/// Truck section of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruckPayload {
    /// Truck identifier.
    pub id: String,
    /// Weight capacity in pounds.
    pub max_weight_lbs: i64,
    /// Volume capacity in cubic feet.
    pub max_volume_cuft: i64,
}

/// One order in a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    /// Order identifier.
    pub id: String,
    /// Payout in cents.
    pub payout_cents: i64,
    /// Weight in pounds.
    pub weight_lbs: i64,
    /// Volume in cubic feet.
    pub volume_cuft: i64,
    /// Pickup location.
    pub origin: String,
    /// Delivery location.
    pub destination: String,
    /// Pickup day as `YYYY-MM-DD`.
    pub pickup_date: String,
    /// Delivery day as `YYYY-MM-DD`.
    pub delivery_date: String,
    /// Hazardous material flag.
    #[serde(default)]
    pub is_hazmat: bool,
}

/// Optional optimisation settings in a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigPayload {
    /// `revenue`, `utilization` or `balanced`; empty means `revenue`.
    pub objective: String,
    /// Explicit payout weight in `[0, 1]`.
    pub revenue_weight: f64,
    /// Explicit utilisation weight in `[0, 1]`.
    pub utilization_weight: f64,
    /// `dp`, `backtracking`, `greedy` or `auto`; empty means `auto`.
    pub algorithm: String,
}

/// A complete optimisation request as read from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// The truck to load.
    pub truck: TruckPayload,
    /// Candidate orders.
    pub orders: Vec<OrderPayload>,
    /// Optional objective and algorithm settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization_config: Option<ConfigPayload>,
}

/// A request converted into core types.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    /// The truck to load.
    pub truck: Truck,
    /// Candidate orders in request order.
    pub orders: Vec<Order>,
    /// Settings, when the request carried any.
    pub config: Option<OptimizationConfig>,
}

/// Reasons a request payload is rejected.
#[derive(Debug, Error)]
pub enum RequestValidationError {
    /// The truck id is empty.
    #[error("truck id is required")]
    MissingTruckId,
    /// The truck weight capacity is outside `(0, 1_000_000]`.
    #[error("truck max_weight_lbs must be between 1 and {MAX_TRUCK_WEIGHT} (got {value})")]
    TruckWeightOutOfRange {
        /// Supplied value.
        value: i64,
    },
    /// The truck volume capacity is outside `(0, 100_000]`.
    #[error("truck max_volume_cuft must be between 1 and {MAX_TRUCK_VOLUME} (got {value})")]
    TruckVolumeOutOfRange {
        /// Supplied value.
        value: i64,
    },
    /// The order list is empty.
    #[error("at least one order is required")]
    NoOrders,
    /// More orders than one request may carry.
    #[error("at most {MAX_ORDERS} orders are allowed (got {count})")]
    TooManyOrders {
        /// Supplied count.
        count: usize,
    },
    /// An order id is empty.
    #[error("order {index} has an empty id")]
    EmptyOrderId {
        /// Position in the order list.
        index: usize,
    },
    /// An order id is too long.
    #[error("order id {id:?} exceeds {MAX_ORDER_ID_LEN} characters")]
    OrderIdTooLong {
        /// Offending id.
        id: String,
    },
    /// Two orders share an id.
    #[error("duplicate order id {id:?}")]
    DuplicateOrderId {
        /// Repeated id.
        id: String,
    },
    /// A numeric order field is out of range.
    #[error("order {id:?}: {field} must be between 1 and {max} (got {value})")]
    OrderValueOutOfRange {
        /// Order id.
        id: String,
        /// Wire field name.
        field: &'static str,
        /// Supplied value.
        value: i64,
        /// Upper bound.
        max: i64,
    },
    /// An origin or destination is empty.
    #[error("order {id:?}: {field} is required")]
    MissingLocation {
        /// Order id.
        id: String,
        /// Wire field name.
        field: &'static str,
    },
    /// An origin or destination is too long.
    #[error("order {id:?}: {field} exceeds {MAX_LOCATION_LEN} characters")]
    LocationTooLong {
        /// Order id.
        id: String,
        /// Wire field name.
        field: &'static str,
    },
    /// A date is not `YYYY-MM-DD`.
    #[error("order {id:?}: {field} must be formatted as YYYY-MM-DD")]
    InvalidDate {
        /// Order id.
        id: String,
        /// Wire field name.
        field: &'static str,
        /// Parser failure.
        #[source]
        source: time::error::Parse,
    },
    /// Delivery is scheduled before pickup.
    #[error("order {id:?}: delivery_date precedes pickup_date")]
    DeliveryBeforePickup {
        /// Order id.
        id: String,
    },
    /// The objective name is unknown.
    #[error(transparent)]
    InvalidObjective(#[from] ParseObjectiveError),
    /// The algorithm name is unknown.
    #[error(transparent)]
    InvalidAlgorithm(#[from] ParseAlgorithmError),
    /// A configured weight is outside `[0, 1]`.
    #[error("{field} must be between 0 and 1 (got {value})")]
    WeightOutOfRange {
        /// Wire field name.
        field: &'static str,
        /// Supplied value.
        value: f64,
    },
}

impl OptimizeRequest {
    /// Validate every field and convert into core types.
    ///
    /// # Errors
    /// Returns the first [`RequestValidationError`] encountered, checking the
    /// truck, then the order list, then each order, then the configuration.
    pub fn into_domain(self) -> Result<ValidatedRequest, RequestValidationError> {
        let truck = self.truck.into_domain()?;
        if self.orders.is_empty() {
            return Err(RequestValidationError::NoOrders);
        }
        if self.orders.len() > MAX_ORDERS {
            return Err(RequestValidationError::TooManyOrders {
                count: self.orders.len(),
            });
        }

        let mut seen = HashSet::with_capacity(self.orders.len());
        let mut orders = Vec::with_capacity(self.orders.len());
        for (index, payload) in self.orders.into_iter().enumerate() {
            if !seen.insert(payload.id.clone()) {
                return Err(RequestValidationError::DuplicateOrderId { id: payload.id });
            }
            orders.push(payload.into_domain(index)?);
        }

        let config = self
            .optimization_config
            .map(ConfigPayload::into_domain)
            .transpose()?;
        Ok(ValidatedRequest {
            truck,
            orders,
            config,
        })
    }
}

impl TruckPayload {
    fn into_domain(self) -> Result<Truck, RequestValidationError> {
        if self.id.is_empty() {
            return Err(RequestValidationError::MissingTruckId);
        }
        let max_weight = bounded(self.max_weight_lbs, MAX_TRUCK_WEIGHT).ok_or(
            RequestValidationError::TruckWeightOutOfRange {
                value: self.max_weight_lbs,
            },
        )?;
        let max_volume = bounded(self.max_volume_cuft, MAX_TRUCK_VOLUME).ok_or(
            RequestValidationError::TruckVolumeOutOfRange {
                value: self.max_volume_cuft,
            },
        )?;
        Ok(Truck::new(self.id, max_weight, max_volume))
    }
}

impl OrderPayload {
    fn into_domain(self, index: usize) -> Result<Order, RequestValidationError> {
        if self.id.is_empty() {
            return Err(RequestValidationError::EmptyOrderId { index });
        }
        if self.id.chars().count() > MAX_ORDER_ID_LEN {
            return Err(RequestValidationError::OrderIdTooLong { id: self.id });
        }
        if !(1..=MAX_PAYOUT_CENTS).contains(&self.payout_cents) {
            return Err(self.out_of_range("payout_cents", self.payout_cents, MAX_PAYOUT_CENTS));
        }
        let weight = bounded(self.weight_lbs, MAX_ORDER_WEIGHT)
            .ok_or_else(|| self.out_of_range("weight_lbs", self.weight_lbs, MAX_ORDER_WEIGHT))?;
        let volume = bounded(self.volume_cuft, MAX_ORDER_VOLUME)
            .ok_or_else(|| self.out_of_range("volume_cuft", self.volume_cuft, MAX_ORDER_VOLUME))?;
        self.check_location("origin", &self.origin)?;
        self.check_location("destination", &self.destination)?;
        let pickup_date = self.parse_date("pickup_date", &self.pickup_date)?;
        let delivery_date = self.parse_date("delivery_date", &self.delivery_date)?;
        if delivery_date < pickup_date {
            return Err(RequestValidationError::DeliveryBeforePickup { id: self.id });
        }

        Ok(Order {
            id: self.id,
            payout: Money::from_cents(self.payout_cents),
            weight,
            volume,
            origin: self.origin,
            destination: self.destination,
            pickup_date,
            delivery_date,
            hazmat: self.is_hazmat,
        })
    }

    fn out_of_range(&self, field: &'static str, value: i64, max: i64) -> RequestValidationError {
        RequestValidationError::OrderValueOutOfRange {
            id: self.id.clone(),
            field,
            value,
            max,
        }
    }

    fn check_location(&self, field: &'static str, value: &str) -> Result<(), RequestValidationError> {
        if value.is_empty() {
            return Err(RequestValidationError::MissingLocation {
                id: self.id.clone(),
                field,
            });
        }
        if value.chars().count() > MAX_LOCATION_LEN {
            return Err(RequestValidationError::LocationTooLong {
                id: self.id.clone(),
                field,
            });
        }
        Ok(())
    }

    fn parse_date(&self, field: &'static str, value: &str) -> Result<Date, RequestValidationError> {
        Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|source| {
            RequestValidationError::InvalidDate {
                id: self.id.clone(),
                field,
                source,
            }
        })
    }
}

impl ConfigPayload {
    fn into_domain(self) -> Result<OptimizationConfig, RequestValidationError> {
        let objective = if self.objective.is_empty() {
            Objective::default()
        } else {
            self.objective.parse()?
        };
        let algorithm = if self.algorithm.is_empty() {
            Algorithm::default()
        } else {
            self.algorithm.parse()?
        };
        check_weight("revenue_weight", self.revenue_weight)?;
        check_weight("utilization_weight", self.utilization_weight)?;
        Ok(OptimizationConfig::new(objective)
            .with_algorithm(algorithm)
            .with_weights(self.revenue_weight, self.utilization_weight))
    }
}

fn check_weight(field: &'static str, value: f64) -> Result<(), RequestValidationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RequestValidationError::WeightOutOfRange { field, value })
    }
}

/// `value` as `u32` when it lies in `1..=max`.
fn bounded(value: i64, max: i64) -> Option<u32> {
    if (1..=max).contains(&value) {
        u32::try_from(value).ok()
    } else {
        None
    }
}

/// Loads a JSON-encoded [`OptimizeRequest`] from disk.
pub(crate) fn load_request(path: &Utf8Path) -> Result<OptimizeRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads, validates and converts the request at `path`.
pub(crate) fn load_validated_request(path: &Utf8Path) -> Result<ValidatedRequest, CliError> {
    load_request(path)?
        .into_domain()
        .map_err(|source| CliError::InvalidRequest {
            path: path.to_path_buf(),
            source,
        })
}
