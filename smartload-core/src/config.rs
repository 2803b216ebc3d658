//! Optimisation objectives and algorithm selection.
//!
//! An [`OptimizationConfig`] names what to optimise for and which solver to
//! run. Objective weights default from the objective when both are zero.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// What the caller wants to maximise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Objective {
    /// Total payout only.
    #[default]
    Revenue,
    /// Capacity utilisation only.
    Utilization,
    /// An even split between payout and utilisation.
    Balanced,
}

impl Objective {
    /// Return the objective as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Utilization => "utilization",
            Self::Balanced => "balanced",
        }
    }

    /// Weights used when the caller leaves both weights at zero.
    ///
    /// # Examples
    /// ```
    /// use smartload_core::{Objective, ObjectiveWeights};
    ///
    /// assert_eq!(
    ///     Objective::Balanced.default_weights(),
    ///     ObjectiveWeights::new(0.5, 0.5)
    /// );
    /// ```
    #[must_use]
    pub const fn default_weights(self) -> ObjectiveWeights {
        match self {
            Self::Revenue => ObjectiveWeights::REVENUE_ONLY,
            Self::Utilization => ObjectiveWeights::new(0.0, 1.0),
            Self::Balanced => ObjectiveWeights::new(0.5, 0.5),
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown objective name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid objective: {0} (must be revenue, utilization, or balanced)")]
pub struct ParseObjectiveError(pub String);

impl FromStr for Objective {
    type Err = ParseObjectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "revenue" => Ok(Self::Revenue),
            "utilization" => Ok(Self::Utilization),
            "balanced" => Ok(Self::Balanced),
            other => Err(ParseObjectiveError(other.to_owned())),
        }
    }
}

/// Which solving strategy to run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Algorithm {
    /// Exact bitmask dynamic programming.
    Dp,
    /// Exact branch-and-bound search.
    Backtracking,
    /// Density-ranked heuristic.
    Greedy,
    /// Exact DP for small inputs, greedy above the exact-solver limit.
    #[default]
    Auto,
}

impl Algorithm {
    /// Return the algorithm as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dp => "dp",
            Self::Backtracking => "backtracking",
            Self::Greedy => "greedy",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid algorithm: {0} (must be dp, backtracking, greedy, or auto)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dp" => Ok(Self::Dp),
            "backtracking" => Ok(Self::Backtracking),
            "greedy" => Ok(Self::Greedy),
            "auto" => Ok(Self::Auto),
            other => Err(ParseAlgorithmError(other.to_owned())),
        }
    }
}

/// Relative weight of payout against capacity utilisation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectiveWeights {
    /// Weight applied to raw payout, in `[0, 1]`.
    pub revenue: f64,
    /// Weight applied to utilisation, in `[0, 1]`.
    pub utilization: f64,
}

impl ObjectiveWeights {
    /// Pure payout maximisation.
    pub const REVENUE_ONLY: Self = Self::new(1.0, 0.0);

    /// Construct a weight pair.
    #[must_use]
    pub const fn new(revenue: f64, utilization: f64) -> Self {
        Self {
            revenue,
            utilization,
        }
    }

    /// Whether these weights describe plain payout maximisation.
    #[must_use]
    #[expect(
        clippy::float_cmp,
        reason = "weights are compared against exact sentinel values"
    )]
    pub fn is_revenue_only(self) -> bool {
        self.revenue == 1.0 && self.utilization == 0.0
    }
}

/// Caller-supplied optimisation settings.
///
/// # Examples
/// ```
/// use smartload_core::{Algorithm, Objective, ObjectiveWeights, OptimizationConfig};
///
/// let config = OptimizationConfig::new(Objective::Utilization);
/// assert_eq!(config.weights(), ObjectiveWeights::new(0.0, 1.0));
/// assert_eq!(config.algorithm, Algorithm::Auto);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationConfig {
    /// Optimisation goal.
    pub objective: Objective,
    /// Explicit payout weight; zero together with `utilization_weight`
    /// selects the objective's defaults.
    pub revenue_weight: f64,
    /// Explicit utilisation weight.
    pub utilization_weight: f64,
    /// Solver to run.
    pub algorithm: Algorithm,
}

impl OptimizationConfig {
    /// A configuration for `objective` using its default weights.
    #[must_use]
    pub const fn new(objective: Objective) -> Self {
        Self {
            objective,
            revenue_weight: 0.0,
            utilization_weight: 0.0,
            algorithm: Algorithm::Auto,
        }
    }

    /// Override the algorithm.
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Override both weights.
    #[must_use]
    pub const fn with_weights(mut self, revenue: f64, utilization: f64) -> Self {
        self.revenue_weight = revenue;
        self.utilization_weight = utilization;
        self
    }

    /// Resolve the effective weights.
    #[must_use]
    #[expect(
        clippy::float_cmp,
        reason = "zero weights are an exact sentinel for objective defaults"
    )]
    pub fn weights(&self) -> ObjectiveWeights {
        if self.revenue_weight == 0.0 && self.utilization_weight == 0.0 {
            self.objective.default_weights()
        } else {
            ObjectiveWeights::new(self.revenue_weight, self.utilization_weight)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Objective::Revenue, 1.0, 0.0)]
    #[case(Objective::Utilization, 0.0, 1.0)]
    #[case(Objective::Balanced, 0.5, 0.5)]
    fn zero_weights_default_from_objective(
        #[case] objective: Objective,
        #[case] revenue: f64,
        #[case] utilization: f64,
    ) {
        let config = OptimizationConfig::new(objective);
        assert_eq!(
            config.weights(),
            ObjectiveWeights::new(revenue, utilization)
        );
    }

    #[rstest]
    fn explicit_weights_win_over_objective() {
        let config = OptimizationConfig::new(Objective::Revenue).with_weights(0.3, 0.7);
        assert_eq!(config.weights(), ObjectiveWeights::new(0.3, 0.7));
        assert!(!config.weights().is_revenue_only());
    }

    #[rstest]
    #[case("dp", Algorithm::Dp)]
    #[case("backtracking", Algorithm::Backtracking)]
    #[case("greedy", Algorithm::Greedy)]
    #[case("auto", Algorithm::Auto)]
    fn algorithm_names_round_trip(#[case] name: &str, #[case] algorithm: Algorithm) {
        assert_eq!(name.parse::<Algorithm>(), Ok(algorithm));
        assert_eq!(algorithm.to_string(), name);
    }

    #[rstest]
    fn parsing_rejects_unknown_names() {
        let err = "simplex".parse::<Algorithm>().unwrap_err();
        assert!(err.to_string().contains("simplex"));
        assert!("profit".parse::<Objective>().is_err());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn config_deserialises_lowercase_names() {
        let config: OptimizationConfig = serde_json::from_str(
            r#"{"objective":"balanced","revenue_weight":0.0,"utilization_weight":0.0,"algorithm":"greedy"}"#,
        )
        .expect("config should decode");
        assert_eq!(config.objective, Objective::Balanced);
        assert_eq!(config.algorithm, Algorithm::Greedy);
    }
}
