//! Error types.
//!
//! Stop conditions (target reached, budget exhausted) are not errors; see
//! [`crate::session::StopReason`]. The types here cover configuration
//! mistakes and objective-function contract violations, which are fatal.

use thiserror::Error;

/// An invalid parameter, detected before a search starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The evaluation budget must allow at least one evaluation.
    #[error("max_evaluations must be at least 1")]
    ZeroBudget,

    /// A parameter that must be strictly positive was not.
    #[error("{name} must be positive, got {value}")]
    NotPositive {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A parameter that must be finite and non-negative was not.
    #[error("{name} must be non-negative, got {value}")]
    Negative {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A population size of zero.
    #[error("population size must be at least 1")]
    EmptyPopulation,

    /// The working pool must be strictly larger than the population.
    #[error("working pool size m = {m} must exceed population size n = {n}")]
    PoolTooSmall {
        /// Population size.
        n: usize,
        /// Working pool size.
        m: usize,
    },

    /// The probe budget of the peak search must allow at least one probe.
    #[error("troops_max must be at least 1")]
    NoTroops,
}

/// Errors returned by objective functions and search runners.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeurError {
    /// A configuration was rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A neighborhood was requested at a distance the domain does not support.
    #[error("neighborhood distance {distance} is not supported ({supported})")]
    UnsupportedDistance {
        /// Requested distance.
        distance: usize,
        /// Human readable description of the supported distances.
        supported: &'static str,
    },

    /// An objective function could not be constructed.
    #[error("invalid objective function: {0}")]
    InvalidObjective(String),
}
