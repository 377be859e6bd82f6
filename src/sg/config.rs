//! Shoot & Go configuration.

use crate::error::ConfigError;

/// Configuration for Shoot & Go.
///
/// # Examples
///
/// ```
/// use u_heurbench::sg::SgConfig;
///
/// // Pure random shooting
/// let config = SgConfig::default().with_max_evaluations(1000).with_hmax(0);
/// assert_eq!(config.hmax, Some(0));
///
/// // Descend to a local optimum after every shot
/// let config = SgConfig::default().with_unbounded_descent();
/// assert_eq!(config.hmax, None);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SgConfig {
    /// Evaluation budget.
    pub max_evaluations: usize,

    /// Maximum number of neighbor evaluations per descent.
    ///
    /// `Some(0)` disables local search; `None` descends until no neighbor
    /// improves.
    pub hmax: Option<usize>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SgConfig {
    fn default() -> Self {
        Self {
            max_evaluations: 1000,
            hmax: None,
            seed: None,
        }
    }
}

impl SgConfig {
    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Bounds the descent depth.
    pub fn with_hmax(mut self, hmax: usize) -> Self {
        self.hmax = Some(hmax);
        self
    }

    /// Removes the descent depth bound.
    pub fn with_unbounded_descent(mut self) -> Self {
        self.hmax = None;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_evaluations == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        Ok(())
    }
}
