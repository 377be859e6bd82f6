//! Peak search configuration.

use crate::error::ConfigError;

/// Configuration for the Air Ship peak search.
///
/// # Examples
///
/// ```
/// use u_heurbench::airship::PeakSearchConfig;
///
/// let config = PeakSearchConfig::default().with_troops_max(200).with_seed(3);
/// assert_eq!(config.climb_max, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakSearchConfig {
    /// Total number of terrain probes available.
    pub troops_max: usize,

    /// Maximum probes spent on one local climb.
    pub climb_max: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for PeakSearchConfig {
    fn default() -> Self {
        Self {
            troops_max: 100,
            climb_max: 10,
            seed: None,
        }
    }
}

impl PeakSearchConfig {
    pub fn with_troops_max(mut self, n: usize) -> Self {
        self.troops_max = n;
        self
    }

    pub fn with_climb_max(mut self, n: usize) -> Self {
        self.climb_max = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.troops_max == 0 {
            return Err(ConfigError::NoTroops);
        }
        Ok(())
    }
}
