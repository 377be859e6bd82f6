//! Genetic Optimizer configuration.

use crate::error::ConfigError;
use crate::mutation::Correction;

/// Configuration for the Genetic Optimizer.
///
/// # Defaults
///
/// ```
/// use u_heurbench::go::GoConfig;
///
/// let config = GoConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.pool_size, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_heurbench::go::GoConfig;
///
/// let config = GoConfig::default()
///     .with_population_size(20)
///     .with_pool_size(200)
///     .with_selection_temperatures(1.0, 0.1)
///     .with_radius(0.35)
///     .with_crossover_points(5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoConfig {
    /// Evaluation budget.
    pub max_evaluations: usize,

    /// Population size `n`.
    pub population_size: usize,

    /// Working pool size `m`; must exceed `n`.
    pub pool_size: usize,

    /// Rank-selection temperature for parents (`t_sel1`).
    ///
    /// Lower values concentrate selection on the best individuals.
    pub parent_temperature: f64,

    /// Rank-selection temperature for survivors (`t_sel2`).
    pub survivor_temperature: f64,

    /// Cauchy mutation radius `r`.
    pub radius: f64,

    /// Number of crossover switch points (`co_m`).
    pub crossover_points: usize,

    /// Boundary correction applied after mutation.
    pub correction: Correction,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GoConfig {
    fn default() -> Self {
        Self {
            max_evaluations: 10_000,
            population_size: 10,
            pool_size: 100,
            parent_temperature: 1.0,
            survivor_temperature: 0.1,
            radius: 0.35,
            crossover_points: 5,
            correction: Correction::Clip,
            seed: None,
        }
    }
}

impl GoConfig {
    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_pool_size(mut self, m: usize) -> Self {
        self.pool_size = m;
        self
    }

    /// Sets the parent (`t_sel1`) and survivor (`t_sel2`) temperatures.
    pub fn with_selection_temperatures(mut self, parents: f64, survivors: f64) -> Self {
        self.parent_temperature = parents;
        self.survivor_temperature = survivors;
        self
    }

    pub fn with_radius(mut self, r: f64) -> Self {
        self.radius = r;
        self
    }

    pub fn with_crossover_points(mut self, points: usize) -> Self {
        self.crossover_points = points;
        self
    }

    pub fn with_correction(mut self, correction: Correction) -> Self {
        self.correction = correction;
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
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.pool_size <= self.population_size {
            return Err(ConfigError::PoolTooSmall {
                n: self.population_size,
                m: self.pool_size,
            });
        }
        for (name, value) in [
            ("parent_temperature", self.parent_temperature),
            ("survivor_temperature", self.survivor_temperature),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(ConfigError::Negative {
                name: "radius",
                value: self.radius,
            });
        }
        Ok(())
    }
}
