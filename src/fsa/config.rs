//! FSA configuration.

use crate::error::ConfigError;
use crate::mutation::Correction;

/// Configuration for Fast Simulated Annealing.
///
/// The temperature at step `k` is
///
/// - `T0 / (1 + (k / n0)^alpha)` when `alpha > 0`,
/// - `T0 * exp(-(k / n0)^(-alpha))` otherwise.
///
/// `T0 -> 0` turns FSA into a stochastic descent, `T0 -> inf` into a
/// random walk that accepts every proposal with probability 1/2.
///
/// # Examples
///
/// ```
/// use u_heurbench::fsa::FsaConfig;
///
/// let config = FsaConfig::default()
///     .with_max_evaluations(1000)
///     .with_initial_temperature(10.0)
///     .with_n0(1000.0)
///     .with_alpha(2.0)
///     .with_radius(10.0)
///     .with_trace(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FsaConfig {
    /// Evaluation budget.
    pub max_evaluations: usize,

    /// Initial temperature `T0`. May be `0` or `+inf`.
    pub initial_temperature: f64,

    /// Cooling time scale `n0`.
    pub n0: f64,

    /// Cooling exponent `alpha`.
    pub alpha: f64,

    /// Cauchy mutation radius `r`.
    pub radius: f64,

    /// Boundary correction applied after mutation.
    pub correction: Correction,

    /// Whether to record a per-step trace.
    pub trace: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for FsaConfig {
    fn default() -> Self {
        Self {
            max_evaluations: 1000,
            initial_temperature: 0.1,
            n0: 100.0,
            alpha: 2.0,
            radius: 0.5,
            correction: Correction::Clip,
            trace: false,
            seed: None,
        }
    }
}

impl FsaConfig {
    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_n0(mut self, n0: f64) -> Self {
        self.n0 = n0;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_radius(mut self, r: f64) -> Self {
        self.radius = r;
        self
    }

    pub fn with_correction(mut self, correction: Correction) -> Self {
        self.correction = correction;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
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
        if self.initial_temperature.is_nan() || self.initial_temperature < 0.0 {
            return Err(ConfigError::Negative {
                name: "initial_temperature",
                value: self.initial_temperature,
            });
        }
        if !(self.n0.is_finite() && self.n0 > 0.0) {
            return Err(ConfigError::NotPositive {
                name: "n0",
                value: self.n0,
            });
        }
        if !self.alpha.is_finite() {
            return Err(ConfigError::NotPositive {
                name: "alpha",
                value: self.alpha,
            });
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FsaConfig::default();
        assert!((config.initial_temperature - 0.1).abs() < 1e-15);
        assert!((config.n0 - 100.0).abs() < 1e-15);
        assert_eq!(config.correction, Correction::Clip);
        assert!(!config.trace);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_extreme_temperatures_allowed() {
        assert!(FsaConfig::default()
            .with_initial_temperature(0.0)
            .validate()
            .is_ok());
        assert!(FsaConfig::default()
            .with_initial_temperature(f64::INFINITY)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = FsaConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
        let config = FsaConfig::default().with_initial_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_n0() {
        assert!(FsaConfig::default().with_n0(0.0).validate().is_err());
        assert!(FsaConfig::default().with_n0(-5.0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_radius() {
        assert!(FsaConfig::default().with_radius(-0.5).validate().is_err());
        assert!(FsaConfig::default()
            .with_radius(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_budget() {
        let config = FsaConfig::default().with_max_evaluations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroBudget));
    }
}
