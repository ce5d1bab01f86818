//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{GaError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, operator rates, the generation count and
/// logging cadence. The problem itself (coefficients and target) lives in
/// [`LinearEquation`](super::LinearEquation).
///
/// # Defaults
///
/// ```
/// use u_lineq::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 6);
/// assert_eq!(config.max_generations, 1_000_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_lineq::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(500)
///     .with_crossover_rate(0.4)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes in every generation.
    pub population_size: usize,

    /// Exact number of generations to run.
    ///
    /// There is no early termination; `0` runs nothing and leaves the
    /// initial population untouched.
    pub max_generations: usize,

    /// Probability that a chromosome joins the crossover pool (0.0–1.0).
    pub crossover_rate: f64,

    /// Fraction of all gene slots overwritten per generation (0.0–1.0).
    ///
    /// The number of mutations per generation is
    /// `round(mutation_rate * population_size * chromosome_len)`.
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Emit a debug log line every this many generations.
    ///
    /// Set to 0 to disable periodic progress logging.
    pub log_interval: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 6,
            max_generations: 1_000_000,
            crossover_rate: 0.25,
            mutation_rate: 0.1,
            seed: None,
            log_interval: 100_000,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the progress logging interval (0 to disable).
    pub fn with_log_interval(mut self, n: usize) -> Self {
        self.log_interval = n;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`GaError::Config`] if any parameter is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 1 {
            return Err(GaError::Config(
                "population_size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(GaError::Config(format!(
                "crossover_rate must be within [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::Config(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 6);
        assert_eq!(config.max_generations, 1_000_000);
        assert!((config.crossover_rate - 0.25).abs() < 1e-10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert!(config.seed.is_none());
        assert_eq!(config.log_interval, 100_000);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_max_generations(1000)
            .with_crossover_rate(0.8)
            .with_mutation_rate(0.05)
            .with_log_interval(0)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 1000);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.log_interval, 0);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_single_individual_ok() {
        let config = GaConfig::default().with_population_size(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(config.validate(), Err(GaError::Config(_))));
    }

    #[test]
    fn test_validate_zero_generations_ok() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);

        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_rejects_nan_rate() {
        let config = GaConfig {
            mutation_rate: f64::NAN,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GaConfig {
            crossover_rate: 1.5,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
