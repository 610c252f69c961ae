//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Recombination operator used to build offspring.
///
/// Parses from `"OX"` or `"PMX"` (case-insensitive). Any other string is
/// rejected with [`ConfigError::UnknownCrossover`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverMethod {
    /// Order Crossover (Davis, 1985).
    #[default]
    Ox,
    /// Partially Matched Crossover (Goldberg & Lingle, 1985).
    Pmx,
    /// No recombination: each offspring starts as a copy of its parent.
    None,
}

impl FromStr for CrossoverMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OX" => Ok(CrossoverMethod::Ox),
            "PMX" => Ok(CrossoverMethod::Pmx),
            _ => Err(ConfigError::UnknownCrossover(s.to_string())),
        }
    }
}

impl fmt::Display for CrossoverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CrossoverMethod::Ox => "OX",
            CrossoverMethod::Pmx => "PMX",
            CrossoverMethod::None => "none",
        })
    }
}

/// Which PMX child becomes the offspring.
///
/// PMX always builds two children. Either policy keeps exactly one, so the
/// offspring pool stays the same size as the parent pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PmxPolicy {
    /// Keep the child carrying the second parent's segment.
    #[default]
    FirstChild,
    /// Keep whichever child has the lower tour cost.
    BestOfPair,
}

impl FromStr for PmxPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(PmxPolicy::FirstChild),
            "best" => Ok(PmxPolicy::BestOfPair),
            _ => Err(ConfigError::UnknownPmxPolicy(s.to_string())),
        }
    }
}

/// Configuration for the ATSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use atsp_ga::ga::{CrossoverMethod, GaConfig};
/// use std::time::Duration;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.crossover, CrossoverMethod::Ox);
/// assert_eq!(config.time_limit, Duration::from_secs(60));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use atsp_ga::ga::{CrossoverMethod, GaConfig};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_crossover(CrossoverMethod::Pmx)
///     .with_crossover_rate(0.9)
///     .with_mutation_rate(0.05)
///     .with_time_limit_secs(2.5)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Wall-clock budget. Checked once per generation boundary, so a run
    /// overshoots by at most one generation.
    pub time_limit: Duration,

    /// Number of individuals in the population. Must be at least 2.
    pub population_size: usize,

    /// Recombination operator.
    pub crossover: CrossoverMethod,

    /// Which PMX child to keep. Ignored for other operators.
    pub pmx_policy: PmxPolicy,

    /// Probability of recombining a parent with its neighbour (0.0–1.0).
    ///
    /// When crossover is not applied, the parent is copied.
    pub crossover_rate: f64,

    /// Probability of applying insertion mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Seconds passed to [`with_time_limit_secs`](Self::with_time_limit_secs)
    /// that do not form a valid duration. Reported by `validate`.
    #[cfg_attr(feature = "serde", serde(skip))]
    rejected_time_limit: Option<f64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            population_size: 100,
            crossover: CrossoverMethod::Ox,
            pmx_policy: PmxPolicy::FirstChild,
            crossover_rate: 0.8,
            mutation_rate: 0.01,
            seed: None,
            rejected_time_limit: None,
        }
    }
}

impl GaConfig {
    /// Sets the time limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self.rejected_time_limit = None;
        self
    }

    /// Sets the time limit in (fractional) seconds.
    ///
    /// Negative or non-finite values leave `time_limit` untouched and make
    /// [`validate`](Self::validate) fail with `InvalidTimeLimit`.
    pub fn with_time_limit_secs(self, secs: f64) -> Self {
        match Self::time_limit_from_secs(secs) {
            Ok(limit) => self.with_time_limit(limit),
            Err(_) => Self {
                rejected_time_limit: Some(secs),
                ..self
            },
        }
    }

    /// Converts seconds into a [`Duration`], rejecting negative, NaN, and
    /// infinite values.
    pub fn time_limit_from_secs(secs: f64) -> Result<Duration, ConfigError> {
        Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidTimeLimit(secs))
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, method: CrossoverMethod) -> Self {
        self.crossover = method;
        self
    }

    /// Sets the PMX child policy.
    pub fn with_pmx_policy(mut self, policy: PmxPolicy) -> Self {
        self.pmx_policy = policy;
        self
    }

    /// Sets the crossover rate. Values outside `[0, 1]` fail validation.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate. Values outside `[0, 1]` fail validation.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        if let Some(secs) = self.rejected_time_limit {
            return Err(ConfigError::InvalidTimeLimit(secs));
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRate { name, value })
    }
}
