//! Error types.
//!
//! Three layers, matching where a failure can originate:
//!
//! - [`ConfigError`]: bad engine parameters, rejected before the loop starts
//! - [`DataError`]: a distance-matrix file that cannot be turned into a
//!   complete [`DistanceMatrix`](crate::matrix::DistanceMatrix)
//! - [`GaError`]: anything that stops a run, including a corrupted
//!   permutation detected mid-run

use std::path::PathBuf;

/// Invalid engine parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },
    #[error("time limit must be a finite, non-negative number of seconds, got {0}")]
    InvalidTimeLimit(f64),
    #[error("unknown crossover method {0:?} (expected OX or PMX)")]
    UnknownCrossover(String),
    #[error("unknown PMX policy {0:?} (expected first or best)")]
    UnknownPmxPolicy(String),
}

/// Problems reading or parsing an ATSP instance.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no DIMENSION line found")]
    MissingDimension,
    #[error("invalid DIMENSION value {0:?}")]
    InvalidDimension(String),
    #[error("dimension must be at least 2, got {0}")]
    DimensionTooSmall(usize),
    #[error("no EDGE_WEIGHT_SECTION found")]
    MissingEdgeWeightSection,
    #[error("invalid edge weight {token:?}")]
    InvalidWeight { token: String },
    #[error("incomplete matrix: expected {expected} weights, found {found}")]
    IncompleteMatrix { expected: usize, found: usize },
    #[error("edge weight {weight} exceeds the limit of {limit} for this dimension")]
    WeightOutOfRange { weight: i64, limit: i64 },
}

/// Failure of a GA run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("distance matrix must have at least 2 cities, got {0}")]
    MatrixTooSmall(usize),
    #[error("chromosome is not a permutation of 0..{cities}: {genes:?}")]
    InvalidPermutation { cities: usize, genes: Vec<usize> },
}
