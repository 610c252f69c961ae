//! Genetic algorithm for the Asymmetric Traveling Salesman Problem.
//!
//! Loads a TSPLIB-style distance matrix and evolves a population of tours
//! under roulette-wheel selection, OX or PMX crossover, and insertion
//! mutation until a wall-clock budget runs out.
//!
//! - [`matrix`]: [`DistanceMatrix`](matrix::DistanceMatrix) and the `.atsp` reader
//! - [`ga`]: chromosomes, operators, and the [`GaRunner`](ga::GaRunner) loop
//! - [`error`]: configuration, data, and run errors
//!
//! # Example
//!
//! ```
//! use atsp_ga::ga::{CrossoverMethod, GaConfig, GaRunner};
//! use atsp_ga::matrix::parse_atsp;
//!
//! let text = "\
//! DIMENSION: 3
//! EDGE_WEIGHT_SECTION
//! 0 1 9
//! 9 0 1
//! 1 9 0
//! ";
//! let matrix = parse_atsp(text).unwrap();
//! let config = GaConfig::default()
//!     .with_crossover(CrossoverMethod::Pmx)
//!     .with_population_size(10)
//!     .with_time_limit_secs(0.0)
//!     .with_seed(1);
//!
//! let result = GaRunner::run(&matrix, &config).unwrap();
//! assert!(result.best.is_valid_permutation(3));
//! ```

pub mod error;
pub mod ga;
pub mod matrix;

pub use error::{ConfigError, DataError, GaError};
