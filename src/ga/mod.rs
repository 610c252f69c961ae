//! Genetic Algorithm for the ATSP.
//!
//! Tours are permutations of city indices ([`Chromosome`]). Each generation
//! builds a roulette wheel from inverse tour costs, draws a full parent
//! pool, recombines neighbouring parents with OX or PMX, applies insertion
//! mutation, and keeps the cheapest half of parents + offspring.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (time budget, population, rates, operator)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best tour, its cost, elapsed time, and history
//!
//! # Submodules
//!
//! - [`fitness`]: Pure tour cost and fitness evaluation
//! - [`selection`]: Cumulative probabilities and roulette wheel sampling
//! - [`operators`]: Permutation crossover (OX, PMX) and insertion mutation
//! - [`succession`]: Elitist truncation of parents + offspring
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Larrañaga et al. (1999), "Genetic Algorithms for the Travelling Salesman
//!   Problem: A Review of Representations and Operators"

mod config;
pub mod fitness;
pub mod operators;
mod runner;
pub mod selection;
pub mod succession;
mod types;

pub use config::{CrossoverMethod, GaConfig, PmxPolicy};
pub use runner::{GaResult, GaRunner};
pub use types::{is_permutation, Chromosome};
