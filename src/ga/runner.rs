//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → fitness → roulette selection → crossover → mutation →
//! succession → repeat until the time budget is spent.

use super::config::{CrossoverMethod, GaConfig, PmxPolicy};
use super::fitness::tour_cost;
use super::operators::{insertion_mutation, order_crossover, pmx_crossover};
use super::selection::{cumulative_probabilities, select_parents};
use super::succession::{sort_by_cost, succession};
use super::types::Chromosome;
use crate::error::GaError;
use crate::matrix::DistanceMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best tour found during the entire run.
    pub best: Chromosome,

    /// Cost of the best tour (same as `best.cost()`).
    pub best_cost: i64,

    /// Total number of generations executed. Always at least 1.
    pub generations: usize,

    /// Wall-clock time spent in the generational loop.
    pub elapsed: Duration,

    /// Best cost after initialization and after each generation.
    pub cost_history: Vec<i64>,
}

impl GaResult {
    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use atsp_ga::ga::{GaConfig, GaRunner};
/// use atsp_ga::matrix::DistanceMatrix;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![-1, 10, 15, 20],
///     vec![10, -1, 35, 25],
///     vec![15, 35, -1, 30],
///     vec![20, 25, 30, -1],
/// ]).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_time_limit_secs(0.01)
///     .with_seed(42);
///
/// let result = GaRunner::run(&matrix, &config).unwrap();
/// assert_eq!(result.best_cost, 80);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from `config.seed`, or from OS
    /// entropy when no seed is set.
    ///
    /// # Errors
    /// Returns [`GaError::Config`] if the configuration is invalid and
    /// [`GaError::MatrixTooSmall`] for matrices with fewer than two cities.
    pub fn run(matrix: &DistanceMatrix, config: &GaConfig) -> Result<GaResult, GaError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored.
    #[instrument(
        level = "debug",
        skip_all,
        fields(cities = matrix.size(), population = config.population_size, method = %config.crossover)
    )]
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, GaError> {
        config.validate()?;
        if matrix.size() < 2 {
            return Err(GaError::MatrixTooSmall(matrix.size()));
        }

        info!(
            cities = matrix.size(),
            population = config.population_size,
            method = %config.crossover,
            crossover_rate = config.crossover_rate,
            mutation_rate = config.mutation_rate,
            time_limit_secs = config.time_limit.as_secs_f64(),
            "starting genetic algorithm"
        );

        // 1. Initialize population
        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::random(matrix, rng))
            .collect();
        sort_by_cost(&mut population);

        // 2. Track best
        let mut best = population[0].clone();
        let mut cost_history = vec![best.cost()];
        let mut generations = 0usize;

        let start = Instant::now();

        // 3. Evolutionary loop; the budget is checked after each full generation
        loop {
            let fitness: Vec<f64> = population.iter().map(Chromosome::fitness).collect();
            let cumulative = cumulative_probabilities(&fitness);
            let parents = select_parents(&population, &cumulative, rng);
            let offspring = breed(&parents, matrix, config, rng);

            population = succession(parents, offspring, config.population_size);
            generations += 1;

            verify_population(&population, matrix.size())?;

            if population[0].cost() < best.cost() {
                best = population[0].clone();
                debug!(generation = generations, cost = best.cost(), "new best tour");
            }
            cost_history.push(best.cost());

            if start.elapsed() >= config.time_limit {
                break;
            }
        }

        let elapsed = start.elapsed();
        info!(
            best_cost = best.cost(),
            generations,
            elapsed_secs = elapsed.as_secs_f64(),
            "genetic algorithm finished"
        );

        Ok(GaResult {
            best_cost: best.cost(),
            best,
            generations,
            elapsed,
            cost_history,
        })
    }
}

/// Builds one offspring per parent.
///
/// Parent `i` is recombined with parent `(i + 1) % N` with probability
/// `crossover_rate`, otherwise copied. Each offspring is then mutated with
/// probability `mutation_rate`.
fn breed<R: Rng>(
    parents: &[Chromosome],
    matrix: &DistanceMatrix,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Chromosome> {
    let n = parents.len();
    (0..n)
        .map(|i| {
            let p1 = parents[i].genes();
            let p2 = parents[(i + 1) % n].genes();

            let mut genes = if rng.random_range(0.0..1.0) < config.crossover_rate {
                crossover(p1, p2, matrix, config, rng)
            } else {
                p1.to_vec()
            };

            if rng.random_range(0.0..1.0) < config.mutation_rate {
                insertion_mutation(&mut genes, rng);
            }

            Chromosome::evaluated(genes, matrix)
        })
        .collect()
}

fn crossover<R: Rng>(
    p1: &[usize],
    p2: &[usize],
    matrix: &DistanceMatrix,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<usize> {
    match config.crossover {
        CrossoverMethod::Ox => order_crossover(p1, p2, rng),
        CrossoverMethod::Pmx => {
            let (child1, child2) = pmx_crossover(p1, p2, rng);
            keep_pmx_child(child1, child2, matrix, config.pmx_policy)
        }
        CrossoverMethod::None => p1.to_vec(),
    }
}

/// Picks the PMX child that enters the offspring pool. Ties keep `child1`.
fn keep_pmx_child(
    child1: Vec<usize>,
    child2: Vec<usize>,
    matrix: &DistanceMatrix,
    policy: PmxPolicy,
) -> Vec<usize> {
    match policy {
        PmxPolicy::FirstChild => child1,
        PmxPolicy::BestOfPair => {
            if tour_cost(&child2, matrix) < tour_cost(&child1, matrix) {
                child2
            } else {
                child1
            }
        }
    }
}

/// Fails on the first chromosome that is not a permutation of `0..cities`.
fn verify_population(population: &[Chromosome], cities: usize) -> Result<(), GaError> {
    match population.iter().find(|c| !c.is_valid_permutation(cities)) {
        Some(bad) => Err(GaError::InvalidPermutation {
            cities,
            genes: bad.genes().to_vec(),
        }),
        None => Ok(()),
    }
}

// ============================================================================
// Tests
// ============================================================================
