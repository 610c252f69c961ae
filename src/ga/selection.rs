//! Fitness-proportionate (roulette wheel) selection.
//!
//! Selection happens in two steps so the wheel is built once per
//! generation and spun `N` times:
//!
//! 1. [`cumulative_probabilities`] normalizes fitness values into a
//!    running share that ends at ≈ 1.0
//! 2. [`roulette_wheel`] draws `r ∈ [0, 1]` and returns the first index
//!    whose cumulative share reaches `r`
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Chromosome;
use rand::Rng;
use tracing::trace;

/// Builds the cumulative selection probabilities for a population.
///
/// Entry `i` is `Σ_{k ≤ i} fitness_k / Σ fitness`. The sequence is
/// non-decreasing and its last entry is within rounding error of 1.0.
///
/// If the total is not a positive finite number the wheel degrades to
/// uniform slices.
///
/// # Examples
///
/// ```
/// use atsp_ga::ga::selection::cumulative_probabilities;
///
/// let cum = cumulative_probabilities(&[1.0, 1.0, 2.0]);
/// assert_eq!(cum, vec![0.25, 0.5, 1.0]);
/// ```
pub fn cumulative_probabilities(fitness_values: &[f64]) -> Vec<f64> {
    let n = fitness_values.len();
    let total: f64 = fitness_values.iter().sum();

    if !(total.is_finite() && total > 0.0) {
        return (1..=n).map(|i| i as f64 / n as f64).collect();
    }

    let mut running = 0.0;
    fitness_values
        .iter()
        .map(|&f| {
            running += f / total;
            running
        })
        .collect()
}

/// Spins the wheel once and returns the selected index.
///
/// A draw above the last cumulative entry can only come from rounding;
/// it is clamped to the last index.
///
/// # Panics
/// Panics if `cumulative` is empty.
pub fn roulette_wheel<R: Rng>(cumulative: &[f64], rng: &mut R) -> usize {
    assert!(
        !cumulative.is_empty(),
        "cannot select from empty population"
    );

    let r: f64 = rng.random_range(0.0..=1.0);
    match cumulative.iter().position(|&p| r <= p) {
        Some(i) => i,
        None => {
            let last = cumulative.len() - 1;
            trace!(draw = r, last = cumulative[last], "roulette draw clamped to last index");
            last
        }
    }
}

/// Samples `population.len()` parents with replacement.
///
/// The parent pool may contain the same individual several times.
pub fn select_parents<R: Rng>(
    population: &[Chromosome],
    cumulative: &[f64],
    rng: &mut R,
) -> Vec<Chromosome> {
    debug_assert_eq!(population.len(), cumulative.len());
    (0..population.len())
        .map(|_| population[roulette_wheel(cumulative, rng)].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::DistanceMatrix;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cumulative_monotone_and_normalized() {
        let fitness = [0.01, 0.5, 0.002, 0.3, 0.3, 1e-6];
        let cum = cumulative_probabilities(&fitness);
        assert_eq!(cum.len(), fitness.len());
        for w in cum.windows(2) {
            assert!(w[1] >= w[0], "not monotone: {cum:?}");
        }
        assert!((cum[cum.len() - 1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cumulative_degenerate_total_is_uniform() {
        assert_eq!(cumulative_probabilities(&[0.0, 0.0]), vec![0.5, 1.0]);
        assert_eq!(
            cumulative_probabilities(&[f64::INFINITY, 1.0]),
            vec![0.5, 1.0]
        );
        assert!(cumulative_probabilities(&[]).is_empty());
    }

    #[test]
    fn test_roulette_favors_fitter() {
        let cum = cumulative_probabilities(&[1.0, 8.0, 1.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 3];
        let n = 10000;
        for _ in 0..n {
            counts[roulette_wheel(&cum, &mut rng)] += 1;
        }
        // Expected share of index 1 is 80%.
        assert!(
            counts[1] > 7500 && counts[1] < 8500,
            "expected ~80% for the fittest, got {counts:?}"
        );
    }

    #[test]
    fn test_roulette_equal_fitness_is_roughly_uniform() {
        let cum = cumulative_probabilities(&[2.0, 2.0, 2.0, 2.0]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[roulette_wheel(&cum, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_roulette_clamps_short_wheel() {
        // Last entry well below 1.0: most draws overshoot and must clamp.
        let cum = [0.1, 0.2];
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(roulette_wheel(&cum, &mut rng) < 2);
        }
    }

    #[test]
    fn test_single_individual() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(roulette_wheel(&[1.0], &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        roulette_wheel(&[], &mut rng);
    }

    #[test]
    fn test_select_parents_size_and_membership() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![-1, 1, 9],
            vec![9, -1, 1],
            vec![1, 9, -1],
        ])
        .expect("square");
        let mut rng = StdRng::seed_from_u64(5);
        let population: Vec<Chromosome> =
            (0..6).map(|_| Chromosome::random(&dm, &mut rng)).collect();
        let fitness: Vec<f64> = population.iter().map(Chromosome::fitness).collect();
        let cum = cumulative_probabilities(&fitness);

        let parents = select_parents(&population, &cum, &mut rng);
        assert_eq!(parents.len(), population.len());
        for p in &parents {
            assert!(population.contains(p));
        }
    }
}
