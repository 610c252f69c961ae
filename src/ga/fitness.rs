//! Tour cost and fitness.
//!
//! Both functions are pure: no RNG, no state.

use crate::matrix::DistanceMatrix;

/// Cost of the closed tour described by `genes`, including the edge from
/// the last city back to the first.
///
/// The caller guarantees that `genes` is a permutation of
/// `0..matrix.size()`.
///
/// # Panics
///
/// Panics if a gene is out of range or `genes` is empty.
pub fn tour_cost(genes: &[usize], matrix: &DistanceMatrix) -> i64 {
    let path: i64 = genes.windows(2).map(|w| matrix.get(w[0], w[1])).sum();
    let last = genes[genes.len() - 1];
    path + matrix.get(last, genes[0])
}

/// Fitness of a tour: `1 / cost`. Higher is better.
///
/// The caller guarantees a positive cost.
pub fn fitness(genes: &[usize], matrix: &DistanceMatrix) -> f64 {
    1.0 / tour_cost(genes, matrix) as f64
}
