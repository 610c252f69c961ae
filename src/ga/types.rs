//! Chromosome representation.
//!
//! A [`Chromosome`] is a permutation of city indices read as a closed tour:
//! the successor of the last city is the first. It carries its tour cost,
//! computed once when the chromosome is built, so sorting a population
//! never re-walks the tours.

use super::fitness::tour_cost;
use crate::error::GaError;
use crate::matrix::DistanceMatrix;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// A candidate tour with its cached cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<usize>,
    cost: i64,
}

impl Chromosome {
    /// Creates a uniformly random tour over all cities of `matrix`.
    ///
    /// Starts from the identity permutation and applies a Fisher–Yates
    /// shuffle, so every permutation is equally likely.
    pub fn random<R: Rng>(matrix: &DistanceMatrix, rng: &mut R) -> Self {
        let mut genes: Vec<usize> = (0..matrix.size()).collect();
        genes.shuffle(rng);
        Self::evaluated(genes, matrix)
    }

    /// Creates a chromosome from explicit genes.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::InvalidPermutation`] if `genes` is not a
    /// permutation of `0..matrix.size()`.
    pub fn from_genes(genes: Vec<usize>, matrix: &DistanceMatrix) -> Result<Self, GaError> {
        if !is_permutation(&genes, matrix.size()) {
            return Err(GaError::InvalidPermutation {
                cities: matrix.size(),
                genes,
            });
        }
        Ok(Self::evaluated(genes, matrix))
    }

    /// Wraps genes produced by a permutation-preserving operator.
    pub(crate) fn evaluated(genes: Vec<usize>, matrix: &DistanceMatrix) -> Self {
        debug_assert!(is_permutation(&genes, matrix.size()));
        let cost = tour_cost(&genes, matrix);
        Self { genes, cost }
    }

    /// City indices in visiting order.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Total cost of the closed tour.
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Inverse cost. Higher is better.
    pub fn fitness(&self) -> f64 {
        1.0 / self.cost as f64
    }

    /// Returns `true` if the genes are a permutation of `0..n`.
    pub fn is_valid_permutation(&self, n: usize) -> bool {
        is_permutation(&self.genes, n)
    }
}

/// Renders the closed tour, repeating the start city at the end:
/// `0 -> 2 -> 1 -> 0`.
impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.genes {
            write!(f, "{gene} -> ")?;
        }
        match self.genes.first() {
            Some(first) => write!(f, "{first}"),
            None => Ok(()),
        }
    }
}

/// Returns `true` if `genes` contains every value of `0..n` exactly once.
pub fn is_permutation(genes: &[usize], n: usize) -> bool {
    if genes.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &g in genes {
        if g >= n || seen[g] {
            return false;
        }
        seen[g] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square(n: usize) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                dm.set(i, j, (i * n + j) as i64 + 1);
            }
        }
        dm
    }

    #[test]
    fn test_random_is_permutation() {
        let dm = square(12);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let c = Chromosome::random(&dm, &mut rng);
            assert!(c.is_valid_permutation(12), "not a permutation: {c:?}");
            assert_eq!(c.cost(), tour_cost(c.genes(), &dm));
        }
    }

    #[test]
    fn test_random_produces_variety() {
        let dm = square(8);
        let mut rng = StdRng::seed_from_u64(7);
        let first = Chromosome::random(&dm, &mut rng);
        let differs = (0..50).any(|_| Chromosome::random(&dm, &mut rng) != first);
        assert!(differs, "shuffle should not keep returning the same tour");
    }

    #[test]
    fn test_from_genes_rejects_duplicates() {
        let dm = square(4);
        let err = Chromosome::from_genes(vec![0, 1, 1, 3], &dm).unwrap_err();
        assert!(matches!(err, GaError::InvalidPermutation { cities: 4, .. }));
    }

    #[test]
    fn test_from_genes_rejects_wrong_length_and_range() {
        let dm = square(3);
        assert!(Chromosome::from_genes(vec![0, 1], &dm).is_err());
        assert!(Chromosome::from_genes(vec![0, 1, 3], &dm).is_err());
    }

    #[test]
    fn test_fitness_is_inverse_cost() {
        let dm = square(3);
        let c = Chromosome::from_genes(vec![0, 1, 2], &dm).expect("valid");
        assert!((c.fitness() - 1.0 / c.cost() as f64).abs() < 1e-15);
    }

    #[test]
    fn test_display_closes_tour() {
        let dm = square(3);
        let c = Chromosome::from_genes(vec![2, 0, 1], &dm).expect("valid");
        assert_eq!(c.to_string(), "2 -> 0 -> 1 -> 2");
    }
}
