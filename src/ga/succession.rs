//! Elitist truncation succession.
//!
//! The next population is the `size` cheapest individuals of
//! `parents ++ offspring`. The population the parents were drawn from
//! does not compete, so an individual that was never selected as a parent
//! is dropped even if it beats some of the survivors. The new best is
//! never worse than the best selected parent, but it can be worse than the
//! best of the previous population.

use super::types::Chromosome;

/// Merges parents and offspring, sorts by ascending cost, and keeps the
/// first `size`.
///
/// The sort is stable: among equal costs, parents come before offspring
/// and each pool keeps its own order.
pub fn succession(
    parents: Vec<Chromosome>,
    offspring: Vec<Chromosome>,
    size: usize,
) -> Vec<Chromosome> {
    let mut pool = parents;
    pool.extend(offspring);
    sort_by_cost(&mut pool);
    pool.truncate(size);
    pool
}

/// Sorts a population by ascending tour cost (best first).
pub fn sort_by_cost(population: &mut [Chromosome]) {
    population.sort_by_key(Chromosome::cost);
}
