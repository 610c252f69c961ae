//! Permutation-preserving genetic operators.
//!
//! Crossover and mutation operators for tours encoded as city-index
//! permutations. Every operator takes `&[usize]` genes that form a
//! permutation of `0..n` and returns (or leaves) a permutation of `0..n`.
//!
//! Each random operator has a deterministic `_at` twin that takes the cut
//! or move positions explicitly; the random variant only draws positions.
//!
//! # Crossover Operators
//!
//! - [`order_crossover`] (OX): Davis (1985), preserves relative order
//! - [`pmx_crossover`] (PMX): Goldberg & Lingle (1985), preserves absolute position
//!
//! # Mutation Operators
//!
//! - [`insertion_mutation`]: Remove one city and reinsert it elsewhere, O(n)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Fogel (1988), "An Evolutionary Approach to the Traveling Salesman Problem"

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Order Crossover (OX) for permutations.
///
/// Preserves the **relative order** of the second parent's genes around a
/// fixed segment of the first parent.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Select two distinct cuts `cut1 < cut2`
/// 2. Copy `parent1[cut1..=cut2]` to the child at the same positions
/// 3. Starting right after `cut2` and wrapping around, fill the remaining
///    positions with genes of `parent2` read circularly from `cut2 + 1`,
///    skipping genes already in the child
///
/// Parents shorter than two genes are returned unchanged (`parent1`).
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    if parent1.len() < 2 {
        return parent1.to_vec();
    }
    let (cut1, cut2) = random_cuts(parent1.len(), rng);
    order_crossover_at(parent1, parent2, cut1, cut2)
}

/// OX with explicit cuts. The segment `cut1..=cut2` is inclusive.
///
/// # Panics
/// Panics if `cut1 > cut2`, `cut2` is out of range, or parents differ in
/// length.
pub fn order_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    cut1: usize,
    cut2: usize,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(cut1 <= cut2 && cut2 < n, "invalid cuts {cut1}..={cut2} for length {n}");

    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for i in cut1..=cut2 {
        child[i] = parent1[i];
        placed[parent1[i]] = true;
    }

    let mut pos = (cut2 + 1) % n;
    for offset in 1..=n {
        let gene = parent2[(cut2 + offset) % n];
        if !placed[gene] {
            child[pos] = gene;
            placed[gene] = true;
            pos = (pos + 1) % n;
        }
    }

    child
}

/// Partially Matched Crossover (PMX) for permutations.
///
/// Preserves the **absolute position** of genes from both parents as much
/// as possible.
///
/// # Algorithm (Goldberg & Lingle, 1985)
///
/// 1. Select two distinct cuts `cut1 < cut2`
/// 2. Within `cut1..cut2` (exclusive end), child1 takes `parent2`'s segment
///    and child2 takes `parent1`'s segment, recording the mappings
///    `parent2[i] -> parent1[i]` and `parent1[i] -> parent2[i]`
/// 3. Outside the segment each child starts from its own parent and
///    rewrites every gene through its mapping chain until no mapping applies
///
/// Returns `(child1, child2)`. Parents shorter than two genes are returned
/// unchanged.
///
/// # Complexity
/// O(n) time amortized, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn pmx_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    if parent1.len() < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }
    let (cut1, cut2) = random_cuts(parent1.len(), rng);
    pmx_crossover_at(parent1, parent2, cut1, cut2)
}

/// PMX with explicit cuts. The segment `cut1..cut2` excludes `cut2`.
///
/// # Panics
/// Panics if `cut1 > cut2`, `cut2 > n`, or parents differ in length.
pub fn pmx_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    cut1: usize,
    cut2: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(cut1 <= cut2 && cut2 <= n, "invalid cuts {cut1}..{cut2} for length {n}");

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    let mut mapping1: Vec<Option<usize>> = vec![None; n];
    let mut mapping2: Vec<Option<usize>> = vec![None; n];

    for i in cut1..cut2 {
        mapping1[parent2[i]] = Some(parent1[i]);
        mapping2[parent1[i]] = Some(parent2[i]);
        child1[i] = parent2[i];
        child2[i] = parent1[i];
    }

    for i in (0..cut1).chain(cut2..n) {
        child1[i] = resolve(&mapping1, child1[i]);
        child2[i] = resolve(&mapping2, child2[i]);
    }

    (child1, child2)
}

/// Follows a PMX mapping chain until the gene no longer collides with a
/// swapped-in value. Terminates because the mapping is injective and the
/// starting gene is never a mapping target.
fn resolve(mapping: &[Option<usize>], mut gene: usize) -> usize {
    while let Some(next) = mapping[gene] {
        gene = next;
    }
    gene
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Insertion mutation: move one random city to another random position.
///
/// Picks two distinct positions `from != to`, removes the gene at `from`,
/// and inserts it at index `to` of the shortened sequence. Tours shorter
/// than two genes are left unchanged.
///
/// # Complexity
/// O(n) due to element shifting
pub fn insertion_mutation<R: Rng>(genes: &mut Vec<usize>, rng: &mut R) {
    if genes.len() < 2 {
        return;
    }
    let (from, to) = distinct_positions(genes.len(), rng);
    insertion_mutation_at(genes, from, to);
}

/// Insertion mutation with explicit positions.
///
/// # Panics
/// Panics if either position is out of range.
pub fn insertion_mutation_at(genes: &mut Vec<usize>, from: usize, to: usize) {
    let gene = genes.remove(from);
    genes.insert(to, gene);
}

// ============================================================================
// Helpers
// ============================================================================

/// Two distinct uniform positions in `0..n`, in draw order. Requires `n >= 2`.
fn distinct_positions<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

/// Two distinct cuts in `0..n` with `cut1 < cut2`. Requires `n >= 2`.
fn random_cuts<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let (a, b) = distinct_positions(n, rng);
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
