//! Generic operators for index-encoded chromosomes.
//!
//! A chromosome is a slice where position `i` holds the value (allele)
//! chosen for gene `i`, e.g. the shelf index assigned to product `i`.
//!
//! - [`uniform_crossover`]: each gene copied from either parent with p = 0.5
//! - [`random_reset_mutation`]: each gene redrawn uniformly with p = `rate`
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, §4.2

use rand::Rng;

/// Uniform crossover.
///
/// Every gene of the child comes from `parent1` with probability 0.5,
/// otherwise from `parent2`. The child never holds a value absent from
/// both parents at the same position.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn uniform_crossover<T: Copy, R: Rng>(parent1: &[T], parent2: &[T], rng: &mut R) -> Vec<T> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect()
}

/// Random-reset mutation.
///
/// With probability `rate` each gene is replaced by a value drawn
/// uniformly from `0..alleles`. The new value may equal the old one.
/// A `rate` of 0 leaves the genes untouched; 1 redraws every gene.
///
/// # Complexity
/// O(n)
///
/// # Panics
/// Panics if `alleles == 0` and some gene is selected for mutation.
pub fn random_reset_mutation<R: Rng>(genes: &mut [usize], alleles: usize, rate: f64, rng: &mut R) {
    for gene in genes.iter_mut() {
        if rng.random::<f64>() < rate {
            *gene = rng.random_range(0..alleles);
        }
    }
}
