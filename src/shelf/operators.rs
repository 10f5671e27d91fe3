//! Shelf-level initialization, selection, crossover, and mutation.
//!
//! Thin wrappers binding the generic GA operators to [`Assignment`] and a
//! [`Catalog`]. The random source is always passed in, so a seeded
//! generator makes every call reproducible.

use super::assignment::Assignment;
use crate::catalog::Catalog;
use crate::ga::operators::{random_reset_mutation, uniform_crossover};
use crate::ga::tournament_by;
use rand::Rng;

/// Creates one assignment with every product on a uniformly random shelf.
pub fn random_assignment<R: Rng>(catalog: &Catalog, rng: &mut R) -> Assignment {
    let n_shelves = catalog.shelves().len();
    let genes = (0..catalog.products().len())
        .map(|_| rng.random_range(0..n_shelves))
        .collect();
    Assignment::from_genes(genes)
}

/// Creates `size` independent random assignments.
///
/// No rule is consulted; feasibility is left to selection pressure.
pub fn initialize_population<R: Rng>(
    size: usize,
    catalog: &Catalog,
    rng: &mut R,
) -> Vec<Assignment> {
    (0..size).map(|_| random_assignment(catalog, rng)).collect()
}

/// Tournament selection over a population and its parallel score list.
///
/// Samples `k` distinct individuals and returns the lowest-scoring one
/// (first drawn wins ties).
///
/// # Panics
/// Panics if `population` is empty or `scores` is shorter than it.
pub fn select<'p, R: Rng>(
    population: &'p [Assignment],
    scores: &[f64],
    k: usize,
    rng: &mut R,
) -> &'p Assignment {
    assert!(
        scores.len() >= population.len(),
        "one score per individual required"
    );
    let winner = tournament_by(population.len(), k, rng, |i| scores[i]);
    &population[winner]
}

/// Uniform crossover: each product keeps one parent's shelf, 50/50.
///
/// The child is unevaluated.
pub fn crossover<R: Rng>(parent_a: &Assignment, parent_b: &Assignment, rng: &mut R) -> Assignment {
    Assignment::from_genes(uniform_crossover(parent_a.genes(), parent_b.genes(), rng))
}

/// Returns a copy where each product moves to a uniformly random shelf
/// with probability `rate`. The input is left untouched.
pub fn mutate<R: Rng>(
    assignment: &Assignment,
    catalog: &Catalog,
    rate: f64,
    rng: &mut R,
) -> Assignment {
    let mut child = Assignment::from_genes(assignment.genes().to_vec());
    mutate_in_place(&mut child, catalog, rate, rng);
    child
}

pub(crate) fn mutate_in_place<R: Rng>(
    assignment: &mut Assignment,
    catalog: &Catalog,
    rate: f64,
    rng: &mut R,
) {
    random_reset_mutation(assignment.genes_mut(), catalog.shelves().len(), rate, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_catalog, Product, Shelf};
    use crate::ga::Individual;
    use crate::shelf::fitness::evaluate;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initialize_population_shape() {
        let catalog = sample_catalog().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let pop = initialize_population(50, &catalog, &mut rng);

        assert_eq!(pop.len(), 50);
        for a in &pop {
            assert!(a.check(&catalog).is_ok());
        }
        // Random genes: not every individual is the same
        assert!(pop.iter().any(|a| a.genes() != pop[0].genes()));
    }

    #[test]
    fn test_initialize_uses_every_shelf() {
        let catalog = sample_catalog().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let pop = initialize_population(100, &catalog, &mut rng);

        let mut used = [false; 6];
        for a in &pop {
            for &s in a.genes() {
                used[s] = true;
            }
        }
        assert!(used.iter().all(|&u| u));
    }

    #[test]
    fn test_select_full_tournament_returns_minimum() {
        let catalog = sample_catalog().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let pop = initialize_population(5, &catalog, &mut rng);
        let scores = [40.0, 15.0, 90.0, 5.0, 60.0];

        for _ in 0..100 {
            let winner = select(&pop, &scores, 5, &mut rng);
            assert!(std::ptr::eq(winner, &pop[3]));
        }
    }

    #[test]
    fn test_mutate_rate_zero_is_identity() {
        let catalog = sample_catalog().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let original = random_assignment(&catalog, &mut rng);

        let mutated = mutate(&original, &catalog, 0.0, &mut rng);
        assert_eq!(mutated.genes(), original.genes());
    }

    #[test]
    fn test_mutate_leaves_input_untouched() {
        let catalog = sample_catalog().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut original = random_assignment(&catalog, &mut rng);
        original.set_fitness(evaluate(&original, &catalog));
        let snapshot = original.clone();

        let mutated = mutate(&original, &catalog, 1.0, &mut rng);
        assert_eq!(original, snapshot);
        assert!(mutated.check(&catalog).is_ok());
        assert!(mutated.penalty().is_infinite());
    }

    #[test]
    fn test_mutate_rate_one_redraws_every_product() {
        let products = (0..300)
            .map(|i| Product::new(format!("P{i}"), "item", 1.0, "misc"))
            .collect();
        let shelves = (0..6)
            .map(|i| Shelf::new(format!("S{i}"), "shelf", "general", 500.0))
            .collect();
        let catalog = Catalog::new(products, shelves).unwrap();
        let original = Assignment::try_from_genes(&catalog, vec![0; 300]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mutated = mutate(&original, &catalog, 1.0, &mut rng);
        assert!(mutated.check(&catalog).is_ok());
        // A redraw lands back on shelf 0 one time in six
        let moved = mutated.genes().iter().filter(|&&s| s != 0).count();
        assert!(moved > 200, "expected most products to move, got {moved}/300");
        assert!(original.genes().iter().all(|&s| s == 0));
    }

    proptest! {
        #[test]
        fn prop_crossover_inherits_from_parents(seed in any::<u64>()) {
            let catalog = sample_catalog().unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let a = random_assignment(&catalog, &mut rng);
            let b = random_assignment(&catalog, &mut rng);

            let child = crossover(&a, &b, &mut rng);
            for p in 0..catalog.products().len() {
                let s = child.shelf_of(p);
                prop_assert!(s == a.shelf_of(p) || s == b.shelf_of(p));
            }
        }

        #[test]
        fn prop_select_returns_a_member(seed in any::<u64>(), k in 1usize..=8) {
            let catalog = sample_catalog().unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let pop = initialize_population(8, &catalog, &mut rng);
            let scores: Vec<f64> = pop.iter().map(|a| evaluate(a, &catalog)).collect();

            let winner = select(&pop, &scores, k, &mut rng);
            let idx = pop.iter().position(|a| std::ptr::eq(a, winner));
            prop_assert!(idx.is_some());
            // With k = n the winner is the global minimum
            if k == 8 {
                let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
                prop_assert_eq!(scores[idx.unwrap()], min);
            }
        }
    }
}
