//! Full runs over the built-in grocery catalog.

use rand::rngs::StdRng;
use rand::SeedableRng;
use shelf_alloc::catalog::sample_catalog;
use shelf_alloc::ga::GaConfig;
use shelf_alloc::shelf::{evaluate, initialize_population, score, ShelfOptimizer};

fn paper_config(seed: u64) -> GaConfig {
    GaConfig::default()
        .with_population_size(50)
        .with_max_generations(200)
        .with_mutation_rate(0.1)
        .with_seed(seed)
}

#[test]
fn sample_run_improves_on_random_population() {
    let catalog = sample_catalog().unwrap();

    for seed in [1, 2, 3] {
        let allocation = ShelfOptimizer::new(&catalog, paper_config(seed)).run().unwrap();

        assert!(
            allocation.penalty < allocation.initial_mean / 2.0,
            "seed {seed}: best {} not materially below initial mean {}",
            allocation.penalty,
            allocation.initial_mean
        );
        for w in allocation.penalty_history.windows(2) {
            assert!(w[1] <= w[0], "seed {seed}: best-ever regressed {} -> {}", w[0], w[1]);
        }
        assert_eq!(*allocation.penalty_history.last().unwrap(), allocation.penalty);
        if allocation.converged {
            assert_eq!(allocation.penalty, 0.0);
        } else {
            assert_eq!(allocation.generations, 200);
        }
    }
}

#[test]
fn sample_run_is_reproducible() {
    let catalog = sample_catalog().unwrap();
    let a = ShelfOptimizer::new(&catalog, paper_config(99)).run().unwrap();
    let b = ShelfOptimizer::new(&catalog, paper_config(99)).run().unwrap();

    assert_eq!(a.assignment, b.assignment);
    assert_eq!(a.penalty_history, b.penalty_history);
}

#[test]
fn best_allocation_rescores_identically() {
    let catalog = sample_catalog().unwrap();
    let allocation = ShelfOptimizer::new(&catalog, paper_config(5)).run().unwrap();

    let breakdown = score(&catalog, &allocation.assignment).unwrap();
    assert_eq!(breakdown.total(), allocation.penalty);
}

#[test]
fn random_population_is_far_from_perfect() {
    let catalog = sample_catalog().unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let population = initialize_population(50, &catalog, &mut rng);

    let mean: f64 =
        population.iter().map(|a| evaluate(a, &catalog)).sum::<f64>() / population.len() as f64;
    assert!(mean > 50.0, "random layouts should violate plenty of rules, mean {mean}");
}
