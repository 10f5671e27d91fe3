//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives the generational cycle:
//! initialization → evaluation → best tracking → selection → crossover →
//! mutation → replacement → evaluation → …
//!
//! The best-ever individual is tracked outside the breeding population and
//! is never reinjected into it. The run stops when the generation budget is
//! spent, the best-ever fitness reaches [`GaConfig::target_fitness`], or a
//! cancellation flag is raised between generations.

use super::config::GaConfig;
use super::selection::tournament;
use super::types::{Fitness, GaProblem, Individual};
use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Per-generation summary passed to [`GaProblem::on_generation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats<F: Fitness> {
    /// 1-based index of the generation just evaluated.
    pub generation: usize,

    /// Best-ever fitness after this generation.
    pub best_fitness: F,

    /// Best fitness within this generation alone.
    pub generation_best: F,

    /// Mean fitness of this generation.
    pub mean_fitness: f64,

    /// Whether this generation improved the best-ever fitness.
    pub improved: bool,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Number of generations evaluated.
    pub generations: usize,

    /// Whether the run stopped because the target fitness was reached.
    pub converged: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best-ever fitness after each generation. Never increases.
    pub fitness_history: Vec<f64>,

    /// Mean fitness of the initial (randomly generated) population.
    pub initial_mean: f64,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// Returns `Err` with a description if the configuration is invalid.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, String> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is checked once per generation, after evaluation and best
    /// tracking and before reproduction. When it is set the run returns the
    /// best individual found so far.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>, String> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        info!(
            seed,
            population_size = config.population_size,
            max_generations = config.max_generations,
            mutation_rate = config.mutation_rate,
            tournament_size = config.tournament_size,
            "GA run started"
        );

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        // 2. Evaluate initial population and seed the champion
        evaluate_population(problem, &mut population, config.parallel);
        let initial_mean = mean_fitness(&population);
        let mut best = find_best(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations);
        fitness_history.push(best.fitness().to_f64());

        let first = GenerationStats {
            generation: 1,
            best_fitness: best.fitness(),
            generation_best: best.fitness(),
            mean_fitness: initial_mean,
            improved: true,
        };
        report_generation(problem, &first);

        let mut generations = 1usize;
        let mut converged = reached_target(config, best.fitness());
        let mut cancelled = false;

        // 3. Evolutionary loop
        while !converged && generations < config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            population = reproduce(problem, config, &population, &mut rng);
            evaluate_population(problem, &mut population, config.parallel);
            generations += 1;

            // Strictly better only: ties keep the earlier champion
            let gen_best = find_best(&population);
            let generation_best = gen_best.fitness();
            let improved = generation_best < best.fitness();
            if improved {
                best = gen_best.clone();
                info!(
                    generation = generations,
                    best_fitness = best.fitness().to_f64(),
                    "new best solution"
                );
            }
            fitness_history.push(best.fitness().to_f64());

            let stats = GenerationStats {
                generation: generations,
                best_fitness: best.fitness(),
                generation_best,
                mean_fitness: mean_fitness(&population),
                improved,
            };
            report_generation(problem, &stats);

            converged = reached_target(config, best.fitness());
        }

        info!(
            generations,
            best_fitness = best.fitness().to_f64(),
            converged,
            cancelled,
            "GA run finished"
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            converged,
            cancelled,
            fitness_history,
            initial_mean,
        })
    }
}

/// Builds the next generation from the current one.
///
/// Parents are drawn by two independent tournaments over the current
/// population, so the same individual may fill both roles.
fn reproduce<P: GaProblem>(
    problem: &P,
    config: &GaConfig,
    population: &[P::Individual],
    rng: &mut StdRng,
) -> Vec<P::Individual> {
    let mut next_gen = Vec::with_capacity(config.population_size);
    while next_gen.len() < config.population_size {
        let p1 = tournament(population, config.tournament_size, rng);
        let p2 = tournament(population, config.tournament_size, rng);

        let mut child = problem.crossover(&population[p1], &population[p2], rng);
        problem.mutate(&mut child, config.mutation_rate, rng);
        next_gen.push(child);
    }
    next_gen
}

/// Evaluate all individuals in the population.
///
/// Each evaluation writes only to its own individual, so the parallel path
/// needs no locking.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            population.par_iter_mut().for_each(|ind| {
                let f = problem.evaluate(ind);
                ind.set_fitness(f);
            });
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Find the individual with the best (lowest) fitness.
///
/// Ties resolve to the earliest individual.
fn find_best<I: Individual>(population: &[I]) -> &I {
    let mut best = &population[0];
    for ind in &population[1..] {
        if ind.fitness() < best.fitness() {
            best = ind;
        }
    }
    best
}

fn mean_fitness<I: Individual>(population: &[I]) -> f64 {
    let total: f64 = population.iter().map(|ind| ind.fitness().to_f64()).sum();
    total / population.len() as f64
}

fn reached_target<F: Fitness>(config: &GaConfig, fitness: F) -> bool {
    config
        .target_fitness
        .is_some_and(|target| fitness.to_f64() <= target)
}

fn report_generation<P: GaProblem>(
    problem: &P,
    stats: &GenerationStats<<P::Individual as Individual>::Fitness>,
) {
    debug!(
        generation = stats.generation,
        best_fitness = stats.best_fitness.to_f64(),
        generation_best = stats.generation_best.to_f64(),
        mean_fitness = stats.mean_fitness,
        improved = stats.improved,
        "generation evaluated"
    );
    problem.on_generation(stats);
}

// ============================================================================
// Tests
// ============================================================================
