//! Core trait definitions for the GA engine.
//!
//! [`Individual`] and [`GaProblem`] form the contract between the generic
//! evolutionary loop and a concrete problem such as shelf allocation.

use super::runner::GenerationStats;
use rand::Rng;

/// Marker trait for fitness values.
///
/// Lower fitness is considered better (minimization). For penalty-based
/// problems zero means every constraint is satisfied.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for individuals that have not been evaluated yet.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness value. The runner calls
/// [`GaProblem::evaluate`] and stores the result via
/// [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone + Send + Sync {
    /// The fitness type.
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// Implementors supply:
///
/// 1. **Initialization**: how to create a random individual
/// 2. **Evaluation**: how to compute fitness (pure, no side effects)
/// 3. **Crossover**: how to combine two parents into one child
/// 4. **Mutation**: how to perturb a child, gene by gene
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel when the `parallel` feature is enabled.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Produces one child by recombining two parents.
    ///
    /// The default implementation clones `parent1` (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Mutates an individual in place.
    ///
    /// `rate` is the per-gene mutation probability from
    /// [`GaConfig::mutation_rate`](super::GaConfig::mutation_rate).
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rate: f64, _rng: &mut R) {}

    /// Called after every evaluated generation.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _stats: &GenerationStats<<Self::Individual as Individual>::Fitness>) {}
}
