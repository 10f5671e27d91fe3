//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use serde::{Deserialize, Serialize};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use shelf_alloc::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 200);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use shelf_alloc::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_tournament_size(4)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of individuals per generation. Stays fixed for the whole run.
    pub population_size: usize,

    /// Hard cap on the number of evaluated generations.
    pub max_generations: usize,

    /// Per-gene mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of individuals sampled (without replacement) per tournament.
    ///
    /// Must not exceed `population_size`.
    pub tournament_size: usize,

    /// Stop as soon as the best-ever fitness drops to or below this value.
    ///
    /// `Some(0.0)` stops on a perfect penalty score. `None` always runs the
    /// full generation budget.
    pub target_fitness: Option<f64>,

    /// Whether to evaluate individuals in parallel.
    ///
    /// Only takes effect when the crate is built with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 200,
            mutation_rate: 0.1,
            tournament_size: 3,
            target_fitness: Some(0.0),
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the early-stop target (`None` to disable).
    pub fn with_target_fitness(mut self, target: Option<f64>) -> Self {
        self.target_fitness = target;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if self.tournament_size > self.population_size {
            return Err(format!(
                "tournament_size ({}) exceeds population_size ({})",
                self.tournament_size, self.population_size
            ));
        }
        if let Some(target) = self.target_fitness {
            if target.is_nan() {
                return Err("target_fitness must not be NaN".into());
            }
        }
        Ok(())
    }
}
