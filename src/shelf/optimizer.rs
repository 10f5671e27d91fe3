//! End-to-end optimization entry point.

use super::assignment::Assignment;
use super::fitness::{breakdown, PenaltyBreakdown};
use super::problem::{GenerationObserver, ShelfProblem};
use crate::catalog::Catalog;
use crate::error::{AllocError, Result};
use crate::ga::{GaConfig, GaRunner, GenerationStats};
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

/// Outcome of an optimization run: the best-ever assignment and its score.
#[derive(Debug, Clone)]
pub struct Allocation {
    /// Best-ever assignment as product id → shelf id.
    pub assignment: BTreeMap<String, String>,
    /// Same assignment in index form.
    pub best: Assignment,
    /// Total penalty of `best`.
    pub penalty: f64,
    pub breakdown: PenaltyBreakdown,
    /// Number of generations evaluated.
    pub generations: usize,
    /// Whether the target penalty (zero by default) was reached.
    pub converged: bool,
    pub cancelled: bool,
    /// Best-ever penalty after each generation.
    pub penalty_history: Vec<f64>,
    /// Mean penalty of the random initial population.
    pub initial_mean: f64,
}

/// Runs the GA over a validated catalog.
///
/// ```
/// use shelf_alloc::catalog::sample_catalog;
/// use shelf_alloc::ga::GaConfig;
/// use shelf_alloc::shelf::ShelfOptimizer;
///
/// let catalog = sample_catalog().unwrap();
/// let allocation = ShelfOptimizer::new(&catalog, GaConfig::default().with_seed(3))
///     .with_observer(|stats| assert!(stats.best_fitness >= 0.0))
///     .run()
///     .unwrap();
/// assert!(allocation.penalty <= allocation.initial_mean);
/// ```
pub struct ShelfOptimizer<'a> {
    catalog: &'a Catalog,
    config: GaConfig,
    observer: Option<Box<GenerationObserver<'a>>>,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a> ShelfOptimizer<'a> {
    pub fn new(catalog: &'a Catalog, config: GaConfig) -> Self {
        Self {
            catalog,
            config,
            observer: None,
            cancel: None,
        }
    }

    /// Registers a callback invoked after every generation.
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&GenerationStats<f64>) + Send + Sync + 'a,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Registers a flag that stops the run between generations once set.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Validates the configuration and runs the search.
    ///
    /// # Errors
    ///
    /// [`AllocError::InvalidConfiguration`] if the configuration is rejected.
    /// The search itself cannot fail.
    pub fn run(&self) -> Result<Allocation> {
        self.config
            .validate()
            .map_err(AllocError::InvalidConfiguration)?;

        info!(
            products = self.catalog.products().len(),
            shelves = self.catalog.shelves().len(),
            "optimizing shelf allocation"
        );

        let mut problem = ShelfProblem::new(self.catalog);
        if let Some(observer) = self.observer.as_deref() {
            problem = problem.with_observer(observer);
        }

        let result = GaRunner::run_with_cancel(&problem, &self.config, self.cancel.clone())
            .map_err(AllocError::InvalidConfiguration)?;

        let breakdown = breakdown(&result.best, self.catalog);
        for (rule, count, penalty) in breakdown.violated() {
            info!(
                rule = rule.name(),
                violations = count,
                penalty,
                "rule violated by best allocation"
            );
        }

        Ok(Allocation {
            assignment: result.best.to_ids(self.catalog),
            penalty: result.best_fitness,
            breakdown,
            best: result.best,
            generations: result.generations,
            converged: result.converged,
            cancelled: result.cancelled,
            penalty_history: result.fitness_history,
            initial_mean: result.initial_mean,
        })
    }
}

/// Scores an externally supplied id-keyed assignment.
///
/// # Errors
///
/// [`AllocError::UnknownReference`] or [`AllocError::Unassigned`] if the map
/// does not cover the catalog exactly.
pub fn score(catalog: &Catalog, assignment: &BTreeMap<String, String>) -> Result<PenaltyBreakdown> {
    let assignment = Assignment::from_ids(catalog, assignment)?;
    Ok(breakdown(&assignment, catalog))
}
