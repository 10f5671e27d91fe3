//! Shelf allocation as a [`GaProblem`].

use super::assignment::Assignment;
use super::fitness::evaluate;
use super::operators::{crossover, mutate_in_place, random_assignment};
use crate::catalog::Catalog;
use crate::ga::{GaProblem, GenerationStats};
use rand::Rng;

/// Callback receiving each generation's summary.
pub type GenerationObserver<'a> = dyn Fn(&GenerationStats<f64>) + Send + Sync + 'a;

/// Binds a catalog (and an optional observer) to the GA engine.
pub struct ShelfProblem<'a> {
    catalog: &'a Catalog,
    observer: Option<&'a GenerationObserver<'a>>,
}

impl<'a> ShelfProblem<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: &'a GenerationObserver<'a>) -> Self {
        self.observer = Some(observer);
        self
    }
}

impl GaProblem for ShelfProblem<'_> {
    type Individual = Assignment;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Assignment {
        random_assignment(self.catalog, rng)
    }

    fn evaluate(&self, individual: &Assignment) -> f64 {
        evaluate(individual, self.catalog)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Assignment,
        parent2: &Assignment,
        rng: &mut R,
    ) -> Assignment {
        crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, individual: &mut Assignment, rate: f64, rng: &mut R) {
        mutate_in_place(individual, self.catalog, rate, rng);
    }

    fn on_generation(&self, stats: &GenerationStats<f64>) {
        if let Some(observer) = self.observer {
            observer(stats);
        }
    }
}
