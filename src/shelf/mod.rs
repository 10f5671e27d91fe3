//! Shelf allocation on top of the GA engine.
//!
//! - [`Assignment`]: product → shelf mapping in index form
//! - [`evaluate`] / [`breakdown`]: the ten-rule penalty evaluator
//! - [`initialize_population`], [`select`], [`crossover`], [`mutate`]:
//!   the operators, usable on their own with any seeded RNG
//! - [`ShelfOptimizer`]: validates, runs, and packages an [`Allocation`]

mod assignment;
mod fitness;
mod operators;
mod optimizer;
mod problem;

pub use assignment::Assignment;
pub use fitness::{breakdown, evaluate, PenaltyBreakdown, Rule};
pub use operators::{crossover, initialize_population, mutate, random_assignment, select};
pub use optimizer::{score, Allocation, ShelfOptimizer};
pub use problem::{GenerationObserver, ShelfProblem};
