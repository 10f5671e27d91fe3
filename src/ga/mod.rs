//! Genetic Algorithm engine.
//!
//! A generic GA built on trait-based abstractions. A problem plugs in by
//! implementing [`GaProblem`], which specifies how to create, evaluate,
//! crossover, and mutate individuals.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, budget)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with statistics
//! - [`GenerationStats`]: Per-generation summary for observers
//!
//! # Submodules
//!
//! - [`operators`]: Uniform crossover and random-reset mutation for
//!   index-encoded chromosomes
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::{tournament, tournament_by};
pub use types::{Fitness, GaProblem, Individual};
