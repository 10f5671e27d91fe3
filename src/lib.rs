//! Retail shelf allocation with a genetic algorithm.
//!
//! Assigns every product of a fixed catalog to exactly one shelf while
//! minimizing the violation of ten placement rules: shelf capacity,
//! accessibility of high-demand and promotional items, refrigeration,
//! hazard separation, category and compatibility grouping, bulky-item
//! restocking, refrigerated consolidation, and theft security.
//!
//! - [`ga`]: the generic evolutionary engine (traits, config, selection,
//!   operators, runner).
//! - [`catalog`]: products, shelves, and the validated [`catalog::Catalog`].
//! - [`shelf`]: the assignment encoding, the penalty evaluator, and the
//!   [`shelf::ShelfOptimizer`] that ties everything together.
//! - [`report`]: tabular rendering of a finished allocation.
//! - [`config`]: TOML run configuration.
//!
//! # Example
//!
//! ```
//! use shelf_alloc::catalog::sample_catalog;
//! use shelf_alloc::ga::GaConfig;
//! use shelf_alloc::shelf::ShelfOptimizer;
//!
//! let catalog = sample_catalog().unwrap();
//! let config = GaConfig::default().with_seed(7).with_max_generations(50);
//! let allocation = ShelfOptimizer::new(&catalog, config).run().unwrap();
//! assert!(allocation.penalty >= 0.0);
//! assert_eq!(allocation.assignment.len(), catalog.products().len());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod ga;
pub mod report;
pub mod shelf;

pub use error::{AllocError, RefKind, Result};
