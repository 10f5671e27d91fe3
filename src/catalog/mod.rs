//! Product and shelf catalog.
//!
//! A [`Catalog`] is validated once on construction (non-empty, unique ids,
//! positive finite weights and capacities). Everything downstream works on
//! dense indices: product `i` is `catalog.products()[i]`, shelf `s` is
//! `catalog.shelves()[s]`. Categories and compatibility groups are likewise
//! interned to dense indices so the fitness evaluator never hashes strings.

mod file;
mod sample;
mod types;

pub use file::CatalogFile;
pub use sample::{sample_catalog, sample_products, sample_shelves};
pub use types::{Product, Shelf, ShelfType};

use crate::error::{AllocError, RefKind, Result};
use std::collections::HashMap;

/// Validated, immutable set of products and shelves.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    shelves: Vec<Shelf>,
    product_index: HashMap<String, usize>,
    shelf_index: HashMap<String, usize>,
    /// Interned category per product.
    category_of: Vec<usize>,
    categories: Vec<String>,
    /// Interned compatibility group per product.
    group_of: Vec<Option<usize>>,
    groups: Vec<String>,
}

impl Catalog {
    /// Validates and indexes a catalog.
    ///
    /// # Errors
    ///
    /// - [`AllocError::InvalidConfiguration`] for empty collections or
    ///   non-positive / non-finite weights and capacities
    /// - [`AllocError::DuplicateId`] when a product or shelf id repeats
    pub fn new(products: Vec<Product>, shelves: Vec<Shelf>) -> Result<Self> {
        if products.is_empty() {
            return Err(AllocError::InvalidConfiguration(
                "catalog has no products".into(),
            ));
        }
        if shelves.is_empty() {
            return Err(AllocError::InvalidConfiguration(
                "catalog has no shelves".into(),
            ));
        }

        let mut product_index = HashMap::with_capacity(products.len());
        for (i, p) in products.iter().enumerate() {
            if !(p.weight.is_finite() && p.weight > 0.0) {
                return Err(AllocError::InvalidConfiguration(format!(
                    "product {} has non-positive weight {}",
                    p.id, p.weight
                )));
            }
            if product_index.insert(p.id.clone(), i).is_some() {
                return Err(AllocError::DuplicateId {
                    kind: RefKind::Product,
                    id: p.id.clone(),
                });
            }
        }

        let mut shelf_index = HashMap::with_capacity(shelves.len());
        for (i, s) in shelves.iter().enumerate() {
            if !(s.capacity.is_finite() && s.capacity > 0.0) {
                return Err(AllocError::InvalidConfiguration(format!(
                    "shelf {} has non-positive capacity {}",
                    s.id, s.capacity
                )));
            }
            if shelf_index.insert(s.id.clone(), i).is_some() {
                return Err(AllocError::DuplicateId {
                    kind: RefKind::Shelf,
                    id: s.id.clone(),
                });
            }
        }

        let (category_of, categories) = intern(products.iter().map(|p| Some(p.category.as_str())));
        let category_of = category_of.into_iter().flatten().collect();
        let (group_of, groups) = intern(products.iter().map(|p| p.compat_group.as_deref()));

        Ok(Self {
            products,
            shelves,
            product_index,
            shelf_index,
            category_of,
            categories,
            group_of,
            groups,
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    /// Index of the product with the given id.
    pub fn product_index(&self, id: &str) -> Result<usize> {
        self.product_index
            .get(id)
            .copied()
            .ok_or_else(|| AllocError::UnknownReference {
                kind: RefKind::Product,
                id: id.to_string(),
            })
    }

    /// Index of the shelf with the given id.
    pub fn shelf_index(&self, id: &str) -> Result<usize> {
        self.shelf_index
            .get(id)
            .copied()
            .ok_or_else(|| AllocError::UnknownReference {
                kind: RefKind::Shelf,
                id: id.to_string(),
            })
    }

    /// Interned category index of product `product`.
    pub fn category_of(&self, product: usize) -> usize {
        self.category_of[product]
    }

    /// Distinct category names, indexed by [`category_of`](Self::category_of).
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Interned compatibility group of product `product`, if any.
    pub fn group_of(&self, product: usize) -> Option<usize> {
        self.group_of[product]
    }

    /// Distinct compatibility group names.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}

/// Maps each optional key to a dense index in first-seen order.
fn intern<'a>(keys: impl Iterator<Item = Option<&'a str>>) -> (Vec<Option<usize>>, Vec<String>) {
    let mut names: Vec<String> = Vec::new();
    let mut lookup: HashMap<&'a str, usize> = HashMap::new();
    let indices = keys
        .map(|key| {
            key.map(|k| {
                *lookup.entry(k).or_insert_with(|| {
                    names.push(k.to_string());
                    names.len() - 1
                })
            })
        })
        .collect();
    (indices, names)
}
