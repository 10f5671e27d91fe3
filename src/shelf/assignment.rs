//! Index-encoded product → shelf assignment.

use crate::catalog::Catalog;
use crate::error::{AllocError, RefKind, Result};
use crate::ga::{Fitness, Individual};
use std::collections::BTreeMap;

/// A total mapping from products to shelves.
///
/// Gene `i` is the shelf index hosting product `i`. The gene vector always
/// has one entry per catalog product, so no product is ever unassigned.
/// Several products may share a shelf; capacity is only penalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    genes: Vec<usize>,
    penalty: f64,
}

impl Assignment {
    /// Wraps a gene vector without checking it. The penalty starts
    /// unevaluated (infinite).
    pub(crate) fn from_genes(genes: Vec<usize>) -> Self {
        Self {
            genes,
            penalty: f64::worst(),
        }
    }

    /// Builds an assignment from an id-keyed map, checking every reference.
    ///
    /// # Errors
    ///
    /// - [`AllocError::UnknownReference`] for a product or shelf id the
    ///   catalog does not contain
    /// - [`AllocError::Unassigned`] if a catalog product has no entry
    pub fn from_ids(catalog: &Catalog, map: &BTreeMap<String, String>) -> Result<Self> {
        let mut genes: Vec<Option<usize>> = vec![None; catalog.products().len()];
        for (product_id, shelf_id) in map {
            let p = catalog.product_index(product_id)?;
            genes[p] = Some(catalog.shelf_index(shelf_id)?);
        }

        let genes = genes
            .into_iter()
            .enumerate()
            .map(|(p, g)| {
                g.ok_or_else(|| AllocError::Unassigned(catalog.products()[p].id.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_genes(genes))
    }

    /// Builds an assignment from shelf indices, gene `i` for product `i`.
    ///
    /// # Errors
    ///
    /// - [`AllocError::Unassigned`] if there are fewer genes than products
    /// - [`AllocError::UnknownReference`] for a gene past the last product or
    ///   a shelf index past the last shelf
    pub fn try_from_genes(catalog: &Catalog, genes: Vec<usize>) -> Result<Self> {
        let assignment = Self::from_genes(genes);
        assignment.check(catalog)?;
        Ok(assignment)
    }

    /// Checks that the genes fit `catalog`: one gene per product, every
    /// shelf index in range.
    pub(crate) fn check(&self, catalog: &Catalog) -> Result<()> {
        let products = catalog.products();
        if let Some(missing) = products.get(self.genes.len()) {
            return Err(AllocError::Unassigned(missing.id.clone()));
        }
        if self.genes.len() > products.len() {
            return Err(AllocError::UnknownReference {
                kind: RefKind::Product,
                id: format!("#{}", products.len()),
            });
        }
        if let Some(&bad) = self.genes.iter().find(|&&s| s >= catalog.shelves().len()) {
            return Err(AllocError::UnknownReference {
                kind: RefKind::Shelf,
                id: format!("#{bad}"),
            });
        }
        Ok(())
    }

    /// Converts back to an id-keyed map.
    pub fn to_ids(&self, catalog: &Catalog) -> BTreeMap<String, String> {
        catalog
            .products()
            .iter()
            .zip(&self.genes)
            .map(|(p, &s)| (p.id.clone(), catalog.shelves()[s].id.clone()))
            .collect()
    }

    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Shelf index hosting product `product`.
    pub fn shelf_of(&self, product: usize) -> usize {
        self.genes[product]
    }

    /// Last evaluated penalty, or infinity if never evaluated.
    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [usize] {
        &mut self.genes
    }
}

impl Individual for Assignment {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.penalty
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.penalty = fitness;
    }
}
