//! Built-in grocery catalog: 9 products on 6 shelves.
//!
//! Used by the CLI when no catalog file is given, and by tests and
//! benchmarks as a realistic small instance. A zero-penalty placement
//! exists for it.

use super::types::{Product, Shelf};
use super::Catalog;
use crate::error::Result;

pub fn sample_shelves() -> Vec<Shelf> {
    vec![
        Shelf::new("S1", "Checkout Display", "checkout", 8.0)
            .accessible()
            .secure(),
        Shelf::new("S2", "Lower Shelf", "lower", 25.0),
        Shelf::new("S4", "Eye-Level Shelf", "eye-level", 15.0).accessible(),
        Shelf::new("S5", "General Aisle Shelf", "general", 20.0).accessible(),
        Shelf::new("R1", "Refrigerator Zone", "refrigerated", 20.0),
        Shelf::new("H1", "Hazardous Item Zone", "hazardous", 10.0).secure(),
    ]
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("P1", "Milk", 5.0, "dairy").high_demand(),
        Product::new("P2", "Rice Bag", 10.0, "grains").bulky(),
        Product::new("P3", "Frozen Nuggets", 5.0, "frozen").refrigerated(),
        Product::new("P4", "Cereal", 3.0, "breakfast").high_demand(),
        Product::new("P5", "Pasta", 2.0, "pasta").with_compat_group("pasta"),
        Product::new("P6", "Pasta Sauce", 3.0, "pasta").with_compat_group("pasta"),
        Product::new("P7", "Detergent", 4.0, "cleaning").hazardous(),
        Product::new("P8", "Glass Cleaner", 5.0, "cleaning").hazardous(),
        Product::new("P9", "Macaroni", 2.0, "pasta").with_compat_group("pasta"),
    ]
}

/// The sample products and shelves as a validated [`Catalog`].
pub fn sample_catalog() -> Result<Catalog> {
    Catalog::new(sample_products(), sample_shelves())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_valid() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.products().len(), 9);
        assert_eq!(catalog.shelves().len(), 6);
        assert_eq!(catalog.groups(), ["pasta"]);
    }
}
