//! TOML catalog files.
//!
//! ```toml
//! [[shelves]]
//! id = "S1"
//! name = "Checkout Display"
//! shelf_type = "checkout"
//! capacity = 8
//! accessible = true
//! secure = true
//!
//! [[products]]
//! id = "P1"
//! name = "Milk"
//! weight = 5
//! category = "dairy"
//! high_demand = true
//! ```

use super::types::{Product, Shelf};
use super::Catalog;
use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Raw, unvalidated catalog as it appears on disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub shelves: Vec<Shelf>,
}

impl CatalogFile {
    /// Parses a catalog from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Validates the raw records into a [`Catalog`].
    pub fn into_catalog(self) -> Result<Catalog> {
        Catalog::new(self.products, self.shelves)
    }
}

impl Catalog {
    /// Parses and validates a catalog from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        CatalogFile::from_toml_str(s)?.into_catalog()
    }

    /// Loads and validates a catalog from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ShelfType;
    use crate::error::AllocError;

    const SMALL: &str = r#"
        [[shelves]]
        id = "R1"
        name = "Refrigerator Zone"
        shelf_type = "refrigerated"
        capacity = 20

        [[shelves]]
        id = "X1"
        name = "Freezer Chest"
        shelf_type = "freezer"
        capacity = 12.5
        secure = true

        [[products]]
        id = "P3"
        name = "Frozen Nuggets"
        weight = 5
        category = "frozen"
        refrigerated = true
        compat_group = "frozen-food"
    "#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_toml_str(SMALL).unwrap();
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.shelves().len(), 2);

        let fridge = &catalog.shelves()[0];
        assert_eq!(fridge.shelf_type, ShelfType::Refrigerated);
        assert!(!fridge.accessible);

        let freezer = &catalog.shelves()[1];
        assert_eq!(freezer.shelf_type, ShelfType::Other("freezer".into()));
        assert!(freezer.secure);
        assert_eq!(freezer.capacity, 12.5);

        let nuggets = &catalog.products()[0];
        assert!(nuggets.refrigerated);
        assert_eq!(nuggets.compat_group.as_deref(), Some("frozen-food"));
    }

    #[test]
    fn test_missing_products_is_invalid() {
        let err = Catalog::from_toml_str(
            r#"
            [[shelves]]
            id = "S1"
            name = "a"
            shelf_type = "general"
            capacity = 1
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, AllocError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = Catalog::from_toml_str("[[products]\nid = ").unwrap_err();
        assert!(matches!(err, AllocError::Toml(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load("/definitely/not/here/catalog.toml").unwrap_err();
        assert!(matches!(err, AllocError::Io(_)));
    }
}
