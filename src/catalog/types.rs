//! Product and shelf records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product to be placed on exactly one shelf.
///
/// Flags default to `false` when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Weight counted against the capacity of the hosting shelf.
    pub weight: f64,
    pub category: String,
    #[serde(default)]
    pub refrigerated: bool,
    #[serde(default)]
    pub hazardous: bool,
    #[serde(default)]
    pub high_demand: bool,
    #[serde(default)]
    pub bulky: bool,
    #[serde(default)]
    pub promotional: bool,
    #[serde(default)]
    pub expensive: bool,
    /// Products sharing a group should share a shelf, regardless of category.
    #[serde(default)]
    pub compat_group: Option<String>,
}

impl Product {
    /// Creates a product with all flags cleared and no compatibility group.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        weight: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight,
            category: category.into(),
            refrigerated: false,
            hazardous: false,
            high_demand: false,
            bulky: false,
            promotional: false,
            expensive: false,
            compat_group: None,
        }
    }

    pub fn refrigerated(mut self) -> Self {
        self.refrigerated = true;
        self
    }

    pub fn hazardous(mut self) -> Self {
        self.hazardous = true;
        self
    }

    pub fn high_demand(mut self) -> Self {
        self.high_demand = true;
        self
    }

    pub fn bulky(mut self) -> Self {
        self.bulky = true;
        self
    }

    pub fn promotional(mut self) -> Self {
        self.promotional = true;
        self
    }

    pub fn expensive(mut self) -> Self {
        self.expensive = true;
        self
    }

    pub fn with_compat_group(mut self, group: impl Into<String>) -> Self {
        self.compat_group = Some(group.into());
        self
    }
}

/// Kind of shelf. Several placement rules match on it.
///
/// Serialized as its kebab-case name; unrecognized names are kept verbatim
/// in [`ShelfType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShelfType {
    Checkout,
    Lower,
    EyeLevel,
    General,
    Refrigerated,
    Hazardous,
    Other(String),
}

impl ShelfType {
    pub fn as_str(&self) -> &str {
        match self {
            ShelfType::Checkout => "checkout",
            ShelfType::Lower => "lower",
            ShelfType::EyeLevel => "eye-level",
            ShelfType::General => "general",
            ShelfType::Refrigerated => "refrigerated",
            ShelfType::Hazardous => "hazardous",
            ShelfType::Other(name) => name,
        }
    }
}

impl From<String> for ShelfType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "checkout" => ShelfType::Checkout,
            "lower" => ShelfType::Lower,
            "eye-level" => ShelfType::EyeLevel,
            "general" => ShelfType::General,
            "refrigerated" => ShelfType::Refrigerated,
            "hazardous" => ShelfType::Hazardous,
            _ => ShelfType::Other(name),
        }
    }
}

impl From<&str> for ShelfType {
    fn from(name: &str) -> Self {
        ShelfType::from(name.to_string())
    }
}

impl From<ShelfType> for String {
    fn from(shelf_type: ShelfType) -> Self {
        match shelf_type {
            ShelfType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ShelfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shelf that can host any number of products up to its weight capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    pub id: String,
    pub name: String,
    pub shelf_type: ShelfType,
    /// Total product weight the shelf may hold.
    pub capacity: f64,
    #[serde(default)]
    pub accessible: bool,
    #[serde(default)]
    pub secure: bool,
}

impl Shelf {
    /// Creates a shelf that is neither accessible nor secure.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        shelf_type: impl Into<ShelfType>,
        capacity: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            shelf_type: shelf_type.into(),
            capacity,
            accessible: false,
            secure: false,
        }
    }

    pub fn accessible(mut self) -> Self {
        self.accessible = true;
        self
    }

    pub fn secure(mut self) -> Self {
        self.secure = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_type_names() {
        for (name, ty) in [
            ("checkout", ShelfType::Checkout),
            ("lower", ShelfType::Lower),
            ("eye-level", ShelfType::EyeLevel),
            ("general", ShelfType::General),
            ("refrigerated", ShelfType::Refrigerated),
            ("hazardous", ShelfType::Hazardous),
        ] {
            assert_eq!(ShelfType::from(name), ty);
            assert_eq!(ty.as_str(), name);
        }
    }

    #[test]
    fn test_shelf_type_extensible() {
        let ty = ShelfType::from("freezer");
        assert_eq!(ty, ShelfType::Other("freezer".into()));
        assert_eq!(ty.to_string(), "freezer");
        assert_eq!(String::from(ty), "freezer");
    }

    #[test]
    fn test_product_builder_flags() {
        let p = Product::new("P1", "Milk", 5.0, "dairy")
            .high_demand()
            .with_compat_group("breakfast");
        assert!(p.high_demand);
        assert!(!p.refrigerated && !p.hazardous && !p.bulky);
        assert!(!p.promotional && !p.expensive);
        assert_eq!(p.compat_group.as_deref(), Some("breakfast"));
    }

    #[test]
    fn test_product_flags_default_when_deserialized() {
        let p: Product = toml::from_str(
            r#"
            id = "P2"
            name = "Rice Bag"
            weight = 10
            category = "grains"
            bulky = true
            "#,
        )
        .unwrap();
        assert!(p.bulky);
        assert!(!p.high_demand);
        assert!(p.compat_group.is_none());
        assert_eq!(p.weight, 10.0);
    }
}
