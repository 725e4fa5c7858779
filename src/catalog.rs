//! Product catalog loading and lookup.
//!
//! The catalog is an immutable, in-memory list of products supplied by an
//! external source (a JSON file here). Spec fields are validated once at
//! load time; the engine never reaches into untyped spec bags afterwards.

use crate::error::CatalogError;
use crate::model::Product;
use std::collections::HashSet;
use std::path::Path;

/// An immutable product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Loads a catalog from a JSON file containing an array of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::FileRead`] if the file cannot be read,
    /// [`CatalogError::Json`] if the JSON is malformed, and
    /// [`CatalogError::Invalid`] if products carry empty or duplicate ids
    /// or empty names.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content =
            std::fs::read_to_string(&path).map_err(|source| CatalogError::FileRead {
                path: path.as_ref().to_path_buf(),
                source,
            })?;
        Self::from_json(&content)
    }

    /// Parses and validates a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] or [`CatalogError::Invalid`] as in
    /// [`Catalog::load`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for product in &products {
            if product.id.is_empty() {
                return Err(CatalogError::Invalid {
                    message: format!("product '{}' has an empty id", product.name),
                });
            }
            if product.name.is_empty() {
                return Err(CatalogError::Invalid {
                    message: format!("product '{}' has an empty name", product.id),
                });
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::Invalid {
                    message: format!("duplicate product id '{}'", product.id),
                });
            }
        }

        Ok(Self { products })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
