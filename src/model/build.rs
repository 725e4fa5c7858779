use super::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category slug → selected items. A key is present only while its list
/// is non-empty; single-select categories hold at most one item.
pub type SelectionMap = BTreeMap<String, Vec<BuilderItem>>;

/// A product selected into a build slot, with quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderItem {
    pub product: Product,
    pub quantity: u32,
}

impl BuilderItem {
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Line total: unit price × quantity.
    #[must_use]
    pub fn line_price(&self) -> u64 {
        self.product.price * u64::from(self.quantity)
    }
}

/// A flattened cart line, independent of the build selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: String,
    pub quantity: u32,
}

impl CartItem {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            quantity: 1,
        }
    }
}

/// The persisted shape of a session: selection, cart, and compare list.
/// Derived totals are not persisted; they are recomputed on restore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    pub selected_parts: SelectionMap,
    pub cart: Vec<CartItem>,
    pub compare_list: Vec<Product>,
}
