//! Quotation export: the selected build as CSV or JSON line items.

pub mod csv;
pub mod json;

pub use crate::error::ExportError;
pub use csv::export_csv;
pub use json::export_json;

use crate::engine::BuildStore;
use serde::Serialize;

/// One quoted line: a selected part with its extended price.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteLine {
    pub category: String,
    pub id: String,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
    pub line_total: u64,
}

/// A point-in-time quotation of a build.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub lines: Vec<QuoteLine>,
    pub total_price: u64,
    pub estimated_wattage: u32,
    pub compatibility_issues: Vec<String>,
}

impl Quote {
    #[must_use]
    pub fn from_store(store: &BuildStore) -> Self {
        let lines = store
            .selected_parts()
            .iter()
            .flat_map(|(cat, items)| {
                items.iter().map(|item| QuoteLine {
                    category: cat.clone(),
                    id: item.product.id.clone(),
                    name: item.product.name.clone(),
                    unit_price: item.product.price,
                    quantity: item.quantity,
                    line_total: item.line_price(),
                })
            })
            .collect();

        Self {
            lines,
            total_price: store.total_price(),
            estimated_wattage: store.estimated_wattage(),
            compatibility_issues: store.compatibility_issues().to_vec(),
        }
    }
}
