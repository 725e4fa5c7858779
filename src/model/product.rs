use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A catalog product. Read-only to the engine; the catalog source owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub category: String,
    /// Price in integer currency units.
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub specs: Specs,
}

/// Hardware specs the engine reads, as explicit optional fields.
///
/// Catalog files may carry arbitrary extra spec keys (display-only);
/// those round-trip through `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specs {
    /// Power draw in watts. For power supplies the same key means
    /// supply capacity, not consumption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wattage: Option<u32>,
    /// CPU or motherboard socket identifier, e.g. "LGA1700".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    /// Sockets a cooler supports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket_support: Option<Vec<String>>,
    /// Memory generation, e.g. "DDR4" or "DDR5".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<String>,
    /// Motherboard RAM slot count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_slots: Option<u32>,
    /// Motherboard storage slot count (M.2 + SATA).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_slots: Option<u32>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
