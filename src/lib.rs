//! # Rig Planner
//!
//! A PC build planning engine: component selection with per-category
//! cardinality rules, running price and power totals, and hardware
//! compatibility checks.
//!
//! ## Features
//!
//! - Load a product catalog from JSON with typed, validated spec fields
//! - Track a build selection with single-select and multi-select slots
//! - Detect socket mismatches, memory-type mismatches, and PSU shortfalls
//! - Cart and compare-list management with derived totals
//! - Export a build as a CSV or JSON quotation
//!
//! ## Example
//!
//! ```no_run
//! use rig_planner::catalog::Catalog;
//! use rig_planner::engine::BuildStore;
//! use rig_planner::model::category;
//!
//! let catalog = Catalog::load("catalog.json").expect("Failed to load");
//! let mut store = BuildStore::new();
//! if let Some(cpu) = catalog.by_category(category::PROCESSORS).first() {
//!     store.add_part(category::PROCESSORS, cpu);
//! }
//! println!("Total: {}", store.total_price());
//! println!("Draw: {}W", store.estimated_wattage());
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod export;
pub mod model;
