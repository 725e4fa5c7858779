pub mod build;
pub mod product;

pub use build::{BuilderItem, CartItem, SavedState, SelectionMap};
pub use product::{Product, Specs};

/// Category slugs the engine attaches semantics to. Any other slug is an
/// opaque single-select slot.
pub mod category {
    pub const PROCESSORS: &str = "processors";
    pub const MOTHERBOARDS: &str = "motherboards";
    pub const MEMORY: &str = "memory";
    pub const STORAGE: &str = "storage";
    pub const CASE_FANS: &str = "case-fans";
    pub const POWER_SUPPLY: &str = "power-supply";
}
