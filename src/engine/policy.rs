//! Selection-cardinality policy.
//!
//! Decides, per category, whether several distinct products may be chosen
//! at once and how many units fit in total. Single-select categories use
//! replacement semantics, so adding to them always succeeds.

use crate::model::{category, SelectionMap, Specs};

/// Categories that may hold several distinct products at once.
const MULTI_SELECT: &[&str] = &[category::MEMORY, category::STORAGE, category::CASE_FANS];

/// Fallback slot count when no motherboard is selected.
const DEFAULT_SLOTS: u32 = 4;

/// Upper bound on case fans, independent of other selections.
const MAX_CASE_FANS: u32 = 9;

#[must_use]
pub fn is_multi_select(cat: &str) -> bool {
    MULTI_SELECT.contains(&cat)
}

/// Total quantity ceiling for a multi-select category, derived from the
/// currently-selected motherboard where applicable. `None` for
/// single-select categories (replacement, no ceiling).
#[must_use]
pub fn ceiling(cat: &str, selection: &SelectionMap) -> Option<u32> {
    match cat {
        category::MEMORY => Some(motherboard_slots(selection, |s| s.memory_slots)),
        category::STORAGE => Some(motherboard_slots(selection, |s| s.storage_slots)),
        category::CASE_FANS => Some(MAX_CASE_FANS),
        _ => None,
    }
}

/// Whether one more unit may be added to `cat`.
///
/// Single-select categories always accept (the new pick replaces the old
/// one). Multi-select categories accept while the summed quantity is
/// strictly below the ceiling. A ceiling lowered after the fact (e.g. a
/// motherboard swap) never evicts items already selected; it only gates
/// further additions.
#[must_use]
pub fn can_add(cat: &str, selection: &SelectionMap) -> bool {
    match ceiling(cat, selection) {
        Some(limit) => quantity_in(cat, selection) < limit,
        None => true,
    }
}

/// Summed quantity across all items in a category; 0 if absent.
#[must_use]
pub fn quantity_in(cat: &str, selection: &SelectionMap) -> u32 {
    selection
        .get(cat)
        .map_or(0, |items| items.iter().map(|i| i.quantity).sum())
}

fn motherboard_slots(selection: &SelectionMap, slots: impl Fn(&Specs) -> Option<u32>) -> u32 {
    selection
        .get(category::MOTHERBOARDS)
        .and_then(|items| items.first())
        .and_then(|item| slots(&item.product.specs))
        .unwrap_or(DEFAULT_SLOTS)
}
