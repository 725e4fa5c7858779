//! The selection store: sole mutator of the build selection, cart, and
//! compare list, and publisher of the derived totals.
//!
//! Every operation is total. Refusals (cardinality ceilings, compare
//! cap, absent ids) come back as [`AddOutcome::Refused`] or `false`
//! rather than errors, and nothing here panics.

use super::evaluator::{evaluate, Evaluation};
use super::policy;
use crate::model::{BuilderItem, CartItem, Product, SavedState, SelectionMap};

/// Hard cap on the side-by-side compare list.
const COMPARE_CAP: usize = 3;

/// What an `add_part` call did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product was appended as a new line.
    Added,
    /// A single-select slot discarded its previous pick for this one.
    Replaced,
    /// The product was already selected; its quantity grew by one.
    Incremented,
    /// A multi-select ceiling was hit; nothing changed.
    Refused,
}

impl AddOutcome {
    /// Whether the call changed the selection.
    #[must_use]
    pub fn changed(self) -> bool {
        self != Self::Refused
    }
}

/// Owns the build selection, cart, and compare list for one session.
///
/// Hosts construct one per session, mutate it through the methods below,
/// and read the derived totals after each call. Persistence is explicit:
/// [`BuildStore::snapshot`] and [`BuildStore::restore`] at whatever
/// lifecycle points the host chooses.
#[derive(Debug, Default)]
pub struct BuildStore {
    selected: SelectionMap,
    cart: Vec<CartItem>,
    compare: Vec<Product>,
    cart_open: bool,
    total_price: u64,
    evaluation: Evaluation,
}

impl BuildStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from persisted state. Products are taken
    /// verbatim, without reconciling against the live catalog; derived
    /// totals are recomputed since they are never persisted.
    #[must_use]
    pub fn restore(state: SavedState) -> Self {
        let mut store = Self {
            selected: state.selected_parts,
            cart: state.cart,
            compare: state.compare_list,
            ..Self::default()
        };
        store.recompute();
        store
    }

    /// The persisted shape: selection, cart, and compare list.
    #[must_use]
    pub fn snapshot(&self) -> SavedState {
        SavedState {
            selected_parts: self.selected.clone(),
            cart: self.cart.clone(),
            compare_list: self.compare.clone(),
        }
    }

    // --- build selection ---

    /// Selects a product into its category slot.
    ///
    /// Single-select categories replace wholesale: the previous pick, at
    /// whatever quantity, is discarded. Multi-select categories append or
    /// increment, refusing once the cardinality ceiling is reached.
    pub fn add_part(&mut self, cat: &str, product: &Product) -> AddOutcome {
        let outcome = if policy::is_multi_select(cat) {
            if !policy::can_add(cat, &self.selected) {
                return AddOutcome::Refused;
            }
            let items = self.selected.entry(cat.to_string()).or_default();
            match items.iter_mut().find(|i| i.product.id == product.id) {
                Some(item) => {
                    item.quantity += 1;
                    AddOutcome::Incremented
                }
                None => {
                    items.push(BuilderItem::new(product.clone()));
                    AddOutcome::Added
                }
            }
        } else {
            let replaced = self.selected.contains_key(cat);
            self.selected
                .insert(cat.to_string(), vec![BuilderItem::new(product.clone())]);
            if replaced {
                AddOutcome::Replaced
            } else {
                AddOutcome::Added
            }
        };

        self.recompute();
        outcome
    }

    /// Removes one unit of a product from a category. A line at quantity
    /// 1 disappears entirely, and a category emptied by the removal is
    /// dropped from the map. Returns false if the product was not there.
    pub fn remove_part(&mut self, cat: &str, product_id: &str) -> bool {
        let Some(items) = self.selected.get_mut(cat) else {
            return false;
        };
        let Some(pos) = items.iter().position(|i| i.product.id == product_id) else {
            return false;
        };

        if items[pos].quantity > 1 {
            items[pos].quantity -= 1;
        } else {
            items.remove(pos);
        }
        if items.is_empty() {
            self.selected.remove(cat);
        }

        self.recompute();
        true
    }

    /// Empties the selection and resets the derived totals.
    pub fn clear_build(&mut self) {
        self.selected.clear();
        self.recompute();
    }

    /// Summed quantity in a category; 0 if nothing is selected there.
    #[must_use]
    pub fn category_count(&self, cat: &str) -> u32 {
        policy::quantity_in(cat, &self.selected)
    }

    #[must_use]
    pub fn selected_parts(&self) -> &SelectionMap {
        &self.selected
    }

    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    #[must_use]
    pub fn estimated_wattage(&self) -> u32 {
        self.evaluation.wattage
    }

    #[must_use]
    pub fn compatibility_issues(&self) -> &[String] {
        &self.evaluation.issues
    }

    // --- cart ---

    /// Adds a product to the cart (or bumps its quantity) and opens the
    /// cart display.
    pub fn add_to_cart(&mut self, product: &Product) {
        match self.cart.iter_mut().find(|c| c.id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.cart.push(CartItem::from_product(product)),
        }
        self.cart_open = true;
    }

    /// Returns false if the id was not in the cart.
    pub fn remove_from_cart(&mut self, product_id: &str) -> bool {
        let before = self.cart.len();
        self.cart.retain(|c| c.id != product_id);
        self.cart.len() != before
    }

    /// Adjusts a cart line's quantity by `delta`, clamped to a minimum
    /// of 1. Removal is always explicit, never via zero quantity.
    pub fn update_quantity(&mut self, product_id: &str, delta: i64) {
        if let Some(line) = self.cart.iter_mut().find(|c| c.id == product_id) {
            let adjusted = i64::from(line.quantity).saturating_add(delta);
            line.quantity = u32::try_from(adjusted.max(1)).unwrap_or(u32::MAX);
        }
    }

    #[must_use]
    pub fn cart_total(&self) -> u64 {
        self.cart
            .iter()
            .map(|c| c.price * u64::from(c.quantity))
            .sum()
    }

    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    #[must_use]
    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn set_cart_open(&mut self, open: bool) {
        self.cart_open = open;
    }

    // --- compare list ---

    /// Appends to the compare list. Refuses duplicates and anything past
    /// the cap of 3, returning false.
    pub fn add_to_compare(&mut self, product: &Product) -> bool {
        if self.compare.len() >= COMPARE_CAP || self.compare.iter().any(|p| p.id == product.id) {
            return false;
        }
        self.compare.push(product.clone());
        true
    }

    pub fn remove_from_compare(&mut self, product_id: &str) -> bool {
        let before = self.compare.len();
        self.compare.retain(|p| p.id != product_id);
        self.compare.len() != before
    }

    pub fn clear_compare(&mut self) {
        self.compare.clear();
    }

    #[must_use]
    pub fn compare_list(&self) -> &[Product] {
        &self.compare
    }

    /// Recomputes all derived state from the selection map. Called after
    /// every selection mutation so readers always see one consistent
    /// published snapshot.
    fn recompute(&mut self) {
        self.total_price = self
            .selected
            .values()
            .flatten()
            .map(BuilderItem::line_price)
            .sum();
        self.evaluation = evaluate(&self.selected);
    }
}
