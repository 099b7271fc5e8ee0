//! # Cart Module
//!
//! The cart data model and its transition rules.
//!
//! ## Line Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Line Identity                                   │
//! │                                                                         │
//! │  The effective primary key of a cart line is the TRIPLE                 │
//! │      (id, size, color)                                                  │
//! │  not the product id alone.                                              │
//! │                                                                         │
//! │  add "Dress" (id=5, size=M)  ──►  line A                               │
//! │  add "Dress" (id=5, size=L)  ──►  line B   (distinct from A)           │
//! │  add "Dress" (id=5, size=M)  ──►  line A quantity += 1 (merged)        │
//! │                                                                         │
//! │  Removal and quantity updates key by id ALONE (legacy behavior):        │
//! │  remove_item(5) removes BOTH line A and line B. Consumers that need     │
//! │  per-variant removal use remove_variant instead.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived State
//! `total()` and `item_count()` are computed accessors over `items`. They
//! are never stored, so they can never drift from the item collection.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Cart Product (add-time candidate)
// =============================================================================

/// A product selection the UI hands to the cart when the shopper clicks
/// "add to cart": the product's display fields plus the chosen variant.
///
/// ## Price Freezing
/// The price travels with the selection and is frozen into the line item.
/// If the catalog price changes later, lines already in the cart keep the
/// price they were added at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    /// Product identity. Not unique within the cart by itself; the line
    /// key is `(id, size, color)`.
    pub id: i64,

    /// Display name shown in the cart drawer (frozen at add time).
    pub name: String,

    /// Unit price in cents (frozen at add time).
    pub price: Money,

    /// Image reference for the cart row (frozen at add time).
    pub image: String,

    /// Chosen size, when the product has sizes.
    pub size: Option<String>,

    /// Chosen color, when the product has colorways.
    pub color: Option<String>,
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// One row in the cart: a specific product + variant combination and its
/// quantity.
///
/// After creation, `quantity` is the only field that ever changes (aside
/// from the whole line being removed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub id: i64,
    pub name: String,
    pub price: Money,
    pub image: String,

    /// Positive count of units for this line.
    pub quantity: i64,

    pub size: Option<String>,
    pub color: Option<String>,
}

impl CartLineItem {
    /// Creates a new line from a product selection and a starting quantity.
    pub fn from_product(product: &CartProduct, quantity: i64) -> Self {
        CartLineItem {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
            size: product.size.clone(),
            color: product.color.clone(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// Whether this line is the "same line" as the given selection:
    /// `id`, `size`, and `color` all match.
    pub fn matches_variant(&self, product: &CartProduct) -> bool {
        self.id == product.id && self.size == product.size && self.color == product.color
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopper's cart.
///
/// ## Invariants
/// - Lines are unique by `(id, size, color)` (adding the same triple merges
///   into the existing line's quantity)
/// - Insertion order is preserved; quantity updates happen in place
/// - `total()` and `item_count()` are always consistent with `items`
///   because they are computed on read
///
/// ## Trusted Inputs
/// No quantity ceiling, no stock check, no price validation: every input
/// is a trusted local value from the UI layer. Malformed input is
/// undefined behavior by design, not a handled error case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a product selection to the cart, or merges into an existing
    /// line when one matches the `(id, size, color)` triple.
    ///
    /// ## Behavior
    /// - Triple already in cart: that line's quantity increases by `quantity`
    /// - Otherwise: a new line is appended with `quantity`
    ///
    /// Callers adding "one of this" pass `quantity = 1`.
    pub fn add_item(&mut self, product: &CartProduct, quantity: i64) {
        if let Some(line) = self.items.iter_mut().find(|l| l.matches_variant(product)) {
            line.quantity += quantity;
            return;
        }

        self.items.push(CartLineItem::from_product(product, quantity));
    }

    /// Removes all lines whose product id matches.
    ///
    /// ## Coarser Than Add
    /// Add keys lines by `(id, size, color)`, but removal keys by `id`
    /// alone, so a cart holding two variants of the same product loses
    /// both. Preserved as-is for compatibility with previously persisted
    /// carts and the existing UI contract; use [`Cart::remove_variant`]
    /// for per-variant removal.
    pub fn remove_item(&mut self, id: i64) {
        self.items.retain(|l| l.id != id);
    }

    /// Removes the single line matching the full `(id, size, color)` triple,
    /// leaving sibling variants of the same product in place.
    pub fn remove_variant(&mut self, id: i64, size: Option<&str>, color: Option<&str>) {
        self.items
            .retain(|l| !(l.id == id && l.size.as_deref() == size && l.color.as_deref() == color));
    }

    /// Sets the quantity on every line with the given product id.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: equivalent to [`Cart::remove_item`] (same
    ///   coarse-by-id removal)
    /// - Otherwise: each matching line's quantity becomes `quantity`
    /// - Id not in cart: no-op
    pub fn update_quantity(&mut self, id: i64, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        for line in self.items.iter_mut().filter(|l| l.id == id) {
            line.quantity = quantity;
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the quantity of the first line with the given product id,
    /// or 0 when the product is not in the cart. Read-only.
    pub fn item_quantity(&self, id: i64) -> i64 {
        self.items
            .iter()
            .find(|l| l.id == id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Replaces the entire line collection wholesale.
    ///
    /// Used once at startup to hydrate from persisted data; never driven
    /// by shopper action.
    pub fn replace_items(&mut self, items: Vec<CartLineItem>) {
        self.items = items;
    }

    /// Calculates the cart total: Σ(price × quantity) over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(|l| l.line_total()).sum()
    }

    /// Returns the total quantity across all lines (NOT the number of
    /// distinct lines — a single line with quantity 3 counts as 3).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price_cents: i64, size: Option<&str>, color: Option<&str>) -> CartProduct {
        CartProduct {
            id,
            name: format!("Product {}", id),
            price: Money::from_cents(price_cents),
            image: format!("product-{}.jpg", id),
            size: size.map(String::from),
            color: color.map(String::from),
        }
    }

    #[test]
    fn test_add_item_appends_new_line() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 999, None, None), 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total().cents(), 1998);
    }

    #[test]
    fn test_add_same_triple_merges_quantity() {
        let mut cart = Cart::new();
        let p = product(1, 999, Some("M"), Some("red"));

        cart.add_item(&p, 1);
        cart.add_item(&p, 1);

        // One line with quantity 2, not two lines
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_distinct_variants_get_distinct_lines() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 999, Some("M"), None), 1);
        cart.add_item(&product(1, 999, Some("L"), None), 1);

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_total_matches_sum_over_lines() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 2999, Some("M"), None), 2);
        cart.add_item(&product(2, 1500, None, Some("blue")), 3);

        let expected: i64 = cart.items.iter().map(|l| l.price.cents() * l.quantity).sum();
        assert_eq!(cart.total().cents(), expected);
        assert_eq!(cart.total().cents(), 2999 * 2 + 1500 * 3);
    }

    #[test]
    fn test_remove_item_is_coarse_by_id() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 999, Some("M"), None), 1);
        cart.add_item(&product(1, 999, Some("L"), None), 1);
        cart.add_item(&product(2, 500, None, None), 1);

        // Both variants of product 1 go; product 2 stays
        cart.remove_item(1);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items[0].id, 2);
    }

    #[test]
    fn test_remove_variant_leaves_siblings() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 999, Some("M"), None), 1);
        cart.add_item(&product(1, 999, Some("L"), None), 1);

        cart.remove_variant(1, Some("M"), None);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items[0].size.as_deref(), Some("L"));
    }

    #[test]
    fn test_update_quantity_sets_in_place() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 1000, None, None), 1);

        cart.update_quantity(1, 5);

        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total().cents(), 5000);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 1000, Some("M"), None), 2);
        cart.add_item(&product(1, 1000, Some("L"), None), 1);

        cart.update_quantity(1, 0);

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_update_quantity_missing_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 1000, None, None), 1);

        cart.update_quantity(99, 5);

        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_item_quantity_lookup() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 1000, None, None), 3);

        assert_eq!(cart.item_quantity(1), 3);
        assert_eq!(cart.item_quantity(2), 0);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 1000, None, None), 2);
        assert!(!cart.is_empty());

        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_replace_items_recomputes_totals() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 1000, None, None), 1);

        let hydrated = vec![
            CartLineItem::from_product(&product(7, 2500, Some("S"), None), 2),
            CartLineItem::from_product(&product(8, 4000, None, None), 1),
        ];
        cart.replace_items(hydrated);

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total().cents(), 2500 * 2 + 4000);
    }

    /// The concrete scenario from the storefront's acceptance checklist.
    #[test]
    fn test_dress_scenario() {
        let mut cart = Cart::new();
        let dress = CartProduct {
            id: 5,
            name: "Dress".to_string(),
            price: Money::from_cents(2000),
            image: "x".to_string(),
            size: None,
            color: Some("red".to_string()),
        };

        cart.add_item(&dress, 1);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items[0].quantity, 1);
        assert_eq!(cart.total().cents(), 2000);
        assert_eq!(cart.item_count(), 1);

        cart.add_item(&dress, 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total().cents(), 4000);
        assert_eq!(cart.item_count(), 2);

        cart.update_quantity(5, 0);
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_persisted_shape_is_plain_camel_case_array() {
        let mut cart = Cart::new();
        cart.add_item(&product(5, 2000, None, Some("red")), 1);

        let json = serde_json::to_value(&cart.items).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": 5,
                "name": "Product 5",
                "price": 2000,
                "image": "product-5.jpg",
                "quantity": 1,
                "size": null,
                "color": "red"
            }])
        );
    }
}
