//! # Wishlist Module
//!
//! The wishlist is the cart's simpler sibling: a deduplicated, ordered set
//! of saved products keyed by product id alone. No variant dimension, no
//! quantity, so there is no identity-key asymmetry to worry about here.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Wishlist Item
// =============================================================================

/// A saved product reference, as displayed on the wishlist page.
///
/// Fields beyond `id` are a frozen display snapshot taken when the product
/// was saved. First write wins: re-adding the same id with different
/// display fields keeps the original copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    /// Product identity; unique within the wishlist.
    pub id: i64,

    pub name: String,
    pub price: Money,

    /// Pre-sale price, when the product is discounted ("was $49.00").
    pub original_price: Option<Money>,

    pub image: String,

    /// Star rating shown on the wishlist card.
    pub rating: Option<f32>,

    /// Review count shown next to the rating.
    pub reviews: Option<i64>,

    /// Marketing badge ("New", "Sale", "Bestseller").
    pub badge: Option<String>,

    /// Available colorways for the saved product.
    #[serde(default)]
    pub colors: Vec<String>,
}

// =============================================================================
// Wishlist
// =============================================================================

/// The shopper's wishlist.
///
/// ## Invariants
/// - Items are unique by `id`; a product is either saved or not
/// - Insertion order is preserved
/// - `item_count()` equals the number of items (no quantity concept)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    /// Saved items, in insertion order.
    pub items: Vec<WishlistItem>,
}

impl Wishlist {
    /// Creates a new empty wishlist.
    pub fn new() -> Self {
        Wishlist { items: Vec::new() }
    }

    /// Saves a product. No-op when the id is already present — the stored
    /// copy keeps its original display fields (first write wins).
    pub fn add_item(&mut self, item: WishlistItem) {
        if self.contains(item.id) {
            return;
        }
        self.items.push(item);
    }

    /// Removes the entry with the given product id, if present.
    pub fn remove_item(&mut self, id: i64) {
        self.items.retain(|i| i.id != id);
    }

    /// Empties the wishlist.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Read-only membership test.
    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    /// The favoriting entry point: removes the item when present, adds it
    /// when absent. Returns `true` when the item is present AFTER the
    /// toggle (i.e. it was just added).
    pub fn toggle(&mut self, item: WishlistItem) -> bool {
        if self.contains(item.id) {
            self.remove_item(item.id);
            false
        } else {
            self.items.push(item);
            true
        }
    }

    /// Replaces the entire collection wholesale (startup hydration only).
    pub fn replace_items(&mut self, items: Vec<WishlistItem>) {
        self.items = items;
    }

    /// Number of saved items. Equals `items.len()` by definition.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the wishlist is empty.
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

    fn item(id: i64, name: &str) -> WishlistItem {
        WishlistItem {
            id,
            name: name.to_string(),
            price: Money::from_cents(2999),
            original_price: Some(Money::from_cents(4900)),
            image: format!("product-{}.jpg", id),
            rating: Some(4.5),
            reviews: Some(128),
            badge: Some("Sale".to_string()),
            colors: vec!["black".to_string(), "cream".to_string()],
        }
    }

    #[test]
    fn test_add_and_count() {
        let mut wishlist = Wishlist::new();
        wishlist.add_item(item(1, "Silk Scarf"));
        wishlist.add_item(item(2, "Linen Shirt"));

        assert_eq!(wishlist.item_count(), 2);
        assert!(wishlist.contains(1));
        assert!(wishlist.contains(2));
        assert!(!wishlist.contains(3));
    }

    #[test]
    fn test_duplicate_add_keeps_original_fields() {
        let mut wishlist = Wishlist::new();
        wishlist.add_item(item(1, "Silk Scarf"));

        // Same id, different display fields
        wishlist.add_item(item(1, "Renamed Scarf"));

        assert_eq!(wishlist.item_count(), 1);
        assert_eq!(wishlist.items[0].name, "Silk Scarf");
    }

    #[test]
    fn test_remove() {
        let mut wishlist = Wishlist::new();
        wishlist.add_item(item(1, "Silk Scarf"));
        wishlist.add_item(item(2, "Linen Shirt"));

        wishlist.remove_item(1);

        assert_eq!(wishlist.item_count(), 1);
        assert!(!wishlist.contains(1));
        assert!(wishlist.contains(2));
    }

    #[test]
    fn test_toggle_symmetry() {
        let mut wishlist = Wishlist::new();
        wishlist.add_item(item(1, "Silk Scarf"));
        let before = wishlist.clone();

        // toggle twice returns the wishlist to its original state
        assert!(wishlist.toggle(item(2, "Linen Shirt")));
        assert!(!wishlist.toggle(item(2, "Linen Shirt")));

        assert_eq!(wishlist, before);
    }

    #[test]
    fn test_clear() {
        let mut wishlist = Wishlist::new();
        wishlist.add_item(item(1, "Silk Scarf"));

        wishlist.clear();

        assert!(wishlist.is_empty());
        assert_eq!(wishlist.item_count(), 0);
    }

    #[test]
    fn test_replace_items() {
        let mut wishlist = Wishlist::new();
        wishlist.add_item(item(1, "Silk Scarf"));

        wishlist.replace_items(vec![item(7, "Wool Coat"), item(8, "Leather Belt")]);

        assert_eq!(wishlist.item_count(), 2);
        assert!(!wishlist.contains(1));
        assert!(wishlist.contains(7));
    }

    #[test]
    fn test_persisted_shape_round_trips() {
        let original = vec![item(1, "Silk Scarf")];
        let json = serde_json::to_string(&original).unwrap();
        let back: Vec<WishlistItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_optional_fields_may_be_absent_in_persisted_data() {
        // Records written by earlier clients may omit every optional field
        let json = r#"[{"id": 3, "name": "Tote", "price": 1500, "image": "tote.jpg"}]"#;
        let items: Vec<WishlistItem> = serde_json::from_str(json).unwrap();

        assert_eq!(items[0].id, 3);
        assert_eq!(items[0].original_price, None);
        assert_eq!(items[0].rating, None);
        assert!(items[0].colors.is_empty());
    }
}
