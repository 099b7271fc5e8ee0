//! # Cart Store
//!
//! The authoritative in-memory cart, mirrored to on-device storage.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action               Transition               State Change          │
//! │  ─────────               ──────────               ────────────          │
//! │                                                                         │
//! │  Click "Add to cart" ───► add_item() ───────────► merge or append      │
//! │                                                                         │
//! │  Change quantity ───────► update_quantity() ────► qty set / removal    │
//! │                                                                         │
//! │  Click remove ──────────► remove_item() ────────► lines dropped        │
//! │                                                                         │
//! │  Click "Clear cart" ────► clear() ──────────────► items emptied        │
//! │                                                                         │
//! │  App startup ───────────► open() ───────────────► hydrate from disk    │
//! │                                                                         │
//! │  EVERY mutating transition re-persists the full item collection         │
//! │  before returning. Reads return owned snapshots, never references.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The store is a cloneable handle over `Arc<Mutex<inner>>`. The UI event
//! loop is effectively single-threaded, but the mutex makes the "whole
//! transition body is the critical section" rule explicit: mutate, then
//! persist, all under one lock, so no reader ever observes a partially
//! updated cart.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use velvet_core::{Cart, CartLineItem, CartProduct, Money};

use crate::storage::Storage;
use crate::CART_STORAGE_KEY;

// =============================================================================
// Cart Summary
// =============================================================================

/// Derived cart numbers in one snapshot, for header badges and the cart
/// drawer footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of quantities across lines (the number shown on the cart badge).
    pub item_count: i64,
    /// Σ(price × quantity) over all lines.
    pub total: Money,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            line_count: cart.line_count(),
            item_count: cart.item_count(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Cart Store
// =============================================================================

struct CartStoreInner {
    cart: Cart,
    storage: Box<dyn Storage>,
}

impl CartStoreInner {
    /// Mirrors the full item collection to storage. Best-effort: encoding
    /// or write failures are logged and swallowed.
    fn persist(&self) {
        match serde_json::to_string(&self.cart.items) {
            Ok(json) => self.storage.save(CART_STORAGE_KEY, &json),
            Err(err) => warn!(%err, "failed to encode cart record"),
        }
    }
}

/// Shared handle to the application's single cart.
///
/// Constructed once at startup and cloned into whatever parts of the UI
/// tree need it — clones share the same underlying state. Consumers read
/// snapshots and dispatch the named transitions below; they never mutate
/// state directly.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<Mutex<CartStoreInner>>,
}

impl CartStore {
    /// Opens the cart store over the given storage backend, performing the
    /// one-time startup hydration.
    ///
    /// ## Failure Semantics
    /// - Key absent: the cart starts empty
    /// - Key present but unparseable: logged at warn, cart starts empty
    ///
    /// Corrupt persisted data never crashes startup and never propagates
    /// to the caller.
    pub fn open<S: Storage + 'static>(storage: S) -> Self {
        let mut cart = Cart::new();

        if let Some(raw) = storage.load(CART_STORAGE_KEY) {
            match serde_json::from_str::<Vec<CartLineItem>>(&raw) {
                Ok(items) => {
                    debug!(lines = items.len(), "hydrated cart from storage");
                    cart.replace_items(items);
                }
                Err(err) => {
                    warn!(%err, "persisted cart is unreadable, starting empty");
                }
            }
        }

        CartStore {
            inner: Arc::new(Mutex::new(CartStoreInner {
                cart,
                storage: Box::new(storage),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CartStoreInner> {
        self.inner.lock().expect("cart store mutex poisoned")
    }

    // -------------------------------------------------------------------------
    // Transitions (each one: lock, apply, persist)
    // -------------------------------------------------------------------------

    /// Adds a product selection, merging by `(id, size, color)`.
    pub fn add_item(&self, product: &CartProduct, quantity: i64) {
        debug!(id = product.id, quantity, "cart add_item");
        let mut inner = self.lock();
        inner.cart.add_item(product, quantity);
        inner.persist();
    }

    /// Removes all lines with the given product id (coarse, legacy).
    pub fn remove_item(&self, id: i64) {
        debug!(id, "cart remove_item");
        let mut inner = self.lock();
        inner.cart.remove_item(id);
        inner.persist();
    }

    /// Removes only the line matching the full variant triple.
    pub fn remove_variant(&self, id: i64, size: Option<&str>, color: Option<&str>) {
        debug!(id, ?size, ?color, "cart remove_variant");
        let mut inner = self.lock();
        inner.cart.remove_variant(id, size, color);
        inner.persist();
    }

    /// Sets the quantity for the given product id; `quantity <= 0` removes
    /// the lines instead.
    pub fn update_quantity(&self, id: i64, quantity: i64) {
        debug!(id, quantity, "cart update_quantity");
        let mut inner = self.lock();
        inner.cart.update_quantity(id, quantity);
        inner.persist();
    }

    /// Empties the cart.
    pub fn clear(&self) {
        debug!("cart clear");
        let mut inner = self.lock();
        inner.cart.clear();
        inner.persist();
    }

    /// Replaces the item collection wholesale. The hydration transition;
    /// the only one that does not originate from shopper action.
    pub fn load_items(&self, items: Vec<CartLineItem>) {
        debug!(lines = items.len(), "cart load_items");
        let mut inner = self.lock();
        inner.cart.replace_items(items);
        inner.persist();
    }

    // -------------------------------------------------------------------------
    // Reads (owned snapshots; no side effects)
    // -------------------------------------------------------------------------

    /// Current lines, in insertion order.
    pub fn items(&self) -> Vec<CartLineItem> {
        self.lock().cart.items.clone()
    }

    /// Current cart total.
    pub fn total(&self) -> Money {
        self.lock().cart.total()
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> i64 {
        self.lock().cart.item_count()
    }

    /// Quantity of the first line with the given id, or 0.
    pub fn item_quantity(&self, id: i64) -> i64 {
        self.lock().cart.item_quantity(id)
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lock().cart.is_empty()
    }

    /// Derived numbers in one consistent snapshot.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(&self.lock().cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
