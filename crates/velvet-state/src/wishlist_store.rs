//! # Wishlist Store
//!
//! The saved-products set, mirrored to on-device storage. Same container
//! pattern as the cart store: a cloneable handle over `Arc<Mutex<inner>>`,
//! every mutating transition re-persisting the full item collection under
//! its own key before returning.
//!
//! The primary UI entry point is [`WishlistStore::toggle`] — the heart
//! icon on product cards flips membership with a single call.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use velvet_core::{Wishlist, WishlistItem};

use crate::storage::Storage;
use crate::WISHLIST_STORAGE_KEY;

struct WishlistStoreInner {
    wishlist: Wishlist,
    storage: Box<dyn Storage>,
}

impl WishlistStoreInner {
    fn persist(&self) {
        match serde_json::to_string(&self.wishlist.items) {
            Ok(json) => self.storage.save(WISHLIST_STORAGE_KEY, &json),
            Err(err) => warn!(%err, "failed to encode wishlist record"),
        }
    }
}

/// Shared handle to the application's single wishlist.
#[derive(Clone)]
pub struct WishlistStore {
    inner: Arc<Mutex<WishlistStoreInner>>,
}

impl WishlistStore {
    /// Opens the wishlist store, hydrating once from storage.
    ///
    /// Failure semantics match the cart store: absent key → empty,
    /// unparseable record → warn + empty, never a crash.
    pub fn open<S: Storage + 'static>(storage: S) -> Self {
        let mut wishlist = Wishlist::new();

        if let Some(raw) = storage.load(WISHLIST_STORAGE_KEY) {
            match serde_json::from_str::<Vec<WishlistItem>>(&raw) {
                Ok(items) => {
                    debug!(count = items.len(), "hydrated wishlist from storage");
                    wishlist.replace_items(items);
                }
                Err(err) => {
                    warn!(%err, "persisted wishlist is unreadable, starting empty");
                }
            }
        }

        WishlistStore {
            inner: Arc::new(Mutex::new(WishlistStoreInner {
                wishlist,
                storage: Box::new(storage),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, WishlistStoreInner> {
        self.inner.lock().expect("wishlist store mutex poisoned")
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Saves a product; no-op when already saved (first write wins).
    pub fn add_item(&self, item: WishlistItem) {
        debug!(id = item.id, "wishlist add_item");
        let mut inner = self.lock();
        inner.wishlist.add_item(item);
        inner.persist();
    }

    /// Removes the entry with the given id, if present.
    pub fn remove_item(&self, id: i64) {
        debug!(id, "wishlist remove_item");
        let mut inner = self.lock();
        inner.wishlist.remove_item(id);
        inner.persist();
    }

    /// Flips membership for the item. Returns `true` when the item is
    /// saved after the toggle (it was just added).
    pub fn toggle(&self, item: WishlistItem) -> bool {
        debug!(id = item.id, "wishlist toggle");
        let mut inner = self.lock();
        let added = inner.wishlist.toggle(item);
        inner.persist();
        added
    }

    /// Empties the wishlist.
    pub fn clear(&self) {
        debug!("wishlist clear");
        let mut inner = self.lock();
        inner.wishlist.clear();
        inner.persist();
    }

    /// Replaces the collection wholesale (startup hydration only).
    pub fn load_items(&self, items: Vec<WishlistItem>) {
        debug!(count = items.len(), "wishlist load_items");
        let mut inner = self.lock();
        inner.wishlist.replace_items(items);
        inner.persist();
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Read-only membership test (drives the filled/empty heart icon).
    pub fn contains(&self, id: i64) -> bool {
        self.lock().wishlist.contains(id)
    }

    /// Current saved items, in insertion order.
    pub fn items(&self) -> Vec<WishlistItem> {
        self.lock().wishlist.items.clone()
    }

    /// Number of saved items.
    pub fn item_count(&self) -> usize {
        self.lock().wishlist.item_count()
    }

    /// Whether nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.lock().wishlist.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use velvet_core::Money;

    fn scarf(id: i64) -> WishlistItem {
        WishlistItem {
            id,
            name: "Silk Scarf".to_string(),
            price: Money::from_cents(2999),
            original_price: None,
            image: "scarf.jpg".to_string(),
            rating: Some(4.8),
            reviews: Some(64),
            badge: None,
            colors: vec!["ivory".to_string()],
        }
    }

    #[test]
    fn test_open_on_empty_storage_starts_empty() {
        let store = WishlistStore::open(MemoryStorage::new());
        assert!(store.is_empty());
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn test_toggle_persists_both_directions() {
        let storage = MemoryStorage::new();
        let store = WishlistStore::open(storage.clone());

        assert!(store.toggle(scarf(1)));
        assert!(storage
            .snapshot(WISHLIST_STORAGE_KEY)
            .unwrap()
            .contains("Silk Scarf"));

        assert!(!store.toggle(scarf(1)));
        assert_eq!(
            storage.snapshot(WISHLIST_STORAGE_KEY).as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let store = WishlistStore::open(MemoryStorage::new());
        store.add_item(scarf(1));

        let mut renamed = scarf(1);
        renamed.name = "Renamed".to_string();
        store.add_item(renamed);

        assert_eq!(store.item_count(), 1);
        assert_eq!(store.items()[0].name, "Silk Scarf");
    }

    #[test]
    fn test_corrupt_record_degrades_to_empty() {
        let storage = MemoryStorage::new();
        storage.seed(WISHLIST_STORAGE_KEY, "]]]]");

        let store = WishlistStore::open(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_round_trip_across_store_instances() {
        let storage = MemoryStorage::new();

        let store = WishlistStore::open(storage.clone());
        store.add_item(scarf(1));
        store.add_item(scarf(2));

        let reopened = WishlistStore::open(storage);
        assert_eq!(reopened.item_count(), 2);
        assert!(reopened.contains(1));
        assert!(reopened.contains(2));
        assert_eq!(reopened.items(), store.items());
    }

    #[test]
    fn test_count_equals_distinct_ids() {
        let store = WishlistStore::open(MemoryStorage::new());
        store.add_item(scarf(1));
        store.add_item(scarf(1));
        store.add_item(scarf(2));

        assert_eq!(store.item_count(), store.items().len());
        assert_eq!(store.item_count(), 2);
    }
}
