//! # velvet-state: Store Layer for the Velvet Storefront
//!
//! This crate turns the pure transition rules of `velvet-core` into the
//! two live state containers the storefront UI consumes, each mirrored to
//! on-device storage after every change.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      velvet-state                                       │
//! │                                                                         │
//! │  ┌────────────────┐          ┌────────────────┐                        │
//! │  │   CartStore    │          │ WishlistStore  │                        │
//! │  │  cart + Box<   │          │ wishlist + Box<│                        │
//! │  │  dyn Storage>  │          │  dyn Storage>  │                        │
//! │  └───────┬────────┘          └───────┬────────┘                        │
//! │          │ save("cart", …)           │ save("wishlist", …)             │
//! │          ▼                           ▼                                  │
//! │  ┌─────────────────────────────────────────────┐                       │
//! │  │            Storage (trait)                  │                       │
//! │  │   FileStorage (<root>/<key>.json)           │                       │
//! │  │   MemoryStorage (tests, ephemeral mode)     │                       │
//! │  └─────────────────────────────────────────────┘                       │
//! │                                                                         │
//! │  Independent keys, never saved atomically together.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! 1. The application root builds one storage backend and calls
//!    [`Stores::open`] exactly once.
//! 2. Each store hydrates from its key (absent → empty, corrupt → logged
//!    and empty).
//! 3. Handles are cloned into the UI tree; components read snapshots and
//!    dispatch named transitions.
//! 4. Every mutating transition re-persists that store's full collection
//!    before returning.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart_store;
pub mod error;
pub mod storage;
pub mod wishlist_store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart_store::{CartStore, CartSummary};
pub use error::{StorageError, StorageResult};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use wishlist_store::WishlistStore;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Fixed storage key for the cart record.
///
/// ## Why a constant?
/// The persisted layout is two independent records under fixed,
/// human-readable keys. Earlier clients already persisted under these
/// names, so they are load-bearing compatibility surface, not styling.
pub const CART_STORAGE_KEY: &str = "cart";

/// Fixed storage key for the wishlist record.
pub const WISHLIST_STORAGE_KEY: &str = "wishlist";

// =============================================================================
// Stores Bundle
// =============================================================================

/// Both store handles, constructed together over one storage backend.
///
/// This is what the application root builds and injects into the UI tree —
/// single-instance-per-app-lifetime semantics without any hidden globals.
#[derive(Clone)]
pub struct Stores {
    pub cart: CartStore,
    pub wishlist: WishlistStore,
}

impl Stores {
    /// Opens both stores over clones of the given backend. Each store
    /// hydrates from its own key; there is no transactional link between
    /// the two records.
    pub fn open<S: Storage + Clone + 'static>(storage: S) -> Self {
        Stores {
            cart: CartStore::open(storage.clone()),
            wishlist: WishlistStore::open(storage),
        }
    }
}
