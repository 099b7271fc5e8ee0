//! # velvet-core: Pure State Logic for the Velvet Storefront
//!
//! This crate is the **heart** of the storefront's state engine. It contains
//! the cart and wishlist transition rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Velvet Storefront Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Storefront UI (separate repo)               │   │
//! │  │    Listing ──► Product Page ──► Cart Drawer ──► Checkout       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatches named transitions           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    velvet-state (stores)                        │   │
//! │  │    CartStore, WishlistStore, Storage adapter                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ velvet-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐     ┌───────────┐     ┌───────────┐            │   │
//! │  │   │   money   │     │   cart    │     │ wishlist  │            │   │
//! │  │   │   Money   │     │   Cart    │     │ Wishlist  │            │   │
//! │  │   │ (cents)   │     │ LineItem  │     │   Item    │            │   │
//! │  │   └───────────┘     └───────────┘     └───────────┘            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart state and transitions (variant-keyed line items)
//! - [`wishlist`] - Wishlist state and transitions (id-keyed set)
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every transition is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Derived, never stored**: totals and counts are computed accessors over
//!    the item collection, so they can never drift from it
//! 5. **Trusted inputs**: transitions do not validate quantities or prices;
//!    callers are local UI code passing well-formed values
//!
//! ## Example Usage
//!
//! ```rust
//! use velvet_core::cart::{Cart, CartProduct};
//! use velvet_core::money::Money;
//!
//! let mut cart = Cart::new();
//! let dress = CartProduct {
//!     id: 5,
//!     name: "Dress".to_string(),
//!     price: Money::from_cents(2000), // $20.00
//!     image: "dress.jpg".to_string(),
//!     size: None,
//!     color: Some("red".to_string()),
//! };
//!
//! cart.add_item(&dress, 1);
//! cart.add_item(&dress, 1); // same (id, size, color) => merges
//!
//! assert_eq!(cart.line_count(), 1);
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total().cents(), 4000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod money;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use velvet_core::Money` instead of
// `use velvet_core::money::Money`

pub use cart::{Cart, CartLineItem, CartProduct};
pub use money::Money;
pub use wishlist::{Wishlist, WishlistItem};
