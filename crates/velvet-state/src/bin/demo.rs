//! # Store Walkthrough
//!
//! Runs a scripted shopping session against file-backed stores so the
//! persistence behavior can be watched from a terminal.
//!
//! ## Usage
//! ```bash
//! # First run: starts empty, leaves records in ./data
//! cargo run -p velvet-state --bin demo
//!
//! # Second run: hydrates the wishlist saved by the first run
//! cargo run -p velvet-state --bin demo
//!
//! # Custom storage root
//! VELVET_DATA_DIR=/tmp/velvet cargo run -p velvet-state --bin demo
//!
//! # Watch the transition log
//! RUST_LOG=debug cargo run -p velvet-state --bin demo
//! ```

use tracing_subscriber::EnvFilter;

use velvet_core::{CartProduct, Money, WishlistItem};
use velvet_state::{FileStorage, Stores};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let storage = FileStorage::from_env();
    let stores = Stores::open(storage);

    println!("== session start ==");
    println!(
        "cart: {} item(s), total {} | wishlist: {} item(s)",
        stores.cart.item_count(),
        stores.cart.total(),
        stores.wishlist.item_count()
    );

    let dress_red = CartProduct {
        id: 5,
        name: "Wrap Dress".to_string(),
        price: Money::from_cents(7900),
        image: "wrap-dress.jpg".to_string(),
        size: Some("M".to_string()),
        color: Some("red".to_string()),
    };
    let dress_blue = CartProduct {
        color: Some("blue".to_string()),
        ..dress_red.clone()
    };

    stores.cart.clear();
    stores.cart.add_item(&dress_red, 1);
    stores.cart.add_item(&dress_red, 1); // merges into the red line
    stores.cart.add_item(&dress_blue, 1); // distinct variant, new line

    println!("\n== after adding two colorways ==");
    for line in stores.cart.items() {
        println!(
            "  {} ({}) x{}  {}",
            line.name,
            line.color.as_deref().unwrap_or("-"),
            line.quantity,
            line.line_total()
        );
    }
    let summary = stores.cart.summary();
    println!(
        "  {} line(s), {} item(s), total {}",
        summary.line_count, summary.item_count, summary.total
    );

    let toggled_on = stores.wishlist.toggle(WishlistItem {
        id: 12,
        name: "Cashmere Cardigan".to_string(),
        price: Money::from_cents(14900),
        original_price: Some(Money::from_cents(19900)),
        image: "cardigan.jpg".to_string(),
        rating: Some(4.7),
        reviews: Some(212),
        badge: Some("Sale".to_string()),
        colors: vec!["oat".to_string(), "charcoal".to_string()],
    });

    println!(
        "\n== wishlist ==\n  cardigan {} (run again to toggle back)",
        if toggled_on { "saved" } else { "removed" }
    );
    println!("  {} item(s) saved", stores.wishlist.item_count());

    println!("\nrecords persisted under the storage root; rerun to see hydration");
}
