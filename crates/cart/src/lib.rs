//! MediWrap Cart - Shopping cart state manager.
//!
//! This crate owns the authoritative in-memory cart for a session and keeps
//! it mirrored to durable storage on every mutation (write-through). It
//! enforces the cart invariants:
//!
//! - line items are unique by product id (adding a duplicate merges
//!   quantities instead of appending a second row)
//! - every line item has `quantity >= 1` at all times
//! - corrupt persisted data never escapes as an error: unreadable slots are
//!   erased and the cart starts empty, entries with bad ids are re-assigned
//!   fresh ones
//!
//! # Modules
//!
//! - [`manager`] - The [`CartManager`] and its operations
//! - [`storage`] - Key-value persistence abstraction and implementations
//! - [`notify`] - User-facing notification sink abstraction
//! - [`pricing`] - Order summary rules (coupon discount, shipping)
//! - [`config`] - Environment-driven configuration
//!
//! # Example
//!
//! ```rust
//! use mediwrap_cart::config::CartConfig;
//! use mediwrap_cart::manager::{CartLineItem, CartManager};
//! use mediwrap_cart::notify::NullNotifier;
//! use mediwrap_cart::storage::MemoryStore;
//! use mediwrap_core::{Price, ProductId};
//! use rust_decimal::dec;
//!
//! let mut cart = CartManager::open(MemoryStore::new(), NullNotifier, &CartConfig::default());
//! cart.add_to_cart(CartLineItem {
//!     id: ProductId::new(1),
//!     name: "Paracetamol 500mg".to_string(),
//!     price: Price::new(dec!(35.00)).expect("non-negative"),
//!     quantity: 2,
//!     image: "/images/paracetamol.jpg".to_string(),
//! });
//! assert_eq!(cart.total_items(), 2);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod manager;
pub mod notify;
pub mod pricing;
pub mod storage;

pub use config::CartConfig;
pub use manager::{CartLineItem, CartManager};
pub use notify::{Notification, Notifier, NullNotifier, TracingNotifier};
pub use pricing::{Coupon, OrderSummary};
pub use storage::{CartStore, FileStore, MemoryStore, StorageError};
