//! Integration tests for MediWrap.
//!
//! The suites in `tests/` exercise the cart through real file-backed
//! storage: one [`TestContext`] per test, holding a temporary directory
//! that plays the role of the browser profile. Opening a manager against
//! the same context twice simulates a page reload.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use tempfile::TempDir;

use mediwrap_cart::config::CartConfig;
use mediwrap_cart::manager::{CartLineItem, CartManager};
use mediwrap_cart::notify::NullNotifier;
use mediwrap_cart::storage::FileStore;
use mediwrap_core::{Price, ProductId};
use rust_decimal::Decimal;

/// One simulated browser profile: a temp directory plus the cart config
/// pointing into it.
pub struct TestContext {
    dir: TempDir,
    pub config: CartConfig,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Create a fresh profile with an empty slot directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp cart dir");
        let config = CartConfig {
            cart_dir: dir.path().to_path_buf(),
            cart_key: "mediwrap-cart".to_string(),
        };
        Self { dir, config }
    }

    /// Open a cart session against this profile, as a reload would.
    #[must_use]
    pub fn open_session(&self) -> CartManager<FileStore, NullNotifier> {
        let store = FileStore::new(self.config.cart_dir.clone());
        CartManager::open(store, NullNotifier, &self.config)
    }

    /// Path of the persisted slot file.
    #[must_use]
    pub fn slot_path(&self) -> std::path::PathBuf {
        self.dir.path().join(format!("{}.json", self.config.cart_key))
    }

    /// Overwrite the slot file with raw bytes, bypassing the manager.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn seed_slot(&self, raw: &str) {
        std::fs::write(self.slot_path(), raw).expect("seed slot file");
    }

    /// Read the raw slot file, if present.
    #[must_use]
    pub fn raw_slot(&self) -> Option<String> {
        match std::fs::read_to_string(self.slot_path()) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => panic!("read slot file: {e}"),
        }
    }

    /// The profile directory, for tests that inspect the filesystem.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Build a line item with a deterministic image path.
///
/// # Panics
///
/// Panics if `price` is negative.
#[must_use]
pub fn line_item(id: i64, name: &str, price: Decimal, quantity: u32) -> CartLineItem {
    CartLineItem {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::new(price).expect("non-negative price"),
        quantity,
        image: format!("/images/products/{id}.jpg"),
    }
}
