//! Cart state manager.
//!
//! [`CartManager`] owns the authoritative in-memory line-item list for one
//! session and mirrors it to a [`CartStore`] slot on every mutation
//! (write-through). Consumers observe derived values and invoke operations;
//! nothing else writes the slot.
//!
//! Malformed input degrades to a no-op rather than an error: the cart is a
//! best-effort convenience cache, not a system of record. Corrupt persisted
//! data is repaired (bad ids) or discarded (unparseable slot) at load time.

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use mediwrap_core::{Price, ProductId};

use crate::config::CartConfig;
use crate::notify::{Notification, Notifier};
use crate::storage::CartStore;

/// One row in the cart: a product and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Always `>= 1`; enforced by every operation that touches it.
    pub quantity: u32,
    /// Display image reference, carried opaquely.
    pub image: String,
}

/// Tolerant on-disk form of a line item.
///
/// Persisted slots may predate id validation, so `id` is read as arbitrary
/// JSON and vetted in [`CartManager::open`]. Anything else malformed fails
/// the parse of the whole slot, which then gets discarded.
#[derive(Debug, Deserialize)]
struct StoredLineItem {
    #[serde(default)]
    id: Option<Value>,
    name: String,
    price: Price,
    quantity: u32,
    #[serde(default)]
    image: String,
}

/// The cart state manager.
///
/// Construct one per session with [`CartManager::open`]. The store and
/// notifier are explicit handles, injected by the consumer.
pub struct CartManager<S, N> {
    items: Vec<CartLineItem>,
    store: S,
    notifier: N,
    slot_key: String,
}

impl<S: CartStore, N: Notifier> CartManager<S, N> {
    /// Open the cart for a new session, loading any persisted state.
    ///
    /// An absent slot starts an empty cart. An unparseable slot is erased
    /// and the cart starts empty; no error escapes. Entries with a missing,
    /// non-numeric, or duplicated id are admitted under a fresh id, and the
    /// slot is re-written only if such a repair happened.
    pub fn open(store: S, notifier: N, config: &CartConfig) -> Self {
        let mut manager = Self {
            items: Vec::new(),
            store,
            notifier,
            slot_key: config.cart_key.clone(),
        };
        manager.load();
        manager
    }

    fn load(&mut self) {
        let raw = match self.store.get(&self.slot_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("failed to read cart slot {}: {e}", self.slot_key);
                return;
            }
        };

        let stored: Vec<StoredLineItem> = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("discarding unparseable cart slot {}: {e}", self.slot_key);
                if let Err(e) = self.store.delete(&self.slot_key) {
                    tracing::warn!("failed to erase corrupt cart slot: {e}");
                }
                return;
            }
        };

        let mut repaired = false;
        for entry in stored {
            let id = match entry.id.as_ref().and_then(Value::as_i64) {
                Some(id) if !self.contains_id(ProductId::new(id)) => ProductId::new(id),
                _ => {
                    repaired = true;
                    self.fresh_id()
                }
            };
            // Quantities below the floor are clamped rather than dropped.
            let quantity = entry.quantity.max(1);
            repaired |= quantity != entry.quantity;

            self.items.push(CartLineItem {
                id,
                name: entry.name,
                price: entry.price,
                quantity,
                image: entry.image,
            });
        }

        if repaired {
            tracing::warn!(
                "repaired invalid entries while loading cart slot {}",
                self.slot_key
            );
            self.persist();
        }
    }

    /// Add an item to the cart.
    ///
    /// If an item with the same id is already present, its quantity grows by
    /// the incoming quantity; the existing name, price, and image are kept.
    /// Otherwise the item is appended, preserving insertion order. A zero
    /// quantity is ignored.
    pub fn add_to_cart(&mut self, item: CartLineItem) {
        if item.quantity == 0 {
            tracing::debug!(id = %item.id, "ignoring add with zero quantity");
            return;
        }

        let name = item.name.clone();
        if let Some(existing) = self.items.iter_mut().find(|existing| existing.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            self.items.push(item);
        }

        self.persist();
        self.notifier.notify(Notification::new(
            "Item added to cart",
            format!("{name} has been added to your cart"),
        ));
    }

    /// Remove the item with the given id, if present.
    ///
    /// Removing an absent id is a silent no-op apart from re-persisting the
    /// unchanged list. A confirmation is raised only when an item actually
    /// left the cart.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        let position = self.items.iter().position(|item| item.id == id);
        let removed = position.map(|position| self.items.remove(position));

        self.persist();

        if let Some(removed) = removed {
            self.notifier.notify(Notification::new(
                "Item removed",
                format!("{} has been removed from your cart", removed.name),
            ));
        }
    }

    /// Set the quantity of the item with the given id.
    ///
    /// Quantities below 1 are rejected as a no-op; callers wanting removal
    /// must use [`Self::remove_from_cart`]. An unknown id is a no-op.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            tracing::debug!(%id, "ignoring quantity update below 1");
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
        }

        self.persist();
    }

    /// Empty the cart and erase the persisted slot. Idempotent.
    pub fn clear_cart(&mut self) {
        self.items.clear();

        if let Err(e) = self.store.delete(&self.slot_key) {
            tracing::warn!("failed to erase cart slot {}: {e}", self.slot_key);
        }

        self.notifier.notify(Notification::new(
            "Cart cleared",
            "All items have been removed from your cart",
        ));
    }

    /// The current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of quantities across all line items. Recomputed on every read.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price * quantity` across all line items. Recomputed on every
    /// read.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price.amount() * Decimal::from(item.quantity))
            .sum()
    }

    fn contains_id(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Generate an id not present in the cart, derived from the current
    /// time plus a random offset.
    fn fresh_id(&self) -> ProductId {
        let mut rng = rand::rng();
        loop {
            let candidate = Utc::now().timestamp_millis() + rng.random_range(0..1000);
            let id = ProductId::new(candidate);
            if !self.contains_id(id) {
                return id;
            }
        }
    }

    /// Write the whole line-item list back to the slot.
    ///
    /// A failed write is logged and the session continues with in-memory
    /// state only.
    fn persist(&self) {
        let document = match serde_json::to_string(&self.items) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!("failed to serialize cart: {e}");
                return;
            }
        };

        if let Err(e) = self.store.put(&self.slot_key, &document) {
            tracing::warn!("failed to persist cart slot {}: {e}", self.slot_key);
        }
    }
}
