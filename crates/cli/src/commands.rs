//! Command implementations for `mw-cli`.
//!
//! Each command opens a fresh session against the file-backed cart slot,
//! performs its mutation or readout, and exits. Mutations persist before
//! the process ends, so consecutive invocations see each other's writes.

#![allow(clippy::print_stdout)] // CLI output goes to stdout

use std::error::Error;

use rust_decimal::Decimal;

use mediwrap_cart::config::CartConfig;
use mediwrap_cart::manager::{CartLineItem, CartManager};
use mediwrap_cart::notify::TracingNotifier;
use mediwrap_cart::pricing::{Coupon, OrderSummary};
use mediwrap_cart::storage::FileStore;
use mediwrap_core::{Price, ProductId};

type CliCart = CartManager<FileStore, TracingNotifier>;

fn open_cart() -> Result<CliCart, Box<dyn Error>> {
    let config = CartConfig::from_env()?;
    let store = FileStore::new(config.cart_dir.clone());
    Ok(CartManager::open(store, TracingNotifier, &config))
}

/// Add an item to the cart.
pub fn add(id: i64, name: &str, price: &str, qty: u32, image: &str) -> Result<(), Box<dyn Error>> {
    let amount: Decimal = price
        .parse()
        .map_err(|e| format!("invalid price {price}: {e}"))?;
    let price = Price::new(amount)?;

    let mut cart = open_cart()?;
    cart.add_to_cart(CartLineItem {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        quantity: qty,
        image: image.to_string(),
    });

    Ok(())
}

/// Remove a line item by product id.
pub fn remove(id: i64) -> Result<(), Box<dyn Error>> {
    let mut cart = open_cart()?;
    cart.remove_from_cart(ProductId::new(id));
    Ok(())
}

/// Set the quantity of a line item.
pub fn set_qty(id: i64, qty: u32) -> Result<(), Box<dyn Error>> {
    if qty == 0 {
        return Err("quantity must be at least 1; use `remove` to drop an item".into());
    }

    let mut cart = open_cart()?;
    cart.update_quantity(ProductId::new(id), qty);
    Ok(())
}

/// Print the cart contents.
pub fn list() -> Result<(), Box<dyn Error>> {
    let cart = open_cart()?;

    if cart.items().is_empty() {
        println!("Cart is empty");
        return Ok(());
    }

    for item in cart.items() {
        println!(
            "{:>14}  {:<32}  {:>10}  x{}",
            item.id,
            item.name,
            item.price.to_string(),
            item.quantity
        );
    }
    println!();
    println!("Total items: {}", cart.total_items());
    println!("Subtotal:    ₹{:.2}", cart.subtotal());

    Ok(())
}

/// Empty the cart and erase the persisted slot.
pub fn clear() -> Result<(), Box<dyn Error>> {
    let mut cart = open_cart()?;
    cart.clear_cart();
    Ok(())
}

/// Print the order summary, applying a coupon if one was given.
pub fn summary(coupon: Option<&str>) -> Result<(), Box<dyn Error>> {
    let coupon = match coupon {
        Some(code) => Some(
            Coupon::parse(code).ok_or_else(|| format!("invalid coupon code: {code}"))?,
        ),
        None => None,
    };

    let cart = open_cart()?;
    let summary = OrderSummary::compute(cart.subtotal(), coupon);

    println!("Subtotal: ₹{:.2}", summary.subtotal);
    println!("Discount: ₹{:.2}", summary.discount);
    if summary.shipping == Decimal::ZERO {
        println!("Shipping: Free");
    } else {
        println!("Shipping: ₹{:.2}", summary.shipping);
    }
    println!("Total:    ₹{:.2}", summary.total);

    Ok(())
}
