//! Write-through persistence of the cart across sessions.
//!
//! Each `open_session` call is a fresh manager over the same slot file,
//! the equivalent of a page reload.

use mediwrap_core::ProductId;
use mediwrap_integration_tests::{TestContext, line_item};
use rust_decimal::dec;

#[test]
fn cart_survives_reload() {
    let ctx = TestContext::new();

    let mut cart = ctx.open_session();
    cart.add_to_cart(line_item(101, "Paracetamol 500mg", dec!(35.00), 2));
    cart.add_to_cart(line_item(202, "Digital Thermometer", dec!(499.00), 1));
    drop(cart);

    let reloaded = ctx.open_session();
    assert_eq!(reloaded.items().len(), 2);

    let first = &reloaded.items()[0];
    assert_eq!(first.id, ProductId::new(101));
    assert_eq!(first.name, "Paracetamol 500mg");
    assert_eq!(first.price.amount(), dec!(35.00));
    assert_eq!(first.quantity, 2);

    assert_eq!(reloaded.total_items(), 3);
    assert_eq!(reloaded.subtotal(), dec!(569.00));
}

#[test]
fn every_mutation_is_visible_to_a_parallel_session() {
    let ctx = TestContext::new();
    let mut cart = ctx.open_session();

    cart.add_to_cart(line_item(1, "a", dec!(10), 1));
    assert_eq!(ctx.open_session().total_items(), 1);

    cart.update_quantity(ProductId::new(1), 4);
    assert_eq!(ctx.open_session().total_items(), 4);

    cart.remove_from_cart(ProductId::new(1));
    assert_eq!(ctx.open_session().total_items(), 0);
}

#[test]
fn merge_on_duplicate_holds_across_sessions() {
    let ctx = TestContext::new();

    let mut first = ctx.open_session();
    first.add_to_cart(line_item(7, "Vitamin D3", dec!(250.00), 2));
    drop(first);

    let mut second = ctx.open_session();
    second.add_to_cart(line_item(7, "Vitamin D3", dec!(250.00), 3));

    assert_eq!(second.items().len(), 1);
    assert_eq!(second.items()[0].quantity, 5);
}

#[test]
fn clear_erases_the_slot_file() {
    let ctx = TestContext::new();

    let mut cart = ctx.open_session();
    cart.add_to_cart(line_item(1, "a", dec!(1), 1));
    assert!(ctx.raw_slot().is_some());

    cart.clear_cart();
    assert_eq!(ctx.raw_slot(), None);

    // Second clear on an already-empty slot is fine.
    cart.clear_cart();
    assert_eq!(ctx.raw_slot(), None);
    assert!(ctx.open_session().items().is_empty());
}

#[test]
fn slot_is_absent_until_first_mutation() {
    let ctx = TestContext::new();
    let cart = ctx.open_session();

    assert!(cart.items().is_empty());
    assert_eq!(ctx.raw_slot(), None);
}

#[test]
fn slot_document_is_a_json_array_of_line_items() {
    let ctx = TestContext::new();

    let mut cart = ctx.open_session();
    cart.add_to_cart(line_item(11, "Bandages", dec!(49.00), 1));
    drop(cart);

    let raw = ctx.raw_slot().expect("slot written");
    let parsed: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");
    let entries = parsed.as_array().expect("array document");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], 11);
    assert_eq!(entries[0]["name"], "Bandages");
}
