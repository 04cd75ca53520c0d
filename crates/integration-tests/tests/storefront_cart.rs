//! Integration tests for the cart store.

#![allow(clippy::unwrap_used)]

use sweetshop_core::{Price, ProductId};
use sweetshop_integration_tests::{MemoryHarness, product, qty};
use sweetshop_storefront::notify::Notification;
use sweetshop_storefront::storage::keys;
use sweetshop_storefront::stores::QuantityChange;

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_cart_walkthrough() {
    let mut h = MemoryHarness::new();
    let cart = &mut h.state.cart;
    let laddu = product(1, 100);

    cart.add_to_cart(&laddu, qty(2));
    assert_eq!(cart.count(), 2);
    assert_eq!(cart.total(), Price::from_units(200));

    cart.add_to_cart(&laddu, qty(3));
    assert_eq!(cart.count(), 5);
    assert_eq!(cart.total(), Price::from_units(500));
    assert_eq!(cart.line_count(), 1);

    assert_eq!(
        cart.update_quantity(ProductId::new(1), 1),
        QuantityChange::Updated
    );
    assert_eq!(cart.count(), 1);
    assert_eq!(cart.total(), Price::from_units(100));

    cart.remove_from_cart(ProductId::new(1));
    assert_eq!(cart.count(), 0);
    assert_eq!(cart.total(), Price::ZERO);

    assert_eq!(
        h.notifier.take(),
        vec![
            Notification::AddedToCart,
            Notification::CartUpdated,
            Notification::RemovedFromCart,
        ]
    );
}

#[test]
fn test_single_add_to_empty_cart() {
    for (id, price) in [(1, 1), (42, 250), (9_001, 99_999)] {
        let mut h = MemoryHarness::new();
        let p = product(id, price);
        h.state.cart.add_one(&p);
        assert_eq!(h.state.cart.count(), 1);
        assert_eq!(h.state.cart.total(), p.price);
    }
}

#[test]
fn test_repeated_adds_merge_into_one_line() {
    let mut h = MemoryHarness::new();
    for (q1, q2) in [(1, 1), (2, 5), (10, 1)] {
        h.state.cart.clear_cart();
        h.state.cart.add_to_cart(&product(3, 20), qty(q1));
        h.state.cart.add_to_cart(&product(3, 20), qty(q2));

        assert_eq!(h.state.cart.line_count(), 1);
        assert_eq!(
            h.state.cart.get(ProductId::new(3)).unwrap().quantity.get(),
            q1 + q2
        );
    }
}

#[test]
fn test_update_to_zero_removes_line() {
    let mut h = MemoryHarness::new();
    h.state.cart.add_to_cart(&product(1, 10), qty(4));
    h.state.cart.add_to_cart(&product(2, 10), qty(3));

    assert_eq!(
        h.state.cart.update_quantity(ProductId::new(1), 0),
        QuantityChange::Removed
    );
    assert_eq!(h.state.cart.count(), 3);
    assert!(h.state.cart.get(ProductId::new(1)).is_none());
}

#[test]
fn test_remove_is_idempotent() {
    let mut once = MemoryHarness::new();
    let mut twice = MemoryHarness::new();
    for h in [&mut once, &mut twice] {
        h.state.cart.add_to_cart(&product(1, 10), qty(2));
        h.state.cart.add_to_cart(&product(2, 15), qty(1));
    }

    once.state.cart.remove_from_cart(ProductId::new(1));
    twice.state.cart.remove_from_cart(ProductId::new(1));
    twice.state.cart.remove_from_cart(ProductId::new(1));

    assert_eq!(once.state.cart.cart(), twice.state.cart.cart());
    assert_eq!(once.raw(keys::CART), twice.raw(keys::CART));
}

#[test]
fn test_unknown_id_update_is_silent() {
    let mut h = MemoryHarness::new();
    assert_eq!(
        h.state.cart.update_quantity(ProductId::new(99), 3),
        QuantityChange::NotInCart
    );
    assert!(h.notifier.notifications().is_empty());
    assert!(h.storage.keys().is_empty());
}

#[test]
fn test_price_snapshot_survives_price_change() {
    let mut h = MemoryHarness::new();
    h.state.cart.add_one(&product(1, 100));
    h.state.cart.add_one(&product(1, 150));

    assert_eq!(h.state.cart.total(), Price::from_units(200));
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_cart_round_trips_through_reload() {
    let mut h = MemoryHarness::new();
    h.state.cart.add_to_cart(&product(5, 30), qty(2));
    h.state.cart.add_to_cart(&product(2, 45), qty(1));
    h.state.cart.add_to_cart(&product(9, 12), qty(7));

    let reloaded = h.reload();
    assert_eq!(reloaded.state.cart.cart(), h.state.cart.cart());

    let ids: Vec<i64> = reloaded
        .state
        .cart
        .items()
        .iter()
        .map(|line| line.id().as_i64())
        .collect();
    assert_eq!(ids, vec![5, 2, 9]);
}

#[test]
fn test_clear_persists_empty_array() {
    let mut h = MemoryHarness::new();
    h.state.cart.add_one(&product(1, 10));
    h.state.cart.clear_cart();

    assert_eq!(h.raw(keys::CART).unwrap(), b"[]");
    assert!(h.reload().state.cart.is_empty());
}
