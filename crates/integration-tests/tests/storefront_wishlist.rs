//! Integration tests for the wishlist store.

#![allow(clippy::unwrap_used)]

use sweetshop_core::{AddOutcome, ProductId};
use sweetshop_integration_tests::{MemoryHarness, product};
use sweetshop_storefront::notify::{Level, Notification};
use sweetshop_storefront::storage::keys;

#[test]
fn test_wishlist_walkthrough() {
    let mut h = MemoryHarness::new();
    let wishlist = &mut h.state.wishlist;

    assert!(wishlist.add_to_wishlist(&product(5, 80)));
    assert_eq!(wishlist.count(), 1);

    assert!(!wishlist.add_to_wishlist(&product(5, 80)));
    assert_eq!(wishlist.count(), 1);

    let rejection = h.notifier.last().unwrap();
    assert_eq!(rejection, Notification::AlreadyInWishlist);
    assert_eq!(rejection.level(), Level::Error);

    h.state.wishlist.remove_from_wishlist(ProductId::new(5));
    assert_eq!(h.state.wishlist.count(), 0);
}

#[test]
fn test_duplicate_add_does_not_rewrite_storage() {
    let mut h = MemoryHarness::new();
    h.state.wishlist.add_to_wishlist(&product(1, 10));
    let before = h.raw(keys::WISHLIST);

    h.state.wishlist.add_to_wishlist(&product(1, 999));
    assert_eq!(h.raw(keys::WISHLIST), before);
    let kept = h.state.wishlist.items().first().unwrap();
    assert_eq!(kept.price, product(1, 10).price);
}

#[test]
fn test_wishlist_survives_reload() {
    let mut h = MemoryHarness::new();
    for id in [4, 1, 3] {
        h.state.wishlist.add_to_wishlist(&product(id, 10));
    }
    h.state.wishlist.remove_from_wishlist(ProductId::new(1));

    let reloaded = h.reload();
    let ids: Vec<i64> = reloaded
        .state
        .wishlist
        .items()
        .iter()
        .map(|p| p.id.as_i64())
        .collect();
    assert_eq!(ids, vec![4, 3]);
}

#[test]
fn test_move_to_cart_adds_one_unit() {
    let mut h = MemoryHarness::new();
    h.state.wishlist.add_to_wishlist(&product(8, 60));

    let state = &mut h.state;
    assert_eq!(
        state.wishlist.move_to_cart(ProductId::new(8), &mut state.cart),
        Some(AddOutcome::Inserted)
    );
    assert_eq!(state.cart.count(), 1);
    assert!(state.wishlist.is_in_wishlist(ProductId::new(8)));

    let reloaded = h.reload();
    assert_eq!(reloaded.state.cart.count(), 1);
    assert_eq!(reloaded.state.wishlist.count(), 1);
}

#[test]
fn test_cart_and_wishlist_are_independent() {
    let mut h = MemoryHarness::new();
    h.state.cart.add_one(&product(1, 10));
    h.state.wishlist.add_to_wishlist(&product(1, 10));

    h.state.cart.clear_cart();
    assert!(h.state.wishlist.is_in_wishlist(ProductId::new(1)));

    h.state.wishlist.remove_from_wishlist(ProductId::new(1));
    assert!(h.state.cart.is_empty());
}
