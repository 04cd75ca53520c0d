//! Integration tests for storage backends and fail-open hydration.

#![allow(clippy::unwrap_used)]

use secrecy::{ExposeSecret, SecretString};
use sweetshop_core::{Price, Product, ProductId};
use sweetshop_integration_tests::{DataDir, MemoryHarness, product, qty, shopper};
use sweetshop_storefront::storage::{KeyValueStore, MemoryStore, StorageError, keys};

// =============================================================================
// File-backed restarts
// =============================================================================

#[test]
fn test_state_survives_restart() {
    let data = DataDir::new();
    {
        let mut state = data.open();
        state.session.sign_in(shopper(), SecretString::from("tok-xyz"));
        state.cart.add_to_cart(&product(1, 120), qty(2));
        state.cart.add_to_cart(&product(2, 35), qty(1));
        state.wishlist.add_to_wishlist(&product(3, 75));
        assert!(state.close());
    }

    let state = data.open();
    assert_eq!(state.cart.count(), 3);
    assert_eq!(state.cart.total(), Price::from_units(275));
    assert!(state.wishlist.is_in_wishlist(ProductId::new(3)));
    assert_eq!(state.session.current_user(), Some(&shopper()));
    assert_eq!(state.session.token().unwrap().expose_secret(), "tok-xyz");
}

#[test]
fn test_files_are_named_after_keys() {
    let data = DataDir::new();
    let mut state = data.open();
    state.cart.add_one(&product(1, 10));
    state.wishlist.add_to_wishlist(&product(2, 10));

    assert!(data.path().join(keys::CART).is_file());
    assert!(data.path().join(keys::WISHLIST).is_file());

    let stored: serde_json::Value = serde_json::from_slice(&data.raw(keys::CART).unwrap()).unwrap();
    assert_eq!(stored[0]["id"], 1);
    assert_eq!(stored[0]["quantity"], 1);
}

#[test]
fn test_sign_out_removes_session_files() {
    let data = DataDir::new();
    let mut state = data.open();
    state.session.sign_in(shopper(), SecretString::from("tok"));
    state.session.sign_out();

    assert!(data.raw(keys::USER).is_none());
    assert!(data.raw(keys::TOKEN).is_none());
    assert!(!data.open().session.is_authenticated());
}

// =============================================================================
// Fail-open hydration
// =============================================================================

#[test]
fn test_corrupt_documents_hydrate_empty() {
    let storage = MemoryStore::new();
    for (key, bytes) in [
        (keys::CART, &b"{not json"[..]),
        (keys::WISHLIST, &b"\"a string\""[..]),
        (keys::USER, &b"null"[..]),
    ] {
        storage.save(key, bytes).unwrap();
    }

    let h = MemoryHarness::with_storage(storage);
    assert!(h.state.cart.is_empty());
    assert_eq!(h.state.wishlist.count(), 0);
    assert!(!h.state.session.is_authenticated());
    assert!(h.notifier.notifications().is_empty());
}

#[test]
fn test_corrupt_cart_is_replaced_on_next_write() {
    let storage = MemoryStore::new();
    storage.save(keys::CART, b"garbage").unwrap();

    let mut h = MemoryHarness::with_storage(storage);
    h.state.cart.add_one(&product(1, 10));

    let stored: serde_json::Value = serde_json::from_slice(&h.raw(keys::CART).unwrap()).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 1);
}

#[test]
fn test_duplicate_ids_in_storage_are_merged() {
    let storage = MemoryStore::new();
    storage
        .save(
            keys::CART,
            br#"[{"id":1,"name":"Laddu","price":100,"quantity":2},
                 {"id":2,"name":"Jalebi","price":40,"quantity":1},
                 {"id":1,"name":"Laddu","price":100,"quantity":3}]"#,
        )
        .unwrap();
    storage
        .save(keys::WISHLIST, br#"[{"id":7,"price":10},{"id":7,"price":10}]"#)
        .unwrap();

    let h = MemoryHarness::with_storage(storage);
    assert_eq!(h.state.cart.line_count(), 2);
    assert_eq!(h.state.cart.get(ProductId::new(1)).unwrap().quantity, qty(5));
    assert_eq!(h.state.wishlist.count(), 1);
}

#[test]
fn test_unknown_product_fields_round_trip() {
    let storage = MemoryStore::new();
    storage
        .save(
            keys::WISHLIST,
            br#"[{"id":3,"name":"Murukku","price":60,"stockQuantity":12,"tags":["savoury"]}]"#,
        )
        .unwrap();

    let h = MemoryHarness::with_storage(storage);
    assert!(h.state.wishlist.flush());

    let stored: serde_json::Value =
        serde_json::from_slice(&h.raw(keys::WISHLIST).unwrap()).unwrap();
    assert_eq!(stored[0]["stockQuantity"], 12);
    assert_eq!(stored[0]["tags"][0], "savoury");
}

#[test]
fn test_product_with_quantity_field_survives_reload() {
    let mixture: Product =
        serde_json::from_str(r#"{"id":1,"name":"Mixture","price":50,"quantity":"250g"}"#).unwrap();

    let mut h = MemoryHarness::new();
    h.state.cart.add_to_cart(&mixture, qty(2));
    assert_eq!(h.reload().state.cart.count(), 2);

    let mut h = MemoryHarness::new();
    h.state.wishlist.add_to_wishlist(&mixture);
    let state = &mut h.state;
    state.wishlist.move_to_cart(ProductId::new(1), &mut state.cart);
    state.cart.add_one(&product(9, 20));

    let reloaded = h.reload();
    assert_eq!(reloaded.state.cart.line_count(), 2);
    assert_eq!(reloaded.state.cart.count(), 2);
    let kept = reloaded.state.wishlist.items().first().unwrap();
    assert_eq!(kept.extra["quantity"], "250g");
}

// =============================================================================
// Rejected writes
// =============================================================================

#[test]
fn test_quota_rejection_keeps_memory_state() {
    let storage = MemoryStore::with_quota(200);
    let mut h = MemoryHarness::with_storage(storage);

    for id in 1..=5 {
        h.state.cart.add_one(&product(id, 10));
    }
    assert_eq!(h.state.cart.count(), 5);

    let persisted = h.reload();
    assert!(persisted.state.cart.count() < 5);
    assert!(!h.state.cart.flush());

    h.storage.set_quota(None);
    assert!(h.state.cart.flush());
    assert_eq!(h.reload().state.cart.count(), 5);
}

#[test]
fn test_quota_error_reports_sizes() {
    let storage = MemoryStore::with_quota(4);
    let err = storage.save(keys::CART, b"[1,2,3]").unwrap_err();
    assert!(matches!(
        err,
        StorageError::QuotaExceeded {
            needed: 7,
            available: 4,
            ..
        }
    ));
}
