//! Edge case and boundary condition tests
//!
//! Rejected operations must leave the snapshot exactly as it was.

use cardvault_core::{Card, CardId, CollectionStore, OfferId, Rarity, UserId, VaultError};

fn seeded() -> CollectionStore {
    CollectionStore::seeded().expect("embedded seed loads")
}

fn seed_id() -> CardId {
    CardId::from("1")
}

// ============================================================================
// Unknown ids
// ============================================================================

#[test]
fn test_unknown_ids_are_silent_noops() {
    let store = seeded();
    let ghost = CardId::from("ghost");

    assert_eq!(store.convert_to_nft(&ghost), store);
    assert_eq!(store.toggle_favorite(&ghost), store);
    assert_eq!(store.put_for_sale(&ghost, 1.0), store);
    assert_eq!(store.remove_from_sale(&ghost), store);
    assert_eq!(store.buy_nft(&ghost), store);
    assert_eq!(store.gift_nft(&ghost, &UserId::from("2")), store);
    assert_eq!(store.accept_trade(&OfferId::new()), store);
    assert_eq!(store.decline_trade(&OfferId::new()), store);
}

#[test]
fn test_unknown_ids_report_not_found() {
    let store = seeded();
    let ghost = CardId::from("ghost");

    assert!(matches!(
        store.try_buy_nft(&ghost),
        Err(VaultError::ItemNotFound(id)) if id == "ghost"
    ));
    assert!(matches!(
        store.try_switch_user(&UserId::from("ghost")),
        Err(VaultError::UserNotFound(_))
    ));
}

// ============================================================================
// Wrong list
// ============================================================================

#[test]
fn test_operations_on_wrong_list_are_rejected() {
    let store = seeded();
    let id = seed_id();

    // Still a plain card
    assert!(store.try_toggle_favorite(&id).is_err());
    assert!(store.try_put_for_sale(&id, 1.0).is_err());
    assert!(store.try_gift_nft(&id, &UserId::from("2")).is_err());

    // Owned but not listed
    let store = store.convert_to_nft(&id);
    assert!(matches!(
        store.try_remove_from_sale(&id),
        Err(VaultError::WrongStatus { expected: "listed", actual: "owned", .. })
    ));

    // Listed
    let store = store.put_for_sale(&id, 2.0);
    assert!(store.try_put_for_sale(&id, 4.0).is_err());
    assert_eq!(store.get(&id).unwrap().price().unwrap().amount(), 2.0);
}

#[test]
fn test_other_users_items_are_out_of_reach() {
    let store = seeded().switch_user(&UserId::from("2"));
    let id = seed_id();

    assert!(store.cards().is_empty());
    assert!(matches!(
        store.try_convert_to_nft(&id),
        Err(VaultError::NotOwner { .. })
    ));
}

// ============================================================================
// Prices
// ============================================================================

#[test]
fn test_boundary_prices() {
    let store = seeded().convert_to_nft(&seed_id());

    for bad in [0.0, -0.0, -0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(store.put_for_sale(&seed_id(), bad), store, "price {}", bad);
    }

    let tiny = store.put_for_sale(&seed_id(), f64::MIN_POSITIVE);
    assert_eq!(tiny.marketplace().len(), 1);
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_add_card_appends_to_collection() {
    let store = seeded().add_card(
        Card::new("2", "Второй", Rarity::Common, UserId::from("1"))
            .with_description("Обычная карточка"),
    );
    let names: Vec<_> = store.cards().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["тест", "Второй"]);
}

#[test]
fn test_card_for_other_user_not_in_current_view() {
    let store = seeded().add_card(Card::new("7", "Чужая", Rarity::Rare, UserId::from("3")));
    assert_eq!(store.cards().len(), 1);
    assert_eq!(store.switch_user(&UserId::from("3")).cards().len(), 1);
}

#[test]
fn test_gift_then_original_owner_cannot_act() {
    let id = seed_id();
    let store = seeded()
        .convert_to_nft(&id)
        .gift_nft(&id, &UserId::from("3"));

    assert!(matches!(
        store.try_put_for_sale(&id, 1.0),
        Err(VaultError::NotOwner { .. })
    ));
    assert!(matches!(
        store.try_gift_nft(&id, &UserId::from("2")),
        Err(VaultError::NotOwner { .. })
    ));
}
