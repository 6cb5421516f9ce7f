//! End-to-end flows through the seeded store

use cardvault_core::{CardId, CollectionStore, Rarity, Reaction, UserId, VaultError};

fn seeded() -> (CollectionStore, CardId) {
    let store = CollectionStore::seeded().expect("embedded seed loads");
    let id = store.cards()[0].id.clone();
    (store, id)
}

/// Mint, list and sell the seeded legendary card to another user
#[test]
fn test_seed_card_lifecycle() {
    let _ = tracing_subscriber::fmt::try_init();
    let (store, id) = seeded();

    let plain = store.get(&id).unwrap();
    assert_eq!(plain.rarity, Rarity::Legendary);
    assert_eq!(plain.owner, UserId::from("1"));

    let store = store.convert_to_nft(&id);
    assert!(store.cards().is_empty());
    assert_eq!(store.nfts().len(), 1);

    let store = store.put_for_sale(&id, 0.05);
    assert!(store.nfts().is_empty());
    let market = store.marketplace();
    assert_eq!(market.len(), 1);
    assert_eq!(market[0].price().unwrap().amount(), 0.05);

    let store = store.switch_user(&UserId::from("2")).buy_nft(&id);
    assert!(store.marketplace().is_empty());
    let nft = store.get(&id).unwrap();
    assert_eq!(nft.owner, UserId::from("2"));
    assert!(nft.price().is_none());
    assert!(!nft.for_sale());
    assert_eq!(store.nfts().len(), 1);
}

/// The seller no longer sees the card after the sale
#[test]
fn test_seller_inventory_after_sale() {
    let (store, id) = seeded();
    let store = store
        .convert_to_nft(&id)
        .put_for_sale(&id, 1.0)
        .switch_user(&UserId::from("3"))
        .buy_nft(&id)
        .switch_user(&UserId::from("1"));

    assert!(store.cards().is_empty());
    assert!(store.nfts().is_empty());
    assert!(store.marketplace().is_empty());
}

/// A gift followed by a resale from the recipient
#[test]
fn test_gift_then_resell() {
    let (store, id) = seeded();
    let store = store
        .convert_to_nft(&id)
        .toggle_favorite(&id)
        .gift_nft(&id, &UserId::from("2"))
        .switch_user(&UserId::from("2"))
        .put_for_sale(&id, 3.5);

    assert_eq!(store.marketplace().len(), 1);
    let nft = store.get(&id).unwrap();
    assert_eq!(nft.owner, UserId::from("2"));
    assert!(nft.favorite, "favorite flag travels with the NFT");

    let store = store.switch_user(&UserId::from("1")).buy_nft(&id);
    assert_eq!(store.get(&id).unwrap().owner, UserId::from("1"));
    assert_eq!(store.nfts().len(), 1);
}

/// Trade offer lifecycle between two users
#[test]
fn test_trade_offer_flow() {
    let (store, id) = seeded();
    let store = store
        .convert_to_nft(&id)
        .request_trade(&id, &UserId::from("3"));
    assert!(store.incoming_offers().is_empty());
    assert_eq!(store.outgoing_offers().len(), 1);

    let recipient = store.switch_user(&UserId::from("3"));
    let offer = recipient.incoming_offers()[0].clone();
    assert_eq!(offer.from, UserId::from("1"));
    assert_eq!(offer.nft_id, id);

    let done = recipient.try_accept_trade(&offer.id).unwrap();
    assert_eq!(done.nfts().len(), 1);
    assert!(matches!(
        done.try_accept_trade(&offer.id),
        Err(VaultError::OfferNotFound(_))
    ));
}

/// Profile votes from two viewers
#[test]
fn test_profile_votes() {
    let (store, _) = seeded();
    let target = UserId::from("1");

    let store = store
        .switch_user(&UserId::from("2"))
        .toggle_user_like(&target, Reaction::Like)
        .switch_user(&UserId::from("3"))
        .toggle_user_like(&target, Reaction::Dislike)
        .toggle_user_like(&target, Reaction::Like);

    let user = store.users().get(&target).unwrap();
    assert_eq!(user.likes, 44);
    assert_eq!(user.dislikes, 3);
}
