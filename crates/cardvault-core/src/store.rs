//! Collection Store - registry of cards, NFTs and marketplace listings
//!
//! Every item lives in one registry keyed by id and carries an explicit
//! [`ItemStatus`]. The plain-card, owned-NFT and marketplace lists are views
//! derived from that status, so they are disjoint by construction.
//!
//! Mutations never touch `self`: each returns the next snapshot. The
//! `try_*` forms report why an operation was rejected; the plain forms keep
//! the snapshot unchanged on rejection and only log it.
//!
//! # Example
//!
//! ```
//! use cardvault_core::{CardId, CollectionStore, UserId};
//!
//! let store = CollectionStore::seeded().unwrap();
//! let id = CardId::from("1");
//!
//! let store = store.convert_to_nft(&id);
//! let store = store.put_for_sale(&id, 0.05);
//! assert_eq!(store.marketplace().len(), 1);
//!
//! let store = store.switch_user(&UserId::from("2")).buy_nft(&id);
//! assert_eq!(store.nfts().len(), 1);
//! assert_eq!(store.get(&id).unwrap().owner, UserId::from("2"));
//! ```

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::error::{VaultError, VaultResult};
use crate::types::{Card, CardId, ItemStatus, OfferId, Price, Reaction, TradeOffer, User, UserId};
use crate::users::UserDirectory;

/// Snapshot of the whole simulated economy, seen from the current user
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionStore {
    items: BTreeMap<CardId, Card>,
    /// Display order; an item moves to the back whenever it changes list
    order: Vec<CardId>,
    users: UserDirectory,
    current_user: UserId,
    offers: Vec<TradeOffer>,
}

impl CollectionStore {
    /// Create an empty store; the directory's first user is current
    pub fn new(users: UserDirectory) -> Self {
        let current_user = users.default_user().id.clone();
        Self {
            items: BTreeMap::new(),
            order: Vec::new(),
            users,
            current_user,
            offers: Vec::new(),
        }
    }

    /// Store populated from the embedded seed data
    pub fn seeded() -> VaultResult<Self> {
        crate::seed::load()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Views
    // ═══════════════════════════════════════════════════════════════════════

    pub fn current_user(&self) -> &User {
        // current_user is only ever set to a directory member
        self.users
            .get(&self.current_user)
            .unwrap_or_else(|| self.users.default_user())
    }

    pub fn current_user_id(&self) -> &UserId {
        &self.current_user
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every item in display order
    pub fn items(&self) -> impl Iterator<Item = &Card> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    /// Plain cards of the current user
    pub fn cards(&self) -> Vec<&Card> {
        self.items()
            .filter(|c| c.status == ItemStatus::InCollection && c.owner == self.current_user)
            .collect()
    }

    /// NFTs held (not listed) by the current user
    pub fn nfts(&self) -> Vec<&Card> {
        self.items()
            .filter(|c| c.status == ItemStatus::Owned && c.owner == self.current_user)
            .collect()
    }

    /// Everything listed for sale, by any owner
    pub fn marketplace(&self) -> Vec<&Card> {
        self.items().filter(|c| c.for_sale()).collect()
    }

    /// Pending offers that are still valid
    pub fn trade_offers(&self) -> Vec<&TradeOffer> {
        self.offers.iter().filter(|o| self.offer_is_live(o)).collect()
    }

    /// Pending offers addressed to the current user
    pub fn incoming_offers(&self) -> Vec<&TradeOffer> {
        self.trade_offers()
            .into_iter()
            .filter(|o| o.to == self.current_user)
            .collect()
    }

    /// Pending offers made by the current user
    pub fn outgoing_offers(&self) -> Vec<&TradeOffer> {
        self.trade_offers()
            .into_iter()
            .filter(|o| o.from == self.current_user)
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Checked operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Register a new plain card
    pub fn try_add_card(&self, card: Card) -> VaultResult<Self> {
        self.mutate(|next| {
            if next.items.contains_key(&card.id) {
                return Err(VaultError::DuplicateItem(card.id.to_string()));
            }
            next.require_user(&card.owner)?;

            let mut card = card;
            card.status = ItemStatus::InCollection;
            info!(card = %card.id, owner = %card.owner, "Card added");
            next.order.push(card.id.clone());
            next.items.insert(card.id.clone(), card);
            Ok(())
        })
    }

    /// Make another directory user current
    pub fn try_switch_user(&self, user_id: &UserId) -> VaultResult<Self> {
        self.mutate(|next| {
            next.require_user(user_id)?;
            next.current_user = user_id.clone();
            info!(user = %user_id, "Switched current user");
            Ok(())
        })
    }

    /// Tokenize a plain card of the current user (irreversible)
    pub fn try_convert_to_nft(&self, card_id: &CardId) -> VaultResult<Self> {
        self.mutate(|next| {
            let card = next.owned_item_mut(card_id)?;
            expect_status(card, ItemStatus::InCollection, "in-collection")?;
            card.status = ItemStatus::Owned;
            next.move_to_back(card_id);
            info!(card = %card_id, "Card converted to NFT");
            Ok(())
        })
    }

    /// Flip the favorite flag on an owned or listed NFT
    pub fn try_toggle_favorite(&self, nft_id: &CardId) -> VaultResult<Self> {
        self.mutate(|next| {
            let current = next.current_user.clone();
            let nft = next.item_mut(nft_id)?;
            match nft.status {
                ItemStatus::Listed(_) => {}
                ItemStatus::Owned if nft.owner == current => {}
                ItemStatus::Owned => {
                    return Err(VaultError::NotOwner {
                        id: nft_id.to_string(),
                        owner: nft.owner.to_string(),
                    })
                }
                ItemStatus::InCollection => {
                    return Err(VaultError::WrongStatus {
                        id: nft_id.to_string(),
                        expected: "owned or listed",
                        actual: nft.status.label(),
                    })
                }
            }
            nft.favorite = !nft.favorite;
            debug!(nft = %nft_id, favorite = nft.favorite, "Favorite toggled");
            Ok(())
        })
    }

    /// List an NFT of the current user on the marketplace
    pub fn try_put_for_sale(&self, nft_id: &CardId, price: f64) -> VaultResult<Self> {
        let price = Price::new(price)?;
        self.mutate(|next| {
            let nft = next.owned_item_mut(nft_id)?;
            expect_status(nft, ItemStatus::Owned, "owned")?;
            nft.status = ItemStatus::Listed(price);
            next.move_to_back(nft_id);
            info!(nft = %nft_id, %price, "NFT listed for sale");
            Ok(())
        })
    }

    /// Take the current user's listing off the marketplace
    pub fn try_remove_from_sale(&self, nft_id: &CardId) -> VaultResult<Self> {
        self.mutate(|next| {
            let nft = next.owned_item_mut(nft_id)?;
            expect_listed(nft)?;
            nft.status = ItemStatus::Owned;
            next.move_to_back(nft_id);
            info!(nft = %nft_id, "NFT removed from sale");
            Ok(())
        })
    }

    /// Buy someone else's listing. No balance is modelled.
    pub fn try_buy_nft(&self, nft_id: &CardId) -> VaultResult<Self> {
        self.mutate(|next| {
            let buyer = next.current_user.clone();
            let nft = next.item_mut(nft_id)?;
            let price = expect_listed(nft)?;
            if nft.owner == buyer {
                return Err(VaultError::AlreadyOwner(nft_id.to_string()));
            }
            let seller = std::mem::replace(&mut nft.owner, buyer.clone());
            nft.status = ItemStatus::Owned;
            next.move_to_back(nft_id);
            info!(nft = %nft_id, from = %seller, to = %buyer, %price, "NFT bought");
            Ok(())
        })
    }

    /// Hand an NFT of the current user to another user
    pub fn try_gift_nft(&self, nft_id: &CardId, recipient_id: &UserId) -> VaultResult<Self> {
        self.mutate(|next| {
            next.require_recipient(recipient_id)?;
            let nft = next.owned_item_mut(nft_id)?;
            expect_status(nft, ItemStatus::Owned, "owned")?;
            nft.owner = recipient_id.clone();
            next.move_to_back(nft_id);
            info!(nft = %nft_id, to = %recipient_id, "NFT gifted");
            Ok(())
        })
    }

    /// Offer an NFT of the current user to another user.
    ///
    /// A repeated offer of the same NFT to the same user replaces the old one.
    pub fn try_request_trade(&self, nft_id: &CardId, recipient_id: &UserId) -> VaultResult<Self> {
        self.mutate(|next| {
            next.require_recipient(recipient_id)?;
            let nft = next.owned_item_mut(nft_id)?;
            expect_status(nft, ItemStatus::Owned, "owned")?;

            let from = next.current_user.clone();
            next.offers
                .retain(|o| !(o.nft_id == *nft_id && o.to == *recipient_id));
            let offer = TradeOffer::new(nft_id.clone(), from, recipient_id.clone());
            info!(offer = %offer.id, nft = %nft_id, to = %recipient_id, "Trade requested");
            next.offers.push(offer);
            Ok(())
        })
    }

    /// Accept an offer addressed to the current user
    pub fn try_accept_trade(&self, offer_id: &OfferId) -> VaultResult<Self> {
        self.mutate(|next| {
            let offer = next.live_offer(offer_id)?.clone();
            if offer.to != next.current_user {
                return Err(VaultError::NotRecipient(offer_id.to_string()));
            }

            let nft = next.item_mut(&offer.nft_id)?;
            nft.owner = offer.to.clone();
            next.move_to_back(&offer.nft_id);
            next.offers.retain(|o| o.id != *offer_id);
            info!(offer = %offer_id, nft = %offer.nft_id, from = %offer.from, "Trade accepted");
            Ok(())
        })
    }

    /// Drop an offer; either side may do this
    pub fn try_decline_trade(&self, offer_id: &OfferId) -> VaultResult<Self> {
        self.mutate(|next| {
            let offer = next.live_offer(offer_id)?;
            if offer.to != next.current_user && offer.from != next.current_user {
                return Err(VaultError::NotRecipient(offer_id.to_string()));
            }
            next.offers.retain(|o| o.id != *offer_id);
            info!(offer = %offer_id, "Trade declined");
            Ok(())
        })
    }

    /// Like or dislike a profile as the current user
    pub fn try_toggle_user_like(&self, user_id: &UserId, reaction: Reaction) -> VaultResult<Self> {
        self.mutate(|next| {
            let viewer = next.current_user.clone();
            next.users.toggle_user_like(&viewer, user_id, reaction)
        })
    }

    /// Withdraw the current user's vote on a profile
    pub fn try_clear_user_reaction(&self, user_id: &UserId) -> VaultResult<Self> {
        self.mutate(|next| {
            let viewer = next.current_user.clone();
            next.users.clear_reaction(&viewer, user_id)
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Silent operations
    // ═══════════════════════════════════════════════════════════════════════

    pub fn add_card(&self, card: Card) -> Self {
        self.or_unchanged("add_card", self.try_add_card(card))
    }

    pub fn switch_user(&self, user_id: &UserId) -> Self {
        self.or_unchanged("switch_user", self.try_switch_user(user_id))
    }

    pub fn convert_to_nft(&self, card_id: &CardId) -> Self {
        self.or_unchanged("convert_to_nft", self.try_convert_to_nft(card_id))
    }

    pub fn toggle_favorite(&self, nft_id: &CardId) -> Self {
        self.or_unchanged("toggle_favorite", self.try_toggle_favorite(nft_id))
    }

    pub fn put_for_sale(&self, nft_id: &CardId, price: f64) -> Self {
        self.or_unchanged("put_for_sale", self.try_put_for_sale(nft_id, price))
    }

    pub fn remove_from_sale(&self, nft_id: &CardId) -> Self {
        self.or_unchanged("remove_from_sale", self.try_remove_from_sale(nft_id))
    }

    pub fn buy_nft(&self, nft_id: &CardId) -> Self {
        self.or_unchanged("buy_nft", self.try_buy_nft(nft_id))
    }

    pub fn gift_nft(&self, nft_id: &CardId, recipient_id: &UserId) -> Self {
        self.or_unchanged("gift_nft", self.try_gift_nft(nft_id, recipient_id))
    }

    pub fn request_trade(&self, nft_id: &CardId, recipient_id: &UserId) -> Self {
        self.or_unchanged("request_trade", self.try_request_trade(nft_id, recipient_id))
    }

    pub fn accept_trade(&self, offer_id: &OfferId) -> Self {
        self.or_unchanged("accept_trade", self.try_accept_trade(offer_id))
    }

    pub fn decline_trade(&self, offer_id: &OfferId) -> Self {
        self.or_unchanged("decline_trade", self.try_decline_trade(offer_id))
    }

    pub fn clear_user_reaction(&self, user_id: &UserId) -> Self {
        self.or_unchanged("clear_user_reaction", self.try_clear_user_reaction(user_id))
    }

    pub fn toggle_user_like(&self, user_id: &UserId, reaction: Reaction) -> Self {
        self.or_unchanged("toggle_user_like", self.try_toggle_user_like(user_id, reaction))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Internals
    // ═══════════════════════════════════════════════════════════════════════

    /// Apply `op` to a copy and return it, dropping offers it invalidated
    fn mutate<F>(&self, op: F) -> VaultResult<Self>
    where
        F: FnOnce(&mut Self) -> VaultResult<()>,
    {
        let mut next = self.clone();
        op(&mut next)?;
        next.prune_offers();
        Ok(next)
    }

    fn or_unchanged(&self, op: &'static str, result: VaultResult<Self>) -> Self {
        match result {
            Ok(next) => next,
            Err(e) => {
                debug!(op, error = %e, "Operation rejected, snapshot unchanged");
                self.clone()
            }
        }
    }

    fn item_mut(&mut self, id: &CardId) -> VaultResult<&mut Card> {
        self.items
            .get_mut(id)
            .ok_or_else(|| VaultError::ItemNotFound(id.to_string()))
    }

    /// Look up an item that must belong to the current user
    fn owned_item_mut(&mut self, id: &CardId) -> VaultResult<&mut Card> {
        let current = self.current_user.clone();
        let item = self.item_mut(id)?;
        if item.owner != current {
            return Err(VaultError::NotOwner {
                id: id.to_string(),
                owner: item.owner.to_string(),
            });
        }
        Ok(item)
    }

    fn require_user(&self, id: &UserId) -> VaultResult<()> {
        if self.users.contains(id) {
            Ok(())
        } else {
            Err(VaultError::UserNotFound(id.to_string()))
        }
    }

    fn require_recipient(&self, id: &UserId) -> VaultResult<()> {
        self.require_user(id)?;
        if *id == self.current_user {
            return Err(VaultError::SelfTransfer(id.to_string()));
        }
        Ok(())
    }

    fn move_to_back(&mut self, id: &CardId) {
        self.order.retain(|o| o != id);
        self.order.push(id.clone());
    }

    fn live_offer(&self, id: &OfferId) -> VaultResult<&TradeOffer> {
        self.offers
            .iter()
            .find(|o| o.id == *id && self.offer_is_live(o))
            .ok_or_else(|| VaultError::OfferNotFound(id.to_string()))
    }

    fn offer_is_live(&self, offer: &TradeOffer) -> bool {
        offer_is_live(&self.items, offer)
    }

    fn prune_offers(&mut self) {
        let items = &self.items;
        self.offers.retain(|o| offer_is_live(items, o));
    }
}

/// An offer stays valid while the sender still holds the NFT unlisted
fn offer_is_live(items: &BTreeMap<CardId, Card>, offer: &TradeOffer) -> bool {
    items
        .get(&offer.nft_id)
        .is_some_and(|c| c.status == ItemStatus::Owned && c.owner == offer.from)
}

fn expect_status(card: &Card, expected: ItemStatus, label: &'static str) -> VaultResult<()> {
    if card.status == expected {
        Ok(())
    } else {
        Err(VaultError::WrongStatus {
            id: card.id.to_string(),
            expected: label,
            actual: card.status.label(),
        })
    }
}

fn expect_listed(card: &Card) -> VaultResult<Price> {
    card.price().ok_or_else(|| VaultError::WrongStatus {
        id: card.id.to_string(),
        expected: "listed",
        actual: card.status.label(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rarity;

    fn user(id: &str) -> User {
        User {
            id: UserId::from(id),
            name: format!("User {}", id),
            avatar: String::new(),
            description: String::new(),
            likes: 0,
            dislikes: 0,
        }
    }

    fn store() -> CollectionStore {
        let users = UserDirectory::new(vec![user("1"), user("2"), user("3")]).unwrap();
        CollectionStore::new(users)
            .try_add_card(Card::new("a", "Alpha", Rarity::Legendary, UserId::from("1")))
            .unwrap()
            .try_add_card(Card::new("b", "Beta", Rarity::Common, UserId::from("1")))
            .unwrap()
    }

    fn id(s: &str) -> CardId {
        CardId::from(s)
    }

    fn ids(cards: &[&Card]) -> Vec<String> {
        cards.iter().map(|c| c.id.to_string()).collect()
    }

    #[test]
    fn test_add_card_rejects_duplicates_and_unknown_owner() {
        let s = store();
        let dup = s.try_add_card(Card::new("a", "Again", Rarity::Rare, UserId::from("1")));
        assert!(matches!(dup, Err(VaultError::DuplicateItem(_))));

        let orphan = s.try_add_card(Card::new("z", "Orphan", Rarity::Rare, UserId::from("9")));
        assert!(matches!(orphan, Err(VaultError::UserNotFound(_))));
    }

    #[test]
    fn test_add_card_forces_plain_status() {
        let users = UserDirectory::new(vec![user("1")]).unwrap();
        let mut card = Card::new("x", "X", Rarity::Epic, UserId::from("1"));
        card.status = ItemStatus::Owned;
        let s = CollectionStore::new(users).add_card(card);
        assert!(!s.get(&id("x")).unwrap().is_nft());
    }

    #[test]
    fn test_convert_moves_card_to_nfts() {
        let s = store().convert_to_nft(&id("a"));
        assert_eq!(ids(&s.cards()), vec!["b"]);
        assert_eq!(ids(&s.nfts()), vec!["a"]);
        assert!(s.get(&id("a")).unwrap().is_nft());
    }

    #[test]
    fn test_convert_unknown_is_noop() {
        let s = store();
        assert_eq!(s.convert_to_nft(&id("nope")), s);
        assert!(matches!(
            s.try_convert_to_nft(&id("nope")),
            Err(VaultError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_convert_twice_is_rejected() {
        let s = store().convert_to_nft(&id("a"));
        assert!(matches!(
            s.try_convert_to_nft(&id("a")),
            Err(VaultError::WrongStatus { .. })
        ));
    }

    #[test]
    fn test_operations_leave_original_snapshot_untouched() {
        let before = store();
        let after = before.convert_to_nft(&id("a"));
        assert_eq!(before.cards().len(), 2);
        assert_eq!(after.cards().len(), 1);
    }

    #[test]
    fn test_toggle_favorite_requires_nft() {
        let s = store();
        assert!(s.try_toggle_favorite(&id("a")).is_err());

        let s = s.convert_to_nft(&id("a")).toggle_favorite(&id("a"));
        assert!(s.get(&id("a")).unwrap().favorite);
    }

    #[test]
    fn test_toggle_favorite_on_listing() {
        let s = store()
            .convert_to_nft(&id("a"))
            .put_for_sale(&id("a"), 1.0)
            .switch_user(&UserId::from("2"))
            .toggle_favorite(&id("a"));
        assert!(s.get(&id("a")).unwrap().favorite);
    }

    #[test]
    fn test_put_for_sale_validates_price() {
        let s = store().convert_to_nft(&id("a"));
        assert!(matches!(
            s.try_put_for_sale(&id("a"), 0.0),
            Err(VaultError::InvalidPrice(_))
        ));
        assert!(s.try_put_for_sale(&id("a"), -3.0).is_err());
        assert_eq!(s.put_for_sale(&id("a"), f64::NAN), s);
    }

    #[test]
    fn test_put_for_sale_moves_to_marketplace() {
        let s = store().convert_to_nft(&id("a")).put_for_sale(&id("a"), 0.05);
        assert!(s.nfts().is_empty());
        assert_eq!(ids(&s.marketplace()), vec!["a"]);
        let nft = s.get(&id("a")).unwrap();
        assert!(nft.for_sale());
        assert_eq!(nft.price().unwrap().amount(), 0.05);
    }

    #[test]
    fn test_put_for_sale_rejects_plain_card() {
        let s = store();
        assert!(matches!(
            s.try_put_for_sale(&id("a"), 1.0),
            Err(VaultError::WrongStatus { .. })
        ));
    }

    #[test]
    fn test_remove_from_sale_requires_owner() {
        let s = store().convert_to_nft(&id("a")).put_for_sale(&id("a"), 1.0);
        let other = s.switch_user(&UserId::from("2"));
        assert!(matches!(
            other.try_remove_from_sale(&id("a")),
            Err(VaultError::NotOwner { .. })
        ));

        let back = s.remove_from_sale(&id("a"));
        assert_eq!(ids(&back.nfts()), vec!["a"]);
        assert!(back.get(&id("a")).unwrap().price().is_none());
    }

    #[test]
    fn test_buy_own_listing_rejected() {
        let s = store().convert_to_nft(&id("a")).put_for_sale(&id("a"), 1.0);
        assert!(matches!(
            s.try_buy_nft(&id("a")),
            Err(VaultError::AlreadyOwner(_))
        ));
    }

    #[test]
    fn test_buy_transfers_ownership() {
        let s = store()
            .convert_to_nft(&id("a"))
            .put_for_sale(&id("a"), 1.0)
            .switch_user(&UserId::from("3"))
            .buy_nft(&id("a"));
        assert!(s.marketplace().is_empty());
        assert_eq!(ids(&s.nfts()), vec!["a"]);
        assert_eq!(s.get(&id("a")).unwrap().owner, UserId::from("3"));

        let seller = s.switch_user(&UserId::from("1"));
        assert!(seller.nfts().is_empty());
    }

    #[test]
    fn test_buy_unlisted_rejected() {
        let s = store().convert_to_nft(&id("a")).switch_user(&UserId::from("2"));
        assert!(matches!(
            s.try_buy_nft(&id("a")),
            Err(VaultError::WrongStatus { .. })
        ));
    }

    #[test]
    fn test_gift_moves_to_recipient_inventory() {
        let s = store()
            .convert_to_nft(&id("a"))
            .gift_nft(&id("a"), &UserId::from("2"));
        assert!(s.nfts().is_empty());
        assert_eq!(s.get(&id("a")).unwrap().owner, UserId::from("2"));

        let recipient = s.switch_user(&UserId::from("2"));
        assert_eq!(ids(&recipient.nfts()), vec!["a"]);
    }

    #[test]
    fn test_gift_validates_recipient() {
        let s = store().convert_to_nft(&id("a"));
        assert!(matches!(
            s.try_gift_nft(&id("a"), &UserId::from("1")),
            Err(VaultError::SelfTransfer(_))
        ));
        assert!(matches!(
            s.try_gift_nft(&id("a"), &UserId::from("42")),
            Err(VaultError::UserNotFound(_))
        ));
    }

    #[test]
    fn test_gift_listed_nft_rejected() {
        let s = store().convert_to_nft(&id("a")).put_for_sale(&id("a"), 2.0);
        assert!(s.try_gift_nft(&id("a"), &UserId::from("2")).is_err());
    }

    #[test]
    fn test_switch_to_unknown_user_is_noop() {
        let s = store();
        assert_eq!(s.switch_user(&UserId::from("nobody")), s);
        assert_eq!(s.current_user().id, UserId::from("1"));
    }

    #[test]
    fn test_conversion_order_follows_history() {
        let s = store().convert_to_nft(&id("b")).convert_to_nft(&id("a"));
        assert_eq!(ids(&s.nfts()), vec!["b", "a"]);
    }

    #[test]
    fn test_trade_accept_transfers() {
        let s = store()
            .convert_to_nft(&id("a"))
            .request_trade(&id("a"), &UserId::from("2"));
        assert_eq!(s.outgoing_offers().len(), 1);

        let recipient = s.switch_user(&UserId::from("2"));
        let offer_id = recipient.incoming_offers()[0].id.clone();
        let accepted = recipient.accept_trade(&offer_id);

        assert_eq!(ids(&accepted.nfts()), vec!["a"]);
        assert!(accepted.trade_offers().is_empty());
    }

    #[test]
    fn test_trade_accept_by_sender_rejected() {
        let s = store()
            .convert_to_nft(&id("a"))
            .request_trade(&id("a"), &UserId::from("2"));
        let offer_id = s.outgoing_offers()[0].id.clone();
        assert!(matches!(
            s.try_accept_trade(&offer_id),
            Err(VaultError::NotRecipient(_))
        ));
    }

    #[test]
    fn test_trade_offer_goes_stale_after_listing() {
        let s = store()
            .convert_to_nft(&id("a"))
            .request_trade(&id("a"), &UserId::from("2"))
            .put_for_sale(&id("a"), 1.0);
        assert!(s.trade_offers().is_empty());
    }

    #[test]
    fn test_repeated_trade_request_replaces_offer() {
        let s = store()
            .convert_to_nft(&id("a"))
            .request_trade(&id("a"), &UserId::from("2"))
            .request_trade(&id("a"), &UserId::from("2"))
            .request_trade(&id("a"), &UserId::from("3"));
        assert_eq!(s.trade_offers().len(), 2);
    }

    #[test]
    fn test_decline_trade_by_recipient() {
        let s = store()
            .convert_to_nft(&id("a"))
            .request_trade(&id("a"), &UserId::from("3"))
            .switch_user(&UserId::from("3"));
        let offer_id = s.incoming_offers()[0].id.clone();
        let s = s.decline_trade(&offer_id);
        assert!(s.trade_offers().is_empty());
        assert_eq!(s.get(&id("a")).unwrap().owner, UserId::from("1"));
    }

    #[test]
    fn test_decline_trade_by_sender() {
        let s = store()
            .convert_to_nft(&id("a"))
            .request_trade(&id("a"), &UserId::from("3"));
        let offer_id = s.outgoing_offers()[0].id.clone();

        let s = s.try_decline_trade(&offer_id).unwrap();
        assert!(s.trade_offers().is_empty());
        assert_eq!(s.get(&id("a")).unwrap().owner, UserId::from("1"));
    }

    #[test]
    fn test_decline_trade_by_bystander_rejected() {
        let s = store()
            .convert_to_nft(&id("a"))
            .request_trade(&id("a"), &UserId::from("3"));
        let offer_id = s.outgoing_offers()[0].id.clone();

        let bystander = s.switch_user(&UserId::from("2"));
        assert!(matches!(
            bystander.try_decline_trade(&offer_id),
            Err(VaultError::NotRecipient(_))
        ));
        assert_eq!(bystander.decline_trade(&offer_id).trade_offers().len(), 1);
    }

    #[test]
    fn test_clear_user_reaction_withdraws_vote() {
        let profile = UserId::from("2");
        let s = store()
            .toggle_user_like(&profile, Reaction::Dislike)
            .clear_user_reaction(&profile);
        assert_eq!(s.users().get(&profile).unwrap().dislikes, 0);
        assert_eq!(s.users().reaction(&UserId::from("1"), &profile), None);
    }

    #[test]
    fn test_toggle_user_like_uses_current_viewer() {
        let s = store().toggle_user_like(&UserId::from("2"), Reaction::Like);
        assert_eq!(s.users().get(&UserId::from("2")).unwrap().likes, 1);
        assert_eq!(
            s.users().reaction(&UserId::from("1"), &UserId::from("2")),
            Some(Reaction::Like)
        );
    }
}
