//! Core types for Card Vault

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::VaultError;

/// Identifier of a card or NFT.
///
/// Ids come from seed data, so they are plain strings rather than generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a user in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered rarity classification: common < uncommon < rare < epic < legendary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| VaultError::Serialization(format!("unknown rarity: {}", s)))
    }
}

/// Sale price in FPI Bank.
///
/// Always positive and finite; a listing cannot exist without one.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Result<Self, VaultError> {
        if amount.is_finite() && amount > 0.0 {
            Ok(Self(amount))
        } else {
            Err(VaultError::InvalidPrice(amount))
        }
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = VaultError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Price::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which list an item currently belongs to.
///
/// The price lives inside `Listed`, so a listing without a price (or a price
/// on an unlisted item) cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemStatus {
    /// Plain card in its owner's collection
    InCollection,
    /// NFT held by its owner
    Owned,
    /// NFT offered on the marketplace
    Listed(Price),
}

impl ItemStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::InCollection => "in-collection",
            ItemStatus::Owned => "owned",
            ItemStatus::Listed(_) => "listed",
        }
    }
}

/// A collectible card, plain or tokenized.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    /// Image URL; empty means the view falls back to a placeholder
    pub image: String,
    pub owner: UserId,
    pub favorite: bool,
    pub(crate) status: ItemStatus,
}

impl Card {
    /// Create a plain (not yet tokenized) card
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rarity: Rarity,
        owner: UserId,
    ) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            description: String::new(),
            rarity,
            image: String::new(),
            owner,
            favorite: false,
            status: ItemStatus::InCollection,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    /// Conversion is one-way, so anything past the collection is an NFT
    pub fn is_nft(&self) -> bool {
        !matches!(self.status, ItemStatus::InCollection)
    }

    pub fn for_sale(&self) -> bool {
        matches!(self.status, ItemStatus::Listed(_))
    }

    pub fn price(&self) -> Option<Price> {
        match self.status {
            ItemStatus::Listed(price) => Some(price),
            _ => None,
        }
    }
}

/// A mock user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub avatar: String,
    pub description: String,
    pub likes: u32,
    pub dislikes: u32,
}

/// A viewer's vote on a user profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Like,
    Dislike,
}

/// Identifier of a trade offer.
///
/// Uses ULID so offers sort by creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OfferId(pub Ulid);

impl OfferId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for OfferId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offer_{}", self.0)
    }
}

/// A pending request to hand an NFT to another user.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeOffer {
    pub id: OfferId,
    pub nft_id: CardId,
    pub from: UserId,
    pub to: UserId,
    /// Unix timestamp of creation
    pub created_at: i64,
}

impl TradeOffer {
    pub fn new(nft_id: CardId, from: UserId, to: UserId) -> Self {
        Self {
            id: OfferId::new(),
            nft_id,
            from,
            to,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}
