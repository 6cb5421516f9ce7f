//! Seed data embedded at build time
//!
//! The application has no runtime card creation; everything starts from
//! `seed.json`.

use serde::Deserialize;

use crate::error::{VaultError, VaultResult};
use crate::store::CollectionStore;
use crate::types::{Card, CardId, Rarity, User, UserId};
use crate::users::UserDirectory;

const SEED_JSON: &str = include_str!("seed.json");

#[derive(Debug, Deserialize)]
struct Seed {
    users: Vec<User>,
    cards: Vec<SeedCard>,
}

#[derive(Debug, Deserialize)]
struct SeedCard {
    id: CardId,
    name: String,
    #[serde(default)]
    description: String,
    rarity: Rarity,
    #[serde(default)]
    image: String,
    owner: UserId,
}

impl From<SeedCard> for Card {
    fn from(seed: SeedCard) -> Self {
        Card::new(seed.id.0, seed.name, seed.rarity, seed.owner)
            .with_description(seed.description)
            .with_image(seed.image)
    }
}

/// Build the starting store from the embedded seed
pub fn load() -> VaultResult<CollectionStore> {
    from_json(SEED_JSON)
}

/// Build a store from seed JSON of the same shape as the embedded one
pub fn from_json(json: &str) -> VaultResult<CollectionStore> {
    let seed: Seed =
        serde_json::from_str(json).map_err(|e| VaultError::Serialization(e.to_string()))?;

    let users = UserDirectory::new(seed.users)?;
    seed.cards
        .into_iter()
        .try_fold(CollectionStore::new(users), |store, card| {
            store.try_add_card(card.into())
        })
}
