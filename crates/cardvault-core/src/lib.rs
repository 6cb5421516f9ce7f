//! Card Vault Core Library
//!
//! Bookkeeping for a simulated card economy: plain cards, NFTs minted from
//! them, a marketplace, and transfers between mock users.
//!
//! ## Overview
//!
//! Nothing here touches a real chain or real money. "FPI Bank" prices are
//! numbers on a listing and a purchase only reassigns the owner. The whole
//! collection lives in memory; only the presentation preferences are
//! persisted.
//!
//! ## Quick Start
//!
//! ```
//! use cardvault_core::{CollectionStore, UserId};
//!
//! let store = CollectionStore::seeded().unwrap();
//! let card = store.cards()[0].id.clone();
//!
//! let store = store
//!     .convert_to_nft(&card)
//!     .gift_nft(&card, &UserId::from("3"));
//!
//! assert!(store.nfts().is_empty());
//! assert_eq!(store.switch_user(&UserId::from("3")).nfts().len(), 1);
//! ```

pub mod error;
pub mod i18n;
pub mod preferences;
pub mod seed;
pub mod storage;
pub mod store;
pub mod types;
pub mod users;

// Re-exports
pub use error::{VaultError, VaultResult};
pub use i18n::{t, MessageId};
pub use preferences::{AccentColor, Language, Palette, Preferences, Theme};
pub use storage::Storage;
pub use store::CollectionStore;
pub use types::*;
pub use users::UserDirectory;
