//! UI Components for Card Vault.

mod button;
mod card_tile;
mod details;
mod modal;
mod nav_header;
mod nft_card;

pub use button::{Button, ButtonVariant};
pub use card_tile::{image_or_placeholder, CardTile};
pub use details::{find_card, CardDetails};
pub use modal::ConfirmationModal;
pub use nav_header::{NavHeader, NavLocation};
pub use nft_card::{ListingCard, NftCard};
