//! Page components for Card Vault.

mod collection;
mod marketplace;
mod nfts;
mod not_found;
mod profile;
mod settings;

pub use collection::Collection;
pub use marketplace::Marketplace;
pub use nfts::Nfts;
pub use not_found::NotFound;
pub use profile::Profile;
pub use settings::Settings;
