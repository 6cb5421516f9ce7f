//! Color constants that do not depend on theme or accent.

use cardvault_core::Rarity;

// === RARITY ===
pub const RARITY_COMMON: &str = "#9ca3af";
pub const RARITY_UNCOMMON: &str = "#22c55e";
pub const RARITY_RARE: &str = "#3b82f6";
pub const RARITY_EPIC: &str = "#a855f7";
pub const RARITY_LEGENDARY: &str = "#facc15";

// === SEMANTIC ===
pub const FAVORITE: &str = "#ef4444";
pub const LIKE: &str = "#4ade80";
pub const DISLIKE: &str = "#f87171";

/// Border and label color for a rarity
pub fn rarity_color(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => RARITY_COMMON,
        Rarity::Uncommon => RARITY_UNCOMMON,
        Rarity::Rare => RARITY_RARE,
        Rarity::Epic => RARITY_EPIC,
        Rarity::Legendary => RARITY_LEGENDARY,
    }
}
