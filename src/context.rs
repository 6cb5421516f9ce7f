//! Shared state for the view layer.
//!
//! The collection and the preferences each live in a `Signal` provided by
//! [`App`](crate::app::App). Store operations return a new snapshot which
//! replaces the signal's value.
//!
//! ## Usage
//!
//! ```ignore
//! let store = use_store();
//! let nft = nft.clone();
//! apply(store, move |s| s.try_toggle_favorite(&nft));
//! ```

use std::time::Duration;

use cardvault_core::{i18n, CardId, CollectionStore, Language, Preferences, Storage, VaultResult};
use dioxus::prelude::*;

/// Hook to access the collection snapshot from context.
pub fn use_store() -> Signal<CollectionStore> {
    use_context::<Signal<CollectionStore>>()
}

/// Hook to access the presentation preferences from context.
pub fn use_preferences() -> Signal<Preferences> {
    use_context::<Signal<Preferences>>()
}

/// Current UI language.
pub fn use_language() -> Language {
    use_preferences()().language
}

/// Run a checked store operation and publish the result.
///
/// A rejected operation leaves the signal untouched and is returned to the
/// caller so it can show feedback.
pub fn apply<F>(mut store: Signal<CollectionStore>, op: F) -> VaultResult<()>
where
    F: FnOnce(&CollectionStore) -> VaultResult<CollectionStore>,
{
    let next = op(&store.read());
    match next {
        Ok(next) => {
            store.set(next);
            Ok(())
        }
        Err(e) => {
            tracing::debug!("Store operation rejected: {}", e);
            Err(e)
        }
    }
}

/// Run a checked store operation and keep its outcome in `feedback`.
///
/// Returns whether the operation was accepted.
pub fn apply_or_report<F>(
    store: Signal<CollectionStore>,
    mut feedback: Signal<Option<String>>,
    lang: Language,
    op: F,
) -> bool
where
    F: FnOnce(&CollectionStore) -> VaultResult<CollectionStore>,
{
    match apply(store, op) {
        Ok(()) => {
            feedback.set(None);
            true
        }
        Err(e) => {
            feedback.set(Some(i18n::action_failed(lang, &e)));
            false
        }
    }
}

/// Convert a card, then hold the minting spinner up for `delay`.
///
/// The conversion lands before the spinner task starts, so leaving the page
/// mid-animation only drops the spinner.
pub fn start_minting(
    store: Signal<CollectionStore>,
    mut minting: Signal<bool>,
    id: &CardId,
    delay: Duration,
) -> VaultResult<()> {
    apply(store, |s| s.try_convert_to_nft(id))?;
    tracing::info!(card = %id, "Minted");

    minting.set(true);
    spawn(async move {
        tokio::time::sleep(delay).await;
        minting.set(false);
    });
    Ok(())
}

/// Change the preferences and write them to the database.
///
/// A failed write is logged; the new preferences still apply in memory.
pub fn update_preferences<F>(mut prefs: Signal<Preferences>, change: F)
where
    F: FnOnce(&mut Preferences),
{
    let mut next = prefs();
    change(&mut next);
    if next == prefs() {
        return;
    }

    if let Some(storage) = get_storage() {
        if let Err(e) = storage.save_preferences(&next) {
            tracing::error!("Failed to save preferences: {}", e);
        }
    }
    prefs.set(next);
}

/// Duration of the cosmetic minting animation.
pub fn get_mint_delay() -> Duration {
    crate::bootstrap().mint_delay
}

/// Preferences database, if it could be opened at startup.
pub fn get_storage() -> Option<&'static Storage> {
    crate::bootstrap().storage.as_ref()
}
