use dioxus::prelude::*;

use cardvault_core::{CollectionStore, Preferences};

use crate::pages::{Collection, Marketplace, NotFound, Nfts, Profile, Settings};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Plain cards of the current user
/// - `/nfts` - NFTs of the current user
/// - `/marketplace` - Listings of every user
/// - `/profile` - Current user's profile and trade offers
/// - `/settings` - Theme, accent color and language
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Collection {},
    #[route("/nfts")]
    Nfts {},
    #[route("/marketplace")]
    Marketplace {},
    #[route("/profile")]
    Profile {},
    #[route("/settings")]
    Settings {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, the collection and preference signals, and routing.
#[component]
pub fn App() -> Element {
    let bootstrap = crate::bootstrap();

    let store: Signal<CollectionStore> = use_signal(|| bootstrap.store.clone());
    let preferences: Signal<Preferences> = use_signal(|| bootstrap.preferences);

    use_context_provider(|| store);
    use_context_provider(|| preferences);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {preferences().css_variables()} }
        div { class: "app-shell",
            Router::<Route> {}
        }
    }
}
