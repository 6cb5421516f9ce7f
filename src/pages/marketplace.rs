//! Marketplace page - every listed NFT, whoever sells it.

use cardvault_core::{t, Card, CardId, MessageId};
use dioxus::prelude::*;

use crate::components::{find_card, CardDetails, ListingCard, NavHeader, NavLocation};
use crate::context::{use_language, use_store};

#[component]
pub fn Marketplace() -> Element {
    let store = use_store();
    let lang = use_language();
    let mut selected: Signal<Option<CardId>> = use_signal(|| None);

    let listings: Vec<Card> = store.read().marketplace().into_iter().cloned().collect();
    let selected_card = find_card(&listings, selected().as_ref());

    rsx! {
        NavHeader { current: NavLocation::Marketplace }
        main { class: "page-container",
            header { class: "page-header",
                h1 { class: "page-title", {t(lang, MessageId::MarketTitle)} }
                p { class: "page-subtitle", {t(lang, MessageId::MarketSubtitle)} }
            }

            if listings.is_empty() {
                div { class: "empty-state",
                    div { class: "empty-box",
                        h3 { {t(lang, MessageId::MarketEmptyTitle)} }
                        p { {t(lang, MessageId::MarketEmptyMessage)} }
                    }
                }
            } else {
                div { class: "card-grid",
                    for listing in listings.iter().cloned() {
                        ListingCard {
                            key: "{listing.id}",
                            card: listing,
                            on_open: move |id| selected.set(Some(id)),
                        }
                    }
                }
            }
        }

        if let Some(card) = selected_card {
            CardDetails { card, on_close: move |_| selected.set(None) }
        }
    }
}
