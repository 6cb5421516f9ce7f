//! NFTs page - what the current user holds.

use cardvault_core::{t, Card, CardId, MessageId};
use dioxus::prelude::*;

use crate::components::{find_card, CardDetails, NavHeader, NavLocation, NftCard};
use crate::context::{use_language, use_store};

#[component]
pub fn Nfts() -> Element {
    let store = use_store();
    let lang = use_language();
    let mut selected: Signal<Option<CardId>> = use_signal(|| None);

    let nfts: Vec<Card> = store.read().nfts().into_iter().cloned().collect();
    // Gifting or selling moves the card away; the dialog closes with it.
    let selected_card = find_card(&nfts, selected().as_ref());

    rsx! {
        NavHeader { current: NavLocation::Nfts }
        main { class: "page-container",
            header { class: "page-header",
                h1 { class: "page-title", {t(lang, MessageId::NftsTitle)} }
                p { class: "page-subtitle", {t(lang, MessageId::NftsSubtitle)} }
            }

            if nfts.is_empty() {
                div { class: "empty-state",
                    div { class: "empty-box",
                        h3 { {t(lang, MessageId::NftsEmptyTitle)} }
                        p { {t(lang, MessageId::NftsEmptyMessage)} }
                    }
                }
            } else {
                div { class: "card-grid",
                    for nft in nfts.iter().cloned() {
                        NftCard {
                            key: "{nft.id}",
                            card: nft,
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
