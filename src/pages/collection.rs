//! Collection page - the current user's plain cards.
//!
//! Converting a card asks for confirmation, applies the conversion and then
//! plays the minting spinner.

use cardvault_core::{i18n, t, Card, CardId, MessageId};
use dioxus::prelude::*;

use crate::components::{
    Button, CardDetails, CardTile, ConfirmationModal, NavHeader, NavLocation,
};
use crate::context::{get_mint_delay, start_minting, use_language, use_store};

#[component]
pub fn Collection() -> Element {
    let store = use_store();
    let lang = use_language();

    let mut selected: Signal<Option<CardId>> = use_signal(|| None);
    let mut confirming = use_signal(|| false);
    let minting = use_signal(|| false);
    let mut feedback: Signal<Option<String>> = use_signal(|| None);

    let cards: Vec<Card> = store.read().cards().into_iter().cloned().collect();
    let selected_card = selected().and_then(|id| store.read().get(&id).cloned());

    let mut convert = move |id: CardId| {
        confirming.set(false);
        selected.set(None);
        match start_minting(store, minting, &id, get_mint_delay()) {
            Ok(()) => feedback.set(None),
            Err(e) => {
                tracing::warn!("Minting failed: {}", e);
                feedback.set(Some(i18n::action_failed(lang, &e)));
            }
        }
    };

    rsx! {
        NavHeader { current: NavLocation::Collection }
        main { class: "page-container",
            header { class: "page-header",
                h1 { class: "page-title", {t(lang, MessageId::CollectionTitle)} }
                p { class: "page-subtitle", {t(lang, MessageId::CollectionSubtitle)} }
            }
            if let Some(msg) = feedback() {
                p { class: "error-text", "{msg}" }
            }

            if minting() {
                div { class: "loading-state",
                    div { class: "spinner" }
                    p { {t(lang, MessageId::Minting)} }
                }
            } else if cards.is_empty() {
                div { class: "empty-state",
                    div { class: "empty-box",
                        p { {t(lang, MessageId::CollectionEmpty)} }
                    }
                }
            } else {
                div { class: "card-grid",
                    for card in cards {
                        CardTile {
                            key: "{card.id}",
                            card: card.clone(),
                            onclick: {
                                let id = card.id.clone();
                                move |_| selected.set(Some(id.clone()))
                            },
                        }
                    }
                }
            }
        }

        if let Some(card) = selected_card.filter(|c| !c.is_nft()) {
            if !minting() {
                CardDetails {
                    card: card.clone(),
                    on_close: move |_| selected.set(None),
                    Button {
                        class: "btn-full",
                        onclick: move |_| confirming.set(true),
                        {t(lang, MessageId::ConvertToNft)}
                    }
                }
            }
            if confirming() {
                ConfirmationModal {
                    title: t(lang, MessageId::ConvertToNft).to_string(),
                    message: t(lang, MessageId::ConvertConfirmMessage).to_string(),
                    on_confirm: {
                        let id = card.id.clone();
                        move |_| convert(id.clone())
                    },
                    on_cancel: move |_| confirming.set(false),
                }
            }
        }
    }
}
