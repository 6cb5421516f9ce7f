//! Card details dialog

use cardvault_core::{i18n, t, Card, CardId, MessageId};
use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card_tile::image_or_placeholder;
use crate::components::modal::Modal;
use crate::context::{use_language, use_store};
use crate::theme::colors::rarity_color;

/// The card a page opened details for, if it is still among `cards`.
pub fn find_card(cards: &[Card], id: Option<&CardId>) -> Option<Card> {
    let id = id?;
    cards.iter().find(|c| &c.id == id).cloned()
}

#[derive(Props, Clone, PartialEq)]
pub struct CardDetailsProps {
    pub card: Card,
    pub on_close: EventHandler<()>,
    /// Actions shown under the details
    pub children: Element,
}

#[component]
pub fn CardDetails(props: CardDetailsProps) -> Element {
    let lang = use_language();
    let store = use_store();
    let card = &props.card;

    let owner = store
        .read()
        .users()
        .get(&card.owner)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| card.owner.to_string());
    let color = rarity_color(card.rarity);
    let image = image_or_placeholder(&card.image, 500);
    let on_close = props.on_close;

    rsx! {
        Modal { title: card.name.clone(), on_close, class: "details-modal",
            div { class: "card-details", style: "--rarity-color: {color};",
                div { class: "details-image",
                    img { src: "{image}", alt: "{card.name}" }
                }
                div {
                    span { class: "rarity-pill", {i18n::rarity_name(lang, card.rarity)} }
                    h3 { {t(lang, MessageId::DescriptionLabel)} }
                    p { class: "muted", "{card.description}" }

                    div { class: "detail-row",
                        span { {t(lang, MessageId::RarityLabel)} }
                        span { class: "value", {i18n::rarity_name(lang, card.rarity)} }
                    }
                    div { class: "detail-row",
                        span { {t(lang, MessageId::OwnerLabel)} }
                        span { class: "value", "{owner}" }
                    }
                    if let Some(price) = card.price() {
                        div { class: "detail-row",
                            span { {t(lang, MessageId::PriceLabel)} }
                            span { class: "value", {i18n::price_amount(price)} }
                        }
                    }
                    {props.children}
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "btn-full",
                        onclick: move |_| on_close.call(()),
                        {t(lang, MessageId::Back)}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardvault_core::CollectionStore;

    #[test]
    fn test_find_card_follows_the_list() {
        let store = CollectionStore::seeded().unwrap();
        let cards: Vec<Card> = store.cards().into_iter().cloned().collect();
        let id = cards[0].id.clone();

        assert_eq!(find_card(&cards, Some(&id)).map(|c| c.id), Some(id.clone()));
        assert!(find_card(&cards, None).is_none());

        // Once converted the card leaves the plain-card list
        let minted = store.convert_to_nft(&id);
        let cards: Vec<Card> = minted.cards().into_iter().cloned().collect();
        assert!(find_card(&cards, Some(&id)).is_none());
        let nfts: Vec<Card> = minted.nfts().into_iter().cloned().collect();
        assert!(find_card(&nfts, Some(&id)).is_some());
    }
}
