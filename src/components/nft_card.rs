//! NFT tiles with their actions.
//!
//! [`NftCard`] is the owner's view (sell, gift, trade); [`ListingCard`] is a
//! marketplace entry (buy, or remove from sale for the seller). Both carry
//! the favorite toggle.

use cardvault_core::{i18n, t, Card, CardId, MessageId, UserId};
use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card_tile::CardTile;
use crate::components::modal::{ConfirmationModal, SellModal, UserSelectionModal};
use crate::context::{apply_or_report, use_language, use_store};
use crate::theme::colors::FAVORITE;

#[derive(Clone, Copy, PartialEq, Debug)]
enum Dialog {
    Sell,
    Gift,
    Trade,
    Buy,
    RemoveFromSale,
}

#[derive(Props, Clone, PartialEq)]
pub struct FavoriteToggleProps {
    pub id: CardId,
    pub favorite: bool,
    /// Where a rejection is reported
    pub feedback: Signal<Option<String>>,
}

#[component]
pub fn FavoriteToggle(props: FavoriteToggleProps) -> Element {
    let store = use_store();
    let lang = use_language();
    let (icon, color) = if props.favorite { ("♥", FAVORITE) } else { ("♡", "#ffffff") };

    rsx! {
        button {
            class: "favorite-btn",
            style: "color: {color};",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                apply_or_report(store, props.feedback, lang, |s| s.try_toggle_favorite(&props.id));
            },
            "{icon}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NftCardProps {
    pub card: Card,
    pub on_open: EventHandler<CardId>,
}

/// NFT owned by the current user
#[component]
pub fn NftCard(props: NftCardProps) -> Element {
    let store = use_store();
    let lang = use_language();
    let mut dialog: Signal<Option<Dialog>> = use_signal(|| None);
    let feedback: Signal<Option<String>> = use_signal(|| None);

    let id = props.card.id.clone();
    let name = props.card.name.clone();

    let on_sell = {
        let id = id.clone();
        move |price: cardvault_core::Price| {
            apply_or_report(store, feedback, lang, |s| s.try_put_for_sale(&id, price.amount()));
            dialog.set(None);
        }
    };
    let on_gift = {
        let id = id.clone();
        move |to: UserId| {
            apply_or_report(store, feedback, lang, |s| s.try_gift_nft(&id, &to));
            dialog.set(None);
        }
    };
    let on_trade = {
        let id = id.clone();
        move |to: UserId| {
            apply_or_report(store, feedback, lang, |s| s.try_request_trade(&id, &to));
            dialog.set(None);
        }
    };

    rsx! {
        CardTile {
            card: props.card.clone(),
            onclick: {
                let id = id.clone();
                move |_| props.on_open.call(id.clone())
            },
            overlay: rsx! { FavoriteToggle { id: id.clone(), favorite: props.card.favorite, feedback } },

            div { class: "card-actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    class: "btn-sm",
                    onclick: move |_| dialog.set(Some(Dialog::Sell)),
                    {t(lang, MessageId::Sell)}
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    class: "btn-sm",
                    onclick: move |_| dialog.set(Some(Dialog::Gift)),
                    {t(lang, MessageId::Gift)}
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    class: "btn-sm",
                    onclick: move |_| dialog.set(Some(Dialog::Trade)),
                    {t(lang, MessageId::Trade)}
                }
            }
            if let Some(msg) = feedback() {
                p { class: "error-text", "{msg}" }
            }
        }

        match dialog() {
            Some(Dialog::Sell) => rsx! {
                SellModal {
                    card_name: name.clone(),
                    on_submit: on_sell,
                    on_cancel: move |_| dialog.set(None),
                }
            },
            Some(Dialog::Gift) => rsx! {
                UserSelectionModal {
                    title: t(lang, MessageId::ChooseGiftRecipient).to_string(),
                    on_select: on_gift,
                    on_cancel: move |_| dialog.set(None),
                }
            },
            Some(Dialog::Trade) => rsx! {
                UserSelectionModal {
                    title: t(lang, MessageId::ChooseTradeRecipient).to_string(),
                    on_select: on_trade,
                    on_cancel: move |_| dialog.set(None),
                }
            },
            _ => rsx! {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ListingCardProps {
    pub card: Card,
    pub on_open: EventHandler<CardId>,
}

/// NFT offered on the marketplace
#[component]
pub fn ListingCard(props: ListingCardProps) -> Element {
    let store = use_store();
    let lang = use_language();
    let mut dialog: Signal<Option<Dialog>> = use_signal(|| None);
    let feedback: Signal<Option<String>> = use_signal(|| None);

    let id = props.card.id.clone();
    let name = props.card.name.clone();
    let is_seller = props.card.owner == *store.read().current_user_id();
    let Some(price) = props.card.price() else {
        return rsx! {};
    };

    let on_buy = {
        let id = id.clone();
        move |_: ()| {
            apply_or_report(store, feedback, lang, |s| s.try_buy_nft(&id));
            dialog.set(None);
        }
    };
    let on_remove = {
        let id = id.clone();
        move |_: ()| {
            apply_or_report(store, feedback, lang, |s| s.try_remove_from_sale(&id));
            dialog.set(None);
        }
    };

    rsx! {
        CardTile {
            card: props.card.clone(),
            onclick: {
                let id = id.clone();
                move |_| props.on_open.call(id.clone())
            },
            overlay: rsx! { FavoriteToggle { id: id.clone(), favorite: props.card.favorite, feedback } },

            div { class: "detail-row",
                span { {t(lang, MessageId::PriceLabel)} }
                span { class: "value", {i18n::price_amount(price)} }
            }
            if is_seller {
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "btn-full",
                    onclick: move |_| dialog.set(Some(Dialog::RemoveFromSale)),
                    {t(lang, MessageId::RemoveFromSale)}
                }
            } else {
                Button {
                    class: "btn-full",
                    onclick: move |_| dialog.set(Some(Dialog::Buy)),
                    {i18n::buy_for(lang, price)}
                }
            }
            if let Some(msg) = feedback() {
                p { class: "error-text", "{msg}" }
            }
        }

        match dialog() {
            Some(Dialog::Buy) => rsx! {
                ConfirmationModal {
                    title: t(lang, MessageId::BuyConfirmTitle).to_string(),
                    message: i18n::buy_confirm(lang, &name, price),
                    on_confirm: on_buy,
                    on_cancel: move |_| dialog.set(None),
                }
            },
            Some(Dialog::RemoveFromSale) => rsx! {
                ConfirmationModal {
                    title: t(lang, MessageId::RemoveFromSale).to_string(),
                    message: i18n::remove_from_sale_confirm(lang, &name),
                    on_confirm: on_remove,
                    on_cancel: move |_| dialog.set(None),
                }
            },
            _ => rsx! {},
        }
    }
}
