//! Profile page - the current user, their items and incoming trade offers.

use cardvault_core::{i18n, t, Card, CardId, MessageId, OfferId, Reaction, User};
use dioxus::prelude::*;

use crate::components::{
    find_card, image_or_placeholder, Button, ButtonVariant, CardDetails, CardTile, NavHeader, NavLocation,
};
use crate::context::{apply, apply_or_report, use_language, use_store};
use crate::theme::colors::{DISLIKE, LIKE};

#[derive(Clone, Copy, PartialEq, Debug)]
enum Tab {
    Nfts,
    Cards,
    Offers,
}

/// An incoming offer resolved for display
#[derive(Clone, PartialEq)]
struct OfferRow {
    id: OfferId,
    text: String,
}

#[component]
pub fn Profile() -> Element {
    let store = use_store();
    let lang = use_language();
    let mut tab = use_signal(|| Tab::Nfts);
    let mut selected: Signal<Option<CardId>> = use_signal(|| None);
    let feedback: Signal<Option<String>> = use_signal(|| None);

    let (user, nfts, cards, offers, reaction) = {
        let s = store.read();
        let user: User = s.current_user().clone();
        let nfts: Vec<Card> = s.nfts().into_iter().cloned().collect();
        let cards: Vec<Card> = s.cards().into_iter().cloned().collect();
        let offers: Vec<OfferRow> = s
            .incoming_offers()
            .into_iter()
            .map(|o| {
                let from = s.users().get(&o.from).map(|u| u.name.as_str()).unwrap_or(o.from.as_str());
                let card = s.get(&o.nft_id).map(|c| c.name.as_str()).unwrap_or(o.nft_id.as_str());
                OfferRow { id: o.id.clone(), text: i18n::trade_offer(lang, from, card) }
            })
            .collect();
        let reaction = s.users().reaction(s.current_user_id(), &user.id);
        (user, nfts, cards, offers, reaction)
    };

    let vote = {
        let profile = user.id.clone();
        move |vote: Reaction| {
            // Clicking the vote already cast withdraws it
            let result = if reaction == Some(vote) {
                apply(store, |s| s.try_clear_user_reaction(&profile))
            } else {
                apply(store, |s| s.try_toggle_user_like(&profile, vote))
            };
            if let Err(e) = result {
                tracing::debug!("Vote ignored: {}", e);
            }
        }
    };
    let like = vote.clone();
    let dislike = vote;

    let like_style = if reaction == Some(Reaction::Like) { format!("color: {};", LIKE) } else { String::new() };
    let dislike_style = if reaction == Some(Reaction::Dislike) { format!("color: {};", DISLIKE) } else { String::new() };
    let offers_label = format!("{} ({})", t(lang, MessageId::IncomingOffers), offers.len());
    let selected_card = {
        let owned: Vec<Card> = nfts.iter().chain(cards.iter()).cloned().collect();
        find_card(&owned, selected().as_ref())
    };
    let tab_class = move |which: Tab| if tab() == which { "tab active" } else { "tab" };

    rsx! {
        NavHeader { current: NavLocation::Profile }
        main { class: "page-container",
            section { class: "profile-hero",
                img {
                    class: "avatar lg",
                    src: image_or_placeholder(&user.avatar, 128),
                    alt: "{user.name}",
                }
                div {
                    h1 { class: "profile-name", "{user.name}" }
                    p { class: "muted", "{user.description}" }
                    div { class: "vote-buttons",
                        button {
                            class: "vote-btn",
                            style: "{like_style}",
                            onclick: move |_| like(Reaction::Like),
                            "👍 {user.likes}"
                        }
                        button {
                            class: "vote-btn",
                            style: "{dislike_style}",
                            onclick: move |_| dislike(Reaction::Dislike),
                            "👎 {user.dislikes}"
                        }
                    }
                }
            }

            div { class: "tabs",
                button { class: tab_class(Tab::Nfts), onclick: move |_| tab.set(Tab::Nfts),
                    {t(lang, MessageId::ProfileTabNfts)}
                }
                button { class: tab_class(Tab::Cards), onclick: move |_| tab.set(Tab::Cards),
                    {t(lang, MessageId::ProfileTabCards)}
                }
                button { class: tab_class(Tab::Offers), onclick: move |_| tab.set(Tab::Offers),
                    "{offers_label}"
                }
            }

            match tab() {
                Tab::Nfts => rsx! {
                    ItemGrid {
                        items: nfts,
                        empty: t(lang, MessageId::ProfileNoNfts).to_string(),
                        on_open: move |id| selected.set(Some(id)),
                    }
                },
                Tab::Cards => rsx! {
                    ItemGrid {
                        items: cards,
                        empty: t(lang, MessageId::ProfileNoCards).to_string(),
                        on_open: move |id| selected.set(Some(id)),
                    }
                },
                Tab::Offers => rsx! {
                    if let Some(msg) = feedback() {
                        p { class: "error-text", "{msg}" }
                    }
                    if offers.is_empty() {
                        p { class: "muted", {t(lang, MessageId::NoIncomingOffers)} }
                    }
                    for offer in offers {
                        div { key: "{offer.id}", class: "offer-row",
                            span { "{offer.text}" }
                            div { class: "offer-actions",
                                Button {
                                    onclick: {
                                        let id = offer.id.clone();
                                        move |_| { apply_or_report(store, feedback, lang, |s| s.try_accept_trade(&id)); }
                                    },
                                    {t(lang, MessageId::Accept)}
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: {
                                        let id = offer.id.clone();
                                        move |_| { apply_or_report(store, feedback, lang, |s| s.try_decline_trade(&id)); }
                                    },
                                    {t(lang, MessageId::Decline)}
                                }
                            }
                        }
                    }
                },
            }
        }

        if let Some(card) = selected_card {
            CardDetails { card, on_close: move |_| selected.set(None) }
        }
    }
}

#[component]
fn ItemGrid(items: Vec<Card>, empty: String, on_open: EventHandler<CardId>) -> Element {
    if items.is_empty() {
        return rsx! {
            div { class: "empty-state",
                div { class: "empty-box", p { "{empty}" } }
            }
        };
    }

    rsx! {
        div { class: "card-grid",
            for item in items {
                CardTile {
                    key: "{item.id}",
                    card: item.clone(),
                    onclick: {
                        let id = item.id.clone();
                        move |_| on_open.call(id.clone())
                    },
                }
            }
        }
    }
}
