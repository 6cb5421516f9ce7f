//! Modal dialogs: confirmation, recipient picker and the sell form.

use cardvault_core::{t, MessageId, Price, User, UserId};
use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card_tile::image_or_placeholder;
use crate::context::{use_language, use_store};

#[derive(Props, Clone, PartialEq)]
pub struct ModalProps {
    pub title: String,
    pub on_close: EventHandler<()>,
    pub children: Element,
    /// Extra class on the dialog box, e.g. for a wider details view
    #[props(default)]
    pub class: String,
}

/// Overlay with a titled dialog; clicking outside closes it.
#[component]
pub fn Modal(props: ModalProps) -> Element {
    let class = format!("modal {}", props.class);

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| props.on_close.call(()),
            div {
                class: "{class}",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| props.on_close.call(()),
                        "×"
                    }
                }
                {props.children}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmationModalProps {
    pub title: String,
    pub message: String,
    pub on_confirm: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

/// Yes/No question
#[component]
pub fn ConfirmationModal(props: ConfirmationModalProps) -> Element {
    let lang = use_language();

    rsx! {
        Modal { title: props.title.clone(), on_close: props.on_cancel,
            p { class: "modal-message", "{props.message}" }
            div { class: "modal-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| props.on_cancel.call(()),
                    {t(lang, MessageId::No)}
                }
                Button {
                    onclick: move |_| props.on_confirm.call(()),
                    {t(lang, MessageId::Yes)}
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct UserSelectionModalProps {
    pub title: String,
    pub on_select: EventHandler<UserId>,
    pub on_cancel: EventHandler<()>,
}

/// Pick another user as gift or trade recipient.
#[component]
pub fn UserSelectionModal(props: UserSelectionModalProps) -> Element {
    let store = use_store();
    let lang = use_language();

    let recipients: Vec<User> = {
        let store = store.read();
        store
            .users()
            .recipients(store.current_user_id())
            .into_iter()
            .cloned()
            .collect()
    };

    rsx! {
        Modal { title: props.title.clone(), on_close: props.on_cancel,
            div {
                for user in recipients {
                    div {
                        key: "{user.id}",
                        class: "user-option",
                        onclick: {
                            let id = user.id.clone();
                            move |_| props.on_select.call(id.clone())
                        },
                        img {
                            class: "avatar sm",
                            src: image_or_placeholder(&user.avatar, 40),
                            alt: "{user.name}",
                        }
                        span { "{user.name}" }
                    }
                }
            }
            div { class: "modal-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| props.on_cancel.call(()),
                    {t(lang, MessageId::Cancel)}
                }
            }
        }
    }
}

/// Parse the price field; `None` unless it is a positive finite number.
pub fn parse_price(input: &str) -> Option<Price> {
    input.trim().replace(',', ".").parse::<f64>().ok().and_then(|p| Price::new(p).ok())
}

#[derive(Props, Clone, PartialEq)]
pub struct SellModalProps {
    pub card_name: String,
    pub on_submit: EventHandler<Price>,
    pub on_cancel: EventHandler<()>,
}

/// Price form for listing an NFT
#[component]
pub fn SellModal(props: SellModalProps) -> Element {
    let lang = use_language();
    let mut input = use_signal(String::new);
    let mut invalid = use_signal(|| false);

    let submit = move |_: ()| match parse_price(&input()) {
        Some(price) => props.on_submit.call(price),
        None => invalid.set(true),
    };

    rsx! {
        Modal { title: t(lang, MessageId::SellTitle).to_string(), on_close: props.on_cancel,
            p { class: "modal-message", "{props.card_name}" }
            label { class: "form-label", {t(lang, MessageId::SellPriceLabel)} }
            input {
                class: "form-input",
                r#type: "number",
                min: "0",
                step: "0.01",
                value: "{input}",
                oninput: move |evt: FormEvent| {
                    input.set(evt.value());
                    invalid.set(false);
                },
            }
            if invalid() {
                p { class: "error-text", {t(lang, MessageId::InvalidPrice)} }
            }
            div { class: "modal-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| props.on_cancel.call(()),
                    {t(lang, MessageId::Cancel)}
                }
                Button { onclick: submit, {t(lang, MessageId::Sell)} }
            }
        }
    }
}
