//! Card Tile Component
//!
//! Image, name, rarity and description of a card framed in its rarity color.
//! NFT and marketplace tiles pass their controls as children.

use cardvault_core::{i18n::rarity_name, Card, Rarity};
use dioxus::prelude::*;

use crate::context::use_language;
use crate::theme::colors::rarity_color;

/// Image URL to render, falling back to a sized placeholder.
pub fn image_or_placeholder(image: &str, size: u32) -> String {
    if image.trim().is_empty() {
        format!("https://via.placeholder.com/{}", size)
    } else {
        image.to_string()
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CardTileProps {
    pub card: Card,
    /// Opens the details view when set
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Rendered over the image corner (favorite toggle)
    #[props(default)]
    pub overlay: Option<Element>,
    /// Rendered under the description (actions)
    pub children: Element,
}

#[component]
pub fn CardTile(props: CardTileProps) -> Element {
    let lang = use_language();
    let card = &props.card;

    let mut class = String::from("card-tile");
    if props.onclick.is_some() {
        class.push_str(" clickable");
    }
    if card.rarity == Rarity::Legendary {
        class.push_str(" legendary");
    }
    let color = rarity_color(card.rarity);
    let image = image_or_placeholder(&card.image, 300);
    let onclick = props.onclick;

    rsx! {
        div {
            class: "{class}",
            style: "--rarity-color: {color};",
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },

            div { class: "card-image",
                img { src: "{image}", alt: "{card.name}" }
            }
            {props.overlay}

            div { class: "card-body",
                div { class: "card-heading",
                    h3 { class: "card-name", "{card.name}" }
                    span { class: "card-rarity", {rarity_name(lang, card.rarity)} }
                }
                p { class: "card-description", "{card.description}" }
                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_for_missing_image() {
        assert_eq!(image_or_placeholder("", 300), "https://via.placeholder.com/300");
        assert_eq!(image_or_placeholder("  ", 40), "https://via.placeholder.com/40");
        assert_eq!(image_or_placeholder("https://img/1.png", 300), "https://img/1.png");
    }
}
