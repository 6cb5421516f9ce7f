use cardvault_core::{t, MessageId};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::NavHeader;
use crate::context::use_language;

/// Fallback for unknown paths
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let lang = use_language();
    tracing::debug!("No route for /{}", segments.join("/"));

    rsx! {
        NavHeader {}
        main { class: "page-container",
            div { class: "empty-state",
                div { class: "empty-box",
                    h3 { {t(lang, MessageId::NotFoundTitle)} }
                    p { {t(lang, MessageId::NotFoundMessage)} }
                    Link { class: "btn-primary", to: Route::Collection {}, {t(lang, MessageId::GoHome)} }
                }
            }
        }
    }
}
