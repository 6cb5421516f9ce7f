//! Navigation Header Component
//!
//! App title, localized page links and the current-user switcher.

use cardvault_core::{t, MessageId, UserId};
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{apply, use_language, use_store};

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Collection,
    Nfts,
    Marketplace,
    Profile,
    Settings,
}

impl NavLocation {
    pub const ALL: [NavLocation; 5] = [
        NavLocation::Collection,
        NavLocation::Nfts,
        NavLocation::Marketplace,
        NavLocation::Profile,
        NavLocation::Settings,
    ];

    /// Message used for the link label
    pub fn label(&self) -> MessageId {
        match self {
            NavLocation::Collection => MessageId::NavHome,
            NavLocation::Nfts => MessageId::NavNfts,
            NavLocation::Marketplace => MessageId::NavMarketplace,
            NavLocation::Profile => MessageId::NavProfile,
            NavLocation::Settings => MessageId::NavSettings,
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Collection => Route::Collection {},
            NavLocation::Nfts => Route::Nfts {},
            NavLocation::Marketplace => Route::Marketplace {},
            NavLocation::Profile => Route::Profile {},
            NavLocation::Settings => Route::Settings {},
        }
    }
}

fn nav_link_class(active: bool) -> String {
    if active { "nav-link active".to_string() } else { "nav-link".to_string() }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app, `None` on the not-found page
    #[props(default)]
    pub current: Option<NavLocation>,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let store = use_store();
    let lang = use_language();

    let current_user = store.read().current_user_id().clone();
    let users: Vec<(UserId, String)> = store
        .read()
        .users()
        .users()
        .iter()
        .map(|u| (u.id.clone(), u.name.clone()))
        .collect();

    let on_switch = move |evt: FormEvent| {
        let id = UserId::new(evt.value());
        if let Err(e) = apply(store, |s| s.try_switch_user(&id)) {
            tracing::warn!("Cannot switch user: {}", e);
        }
    };

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                Link { class: "app-title", to: Route::Collection {}, {t(lang, MessageId::AppTitle)} }

                nav { class: "nav-links",
                    for location in NavLocation::ALL {
                        Link {
                            key: "{location:?}",
                            class: nav_link_class(props.current == Some(location)),
                            to: location.route(),
                            {t(lang, location.label())}
                        }
                    }
                }

                label { class: "user-switcher",
                    {t(lang, MessageId::ViewingAs)}
                    select {
                        value: "{current_user}",
                        onchange: on_switch,
                        for (id, name) in users {
                            option {
                                key: "{id}",
                                value: "{id}",
                                selected: id == current_user,
                                "{name}"
                            }
                        }
                    }
                }
            }
        }
    }
}
