//! Settings page - language, theme and accent color.
//!
//! Every change is written to the preferences database right away.

use cardvault_core::{t, AccentColor, Language, MessageId, Theme};
use dioxus::prelude::*;

use crate::components::{NavHeader, NavLocation};
use crate::context::{update_preferences, use_preferences};

#[component]
pub fn Settings() -> Element {
    let prefs_signal = use_preferences();
    let prefs = prefs_signal();
    let lang = prefs.language;

    rsx! {
        NavHeader { current: NavLocation::Settings }
        main { class: "page-container",
            header { class: "page-header",
                h1 { class: "page-title", {t(lang, MessageId::SettingsTitle)} }
                p { class: "page-subtitle", {t(lang, MessageId::SettingsSubtitle)} }
            }

            div { class: "settings-panel",
                section { class: "settings-section",
                    h3 { {t(lang, MessageId::SettingsLanguage)} }
                    for language in Language::ALL.iter().copied() {
                        label { key: "{language}", class: "radio-row",
                            input {
                                r#type: "radio",
                                name: "language",
                                checked: prefs.language == language,
                                onchange: move |_| update_preferences(prefs_signal, |p| p.set_language(language)),
                            }
                            {language.native_name()}
                        }
                    }
                }

                section { class: "settings-section",
                    h3 { {t(lang, MessageId::SettingsTheme)} }
                    div { class: "theme-options",
                        for theme in Theme::ALL.iter().copied() {
                            div {
                                key: "{theme}",
                                class: theme_class(theme, prefs.theme == theme),
                                onclick: move |_| update_preferences(prefs_signal, |p| p.set_theme(theme)),
                                div { class: "theme-preview" }
                                {theme_label(lang, theme)}
                            }
                        }
                    }
                }

                section { class: "settings-section",
                    h3 { {t(lang, MessageId::SettingsAccent)} }
                    div { class: "swatches",
                        for accent in AccentColor::ALL.iter().copied() {
                            button {
                                key: "{accent}",
                                class: if prefs.accent_color == accent { "swatch selected" } else { "swatch" },
                                style: format!("background: {};", accent.hex()),
                                title: "{accent}",
                                onclick: move |_| update_preferences(prefs_signal, |p| p.set_accent_color(accent)),
                            }
                        }
                    }
                }
            }
        }
    }
}

fn theme_class(theme: Theme, selected: bool) -> String {
    if selected {
        format!("theme-option {} selected", theme)
    } else {
        format!("theme-option {}", theme)
    }
}

fn theme_label(lang: Language, theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => t(lang, MessageId::ThemeDark),
        Theme::Light => t(lang, MessageId::ThemeLight),
    }
}
