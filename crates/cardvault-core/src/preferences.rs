//! Presentation Preferences - theme, accent color and language
//!
//! All three settings are independent and every combination is valid. The
//! derived [`Palette`] is what the view layer injects as global CSS
//! variables.

use std::fmt;
use std::str::FromStr;

use crate::error::VaultError;

/// Storage key for the theme
pub const THEME_KEY: &str = "theme";
/// Storage key for the accent color
pub const ACCENT_COLOR_KEY: &str = "accentColor";
/// Storage key for the language
pub const LANGUAGE_KEY: &str = "language";

/// Implements `as_str`, `ALL`, `Display` and `FromStr` for a unit enum whose
/// persisted form is a fixed lowercase string.
macro_rules! string_enum {
    ($ty:ident, $key:expr, [$($variant:ident => $s:literal),+ $(,)?]) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $s),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = VaultError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok($ty::$variant),)+
                    other => Err(VaultError::InvalidPreference {
                        key: $key,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

string_enum!(Theme, THEME_KEY, [Dark => "dark", Light => "light"]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccentColor {
    #[default]
    Purple,
    Blue,
    Green,
    Red,
    Yellow,
}

string_enum!(AccentColor, ACCENT_COLOR_KEY, [
    Purple => "purple",
    Blue => "blue",
    Green => "green",
    Red => "red",
    Yellow => "yellow",
]);

impl AccentColor {
    /// Solid swatch color
    pub fn hex(&self) -> &'static str {
        match self {
            AccentColor::Purple => "#9b87f5",
            AccentColor::Blue => "#3b82f6",
            AccentColor::Green => "#22c55e",
            AccentColor::Red => "#ef4444",
            AccentColor::Yellow => "#eab308",
        }
    }

    /// Translucent variant for glows and highlighted backgrounds
    pub fn glow(&self) -> &'static str {
        match self {
            AccentColor::Purple => "rgba(155, 135, 245, 0.3)",
            AccentColor::Blue => "rgba(59, 130, 246, 0.3)",
            AccentColor::Green => "rgba(34, 197, 94, 0.3)",
            AccentColor::Red => "rgba(239, 68, 68, 0.3)",
            AccentColor::Yellow => "rgba(234, 179, 8, 0.3)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Ru,
    En,
}

string_enum!(Language, LANGUAGE_KEY, [Ru => "ru", En => "en"]);

impl Language {
    /// Name of the language in itself, for the picker
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Ru => "Русский",
            Language::En => "English",
        }
    }
}

/// Resolved colors for the current theme and accent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub accent: &'static str,
    pub accent_glow: &'static str,
}

/// The three persisted presentation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub accent_color: AccentColor,
    pub language: Language,
}

impl Preferences {
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_accent_color(&mut self, accent_color: AccentColor) {
        self.accent_color = accent_color;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// (key, value) pairs in their persisted form
    pub fn entries(&self) -> [(&'static str, &'static str); 3] {
        [
            (THEME_KEY, self.theme.as_str()),
            (ACCENT_COLOR_KEY, self.accent_color.as_str()),
            (LANGUAGE_KEY, self.language.as_str()),
        ]
    }

    pub fn palette(&self) -> Palette {
        let (background, surface, border, text, text_secondary) = match self.theme {
            Theme::Dark => (
                "#0f0f13",
                "#1a1a22",
                "rgba(255, 255, 255, 0.08)",
                "#f5f5f5",
                "rgba(245, 245, 245, 0.7)",
            ),
            Theme::Light => (
                "#f4f4f7",
                "#ffffff",
                "rgba(0, 0, 0, 0.08)",
                "#1a1a22",
                "rgba(26, 26, 34, 0.7)",
            ),
        };

        Palette {
            background,
            surface,
            border,
            text,
            text_secondary,
            accent: self.accent_color.hex(),
            accent_glow: self.accent_color.glow(),
        }
    }

    /// Global style variables as a `:root` rule
    pub fn css_variables(&self) -> String {
        let p = self.palette();
        format!(
            ":root {{\n  --background-color: {};\n  --surface-color: {};\n  --border-color: {};\n  --text-color: {};\n  --text-secondary: {};\n  --accent-color: {};\n  --accent-glow: {};\n}}\n",
            p.background, p.surface, p.border, p.text, p.text_secondary, p.accent, p.accent_glow
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.accent_color, AccentColor::Purple);
        assert_eq!(prefs.language, Language::Ru);
    }

    #[test]
    fn test_parse_roundtrip_all_variants() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), *theme);
        }
        for color in AccentColor::ALL {
            assert_eq!(color.as_str().parse::<AccentColor>().unwrap(), *color);
        }
        for lang in Language::ALL {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), *lang);
        }
    }

    #[test]
    fn test_parse_unknown_names_the_key() {
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert!(matches!(
            err,
            VaultError::InvalidPreference { key: THEME_KEY, .. }
        ));
        assert!("Purple".parse::<AccentColor>().is_err());
    }

    #[test]
    fn test_setters_are_independent() {
        let mut prefs = Preferences::default();
        prefs.set_theme(Theme::Light);
        prefs.set_accent_color(AccentColor::Green);
        assert_eq!(prefs.language, Language::Ru);

        prefs.set_language(Language::En);
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.accent_color, AccentColor::Green);
    }

    #[test]
    fn test_palette_follows_theme_and_accent() {
        let mut prefs = Preferences::default();
        let dark = prefs.palette();
        prefs.set_theme(Theme::Light);
        prefs.set_accent_color(AccentColor::Red);
        let light = prefs.palette();

        assert_ne!(dark.background, light.background);
        assert_eq!(light.accent, "#ef4444");
    }

    #[test]
    fn test_css_variables() {
        let css = Preferences::default().css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--background-color: #0f0f13;"));
        assert!(css.contains("--accent-color: #9b87f5;"));
    }

    #[test]
    fn test_entries_use_stable_keys() {
        let keys: Vec<_> = Preferences::default().entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["theme", "accentColor", "language"]);
    }
}
