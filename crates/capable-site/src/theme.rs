//! Light and dark palettes.

use serde::{Deserialize, Serialize};

/// `local_storage` key the chosen mode is saved under.
pub const THEME_STORAGE_KEY: &str = "capable-groups-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &DARK,
            Self::Light => &LIGHT,
        }
    }
}

/// CSS colors for one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
    pub primary: &'static str,
    pub primary_foreground: &'static str,
    pub border: &'static str,
    /// Translucent navbar background once the page is scrolled.
    pub glass: &'static str,
}

pub static DARK: Palette = Palette {
    background: "#09090b",
    surface: "#18181b",
    foreground: "#fafafa",
    muted: "#a1a1aa",
    primary: "#6366f1",
    primary_foreground: "#ffffff",
    border: "#27272a",
    glass: "rgba(9, 9, 11, 0.8)",
};

pub static LIGHT: Palette = Palette {
    background: "#ffffff",
    surface: "#f4f4f5",
    foreground: "#09090b",
    muted: "#71717a",
    primary: "#4f46e5",
    primary_foreground: "#ffffff",
    border: "#e4e4e7",
    glass: "rgba(255, 255, 255, 0.8)",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_is_default_and_toggles_back() {
        let mode = ThemeMode::default();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(mode.toggled().toggled(), mode);
        assert_eq!(mode.toggled().palette(), &LIGHT);
    }

    #[test]
    fn stored_form_matches_attribute_name() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let stored = serde_json::to_string(&mode).unwrap();
            assert_eq!(stored, format!("\"{}\"", mode.as_str()));
        }
        assert!(serde_json::from_str::<ThemeMode>("\"sepia\"").is_err());
    }
}
