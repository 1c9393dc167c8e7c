//! Appearance preferences.
//!
//! Both values are persisted as plain strings under fixed keys and read back
//! verbatim at startup. Anything unrecognised falls back to the default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, err};

pub const COLOR_THEME_KEY: &str = "color-theme";
pub const THEME_MODE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    #[serde(rename = "default")]
    Standard,
    Blue,
    Green,
    Purple,
    Orange,
    Rose,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 6] = [
        ColorTheme::Standard,
        ColorTheme::Blue,
        ColorTheme::Green,
        ColorTheme::Purple,
        ColorTheme::Orange,
        ColorTheme::Rose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Standard => "default",
            ColorTheme::Blue => "blue",
            ColorTheme::Green => "green",
            ColorTheme::Purple => "purple",
            ColorTheme::Orange => "orange",
            ColorTheme::Rose => "rose",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorTheme::Standard => "Default",
            ColorTheme::Blue => "Blue",
            ColorTheme::Green => "Green",
            ColorTheme::Purple => "Purple",
            ColorTheme::Orange => "Orange",
            ColorTheme::Rose => "Rose",
        }
    }

    /// CSS value for `--primary`.
    pub fn primary(&self) -> &'static str {
        match self {
            ColorTheme::Standard => "hsl(222.2 84% 4.9%)",
            ColorTheme::Blue => "hsl(221.2 83.2% 53.3%)",
            ColorTheme::Green => "hsl(142.1 76.2% 36.3%)",
            ColorTheme::Purple => "hsl(262.1 83.3% 57.8%)",
            ColorTheme::Orange => "hsl(24.6 95% 53.1%)",
            ColorTheme::Rose => "hsl(346.8 77.2% 49.8%)",
        }
    }

    /// CSS value for `--secondary`.
    pub fn secondary(&self) -> &'static str {
        match self {
            ColorTheme::Standard | ColorTheme::Blue => "hsl(210 40% 96%)",
            ColorTheme::Green => "hsl(138 76% 97%)",
            ColorTheme::Purple => "hsl(270 95% 98%)",
            ColorTheme::Orange => "hsl(33 100% 96%)",
            ColorTheme::Rose => "hsl(355 100% 97%)",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorTheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ColorTheme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| err!("unknown color theme '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ThemeMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| err!("unknown theme mode '{}'", s))
    }
}

/// The full appearance selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub mode: ThemeMode,
    pub color: ColorTheme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_names_match_serde_names() {
        for theme in ColorTheme::ALL {
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.as_str()));
        }
        for mode in ThemeMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
    }

    #[test]
    fn parsing_is_exact() {
        assert_eq!("default".parse::<ColorTheme>().unwrap(), ColorTheme::Standard);
        assert_eq!("rose".parse::<ColorTheme>().unwrap(), ColorTheme::Rose);
        assert!("Rose".parse::<ColorTheme>().is_err());
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn defaults() {
        let appearance = Appearance::default();
        assert_eq!(appearance.color, ColorTheme::Standard);
        assert_eq!(appearance.mode, ThemeMode::System);
    }
}
