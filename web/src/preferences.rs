//! Appearance persistence for each platform.
//!
//! Desktop builds keep `preferences.json` in the configured data directory.
//! The browser build uses `localStorage` under the same keys.

use roster::Config;
use types::Result;
use types::theme::Appearance;

#[cfg(feature = "desktop")]
#[derive(Clone)]
pub struct PreferenceBridge {
    file: roster::prefs::FilePreferences,
}

#[cfg(feature = "desktop")]
impl PreferenceBridge {
    pub fn new(config: &Config) -> Self {
        Self {
            file: roster::prefs::FilePreferences::in_dir(&config.data_dir),
        }
    }

    pub async fn load(&self) -> Appearance {
        roster::prefs::load_appearance(&self.file)
    }

    pub async fn save(&self, appearance: Appearance) -> Result<()> {
        let mut file = self.file.clone();
        roster::prefs::save_appearance(&mut file, appearance)
    }
}

#[cfg(not(feature = "desktop"))]
#[derive(Clone)]
pub struct PreferenceBridge;

#[cfg(not(feature = "desktop"))]
impl PreferenceBridge {
    pub fn new(_config: &Config) -> Self {
        Self
    }

    pub async fn load(&self) -> Appearance {
        use dioxus::document::eval;
        use roster::prefs::{parse_color_theme, parse_theme_mode};
        use types::theme::{COLOR_THEME_KEY, THEME_MODE_KEY};

        let js = format!(
            r#"return [localStorage.getItem("{}"), localStorage.getItem("{}")];"#,
            THEME_MODE_KEY, COLOR_THEME_KEY
        );
        match eval(&js).join::<(Option<String>, Option<String>)>().await {
            Ok((mode, color)) => Appearance {
                mode: parse_theme_mode(mode.as_deref()),
                color: parse_color_theme(color.as_deref()),
            },
            Err(e) => {
                tracing::warn!("failed to read localStorage: {:?}", e);
                Appearance::default()
            }
        }
    }

    pub async fn save(&self, appearance: Appearance) -> Result<()> {
        use dioxus::document::eval;
        use types::err;
        use types::theme::{COLOR_THEME_KEY, THEME_MODE_KEY};

        // Values come from closed enums, so they need no escaping.
        let js = format!(
            r#"localStorage.setItem("{}", "{}"); localStorage.setItem("{}", "{}"); return true;"#,
            THEME_MODE_KEY,
            appearance.mode.as_str(),
            COLOR_THEME_KEY,
            appearance.color.as_str(),
        );
        eval(&js)
            .join::<bool>()
            .await
            .map_err(|e| err!("failed to write localStorage: {:?}", e))?;
        tracing::info!(mode = %appearance.mode, color = %appearance.color, "saved appearance");
        Ok(())
    }
}
