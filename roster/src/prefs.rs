//! Key-value storage for appearance preferences.

use std::collections::HashMap;

use types::Result;
use types::theme::{Appearance, COLOR_THEME_KEY, ColorTheme, THEME_MODE_KEY, ThemeMode};

#[cfg(not(target_arch = "wasm32"))]
pub use file::FilePreferences;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences(HashMap<String, String>);

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Interpret a stored color theme, falling back to the default.
pub fn parse_color_theme(stored: Option<&str>) -> ColorTheme {
    match stored.map(str::parse::<ColorTheme>) {
        None => ColorTheme::default(),
        Some(Ok(theme)) => theme,
        Some(Err(e)) => {
            tracing::warn!("{}, using default", e);
            ColorTheme::default()
        }
    }
}

/// Interpret a stored theme mode, falling back to the default.
pub fn parse_theme_mode(stored: Option<&str>) -> ThemeMode {
    match stored.map(str::parse::<ThemeMode>) {
        None => ThemeMode::default(),
        Some(Ok(mode)) => mode,
        Some(Err(e)) => {
            tracing::warn!("{}, using default", e);
            ThemeMode::default()
        }
    }
}

/// Read the saved appearance. Never fails: read errors fall back to defaults.
pub fn load_appearance(store: &impl PreferenceStore) -> Appearance {
    let read = |key: &str| match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, "failed to read preference: {}", e);
            None
        }
    };

    Appearance {
        mode: parse_theme_mode(read(THEME_MODE_KEY).as_deref()),
        color: parse_color_theme(read(COLOR_THEME_KEY).as_deref()),
    }
}

pub fn save_appearance(store: &mut impl PreferenceStore, appearance: Appearance) -> Result<()> {
    store.set(THEME_MODE_KEY, appearance.mode.as_str())?;
    store.set(COLOR_THEME_KEY, appearance.color.as_str())?;
    tracing::info!(mode = %appearance.mode, color = %appearance.color, "saved appearance");
    Ok(())
}

/// The session's appearance, remembering whether the user has chosen one.
///
/// The saved value loads asynchronously on some platforms, so a choice made
/// before it arrives must not be overwritten by it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppearanceState {
    current: Appearance,
    picked: bool,
}

impl AppearanceState {
    pub fn current(&self) -> Appearance {
        self.current
    }

    /// Apply a user choice. Returns `false` when nothing changed.
    pub fn pick(&mut self, appearance: Appearance) -> bool {
        self.picked = true;
        if self.current == appearance {
            return false;
        }
        self.current = appearance;
        true
    }

    /// Apply the stored appearance unless the user has already picked one.
    pub fn restore(&mut self, stored: Appearance) -> bool {
        if self.picked {
            tracing::debug!("keeping appearance picked during load");
            return false;
        }
        self.current = stored;
        true
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use types::Result;

    use super::PreferenceStore;

    pub const PREFERENCES_FILENAME: &str = "preferences.json";

    /// Preferences kept as a flat JSON object on disk.
    #[derive(Debug, Clone)]
    pub struct FilePreferences {
        path: PathBuf,
    }

    impl FilePreferences {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `preferences.json` inside `data_dir`.
        pub fn in_dir(data_dir: &Path) -> Self {
            Self::new(data_dir.join(PREFERENCES_FILENAME))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> Result<BTreeMap<String, String>> {
            match fs::read_to_string(&self.path) {
                Ok(content) => Ok(serde_json::from_str(&content)?),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(e) => Err(e.into()),
            }
        }
    }

    impl PreferenceStore for FilePreferences {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.read_all()?.remove(key))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            let mut all = self.read_all().unwrap_or_else(|e| {
                tracing::warn!(path = ?self.path, "discarding unreadable preferences: {}", e);
                BTreeMap::new()
            });
            all.insert(key.to_string(), value.to_string());

            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(&all)?)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_use_defaults() {
        let store = MemoryPreferences::default();
        assert_eq!(load_appearance(&store), Appearance::default());
    }

    #[test]
    fn unknown_values_use_defaults() {
        let mut store = MemoryPreferences::default();
        store.set(COLOR_THEME_KEY, "neon").unwrap();
        store.set(THEME_MODE_KEY, "dark").unwrap();

        let appearance = load_appearance(&store);
        assert_eq!(appearance.color, ColorTheme::Standard);
        assert_eq!(appearance.mode, ThemeMode::Dark);
    }

    #[test]
    fn saved_values_are_plain_strings() {
        let mut store = MemoryPreferences::default();
        let appearance = Appearance {
            mode: ThemeMode::Light,
            color: ColorTheme::Purple,
        };
        save_appearance(&mut store, appearance).unwrap();

        assert_eq!(store.get(COLOR_THEME_KEY).unwrap().as_deref(), Some("purple"));
        assert_eq!(store.get(THEME_MODE_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(load_appearance(&store), appearance);
    }

    #[test]
    fn restore_applies_until_the_user_picks() {
        let stored = Appearance {
            mode: ThemeMode::Dark,
            color: ColorTheme::Green,
        };
        let mut state = AppearanceState::default();
        assert!(state.restore(stored));
        assert_eq!(state.current(), stored);

        let picked = Appearance {
            mode: ThemeMode::Light,
            color: ColorTheme::Rose,
        };
        let mut state = AppearanceState::default();
        assert!(state.pick(picked));
        assert!(!state.restore(stored));
        assert_eq!(state.current(), picked);
    }

    #[test]
    fn picking_the_default_still_blocks_restore() {
        let mut state = AppearanceState::default();
        assert!(!state.pick(Appearance::default()));
        assert!(!state.restore(Appearance {
            mode: ThemeMode::Dark,
            color: ColorTheme::Blue,
        }));
        assert_eq!(state.current(), Appearance::default());
    }
}
