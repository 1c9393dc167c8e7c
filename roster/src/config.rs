use std::path::PathBuf;

use serde::Deserialize;
use types::Departments;

#[cfg(not(target_arch = "wasm32"))]
pub const CONFIG_FILE_STEM: &str = "edumanage";
#[cfg(not(target_arch = "wasm32"))]
pub const ENV_PREFIX: &str = "EDUMANAGE";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where desktop builds keep `preferences.json`.
    pub data_dir: PathBuf,
    /// Start the session with the sample staff instead of an empty store.
    pub seed_sample_data: bool,
    /// Departments the forms accept.
    pub departments: Departments,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            seed_sample_data: true,
            departments: Departments::default(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "EduManage", "EduManage")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".edumanage"))
}

#[cfg(target_arch = "wasm32")]
fn default_data_dir() -> PathBuf {
    PathBuf::new()
}

#[cfg(not(target_arch = "wasm32"))]
mod load {
    use std::path::Path;

    use config::{Environment, File, Source};
    use types::{Result, err};

    use super::{CONFIG_FILE_STEM, Config, ENV_PREFIX};

    impl Config {
        /// Defaults, then `edumanage.toml` if present, then `EDUMANAGE_*` variables.
        pub fn load() -> Result<Self> {
            Self::build(File::with_name(CONFIG_FILE_STEM).required(false))
        }

        /// Like [`Config::load`] but with an explicit, required file.
        pub fn load_file(path: &Path) -> Result<Self> {
            Self::build(File::from(path).required(true))
        }

        fn build(file: impl Source + Send + Sync + 'static) -> Result<Self> {
            let config: Self = config::Config::builder()
                .add_source(file)
                .add_source(
                    Environment::with_prefix(ENV_PREFIX)
                        .try_parsing(true)
                        .list_separator(",")
                        .with_list_parse_key("departments"),
                )
                .build()
                .and_then(config::Config::try_deserialize)
                .map_err(|e| err!("failed to load configuration: {}", e))?;

            tracing::debug!(?config, "loaded configuration");
            Ok(config)
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn defaults_seed_and_use_standard_departments() {
        let config = Config::default();
        assert!(config.seed_sample_data);
        assert_eq!(config.departments, Departments::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edumanage.toml");
        std::fs::write(
            &path,
            "seed_sample_data = false\ndepartments = [\"Art\", \"Music\"]\n",
        )
        .unwrap();

        let config = Config::load_file(&path).unwrap();
        assert!(!config.seed_sample_data);
        assert_eq!(config.departments, Departments::new(["Art", "Music"]));
        assert_eq!(config.data_dir, Config::default().data_dir);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_file(&dir.path().join("nope.toml")).is_err());
    }
}
