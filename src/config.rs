use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::auth::DEFAULT_CODE_LENGTH;
use crate::error::{Error, Result};

pub const CONFIG_ENV: &str = "CHEESEHOME_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub code_length: usize,
    /// Pretend verification latency before the messenger opens.
    pub verification_delay_ms: u64,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            verification_delay_ms: 500,
            window_width: 960,
            window_height: 640,
        }
    }
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        Self::resolve_path(std::env::var_os(CONFIG_ENV))
    }

    /// A `custom` path (the value of $CHEESEHOME_CONFIG) wins over the
    /// platform config dir.
    pub fn resolve_path(custom: Option<OsString>) -> Option<PathBuf> {
        if let Some(custom) = custom.filter(|c| !c.is_empty()) {
            return Some(PathBuf::from(custom));
        }
        let proj = ProjectDirs::from("com", "example", "CheeseHome")?;
        Some(proj.config_dir().join("cheesehome.toml"))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// `Ok(None)` when there is no file at `path`.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_toml_str(&text).map(Some)
    }

    /// Never fails: problems are logged and defaults used.
    pub fn load() -> Self {
        Self::load_with(Self::path())
    }

    pub fn load_with(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            warn!("No config directory available, using defaults");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(Some(config)) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_toml_str("code_length = 4\n").unwrap();
        assert_eq!(config.code_length, 4);
        assert_eq!(config.verification_delay_ms, 500);
        assert_eq!(config.window_width, 960);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn custom_path_wins() {
        let custom = OsString::from("/tmp/elsewhere.toml");
        assert_eq!(
            Config::resolve_path(Some(custom)),
            Some(PathBuf::from("/tmp/elsewhere.toml"))
        );
        assert_ne!(
            Config::resolve_path(Some(OsString::new())),
            Some(PathBuf::new())
        );
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(matches!(
            Config::from_toml_str("code_length = \"six\""),
            Err(Error::ConfigParse(_))
        ));
    }
}
