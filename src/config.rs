//! CLI configuration loaded from YAML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SignatureError, SignatureResult};
use crate::locale::Language;
use crate::template::TemplateKind;

pub const APP_DIR: &str = "kore-signature";
pub const LANG_ENV: &str = "KORE_SIGNATURE_LANG";
pub const DEFAULT_SHARE_BASE_URL: &str = "https://signature.koreagency.it/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub language: Language,
    pub template: TemplateKind,
    pub store_path: Option<PathBuf>,
    pub share_base_url: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            template: TemplateKind::Modern,
            store_path: None,
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
        }
    }
}

impl CliConfig {
    pub fn from_yaml(source: &str) -> SignatureResult<Self> {
        serde_yaml::from_str(source).map_err(|e| SignatureError::ConfigError(e.to_string()))
    }

    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, the per-user config file is
    /// read when present and defaults apply otherwise. `KORE_SIGNATURE_LANG`
    /// overrides the language in both cases.
    pub fn load(path: Option<&Path>) -> SignatureResult<Self> {
        let mut config = match path {
            Some(path) => Self::read(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::read(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_language_override(std::env::var(LANG_ENV).ok().as_deref());
        Ok(config)
    }

    /// Apply a locale tag such as `de-DE`. Unsupported tags select English.
    pub fn apply_language_override(&mut self, tag: Option<&str>) {
        if let Some(tag) = tag.filter(|t| !t.trim().is_empty()) {
            self.language = Language::detect(tag);
            tracing::debug!(language = %self.language, "language taken from environment");
        }
    }

    /// Configured store path, else `<data dir>/kore-signature/profiles.json`.
    pub fn resolved_store_path(&self) -> SignatureResult<PathBuf> {
        if let Some(path) = &self.store_path {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR).join("profiles.json"))
            .ok_or_else(|| {
                SignatureError::ConfigError(
                    "no data directory available; set store_path in the config file".to_string(),
                )
            })
    }

    fn read(path: &Path) -> SignatureResult<Self> {
        let source = fs::read_to_string(path).map_err(|e| SignatureError::io(path, e))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_yaml(&source)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.yaml"))
}
