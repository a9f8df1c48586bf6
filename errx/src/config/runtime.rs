// RUNTIME CONFIGURATION (registry assembly)

use super::constants::{DEFAULT_LANGUAGE, DEFAULT_MESSAGE_FORMAT};
use crate::errors::RegistryError;
use crate::parsers::source_for_format;
use crate::registry::Registry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

/// How to assemble a [`Registry`] at startup
///
/// ```toml
/// preset_defaults = true
/// default_language = "en"
///
/// [[messages]]
/// language = "en"
/// path = "static/en.json"
///
/// [[messages]]
/// language = "vi"
/// path = "static/vi.toml"
/// format = "toml"
///
/// [statuses.ERR_COUNTER_NOT_FOUND]
/// http = 404
/// rpc = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Seed the predefined status table before applying `statuses`
    pub preset_defaults: bool,

    /// Language used when a caller does not name one
    pub default_language: String,

    /// Single-language message files, loaded in order
    pub messages: Vec<MessageFileConfig>,

    /// Per-code statuses; each present field is merged on its own
    pub statuses: BTreeMap<String, StatusOverride>,

    /// Directory relative message paths are resolved against
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFileConfig {
    pub language: String,
    pub path: PathBuf,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    DEFAULT_MESSAGE_FORMAT.to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOverride {
    pub http: Option<u16>,
    pub rpc: Option<u32>,
}

impl RegistryConfig {
    /// Defaults taken from the variables named in [`env_vars`]
    ///
    /// Unset, blank or unparsable values keep the built-in default.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            preset_defaults: lookup(env_vars::PRESET_DEFAULTS)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(true),
            default_language: lookup(env_vars::DEFAULT_LANGUAGE)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            messages: Vec::new(),
            statuses: BTreeMap::new(),
            base_dir: None,
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, RegistryError> {
        toml::from_str(text).map_err(|e| RegistryError::Config {
            reason: e.to_string(),
        })
    }

    /// Load configuration from a TOML file; relative message paths resolve
    /// against the file's directory
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;

        let mut config = Self::from_toml_str(&text)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Resolve a configured path against `base_dir`
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Languages named by message files, in first-seen order
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = Vec::new();
        for entry in &self.messages {
            if !languages.contains(&entry.language) {
                languages.push(entry.language.clone());
            }
        }
        languages
    }

    /// Build a registry: preset table, then status overrides, then message files
    pub fn build(&self) -> Result<Registry, RegistryError> {
        let registry = if self.preset_defaults {
            Registry::with_defaults()
        } else {
            Registry::new()
        };

        for (code, status) in &self.statuses {
            if status.http.is_none() && status.rpc.is_none() {
                return Err(RegistryError::Config {
                    reason: format!("status entry '{}' sets neither http nor rpc", code),
                });
            }
            if let Some(http_status) = status.http {
                registry.register_http_status(code.as_str(), http_status);
            }
            if let Some(rpc_status) = status.rpc {
                registry.register_rpc_status(code.as_str(), rpc_status);
            }
        }

        for entry in &self.messages {
            let source = source_for_format(&entry.format)
                .ok_or_else(|| RegistryError::UnknownFormat(entry.format.clone()))?;
            let path = self.resolve_path(&entry.path);
            registry.load_messages_file(&entry.language, &path, source.as_ref())?;
        }

        log::debug!(
            "built registry from config: {} status overrides, {} message files",
            self.statuses.len(),
            self.messages.len()
        );
        Ok(registry)
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    pub const DEFAULT_LANGUAGE: &str = "ERRX_DEFAULT_LANGUAGE";
    pub const PRESET_DEFAULTS: &str = "ERRX_PRESET_DEFAULTS";
}
