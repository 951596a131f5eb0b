use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_DOC_TAG: &str = "@var";
pub const DEFAULT_GETTER_MARKER: &str = "get";

/// Host-language conventions used by type detection.
///
/// Read from a `typeprobe.toml` file; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Tag keyword introducing a type expression in documentation text.
    pub doc_tag: String,
    /// Substring identifying accessor methods.
    pub getter_marker: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            doc_tag: DEFAULT_DOC_TAG.to_string(),
            getter_marker: DEFAULT_GETTER_MARKER.to_string(),
        }
    }
}

impl ProbeConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ProbeConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    /// Rejects an empty or multi-word `doc_tag` and an empty `getter_marker`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.doc_tag.trim().is_empty() || self.doc_tag.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                key: "doc_tag",
                reason: "must be a single non-empty word".to_string(),
            });
        }
        if self.getter_marker.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "getter_marker",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
