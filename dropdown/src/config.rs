//! Declarative dropdown configuration.
//!
//! Mirrors the builder inputs so a dropdown can be declared in TOML:
//!
//! ```toml
//! placeholder = "Pick a fruit..."
//! options = [
//!     "apple",
//!     { value = "citrus-orange", label = "Orange" },
//!     { type = "group", name = "Berries", items = ["strawberry", "blueberry"] },
//! ]
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::option::{DropdownOption, SelectedValue, Selection};

/// Errors from loading a dropdown config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// External `value` input shape: a full (value, label) table or a bare
/// placeholder string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValueConfig {
    Pair(Selection),
    Text(String),
}

impl From<ValueConfig> for SelectedValue {
    fn from(value: ValueConfig) -> Self {
        match value {
            ValueConfig::Pair(selection) => SelectedValue::Choice(Arc::new(selection)),
            ValueConfig::Text(text) => SelectedValue::Text(text),
        }
    }
}

/// Construction inputs for a dropdown.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    pub options: Vec<DropdownOption>,
    pub value: Option<ValueConfig>,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub base_class: Option<String>,
}

impl DropdownConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}
