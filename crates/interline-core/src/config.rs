//! Partner integration configuration
//!
//! Two switches describe how a partner places its flags:
//!
//! - `recheck_baggage_after`: the recheck flag arrives one leg late
//! - `virtual_interline_after`: the interline flag arrives one leg late
//!
//! Loaded from TOML such as:
//!
//! ```toml
//! partner = "acme-air"
//! recheck_baggage_after = true
//! virtual_interline_after = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InterlineError, Result};

/// The two shift switches, passed explicitly to every processing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ShiftConfig {
    pub recheck_baggage_after: bool,
    pub virtual_interline_after: bool,
}

/// Which of the known switch combinations a config falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftMode {
    /// Flags already sit where the downstream format expects them
    PassThrough,
    /// Shift the recheck flag only
    RecheckOnly,
    /// Shift both flags
    Both,
    /// Interline shifted without recheck; partners send the tags in pairs,
    /// so this combination has no defined result
    InterlineOnly,
}

impl ShiftConfig {
    pub fn new(recheck_baggage_after: bool, virtual_interline_after: bool) -> Self {
        Self {
            recheck_baggage_after,
            virtual_interline_after,
        }
    }

    pub fn mode(&self) -> ShiftMode {
        match (self.recheck_baggage_after, self.virtual_interline_after) {
            (false, false) => ShiftMode::PassThrough,
            (true, false) => ShiftMode::RecheckOnly,
            (true, true) => ShiftMode::Both,
            (false, true) => ShiftMode::InterlineOnly,
        }
    }

    /// Reject the combination with no defined behavior.
    pub fn validate(&self) -> Result<()> {
        if self.mode() == ShiftMode::InterlineOnly {
            return Err(InterlineError::UnsupportedConfig {
                recheck_baggage_after: self.recheck_baggage_after,
                virtual_interline_after: self.virtual_interline_after,
            });
        }
        Ok(())
    }
}

/// Integration config for a single partner feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IntegrationConfig {
    /// Partner identifier, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<String>,
    #[serde(default)]
    pub recheck_baggage_after: bool,
    #[serde(default)]
    pub virtual_interline_after: bool,
}

impl IntegrationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| InterlineError::ConfigParse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| InterlineError::ConfigParse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).map_err(|e| InterlineError::ConfigParse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| InterlineError::ConfigParse(e.to_string()))
    }

    /// Load a TOML config file, or JSON when the extension is `.json`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| InterlineError::ConfigIo(format!("{}: {}", path.display(), e)))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content),
        }
    }

    pub fn shift_config(&self) -> ShiftConfig {
        ShiftConfig::new(self.recheck_baggage_after, self.virtual_interline_after)
    }

    pub fn validate(&self) -> Result<()> {
        self.shift_config().validate()
    }
}
