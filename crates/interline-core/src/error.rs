//! Error types for interline-core

use thiserror::Error;

/// Result type alias for interline operations
pub type Result<T> = std::result::Result<T, InterlineError>;

/// Main error type for interline operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterlineError {
    /// The switch combination has no defined behavior
    #[error(
        "Unsupported config: recheck_baggage_after={recheck_baggage_after}, \
         virtual_interline_after={virtual_interline_after}"
    )]
    UnsupportedConfig {
        recheck_baggage_after: bool,
        virtual_interline_after: bool,
    },

    /// Config file could not be decoded
    #[error("Config parse error: {0}")]
    ConfigParse(String),

    /// Config file could not be read
    #[error("Config IO error: {0}")]
    ConfigIo(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_config_message_names_both_switches() {
        let err = InterlineError::UnsupportedConfig {
            recheck_baggage_after: false,
            virtual_interline_after: true,
        };
        let msg = err.to_string();
        assert!(msg.contains("recheck_baggage_after=false"));
        assert!(msg.contains("virtual_interline_after=true"));
    }
}
