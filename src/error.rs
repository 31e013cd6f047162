//! Error types for the epicycle engine and its configuration.

use thiserror::Error;

/// Errors raised when inputs reach the engine (or its parsers) outside their valid domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("term count {got} is outside [{min}, {max}]")]
    InvalidTermCount { got: usize, min: usize, max: usize },
    #[error("'{0}' is not a term count")]
    NotATermCount(String),
    #[error("unknown wave kind '{0}'")]
    UnknownWaveKind(String),
    #[error("invalid hotkey: {0}")]
    InvalidHotkey(String),
}

/// Errors raised while loading a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error(transparent)]
    Engine(#[from] EngineError),
}
