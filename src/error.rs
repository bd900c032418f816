//! Errors in the library.
use thiserror::Error;

/// Errors raised while resolving the training configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither a predefined agent nor custom MLP mode was selected.
    #[error("no mode/agent selected")]
    NoAgentSelected,

    /// A layer specification contains a token that is not an integer.
    #[error("invalid argument format on: {0:?}")]
    InvalidLayerSpec(String),
}
