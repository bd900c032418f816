//! Network architecture derived from custom MLP arguments.
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Network architecture for the model constructor.
///
/// Sizes of the shared latent layers, followed by the branches of the policy
/// and value heads. Equivalent to the `net_arch` argument of the downstream
/// policy constructor.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct NetArch {
    /// Units per layer of the shared latent network.
    pub body: Vec<i64>,

    /// Units per layer of the latent policy network.
    pub pi: Vec<i64>,

    /// Units per layer of the latent value network.
    pub vf: Vec<i64>,
}

impl NetArch {
    /// Derives the architecture from the three hyphen-delimited layer specs.
    pub fn from_specs(body: &str, pi: &str, vf: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            body: parse_units(body)?,
            pi: parse_units(pi)?,
            vf: parse_units(vf)?,
        })
    }
}

/// Parses a layer spec of the form `'{num}-{num}-...'` into units per layer.
///
/// Fails on the first token that does not parse as an integer. The empty
/// string splits into a single empty token and is rejected; there is no
/// spelling for a zero-layer network.
pub fn parse_units(spec: &str) -> Result<Vec<i64>, ConfigError> {
    spec.split('-')
        .map(|token| {
            token
                .parse()
                .map_err(|_| ConfigError::InvalidLayerSpec(token.to_string()))
        })
        .collect()
}
