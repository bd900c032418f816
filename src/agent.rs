//! Predefined agent architectures and activation functions.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Predefined agent architecture to train.
///
/// The identifiers are the names used by the model zoo; [`AgentKind::Custom`]
/// selects a checkpointed architecture without a predefined layout.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    /// Fully-connected network from arena2d.
    #[serde(rename = "MLP_ARENA2D")]
    #[value(name = "MLP_ARENA2D")]
    MlpArena2d,

    /// Default fully-connected local planner network.
    #[serde(rename = "DRL_LOCAL_PLANNER")]
    #[value(name = "DRL_LOCAL_PLANNER")]
    DrlLocalPlanner,

    /// 1D-convolutional network from NavRep.
    #[serde(rename = "CNN_NAVREP")]
    #[value(name = "CNN_NAVREP")]
    CnnNavrep,

    /// User-provided architecture.
    #[serde(rename = "CUSTOM")]
    #[value(name = "CUSTOM")]
    Custom,
}

/// Activation function applied after each hidden layer.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// Rectified linear unit.
    Relu,

    /// Sigmoid.
    Sigmoid,

    /// Hyperbolic tangent.
    Tanh,
}

impl Default for Activation {
    fn default() -> Self {
        Self::Relu
    }
}
