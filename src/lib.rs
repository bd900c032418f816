#![warn(missing_docs)]
//! Command-line configuration for training DRL local planner agents.
//!
//! Parses the arguments of the training script, validates the agent
//! selection, and derives the network architecture in custom MLP mode.
pub mod error;

mod agent;
pub use agent::{Activation, AgentKind};

mod net_arch;
pub use net_arch::{parse_units, NetArch};

mod args;
pub use args::{AgentMode, CustomMlpOpts, TrainOpts, TrainingArgs, TrainingConfig};
