//! Command-line arguments of the training script.
use crate::{
    agent::{Activation, AgentKind},
    error::ConfigError,
    net_arch::NetArch,
};
use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Program arguments of the training script.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct TrainingArgs {
    /// General training options.
    #[command(flatten)]
    pub train: TrainOpts,

    /// Options of the custom MLP mode.
    #[command(flatten)]
    pub custom_mlp: CustomMlpOpts,
}

/// General training options.
#[derive(clap::Args, Debug)]
pub struct TrainOpts {
    /// Disables gpu for training
    #[arg(long, default_value_t = false)]
    pub no_gpu: bool,

    /// Predefined agent to train; required unless --custom-mlp is given
    #[arg(long, value_enum)]
    pub agent: Option<AgentKind>,

    /// Enables training with a custom multilayer perceptron (architecture
    /// according to the --body/--pi/--vf arguments)
    #[arg(long, default_value_t = false)]
    pub custom_mlp: bool,

    /// Timesteps in total to be generated for training
    #[arg(long)]
    pub n: Option<usize>,
}

/// Options of the custom MLP mode.
#[derive(clap::Args, Debug)]
#[command(next_help_heading = "custom mlp")]
pub struct CustomMlpOpts {
    /// Architecture of the shared latent network, each number representing
    /// the number of neurons per layer
    #[arg(long, default_value = "", value_name = "'{num}-{num}-...'")]
    pub body: String,

    /// Architecture of the latent policy network, each number representing
    /// the number of neurons per layer
    #[arg(long, default_value = "", value_name = "'{num}-{num}-...'")]
    pub pi: String,

    /// Architecture of the latent value network, each number representing
    /// the number of neurons per layer
    #[arg(long, default_value = "", value_name = "'{num}-{num}-...'")]
    pub vf: String,

    /// Activation function to be applied after each hidden layer
    #[arg(long = "act_fn", value_enum, default_value_t = Activation::Relu)]
    pub act_fn: Activation,
}

impl TrainingArgs {
    /// Validates the parsed arguments into a [`TrainingConfig`].
    ///
    /// When `--no-gpu` is set, gpus are hidden from the backend for the
    /// lifetime of the process.
    pub fn resolve(self) -> Result<TrainingConfig, ConfigError> {
        if self.train.no_gpu {
            hide_gpus();
        }

        let mode = if self.train.custom_mlp {
            AgentMode::CustomMlp {
                net_arch: NetArch::from_specs(
                    &self.custom_mlp.body,
                    &self.custom_mlp.pi,
                    &self.custom_mlp.vf,
                )?,
                act_fn: self.custom_mlp.act_fn,
            }
        } else {
            let agent = self.train.agent.ok_or(ConfigError::NoAgentSelected)?;
            if !self.custom_mlp.body.is_empty()
                || !self.custom_mlp.pi.is_empty()
                || !self.custom_mlp.vf.is_empty()
            {
                warn!("[custom mlp] arguments will be ignored..");
            }
            AgentMode::Agent(agent)
        };

        Ok(TrainingConfig {
            no_gpu: self.train.no_gpu,
            n_timesteps: self.train.n,
            mode,
        })
    }
}

/// Hides gpus from the numeric backend for the lifetime of the process.
fn hide_gpus() {
    info!("hiding gpus from the backend (CUDA_VISIBLE_DEVICES=-1)");
    std::env::set_var("CUDA_VISIBLE_DEVICES", "-1");
}

/// Agent selection surviving validation.
///
/// Exactly one of the two modes survives: a predefined agent, or a custom
/// MLP with its derived architecture. Options of the unused mode are dropped.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(rename_all = "snake_case")]
pub enum AgentMode {
    /// Train a predefined agent.
    Agent(AgentKind),

    /// Train a custom multilayer perceptron.
    CustomMlp {
        /// Derived network architecture.
        net_arch: NetArch,

        /// Activation function applied after each hidden layer.
        act_fn: Activation,
    },
}

/// Validated configuration of a training run.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TrainingConfig {
    /// Whether gpus are hidden from the backend.
    pub no_gpu: bool,

    /// Timesteps in total to be generated for training.
    pub n_timesteps: Option<usize>,

    /// The agent to train.
    pub mode: AgentMode,
}

impl TrainingConfig {
    /// Constructs [`TrainingConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TrainingConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
