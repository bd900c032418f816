use anyhow::Result;
use arena_drl_train::{
    error::ConfigError, Activation, AgentKind, AgentMode, NetArch, TrainingArgs, TrainingConfig,
};
use clap::Parser;
use tempdir::TempDir;

fn parse(args: &[&str]) -> TrainingArgs {
    TrainingArgs::try_parse_from(std::iter::once("train").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_predefined_agent() -> Result<()> {
    let config = parse(&["--agent", "DRL_LOCAL_PLANNER", "--n", "1000000"]).resolve()?;
    assert_eq!(config.mode, AgentMode::Agent(AgentKind::DrlLocalPlanner));
    assert_eq!(config.n_timesteps, Some(1000000));
    assert!(!config.no_gpu);
    Ok(())
}

#[test]
fn test_custom_mlp() -> Result<()> {
    let config = parse(&[
        "--custom-mlp",
        "--body",
        "64-64",
        "--pi",
        "32",
        "--vf",
        "32",
        "--act_fn",
        "tanh",
    ])
    .resolve()?;
    assert_eq!(
        config.mode,
        AgentMode::CustomMlp {
            net_arch: NetArch {
                body: vec![64, 64],
                pi: vec![32],
                vf: vec![32],
            },
            act_fn: Activation::Tanh,
        }
    );
    Ok(())
}

#[test]
fn test_no_gpu_hides_gpus() -> Result<()> {
    let config = parse(&["--no-gpu", "--agent", "CUSTOM"]).resolve()?;
    assert!(config.no_gpu);
    assert_eq!(std::env::var("CUDA_VISIBLE_DEVICES")?, "-1");
    Ok(())
}

#[test]
fn test_agent_mode_ignores_layer_specs() -> Result<()> {
    // layer specs are dropped, not parsed, when a predefined agent is selected
    let config = parse(&["--agent", "DRL_LOCAL_PLANNER", "--body", "64-64"]).resolve()?;
    assert_eq!(config.mode, AgentMode::Agent(AgentKind::DrlLocalPlanner));
    Ok(())
}

#[test]
fn test_no_mode_selected() {
    let err = parse(&[]).resolve().unwrap_err();
    assert_eq!(err, ConfigError::NoAgentSelected);
}

#[test]
fn test_invalid_layer_spec_names_token() {
    let err = parse(&["--custom-mlp", "--body", "a-1", "--pi", "16", "--vf", "16"])
        .resolve()
        .unwrap_err();
    assert_eq!(err, ConfigError::InvalidLayerSpec("a".to_string()));
    assert!(err.to_string().contains("\"a\""));
}

#[test]
fn test_act_fn_defaults_to_relu() {
    let args = parse(&["--custom-mlp", "--body", "64", "--pi", "16", "--vf", "16"]);
    assert_eq!(args.custom_mlp.act_fn, Activation::Relu);
}

#[test]
fn test_agent_choices() {
    for (name, kind) in [
        ("MLP_ARENA2D", AgentKind::MlpArena2d),
        ("DRL_LOCAL_PLANNER", AgentKind::DrlLocalPlanner),
        ("CNN_NAVREP", AgentKind::CnnNavrep),
        ("CUSTOM", AgentKind::Custom),
    ] {
        let config = parse(&["--agent", name]).resolve().unwrap();
        assert_eq!(config.mode, AgentMode::Agent(kind));
    }
}

#[test]
fn test_save_load_roundtrip() -> Result<()> {
    let config = parse(&[
        "--custom-mlp",
        "--body",
        "32-32",
        "--pi",
        "16",
        "--vf",
        "16",
        "--act_fn",
        "sigmoid",
    ])
    .resolve()?;

    let dir = TempDir::new("training_config")?;
    let path = dir.path().join("train.yaml");
    config.save(&path)?;
    let config_ = TrainingConfig::load(&path)?;
    assert_eq!(config, config_);
    Ok(())
}
