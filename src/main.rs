use anyhow::Result;
use arena_drl_train::{TrainingArgs, TrainingConfig};
use clap::Parser;

fn show_config(config: &TrainingConfig) {
    println!("\n-------------------------------");
    println!("           ARGUMENTS           ");
    println!("-------------------------------");
    println!("{}", serde_yaml::to_string(config).unwrap());
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TrainingArgs::parse().resolve()?;
    show_config(&config);

    Ok(())
}
