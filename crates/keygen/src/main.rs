use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use ygg_keys::{
    generate_keys, keys_from_environment, merge_into_config, Keypair, LogConfig,
    DEFAULT_LOGGER_NAME,
};

mod cli;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    FromEnvironment,
    Generated,
    NoKeys,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::FromEnvironment | Outcome::Generated => Self::SUCCESS,
            Outcome::NoKeys => Self::FAILURE,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    let log = LogConfig::new(DEFAULT_LOGGER_NAME, cli.verbose);
    log.init();

    run(&cli, &log).await.map(ExitCode::from)
}

async fn run(cli: &cli::Cli, log: &LogConfig) -> anyhow::Result<Outcome> {
    if cli.environment {
        if let Some(keys) = keys_from_environment() {
            log::info!(target: log.target(), "keys got from environment");
            save_keys(&keys, cli, log).await?;
            return Ok(Outcome::FromEnvironment);
        }
        log::debug!(target: log.target(), "keys not set in environment");
    }

    let keys = generate_keys(&cli.generator.genkeys, cli.generator.timeout(), log).await;
    if !keys.is_valid() {
        log::warn!(target: log.target(), "no keys generated");
        return Ok(Outcome::NoKeys);
    }
    log::info!(target: log.target(), "keys generated successfuly");
    save_keys(&keys, cli, log).await?;
    Ok(Outcome::Generated)
}

async fn save_keys(keys: &Keypair, cli: &cli::Cli, log: &LogConfig) -> anyhow::Result<()> {
    log::debug!(target: log.target(), "private: {}", keys.private());
    log::debug!(target: log.target(), "public:  {}", keys.public());

    let Some(path) = cli.config_path() else {
        return Ok(());
    };
    merge_into_config(keys, path)
        .await
        .context("Failed to save keys")?;
    log::info!(target: log.target(), "keys saved to {}", path.display());
    Ok(())
}
