//! Better Papers CLI entry point.

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use better_papers::cli::commands::{categories, fetch, init, refresh, serve};
use better_papers::cli::{handle_error, Cli, Commands};
use better_papers::infrastructure::config::ConfigLoader;
use better_papers::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let result = match cli.command {
        Commands::Init(args) => init::execute(args, json).await,
        command => run(command, cli.config.as_deref(), json).await,
    };

    if let Err(err) = result {
        handle_error(err, json);
    }
}

async fn run(command: Commands, config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;
    LoggerImpl::init(&config.logging)?;

    match command {
        Commands::Init(args) => init::execute(args, json).await,
        Commands::Serve(args) => serve::execute(args, &config).await,
        Commands::Refresh(args) => refresh::execute(args, &config, json).await,
        Commands::Fetch(args) => fetch::execute(args, &config, json).await,
        Commands::Categories(args) => categories::execute(args, &config, json).await,
    }
}
