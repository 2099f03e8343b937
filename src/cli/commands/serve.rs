//! Implementation of the `better-papers serve` command.

use anyhow::{anyhow, Result};
use clap::Args;

use crate::adapters::http::{PapersHttpConfig, PapersHttpServer};
use crate::cli::commands::{open_cache, paper_service};
use crate::domain::models::{Config, ServingMode};

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Serving mode: cached or live (overrides server.mode)
    #[arg(long, short)]
    pub mode: Option<ServingMode>,

    /// Bind address (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port (overrides server.port)
    #[arg(long, short)]
    pub port: Option<u16>,
}

pub async fn execute(args: ServeArgs, config: &Config) -> Result<()> {
    let mut server = config.server.clone();
    if let Some(mode) = args.mode {
        server.mode = mode;
    }
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }

    let http_config = PapersHttpConfig::from(&server);
    let http = match server.mode {
        ServingMode::Live => PapersHttpServer::live(paper_service(config)?, http_config),
        ServingMode::Cached => PapersHttpServer::cached(open_cache(config)?, http_config),
    };

    http.serve_with_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow!("HTTP server failed: {e}"))?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "failed to listen for ctrl-c; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
