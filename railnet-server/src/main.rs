//! HTTP front end for the railway network analytics.

mod config;
mod error;
mod logging;
mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use railnet_core::create_network;

use config::ServerConfig;
use routes::{AppState, router};

#[derive(Parser, Debug)]
#[command(name = "railnet-server", version, about = "Serve railway network queries over HTTP")]
struct Args {
    /// TOML config file; defaults apply for anything it leaves out
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// City table (CSV)
    #[arg(long)]
    cities: Option<PathBuf>,

    /// Connection table (CSV)
    #[arg(long)]
    connections: Option<PathBuf>,

    /// Debug logging
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<ServerConfig, config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(path) = &self.cities {
            config.cities_path.clone_from(path);
        }
        if let Some(path) = &self.connections {
            config.connections_path.clone_from(path);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init_tracing(args.verbose) {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.resolve_config()?;
    let graph = create_network(&config.network())?;

    let state = AppState {
        graph: Arc::new(graph),
        top_n: config.top_n,
    };
    let app = router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
