use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use travelhub::api::AppState;
use travelhub::dashboard::{self, ControlSnapshot, Dashboard};
use travelhub::{HttpUpstream, Providers, TravelHubConfig, TravelHubError, telemetry, web};

#[derive(Parser)]
#[command(name = "travelhub", version, about = "Japan travel hub dashboard")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the dashboard API (default)
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Poll every tab on its schedule and log each render
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = TravelHubConfig::load_from_path(cli.config).inspect_err(|err| {
        if let Some(err) = err.downcast_ref::<TravelHubError>() {
            eprintln!("{}", err.user_message());
        }
    })?;
    telemetry::init(&config.logging)?;

    let upstream = Arc::new(HttpUpstream::new(&config.upstream)?);
    let dashboard = Arc::new(Dashboard::new(Providers::new(upstream), config.map.clone()));
    let layout = dashboard::compose(&config);

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            let state = AppState {
                dashboard,
                layout: Arc::new(layout),
            };
            web::run(&config.server, state).await.map_err(|err| {
                tracing::error!("{err}");
                eprintln!("{}", err.user_message());
                anyhow::Error::from(err)
            })
        }
        Command::Watch => {
            let scheduler =
                dashboard::polling_schedule(dashboard, &layout, ControlSnapshot::default());
            tracing::info!(timers = scheduler.len(), "Watching dashboard tabs");
            let running = scheduler.start();
            tokio::signal::ctrl_c().await?;
            tracing::info!("Stopping polling timers");
            running.shutdown();
            Ok(())
        }
    }
}
