use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mission_sync::api;
use mission_sync::client::StatusClient;
use mission_sync::config::{MissionsArgs, ServeArgs};
use mission_sync_core::Services;

#[derive(Parser)]
#[command(name = "msync")]
#[command(about = "Party sync server for multi-device scavenger hunts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the sync server
    Serve(ServeArgs),
    /// Show the party state of a running server
    Status {
        /// Base URL of the server
        #[arg(long, env = "MSYNC_URL", default_value = "http://127.0.0.1:3000")]
        url: String,
    },
    /// Print the mission order the server would use
    Missions(MissionsArgs),
}

/// Same flags as `serve`, used when no subcommand is given.
#[derive(Parser)]
struct DefaultServe {
    #[command(flatten)]
    args: ServeArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                "mission_sync=debug,mission_sync_core=debug,tower_http=debug".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve(args)) => serve(args).await?,
        Some(Commands::Status { url }) => {
            let status = StatusClient::new(url).fetch().await?;
            println!("{}", status);
        }
        Some(Commands::Missions(args)) => {
            let order = args.load()?;
            for (index, step) in order.iter().enumerate() {
                println!("{:>3}  {}", index, step);
            }
        }
        None => serve(DefaultServe::parse_from(["msync"]).args).await?,
    }

    Ok(())
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = args.sync_config()?;
    tracing::info!(
        "Tracking {} mission steps (position ttl {}s, override ttl {}s)",
        config.mission_order.len(),
        args.position_ttl,
        args.override_ttl
    );

    let app = api::create_router(Services::new(config));

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    tracing::info!("Mission sync listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Mission sync stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
