//! fyyur-web - venue and artist booking site
//!
//! Serves the venue, artist and show pages from a single SQLite database.
//! Settings resolve CLI > environment > config.toml > compiled defaults.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fyyur_common::config::{load_toml_config, CliOverrides, ResolvedConfig};
use fyyur_common::db::{init_database, seed_demo_data};
use fyyur_web::{build_router, AppState};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for fyyur-web
#[derive(Parser, Debug)]
#[command(name = "fyyur-web")]
#[command(about = "Venue and artist booking site")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "FYYUR_PORT")]
    port: Option<u16>,

    /// Address to bind to
    #[arg(short, long, env = "FYYUR_BIND")]
    bind: Option<String>,

    /// SQLite database file (also FYYUR_DATABASE)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Config file (defaults to <config dir>/fyyur/config.toml)
    #[arg(short, long, env = "FYYUR_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset, e.g. "debug"
    #[arg(long)]
    log_level: Option<String>,

    /// Insert the demo venues, artists and shows into an empty database
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let toml_config =
        load_toml_config(args.config.as_deref()).context("Failed to load config file")?;
    let config = ResolvedConfig::resolve(
        CliOverrides {
            database: args.database,
            bind: args.bind,
            port: args.port,
            log_level: args.log_level,
        },
        &toml_config,
    );

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "fyyur_web={level},fyyur_common={level},tower_http={level}",
                    level = config.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Fyyur (fyyur-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Database path: {}", config.database_path.display());

    let pool = init_database(&config.database_path)
        .await
        .context("Failed to open database")?;

    if args.seed {
        if seed_demo_data(&pool).await.context("Failed to seed demo data")? {
            info!("Seeded demo venues, artists and shows");
        } else {
            warn!("Database already has venues, skipping demo data");
        }
    }

    let state = AppState::new(pool.clone()).context("Failed to compile templates")?;
    let app = build_router(state);

    let ip: IpAddr = config
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.bind))?;
    let addr = SocketAddr::new(ip, config.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("fyyur-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
