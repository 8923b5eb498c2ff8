use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use campus_api::config;
use campus_api::database::DatabaseManager;

#[derive(Debug, Parser)]
#[command(name = "campus-api", version, about = "Campus REST API server")]
struct ServerArgs {
    /// Port to listen on
    #[arg(long, env = "CAMPUS_API_PORT", default_value_t = 3000)]
    port: u16,

    /// Address to bind
    #[arg(long, env = "CAMPUS_API_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Apply schema migrations before serving, regardless of configuration
    #[arg(long)]
    migrate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("campus_api=info,tower_http=info")),
        )
        .init();

    let args = ServerArgs::parse();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Campus API in {:?} mode", config.environment);

    if args.migrate || config.database.run_migrations {
        // A missing database should not keep the server from starting; /health reports it
        if let Err(e) = DatabaseManager::migrate().await {
            tracing::error!("Skipping migrations: {}", e);
        }
    }

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("Campus API listening on http://{}", bind_addr);

    axum::serve(listener, campus_api::app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    DatabaseManager::close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
