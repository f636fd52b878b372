//! shardkv - A sharded in-memory key-value cache server
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging
//! 2. Load configuration from environment variables
//! 3. Create the sharded cache
//! 4. Start the background stats reporter
//! 5. Create Axum router with all endpoints
//! 6. Start HTTP server on configured port
//! 7. Handle graceful shutdown on SIGINT/SIGTERM

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shardkv::api::{create_router, AppState};
use shardkv::{spawn_stats_reporter, Config, ShardedCache};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shardkv=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting shardkv cache server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: shard_count={}, shard_capacity={}, max_key_value_size={}, port={}, request_timeout={}s, stats_interval={}s",
        config.shard_count,
        config.shard_capacity,
        config.max_key_value_size,
        config.server_port,
        config.request_timeout,
        config.stats_interval
    );

    let state = AppState::from_config(&config);
    info!(
        "Cache initialized with {} shards of capacity {}",
        state.cache.shard_count(),
        config.shard_capacity
    );

    let reporter = spawn_stats_reporter(state.cache.clone(), config.stats_interval);
    let cache = state.cache.clone();

    let app = create_router(state, config.request_timeout());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(reporter))
        .await
        .context("server error")?;

    log_final_stats(&cache);
    info!("Server shutdown complete");
    Ok(())
}

fn log_final_stats(cache: &ShardedCache) {
    let stats = cache.stats();
    info!(
        entries = stats.total_entries,
        hits = stats.hits,
        misses = stats.misses,
        evictions = stats.evictions,
        "final cache statistics"
    );
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then stops the reporter.
async fn shutdown_signal(reporter: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = reporter {
        handle.abort();
        warn!("Stats reporter aborted");
    }
}
