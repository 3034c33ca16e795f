//! Pokedex - A REPL client for the PokeAPI catalog
//!
//! Browses location areas and creature records, keeping recent API responses
//! in an in-memory cache whose entries are swept after a fixed TTL.

use std::io;

use anyhow::Result;
use tokio::io::BufReader;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{Config, PokeApiClient, Repl, TtlCache};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so stdout stays the REPL)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its sweeper
/// 4. Create the API client around the cache
/// 5. Run the REPL on stdin/stdout until `exit`, EOF or a shutdown signal
#[tokio::main]
async fn main() -> Result<()> {
    // Defaults to "warn", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_ttl={}s, request_timeout={}s",
        config.base_url, config.cache_ttl, config.request_timeout
    );

    let cache = TtlCache::new(config.cache_ttl());
    let client = PokeApiClient::new(&config, cache)?;
    let mut repl = Repl::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();

    tokio::select! {
        result = repl.run(stdin, &mut stdout) => {
            if let Err(err) = &result {
                error!("REPL stopped: {}", err);
            }
            result?;
        }
        _ = shutdown_signal() => {
            println!();
            println!("Closing the Pokedex... Goodbye!");
            // A pending blocking stdin read would otherwise hold up runtime shutdown
            std::process::exit(0);
        }
    }

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}
