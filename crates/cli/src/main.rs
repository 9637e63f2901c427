//! # Geo DNS Cache
//!
//! Main entry point for the geo-aware caching DNS proxy

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use geo_dns_cache_domain::CliOverrides;
use geo_dns_cache_jobs::{CacheRetentionJob, JobRunner};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "geo-dns-cache")]
#[command(version = "0.1.0")]
#[command(about = "Caching DNS proxy that forwards each client to its nearest upstream")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long, env = "PORT")]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// SQLite database path or URL
    #[arg(long, env = "DATABASE_URL")]
    database: Option<String>,

    /// MaxMind GeoLite2/GeoIP2 City database
    #[arg(long, env = "GEOIP_DATABASE")]
    geoip_db: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        database_path: cli.database,
        geoip_database: cli.geoip_db,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Geo DNS Cache starting");

    let pool = bootstrap::init_database(&config.database.url(), &config.database).await?;
    let locator = bootstrap::init_geo_locator(&config.geoip)?;

    let repos = di::Repositories::new(pool, &config);
    let use_cases = di::UseCases::new(&repos, locator, &config);

    let registered = use_cases
        .register_upstreams
        .execute(&config.upstreams)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to register upstream servers");
            anyhow::anyhow!(e)
        })?;
    info!(upstreams = registered, "Upstream servers registered");

    let shutdown = CancellationToken::new();

    JobRunner::new()
        .with_cache_retention(
            CacheRetentionJob::new(Arc::clone(&use_cases.purge_expired))
                .with_interval(config.cache.purge_interval_secs)
                .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    let ctrl_c_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            ctrl_c_token.cancel();
        }
    });

    server::start_dns_server(
        config.server.listen_addr(),
        Arc::clone(&use_cases.resolve_questions),
        shutdown,
    )
    .await?;

    info!("Geo DNS Cache stopped");
    Ok(())
}
