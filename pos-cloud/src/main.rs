//! pos-cloud: tenant subscription housekeeping service

use pos_cloud::{Config, ExpirySweeper, PgExpiryRepository, SweepScheduler, SystemClock, logger};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    logger::init_logger(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    tracing::info!("Starting pos-cloud (env: {})", config.environment);

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;

    let sweeper = ExpirySweeper::new(
        Arc::new(PgExpiryRepository::new(pool.clone())),
        Arc::new(SystemClock),
        config.sweep_concurrency,
    );

    let shutdown = CancellationToken::new();
    let scheduler = SweepScheduler::new(sweeper, config.sweep_interval(), shutdown.clone());
    let scheduler_handle = tokio::spawn(scheduler.run());

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown requested");
    shutdown.cancel();

    scheduler_handle.await?;
    pool.close().await;

    tracing::info!("pos-cloud stopped");
    Ok(())
}
