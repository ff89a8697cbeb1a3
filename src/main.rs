use flightops::{
    cache::FlightCache, config::Config, error::AppError, scheduler::archive_retention, startup,
    state::AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let events = startup::build_event_publisher(&config, &db);
    let state = AppState::new(db, FlightCache::new(), events);

    info!("Starting flight operations service");

    let mut scheduler = archive_retention::start_scheduler(
        state.db.clone(),
        &config.archive_purge_cron,
        config.event_retention_days,
    )
    .await?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to listen for shutdown: {}", e)))?;

    info!("Shutting down");
    scheduler.shutdown().await?;

    Ok(())
}
