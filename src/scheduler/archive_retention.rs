use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::{error::AppError, service::event_log::EventLogService};

/// Starts the event archive retention scheduler
///
/// Runs on `cron` and deletes archived events older than `retention_days`.
///
/// # Arguments
/// - `db`: Database connection
/// - `cron`: Six-field cron expression (seconds first)
/// - `retention_days`: Age in days after which archived events are purged
///
/// # Returns
/// - `Ok(JobScheduler)`: The running scheduler, for shutdown
/// - `Err(AppError::SchedulerErr)`: Invalid cron expression or scheduler failure
pub async fn start_scheduler(
    db: DatabaseConnection,
    cron: &str,
    retention_days: i64,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = EventLogService::new(&db)
                .purge_older_than(retention_days)
                .await
            {
                error!("Error purging archived events: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    info!(
        "Archive retention scheduler started ({}, keeping {} days)",
        cron, retention_days
    );

    Ok(scheduler)
}
