use chrono::{Duration, NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use crate::{
    data::event_log::EventLogRepository,
    error::{flight::FlightError, AppError},
    model::{
        event_log::{CreateEventLogParams, EventLog},
        pagination::Paginated,
    },
};

pub struct EventLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Archives an event
    pub async fn archive(&self, params: CreateEventLogParams) -> Result<EventLog, AppError> {
        let event = EventLogRepository::new(self.db).create(params).await?;

        debug!(
            "Archived {} event for {} {}",
            event.event_type, event.entity_type, event.entity_id
        );

        Ok(event)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<EventLog>, AppError> {
        Ok(EventLogRepository::new(self.db).get_by_id(id).await?)
    }

    /// Gets a page of archived events, newest first
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Paginated<EventLog>, AppError> {
        let (events, total) = EventLogRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(events, total, page, per_page))
    }

    /// Gets the event history of an entity, oldest first
    pub async fn get_by_entity(
        &self,
        entity_type: &str,
        entity_id: &str,
    ) -> Result<Vec<EventLog>, AppError> {
        Ok(EventLogRepository::new(self.db)
            .get_by_entity(entity_type, entity_id)
            .await?)
    }

    pub async fn get_by_correlation(&self, correlation_id: &str) -> Result<Vec<EventLog>, AppError> {
        Ok(EventLogRepository::new(self.db)
            .get_by_correlation(correlation_id)
            .await?)
    }

    /// Deletes archived events that occurred more than `retention_days` ago
    ///
    /// # Returns
    /// - `Ok(count)`: Number of deleted events
    /// - `Err(AppError::FlightErr)`: Retention is not a positive number of days
    /// - `Err(AppError)`: Database error
    pub async fn purge_older_than(&self, retention_days: i64) -> Result<u64, AppError> {
        if retention_days <= 0 {
            return Err(FlightError::InvalidArgument(format!(
                "Retention must be a positive number of days, got {}",
                retention_days
            ))
            .into());
        }

        let cutoff = Utc::now().naive_utc() - Duration::days(retention_days);
        self.purge_before(cutoff).await
    }

    /// Deletes archived events that occurred strictly before `cutoff`
    pub async fn purge_before(&self, cutoff: NaiveDateTime) -> Result<u64, AppError> {
        let deleted = EventLogRepository::new(self.db)
            .delete_older_than(cutoff)
            .await?;

        info!("Purged {} archived events older than {}", deleted, cutoff);

        Ok(deleted)
    }
}
