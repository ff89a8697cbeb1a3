use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::event_log::{CreateEventLogParams, EventLog};

pub struct EventLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Archives an event, stamping `archived_at` with the current time.
    pub async fn create(&self, params: CreateEventLogParams) -> Result<EventLog, DbErr> {
        let entity = entity::event_log::ActiveModel {
            event_type: ActiveValue::Set(params.event_type),
            source_service: ActiveValue::Set(params.source_service),
            entity_type: ActiveValue::Set(params.entity_type),
            entity_id: ActiveValue::Set(params.entity_id),
            event_timestamp: ActiveValue::Set(params.event_timestamp),
            event_data: ActiveValue::Set(params.event_data),
            correlation_id: ActiveValue::Set(params.correlation_id),
            user_id: ActiveValue::Set(params.user_id),
            archived_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(EventLog::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<EventLog>, DbErr> {
        Ok(entity::prelude::EventLog::find_by_id(id)
            .one(self.db)
            .await?
            .map(EventLog::from_entity))
    }

    /// Gets paginated events, newest first.
    ///
    /// # Arguments
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((events, total))`: Events for the page and total event count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<EventLog>, u64), DbErr> {
        let paginator = entity::prelude::EventLog::find()
            .order_by_desc(entity::event_log::Column::EventTimestamp)
            .order_by_desc(entity::event_log::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let events = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(EventLog::from_entity)
            .collect();

        Ok((events, total))
    }

    /// Gets the history of one entity in the order the events occurred.
    pub async fn get_by_entity(
        &self,
        entity_type: &str,
        entity_id: &str,
    ) -> Result<Vec<EventLog>, DbErr> {
        Ok(entity::prelude::EventLog::find()
            .filter(entity::event_log::Column::EntityType.eq(entity_type))
            .filter(entity::event_log::Column::EntityId.eq(entity_id))
            .order_by_asc(entity::event_log::Column::EventTimestamp)
            .order_by_asc(entity::event_log::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(EventLog::from_entity)
            .collect())
    }

    /// Gets every event sharing a correlation ID in the order they occurred.
    pub async fn get_by_correlation(&self, correlation_id: &str) -> Result<Vec<EventLog>, DbErr> {
        Ok(entity::prelude::EventLog::find()
            .filter(entity::event_log::Column::CorrelationId.eq(correlation_id))
            .order_by_asc(entity::event_log::Column::EventTimestamp)
            .order_by_asc(entity::event_log::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(EventLog::from_entity)
            .collect())
    }

    /// Deletes events that occurred strictly before `cutoff`.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of deleted events
    /// - `Err(DbErr)`: Database error
    pub async fn delete_older_than(&self, cutoff: NaiveDateTime) -> Result<u64, DbErr> {
        let result = entity::prelude::EventLog::delete_many()
            .filter(entity::event_log::Column::EventTimestamp.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
