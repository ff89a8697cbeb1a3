use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use tracing::{debug, error, info};

use crate::{
    cache::FlightCache,
    data::flight_schedule::FlightScheduleRepository,
    error::{flight::FlightError, AppError},
    event::{DomainEvent, EntityType, EventKind, EventPublisher},
    model::{
        flight::Flight,
        flight_schedule::{CreateFlightScheduleParams, FlightSchedule},
        pagination::Paginated,
    },
    service::flight::FlightService,
};

pub struct FlightScheduleService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a FlightCache,
    events: &'a dyn EventPublisher,
}

impl<'a> FlightScheduleService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        cache: &'a FlightCache,
        events: &'a dyn EventPublisher,
    ) -> Self {
        Self { db, cache, events }
    }

    /// Creates a schedule template
    ///
    /// # Returns
    /// - `Ok(FlightSchedule)`: The created, active schedule
    /// - `Err(AppError::FlightErr)`: Effective window ends before it starts
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, params: CreateFlightScheduleParams) -> Result<FlightSchedule, AppError> {
        params.validate()?;

        let schedule = FlightScheduleRepository::new(self.db).create(params).await?;

        info!(
            "Created schedule {} for {} ({} to {}, {})",
            schedule.id,
            schedule.flight_number,
            schedule.effective_from,
            schedule.effective_to,
            schedule.operating_days
        );
        self.publish(EventKind::Created, &schedule);

        Ok(schedule)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<FlightSchedule>, AppError> {
        debug!("Getting schedule {}", id);

        Ok(FlightScheduleRepository::new(self.db).get_by_id(id).await?)
    }

    /// Gets a page of active schedules ordered by flight number
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<FlightSchedule>, AppError> {
        let (schedules, total) = FlightScheduleRepository::new(self.db)
            .get_active_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(schedules, total, page, per_page))
    }

    /// Activates or deactivates a schedule. Schedules are never hard deleted.
    ///
    /// # Returns
    /// - `Ok(FlightSchedule)`: The updated schedule
    /// - `Err(AppError::NotFound)`: No schedule with that ID
    /// - `Err(AppError)`: Database error
    pub async fn set_active(&self, id: i32, active: bool) -> Result<FlightSchedule, AppError> {
        let schedule = FlightScheduleRepository::new(self.db)
            .set_active(id, active)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Flight schedule {} not found", id)))?;

        info!(
            "{} schedule {} for {}",
            if active { "Activated" } else { "Deactivated" },
            schedule.id,
            schedule.flight_number
        );
        self.publish(EventKind::Updated, &schedule);

        Ok(schedule)
    }

    /// Generates the flight a schedule produces on `date` and persists it
    ///
    /// # Returns
    /// - `Ok(Flight)`: The persisted flight in `SCHEDULED` status
    /// - `Err(AppError::NotFound)`: No schedule with that ID
    /// - `Err(AppError::FlightErr)`: Schedule inactive, or not operating on `date`
    /// - `Err(AppError::Conflict)`: An active flight already uses the flight number
    /// - `Err(AppError)`: Database error
    pub async fn instantiate(&self, schedule_id: i32, date: NaiveDate) -> Result<Flight, AppError> {
        let schedule = FlightScheduleRepository::new(self.db)
            .get_by_id(schedule_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Flight schedule {} not found", schedule_id))
            })?;

        if !schedule.active {
            return Err(FlightError::ScheduleInactive(schedule.id).into());
        }

        let flight = schedule.instantiate(date)?;

        debug!("Instantiating schedule {} for {}", schedule.id, date);

        FlightService::new(self.db, self.cache, self.events)
            .insert(flight)
            .await
    }

    fn publish(&self, kind: EventKind, schedule: &FlightSchedule) {
        match DomainEvent::new(kind, EntityType::FlightSchedule, &schedule.flight_number, schedule) {
            Ok(event) => self.events.publish(event),
            Err(e) => error!(
                "Failed to build {} event for schedule {}: {}",
                kind, schedule.id, e
            ),
        }
    }
}
