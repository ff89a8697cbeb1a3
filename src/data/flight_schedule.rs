use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::flight_schedule::{CreateFlightScheduleParams, FlightSchedule};

pub struct FlightScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active schedule template.
    ///
    /// # Returns
    /// - `Ok(FlightSchedule)`: The created schedule
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateFlightScheduleParams) -> Result<FlightSchedule, DbErr> {
        let now = Utc::now().naive_utc();

        let entity = entity::flight_schedule::ActiveModel {
            flight_number: ActiveValue::Set(params.flight_number),
            airline_code: ActiveValue::Set(params.airline_code),
            aircraft_registration: ActiveValue::Set(params.aircraft_registration),
            departure_station_code: ActiveValue::Set(params.departure_station_code),
            arrival_station_code: ActiveValue::Set(params.arrival_station_code),
            departure_time: ActiveValue::Set(params.departure_time),
            arrival_time: ActiveValue::Set(params.arrival_time),
            flight_type: ActiveValue::Set(params.flight_type.as_str().to_string()),
            operating_days: ActiveValue::Set(params.operating_days.to_column()),
            effective_from: ActiveValue::Set(params.effective_from),
            effective_to: ActiveValue::Set(params.effective_to),
            duration_minutes: ActiveValue::Set(params.duration_minutes),
            distance_km: ActiveValue::Set(params.distance_km),
            passenger_capacity: ActiveValue::Set(params.passenger_capacity),
            terminal: ActiveValue::Set(params.terminal),
            description: ActiveValue::Set(params.description),
            active: ActiveValue::Set(true),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        to_domain(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<FlightSchedule>, DbErr> {
        entity::prelude::FlightSchedule::find_by_id(id)
            .one(self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    /// Gets paginated active schedules ordered by flight number.
    ///
    /// # Returns
    /// - `Ok((schedules, total))`: Schedules for the page and total active count
    /// - `Err(DbErr)`: Database error
    pub async fn get_active_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<FlightSchedule>, u64), DbErr> {
        let paginator = entity::prelude::FlightSchedule::find()
            .filter(entity::flight_schedule::Column::Active.eq(true))
            .order_by_asc(entity::flight_schedule::Column::FlightNumber)
            .order_by_asc(entity::flight_schedule::Column::EffectiveFrom)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let schedules = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(to_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((schedules, total))
    }

    /// Activates or deactivates a schedule, bumping its version.
    ///
    /// # Returns
    /// - `Ok(Some(FlightSchedule))`: The updated schedule
    /// - `Ok(None)`: No schedule with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn set_active(&self, id: i32, active: bool) -> Result<Option<FlightSchedule>, DbErr> {
        let Some(schedule) = entity::prelude::FlightSchedule::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let version = schedule.version;
        let mut active_model: entity::flight_schedule::ActiveModel = schedule.into();
        active_model.active = ActiveValue::Set(active);
        active_model.version = ActiveValue::Set(version + 1);
        active_model.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let entity = entity::prelude::FlightSchedule::update(active_model)
            .validate()?
            .filter(entity::flight_schedule::Column::Version.eq(version))
            .exec(self.db)
            .await?;

        to_domain(entity).map(Some)
    }
}

fn to_domain(entity: entity::flight_schedule::Model) -> Result<FlightSchedule, DbErr> {
    FlightSchedule::from_entity(entity).map_err(|e| DbErr::Custom(e.to_string()))
}
