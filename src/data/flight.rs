use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::flight::{Flight, NewFlight};

pub struct FlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new flight at version 0.
    ///
    /// # Returns
    /// - `Ok(Flight)`: The created flight
    /// - `Err(DbErr)`: Database error, including a unique constraint violation when an
    ///   active flight already holds the number
    pub async fn create(&self, flight: NewFlight) -> Result<Flight, DbErr> {
        let now = Utc::now().naive_utc();

        let entity = entity::flight::ActiveModel {
            flight_number: ActiveValue::Set(flight.flight_number),
            airline_code: ActiveValue::Set(flight.airline_code),
            aircraft_registration: ActiveValue::Set(flight.aircraft_registration),
            departure_station_code: ActiveValue::Set(flight.departure_station_code),
            arrival_station_code: ActiveValue::Set(flight.arrival_station_code),
            flight_date: ActiveValue::Set(flight.flight_date),
            scheduled_departure_time: ActiveValue::Set(flight.state.scheduled_departure_time),
            scheduled_arrival_time: ActiveValue::Set(flight.state.scheduled_arrival_time),
            actual_departure_time: ActiveValue::Set(flight.state.actual_departure_time),
            actual_arrival_time: ActiveValue::Set(flight.state.actual_arrival_time),
            status: ActiveValue::Set(flight.state.status.as_str().to_string()),
            flight_type: ActiveValue::Set(flight.flight_type.as_str().to_string()),
            gate: ActiveValue::Set(flight.gate),
            terminal: ActiveValue::Set(flight.terminal),
            delay_minutes: ActiveValue::Set(flight.state.delay_minutes),
            duration_minutes: ActiveValue::Set(flight.duration_minutes),
            distance_km: ActiveValue::Set(flight.distance_km),
            passenger_capacity: ActiveValue::Set(flight.passenger_capacity),
            booked_passengers: ActiveValue::Set(None),
            description: ActiveValue::Set(flight.description),
            active: ActiveValue::Set(flight.active),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        to_domain(entity)
    }

    /// Gets a flight by ID, active or not.
    ///
    /// # Returns
    /// - `Ok(Some(Flight))`: Flight found
    /// - `Ok(None)`: No flight with that ID
    /// - `Err(DbErr)`: Database error or unreadable status/type column
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Flight>, DbErr> {
        entity::prelude::Flight::find_by_id(id)
            .one(self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    /// Gets the active flight holding a flight number.
    ///
    /// # Returns
    /// - `Ok(Some(Flight))`: Active flight with that number
    /// - `Ok(None)`: No active flight uses the number
    /// - `Err(DbErr)`: Database error
    pub async fn get_active_by_number(&self, flight_number: &str) -> Result<Option<Flight>, DbErr> {
        entity::prelude::Flight::find()
            .filter(entity::flight::Column::FlightNumber.eq(flight_number))
            .filter(entity::flight::Column::Active.eq(true))
            .one(self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    /// Checks whether an active flight already uses a flight number.
    pub async fn active_number_exists(&self, flight_number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Flight::find()
            .filter(entity::flight::Column::FlightNumber.eq(flight_number))
            .filter(entity::flight::Column::Active.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets paginated active flights ordered by scheduled departure (earliest first).
    ///
    /// # Arguments
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((flights, total))`: Flights for the page and total active flight count
    /// - `Err(DbErr)`: Database error
    pub async fn get_active_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Flight>, u64), DbErr> {
        let paginator = entity::prelude::Flight::find()
            .filter(entity::flight::Column::Active.eq(true))
            .order_by_asc(entity::flight::Column::ScheduledDepartureTime)
            .order_by_asc(entity::flight::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let flights = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(to_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((flights, total))
    }

    /// Writes every mutable field of a flight if its version is still current.
    ///
    /// The write is conditional on the stored version equal to `flight.version` and
    /// increments it by one.
    ///
    /// # Returns
    /// - `Ok(Flight)`: The stored flight with the new version
    /// - `Err(DbErr::RecordNotUpdated)`: Flight missing or version changed since it was read
    /// - `Err(DbErr)`: Other database error
    pub async fn update(&self, flight: Flight) -> Result<Flight, DbErr> {
        let expected_version = flight.version;

        let entity = entity::prelude::Flight::update(entity::flight::ActiveModel {
            id: ActiveValue::Unchanged(flight.id),
            flight_number: ActiveValue::Set(flight.flight_number),
            airline_code: ActiveValue::Set(flight.airline_code),
            aircraft_registration: ActiveValue::Set(flight.aircraft_registration),
            departure_station_code: ActiveValue::Set(flight.departure_station_code),
            arrival_station_code: ActiveValue::Set(flight.arrival_station_code),
            flight_date: ActiveValue::Set(flight.flight_date),
            scheduled_departure_time: ActiveValue::Set(flight.state.scheduled_departure_time),
            scheduled_arrival_time: ActiveValue::Set(flight.state.scheduled_arrival_time),
            actual_departure_time: ActiveValue::Set(flight.state.actual_departure_time),
            actual_arrival_time: ActiveValue::Set(flight.state.actual_arrival_time),
            status: ActiveValue::Set(flight.state.status.as_str().to_string()),
            flight_type: ActiveValue::Set(flight.flight_type.as_str().to_string()),
            gate: ActiveValue::Set(flight.gate),
            terminal: ActiveValue::Set(flight.terminal),
            delay_minutes: ActiveValue::Set(flight.state.delay_minutes),
            duration_minutes: ActiveValue::Set(flight.duration_minutes),
            distance_km: ActiveValue::Set(flight.distance_km),
            passenger_capacity: ActiveValue::Set(flight.passenger_capacity),
            booked_passengers: ActiveValue::Set(flight.booked_passengers),
            description: ActiveValue::Set(flight.description),
            active: ActiveValue::Set(flight.active),
            version: ActiveValue::Set(expected_version + 1),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .validate()?
        .filter(entity::flight::Column::Version.eq(expected_version))
        .exec(self.db)
        .await?;

        to_domain(entity)
    }
}

fn to_domain(entity: entity::flight::Model) -> Result<Flight, DbErr> {
    Flight::from_entity(entity).map_err(|e| DbErr::Custom(e.to_string()))
}
