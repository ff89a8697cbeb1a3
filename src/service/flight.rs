use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::{
    cache::FlightCache,
    data::{flight::FlightRepository, flight_leg::FlightLegRepository},
    error::AppError,
    event::{DomainEvent, EntityType, EventKind, EventPublisher},
    model::{
        flight::{CreateFlightParams, Flight, NewFlight, UpdateFlightParams},
        flight_leg::{CreateFlightLegParams, FlightLeg},
        lifecycle::{self, FlightEvent},
        pagination::Paginated,
    },
};

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a FlightCache,
    events: &'a dyn EventPublisher,
}

impl<'a> FlightService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        cache: &'a FlightCache,
        events: &'a dyn EventPublisher,
    ) -> Self {
        Self { db, cache, events }
    }

    /// Creates an ad-hoc flight
    ///
    /// # Returns
    /// - `Ok(Flight)`: The created flight in `SCHEDULED` status
    /// - `Err(AppError::FlightErr)`: Arrival is not after departure
    /// - `Err(AppError::Conflict)`: An active flight already uses the flight number
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, params: CreateFlightParams) -> Result<Flight, AppError> {
        let flight = params.into_new_flight()?;
        self.insert(flight).await
    }

    /// Persists a new flight, enforcing flight number uniqueness among active flights.
    ///
    /// Shared by ad-hoc creation and schedule instantiation. The up-front check gives
    /// the common case a clear error; the partial unique index on the flight table
    /// settles concurrent inserts.
    pub(crate) async fn insert(&self, flight: NewFlight) -> Result<Flight, AppError> {
        let repo = FlightRepository::new(self.db);

        let flight_number = flight.flight_number.clone();
        let conflict = || format!("An active flight with number {} already exists", flight_number);

        if repo.active_number_exists(&flight_number).await? {
            return Err(AppError::Conflict(conflict()));
        }

        // A concurrent insert can pass the check above; the unique index catches it
        let flight = repo
            .create(flight)
            .await
            .map_err(|e| AppError::from_unique_write(e, conflict))?;
        self.cache.invalidate_all().await;

        info!(
            "Created flight {} ({}) departing {}",
            flight.flight_number, flight.id, flight.state.scheduled_departure_time
        );
        self.publish(EventKind::Created, EntityType::Flight, &flight.flight_number, &flight);

        Ok(flight)
    }

    /// Gets a flight by ID, including soft deleted flights
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Flight>, AppError> {
        debug!("Getting flight {}", id);

        Ok(FlightRepository::new(self.db).get_by_id(id).await?)
    }

    /// Gets the active flight with a flight number, served from the cache when possible
    ///
    /// # Returns
    /// - `Ok(Some(Flight))`: The active flight
    /// - `Ok(None)`: No active flight has that number
    /// - `Err(AppError)`: Database error
    pub async fn get_by_number(&self, flight_number: &str) -> Result<Option<Flight>, AppError> {
        if let Some(flight) = self.cache.get(flight_number).await {
            debug!("Flight {} served from cache", flight_number);
            return Ok(Some(flight));
        }

        let generation = self.cache.generation().await;
        let flight = FlightRepository::new(self.db)
            .get_active_by_number(flight_number)
            .await?;

        if let Some(flight) = &flight {
            self.cache.insert_if_current(flight.clone(), generation).await;
        }

        Ok(flight)
    }

    /// Gets a page of active flights ordered by scheduled departure
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Paginated<Flight>, AppError> {
        let (flights, total) = FlightRepository::new(self.db)
            .get_active_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(flights, total, page, per_page))
    }

    /// Updates the operational details of a flight
    ///
    /// The caller passes the version it read. The update is rejected if the flight has
    /// been written since.
    ///
    /// # Returns
    /// - `Ok(Flight)`: The updated flight with its new version
    /// - `Err(AppError::NotFound)`: No flight with that ID
    /// - `Err(AppError::StaleVersion)`: The flight changed since the caller read it
    /// - `Err(AppError::FlightErr)`: Negative booked passenger count
    /// - `Err(AppError)`: Database error
    pub async fn update(&self, params: UpdateFlightParams) -> Result<Flight, AppError> {
        let (id, expected) = (params.id, params.version);
        let flight = self.require(id).await?;

        if flight.version != expected {
            return Err(AppError::StaleVersion { id, expected });
        }

        let flight = params.apply_to(flight)?;
        let flight = self.write(flight).await?;

        info!("Updated flight {} ({})", flight.flight_number, flight.id);
        self.publish(EventKind::Updated, EntityType::Flight, &flight.flight_number, &flight);

        Ok(flight)
    }

    /// Soft deletes a flight, freeing its flight number
    ///
    /// # Returns
    /// - `Ok(())`: Flight deactivated
    /// - `Err(AppError::NotFound)`: No active flight with that ID
    /// - `Err(AppError)`: Database or version error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut flight = self.require(id).await?;

        if !flight.active {
            return Err(AppError::NotFound(format!("Flight {} not found", id)));
        }

        flight.active = false;
        let flight = self.write(flight).await?;

        info!("Deleted flight {} ({})", flight.flight_number, flight.id);
        self.publish(EventKind::Deleted, EntityType::Flight, &flight.flight_number, &flight);

        Ok(())
    }

    /// Applies an operational event to a flight and persists the result
    ///
    /// `SetStatus` stamps missing actual times with the current local time.
    ///
    /// # Returns
    /// - `Ok(Flight)`: The flight after the event
    /// - `Err(AppError::NotFound)`: No flight with that ID
    /// - `Err(AppError::FlightErr)`: Negative delay
    /// - `Err(AppError::StaleVersion)`: The flight was written concurrently
    /// - `Err(AppError)`: Database error
    pub async fn apply_event(&self, id: i32, event: FlightEvent) -> Result<Flight, AppError> {
        let flight = self.require(id).await?;
        let previous = flight.status();

        let flight = lifecycle::apply_event(flight, event, now())?;
        let flight = self.write(flight).await?;

        info!(
            "Applied {} to flight {} ({}): {} -> {}",
            event.name(),
            flight.flight_number,
            flight.id,
            previous,
            flight.status()
        );
        self.publish(
            event_kind(event),
            EntityType::Flight,
            &flight.flight_number,
            &flight,
        );

        Ok(flight)
    }

    /// Adds a leg to a flight
    ///
    /// # Returns
    /// - `Ok(FlightLeg)`: The created leg
    /// - `Err(AppError::FlightErr)`: Invalid leg number or times
    /// - `Err(AppError::NotFound)`: No flight with that ID
    /// - `Err(AppError::Conflict)`: The flight already has a leg with that number
    /// - `Err(AppError)`: Database error
    pub async fn add_leg(&self, params: CreateFlightLegParams) -> Result<FlightLeg, AppError> {
        params.validate()?;

        let flight = self.require(params.flight_id).await?;
        let repo = FlightLegRepository::new(self.db);

        if repo
            .leg_number_exists(params.flight_id, params.leg_number)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Flight {} already has leg {}",
                flight.flight_number, params.leg_number
            )));
        }

        let leg = repo.create(params).await?;

        info!(
            "Added leg {} ({} -> {}) to flight {}",
            leg.leg_number, leg.departure_station_code, leg.arrival_station_code, flight.flight_number
        );
        self.publish(EventKind::Created, EntityType::FlightLeg, &flight.flight_number, &leg);

        Ok(leg)
    }

    /// Gets the legs of a flight ordered by leg number
    pub async fn get_legs(&self, flight_id: i32) -> Result<Vec<FlightLeg>, AppError> {
        Ok(FlightLegRepository::new(self.db)
            .get_by_flight(flight_id)
            .await?)
    }

    /// Applies an operational event to a single leg
    ///
    /// # Returns
    /// - `Ok(FlightLeg)`: The leg after the event
    /// - `Err(AppError::NotFound)`: No leg with that ID
    /// - `Err(AppError::FlightErr)`: Negative delay
    /// - `Err(AppError::StaleVersion)`: The leg was written concurrently
    /// - `Err(AppError)`: Database error
    pub async fn apply_leg_event(&self, leg_id: i32, event: FlightEvent) -> Result<FlightLeg, AppError> {
        let repo = FlightLegRepository::new(self.db);

        let leg = repo
            .get_by_id(leg_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Flight leg {} not found", leg_id)))?;
        let flight = self.require(leg.flight_id).await?;

        let expected = leg.version;
        let leg = lifecycle::apply_event(leg, event, now())?;
        let leg = repo
            .update(leg)
            .await
            .map_err(|e| AppError::from_versioned_write(e, leg_id, expected))?;

        info!(
            "Applied {} to leg {} of flight {}",
            event.name(),
            leg.leg_number,
            flight.flight_number
        );
        self.publish(event_kind(event), EntityType::FlightLeg, &flight.flight_number, &leg);

        Ok(leg)
    }

    async fn require(&self, id: i32) -> Result<Flight, AppError> {
        FlightRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Flight {} not found", id)))
    }

    /// Version-checked write followed by cache invalidation.
    async fn write(&self, flight: Flight) -> Result<Flight, AppError> {
        let (id, expected) = (flight.id, flight.version);

        let flight = FlightRepository::new(self.db)
            .update(flight)
            .await
            .map_err(|e| AppError::from_versioned_write(e, id, expected))?;
        self.cache.invalidate_all().await;

        Ok(flight)
    }

    fn publish<T: Serialize>(&self, kind: EventKind, entity_type: EntityType, key: &str, entity: &T) {
        match DomainEvent::new(kind, entity_type, key, entity) {
            Ok(event) => self.events.publish(event),
            Err(e) => error!("Failed to build {} event for {}: {}", kind, key, e),
        }
    }
}

fn event_kind(event: FlightEvent) -> EventKind {
    match event {
        FlightEvent::Delay(_) => EventKind::Delayed,
        _ => EventKind::StatusChanged,
    }
}

fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}
