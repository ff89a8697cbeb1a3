use sea_orm::DatabaseConnection;
use tracing::{debug, error, info};

use crate::{
    data::{aircraft::AircraftRepository, airline::AirlineRepository},
    error::AppError,
    event::{DomainEvent, EntityType, EventKind, EventPublisher},
    model::{
        aircraft::{Aircraft, CreateAircraftParams, UpdateAircraftParams},
        pagination::Paginated,
    },
};

pub struct AircraftService<'a> {
    db: &'a DatabaseConnection,
    events: &'a dyn EventPublisher,
}

impl<'a> AircraftService<'a> {
    pub fn new(db: &'a DatabaseConnection, events: &'a dyn EventPublisher) -> Self {
        Self { db, events }
    }

    /// Registers an aircraft with an existing airline
    ///
    /// # Returns
    /// - `Ok(Aircraft)`: The created, active aircraft
    /// - `Err(AppError::ReferenceErr)`: A field failed validation
    /// - `Err(AppError::NotFound)`: No airline with the given ID
    /// - `Err(AppError::Conflict)`: The registration is already taken
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, params: CreateAircraftParams) -> Result<Aircraft, AppError> {
        params.validate()?;

        let repo = AircraftRepository::new(self.db);
        let registration = params.registration.clone();
        let conflict = || format!("Aircraft with registration {} already exists", registration);

        if repo.registration_exists(&registration).await? {
            return Err(AppError::Conflict(conflict()));
        }
        self.require_airline(params.airline_id).await?;

        let aircraft = repo
            .create(params)
            .await
            .map_err(|e| AppError::from_unique_write(e, conflict))?;

        info!(
            "Created aircraft {} ({}) for airline {}",
            aircraft.registration, aircraft.id, aircraft.airline_id
        );
        self.publish(EventKind::Created, &aircraft);

        Ok(aircraft)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Aircraft>, AppError> {
        debug!("Getting aircraft {}", id);

        Ok(AircraftRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_by_registration(&self, registration: &str) -> Result<Option<Aircraft>, AppError> {
        debug!("Getting aircraft by registration {}", registration);

        Ok(AircraftRepository::new(self.db)
            .get_by_registration(registration)
            .await?)
    }

    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Paginated<Aircraft>, AppError> {
        let (aircraft, total) = AircraftRepository::new(self.db)
            .get_active_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(aircraft, total, page, per_page))
    }

    /// Active aircraft of an airline ordered by registration
    ///
    /// # Returns
    /// - `Ok(Vec<Aircraft>)`: The fleet, empty when the airline has no active aircraft
    /// - `Err(AppError::NotFound)`: No airline with that ID
    /// - `Err(AppError)`: Database error
    pub async fn get_by_airline(&self, airline_id: i32) -> Result<Vec<Aircraft>, AppError> {
        self.require_airline(airline_id).await?;

        Ok(AircraftRepository::new(self.db)
            .get_active_by_airline(airline_id)
            .await?)
    }

    /// Updates an aircraft, optionally transferring it to another airline
    ///
    /// # Returns
    /// - `Ok(Aircraft)`: The updated aircraft
    /// - `Err(AppError::NotFound)`: No aircraft with that ID, or the new airline does not exist
    /// - `Err(AppError::StaleVersion)`: The aircraft changed since `expected_version`
    /// - `Err(AppError)`: Validation or database error
    pub async fn update(
        &self,
        id: i32,
        expected_version: i64,
        params: UpdateAircraftParams,
    ) -> Result<Aircraft, AppError> {
        params.validate()?;

        let aircraft = self.require(id).await?;

        if aircraft.version != expected_version {
            return Err(AppError::StaleVersion {
                id,
                expected: expected_version,
            });
        }

        if let Some(airline_id) = params.airline_id.filter(|&new| new != aircraft.airline_id) {
            self.require_airline(airline_id).await?;
        }

        let aircraft = self.write(params.apply_to(aircraft)).await?;

        info!("Updated aircraft {} ({})", aircraft.registration, aircraft.id);
        self.publish(EventKind::Updated, &aircraft);

        Ok(aircraft)
    }

    pub async fn set_active(&self, id: i32, active: bool) -> Result<Aircraft, AppError> {
        let mut aircraft = self.require(id).await?;

        aircraft.active = active;
        let aircraft = self.write(aircraft).await?;

        info!(
            "{} aircraft {} ({})",
            if active { "Activated" } else { "Deactivated" },
            aircraft.registration,
            aircraft.id
        );
        self.publish(EventKind::StatusChanged, &aircraft);

        Ok(aircraft)
    }

    /// Soft deletes an aircraft
    ///
    /// # Returns
    /// - `Ok(())`: Aircraft deactivated
    /// - `Err(AppError::NotFound)`: No active aircraft with that ID
    /// - `Err(AppError)`: Database or version error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut aircraft = self.require(id).await?;

        if !aircraft.active {
            return Err(AppError::NotFound(format!("Aircraft {} not found", id)));
        }

        aircraft.active = false;
        let aircraft = self.write(aircraft).await?;

        info!("Deleted aircraft {} ({})", aircraft.registration, aircraft.id);
        self.publish(EventKind::Deleted, &aircraft);

        Ok(())
    }

    async fn require(&self, id: i32) -> Result<Aircraft, AppError> {
        AircraftRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Aircraft {} not found", id)))
    }

    async fn require_airline(&self, airline_id: i32) -> Result<(), AppError> {
        AirlineRepository::new(self.db)
            .get_by_id(airline_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Airline {} not found", airline_id)))
    }

    async fn write(&self, aircraft: Aircraft) -> Result<Aircraft, AppError> {
        let (id, expected) = (aircraft.id, aircraft.version);

        AircraftRepository::new(self.db)
            .update(aircraft)
            .await
            .map_err(|e| AppError::from_versioned_write(e, id, expected))
    }

    fn publish(&self, kind: EventKind, aircraft: &Aircraft) {
        match DomainEvent::new(kind, EntityType::Aircraft, &aircraft.registration, aircraft) {
            Ok(event) => self.events.publish(event),
            Err(e) => error!(
                "Failed to build {} event for aircraft {}: {}",
                kind, aircraft.registration, e
            ),
        }
    }
}
