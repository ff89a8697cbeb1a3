use sea_orm::DatabaseConnection;
use tracing::{debug, error, info};

use crate::{
    data::airline::AirlineRepository,
    error::AppError,
    event::{DomainEvent, EntityType, EventKind, EventPublisher},
    model::{
        airline::{Airline, CreateAirlineParams, UpdateAirlineParams},
        pagination::Paginated,
    },
};

pub struct AirlineService<'a> {
    db: &'a DatabaseConnection,
    events: &'a dyn EventPublisher,
}

impl<'a> AirlineService<'a> {
    pub fn new(db: &'a DatabaseConnection, events: &'a dyn EventPublisher) -> Self {
        Self { db, events }
    }

    /// Creates an airline with a unique code and a name unique ignoring case
    ///
    /// # Returns
    /// - `Ok(Airline)`: The created, active airline
    /// - `Err(AppError::ReferenceErr)`: A field failed validation
    /// - `Err(AppError::Conflict)`: The code or name is already taken
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, params: CreateAirlineParams) -> Result<Airline, AppError> {
        params.validate()?;

        let repo = AirlineRepository::new(self.db);
        let code = params.airline_code.clone();
        let conflict = || format!("Airline with code {} already exists", code);

        if repo.code_exists(&code).await? {
            return Err(AppError::Conflict(conflict()));
        }
        if repo.name_exists_ignore_case(&params.airline_name).await? {
            return Err(AppError::Conflict(format!(
                "Airline with name {} already exists",
                params.airline_name
            )));
        }

        let airline = repo
            .create(params)
            .await
            .map_err(|e| AppError::from_unique_write(e, conflict))?;

        info!("Created airline {} ({})", airline.airline_code, airline.id);
        self.publish(EventKind::Created, &airline);

        Ok(airline)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Airline>, AppError> {
        debug!("Getting airline {}", id);

        Ok(AirlineRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<Airline>, AppError> {
        debug!("Getting airline by code {}", code);

        Ok(AirlineRepository::new(self.db).get_by_code(code).await?)
    }

    /// Gets a page of active airlines ordered by code
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Paginated<Airline>, AppError> {
        let (airlines, total) = AirlineRepository::new(self.db)
            .get_active_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(airlines, total, page, per_page))
    }

    /// Updates the descriptive fields of the airline with `code`
    ///
    /// A new name is checked for uniqueness only when it differs from the current
    /// name ignoring case.
    ///
    /// # Returns
    /// - `Ok(Airline)`: The updated airline
    /// - `Err(AppError::NotFound)`: No airline with that code
    /// - `Err(AppError::StaleVersion)`: The airline changed since `expected_version`
    /// - `Err(AppError::Conflict)`: Another airline already uses the new name
    /// - `Err(AppError)`: Validation or database error
    pub async fn update(
        &self,
        code: &str,
        expected_version: i64,
        params: UpdateAirlineParams,
    ) -> Result<Airline, AppError> {
        params.validate()?;

        let repo = AirlineRepository::new(self.db);
        let airline = repo
            .get_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Airline {} not found", code)))?;

        if airline.version != expected_version {
            return Err(AppError::StaleVersion {
                id: airline.id,
                expected: expected_version,
            });
        }

        if let Some(name) = &params.airline_name {
            if name.to_lowercase() != airline.airline_name.to_lowercase()
                && repo.name_exists_ignore_case(name).await?
            {
                return Err(AppError::Conflict(format!(
                    "Airline with name {} already exists",
                    name
                )));
            }
        }

        let airline = self.write(params.apply_to(airline)).await?;

        info!("Updated airline {} ({})", airline.airline_code, airline.id);
        self.publish(EventKind::Updated, &airline);

        Ok(airline)
    }

    /// Activates or deactivates an airline
    ///
    /// # Returns
    /// - `Ok(Airline)`: The updated airline
    /// - `Err(AppError::NotFound)`: No airline with that ID
    /// - `Err(AppError)`: Database or version error
    pub async fn set_active(&self, id: i32, active: bool) -> Result<Airline, AppError> {
        let mut airline = AirlineRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Airline {} not found", id)))?;

        airline.active = active;
        let airline = self.write(airline).await?;

        info!(
            "{} airline {} ({})",
            if active { "Activated" } else { "Deactivated" },
            airline.airline_code,
            airline.id
        );
        self.publish(EventKind::StatusChanged, &airline);

        Ok(airline)
    }

    /// Soft deletes the airline with `code`. The row and its code are kept.
    ///
    /// # Returns
    /// - `Ok(())`: Airline deactivated
    /// - `Err(AppError::NotFound)`: No active airline with that code
    /// - `Err(AppError)`: Database or version error
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        let mut airline = AirlineRepository::new(self.db)
            .get_by_code(code)
            .await?
            .filter(|airline| airline.active)
            .ok_or_else(|| AppError::NotFound(format!("Airline {} not found", code)))?;

        airline.active = false;
        let airline = self.write(airline).await?;

        info!("Deleted airline {} ({})", airline.airline_code, airline.id);
        self.publish(EventKind::Deleted, &airline);

        Ok(())
    }

    async fn write(&self, airline: Airline) -> Result<Airline, AppError> {
        let (id, expected) = (airline.id, airline.version);

        AirlineRepository::new(self.db)
            .update(airline)
            .await
            .map_err(|e| AppError::from_versioned_write(e, id, expected))
    }

    fn publish(&self, kind: EventKind, airline: &Airline) {
        match DomainEvent::new(kind, EntityType::Airline, &airline.airline_code, airline) {
            Ok(event) => self.events.publish(event),
            Err(e) => error!(
                "Failed to build {} event for airline {}: {}",
                kind, airline.airline_code, e
            ),
        }
    }
}
