use sea_orm::DatabaseConnection;
use tracing::{debug, error, info};

use crate::{
    data::station::StationRepository,
    error::AppError,
    event::{DomainEvent, EntityType, EventKind, EventPublisher},
    model::{
        pagination::Paginated,
        station::{CreateStationParams, Station, UpdateStationParams},
    },
};

pub struct StationService<'a> {
    db: &'a DatabaseConnection,
    events: &'a dyn EventPublisher,
}

impl<'a> StationService<'a> {
    pub fn new(db: &'a DatabaseConnection, events: &'a dyn EventPublisher) -> Self {
        Self { db, events }
    }

    /// Creates a station with a unique code and a name unique ignoring case
    ///
    /// # Returns
    /// - `Ok(Station)`: The created, active station
    /// - `Err(AppError::ReferenceErr)`: A field failed validation
    /// - `Err(AppError::Conflict)`: The code or name is already taken
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, params: CreateStationParams) -> Result<Station, AppError> {
        params.validate()?;

        let repo = StationRepository::new(self.db);
        let code = params.station_code.clone();
        let conflict = || format!("Station with code {} already exists", code);

        if repo.code_exists(&code).await? {
            return Err(AppError::Conflict(conflict()));
        }
        if repo.name_exists_ignore_case(&params.station_name).await? {
            return Err(AppError::Conflict(format!(
                "Station with name {} already exists",
                params.station_name
            )));
        }

        let station = repo
            .create(params)
            .await
            .map_err(|e| AppError::from_unique_write(e, conflict))?;

        info!("Created station {} ({})", station.station_code, station.id);
        self.publish(EventKind::Created, &station);

        Ok(station)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Station>, AppError> {
        debug!("Getting station {}", id);

        Ok(StationRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<Station>, AppError> {
        debug!("Getting station by code {}", code);

        Ok(StationRepository::new(self.db).get_by_code(code).await?)
    }

    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Paginated<Station>, AppError> {
        let (stations, total) = StationRepository::new(self.db)
            .get_active_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(stations, total, page, per_page))
    }

    pub async fn get_by_country(&self, country: &str) -> Result<Vec<Station>, AppError> {
        Ok(StationRepository::new(self.db)
            .get_active_by_country(country)
            .await?)
    }

    /// Updates a station's descriptive fields and coordinates
    ///
    /// # Returns
    /// - `Ok(Station)`: The updated station
    /// - `Err(AppError::NotFound)`: No station with that ID
    /// - `Err(AppError::StaleVersion)`: The station changed since `expected_version`
    /// - `Err(AppError::Conflict)`: Another station already uses the new name
    /// - `Err(AppError)`: Validation or database error
    pub async fn update(
        &self,
        id: i32,
        expected_version: i64,
        params: UpdateStationParams,
    ) -> Result<Station, AppError> {
        params.validate()?;

        let repo = StationRepository::new(self.db);
        let station = self.require(id).await?;

        if station.version != expected_version {
            return Err(AppError::StaleVersion {
                id,
                expected: expected_version,
            });
        }

        if let Some(name) = &params.station_name {
            if name.to_lowercase() != station.station_name.to_lowercase()
                && repo.name_exists_ignore_case(name).await?
            {
                return Err(AppError::Conflict(format!(
                    "Station with name {} already exists",
                    name
                )));
            }
        }

        let station = self.write(params.apply_to(station)).await?;

        info!("Updated station {} ({})", station.station_code, station.id);
        self.publish(EventKind::Updated, &station);

        Ok(station)
    }

    pub async fn set_active(&self, id: i32, active: bool) -> Result<Station, AppError> {
        let mut station = self.require(id).await?;

        station.active = active;
        let station = self.write(station).await?;

        info!(
            "{} station {} ({})",
            if active { "Activated" } else { "Deactivated" },
            station.station_code,
            station.id
        );
        self.publish(EventKind::StatusChanged, &station);

        Ok(station)
    }

    /// Soft deletes a station
    ///
    /// # Returns
    /// - `Ok(())`: Station deactivated
    /// - `Err(AppError::NotFound)`: No active station with that ID
    /// - `Err(AppError)`: Database or version error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut station = self.require(id).await?;

        if !station.active {
            return Err(AppError::NotFound(format!("Station {} not found", id)));
        }

        station.active = false;
        let station = self.write(station).await?;

        info!("Deleted station {} ({})", station.station_code, station.id);
        self.publish(EventKind::Deleted, &station);

        Ok(())
    }

    async fn require(&self, id: i32) -> Result<Station, AppError> {
        StationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Station {} not found", id)))
    }

    async fn write(&self, station: Station) -> Result<Station, AppError> {
        let (id, expected) = (station.id, station.version);

        StationRepository::new(self.db)
            .update(station)
            .await
            .map_err(|e| AppError::from_versioned_write(e, id, expected))
    }

    fn publish(&self, kind: EventKind, station: &Station) {
        match DomainEvent::new(kind, EntityType::Station, &station.station_code, station) {
            Ok(event) => self.events.publish(event),
            Err(e) => error!(
                "Failed to build {} event for station {}: {}",
                kind, station.station_code, e
            ),
        }
    }
}
