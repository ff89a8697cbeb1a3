use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::aircraft::{Aircraft, CreateAircraftParams};

pub struct AircraftRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active aircraft.
    ///
    /// # Returns
    /// - `Ok(Aircraft)`: The created aircraft
    /// - `Err(DbErr)`: Database error, including a unique violation on the registration
    ///   or a foreign key violation on the airline
    pub async fn create(&self, params: CreateAircraftParams) -> Result<Aircraft, DbErr> {
        let now = Utc::now().naive_utc();

        let entity = entity::aircraft::ActiveModel {
            registration: ActiveValue::Set(params.registration),
            aircraft_type: ActiveValue::Set(params.aircraft_type),
            model: ActiveValue::Set(params.model),
            manufacturer: ActiveValue::Set(params.manufacturer),
            capacity: ActiveValue::Set(params.capacity),
            max_range: ActiveValue::Set(params.max_range),
            cruise_speed: ActiveValue::Set(params.cruise_speed),
            airline_id: ActiveValue::Set(params.airline_id),
            active: ActiveValue::Set(true),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Aircraft::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Aircraft>, DbErr> {
        Ok(entity::prelude::Aircraft::find_by_id(id)
            .one(self.db)
            .await?
            .map(Aircraft::from_entity))
    }

    pub async fn get_by_registration(&self, registration: &str) -> Result<Option<Aircraft>, DbErr> {
        Ok(entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::Registration.eq(registration))
            .one(self.db)
            .await?
            .map(Aircraft::from_entity))
    }

    pub async fn registration_exists(&self, registration: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::Registration.eq(registration))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets paginated active aircraft ordered by registration.
    ///
    /// # Returns
    /// - `Ok((aircraft, total))`: Aircraft for the page and total active count
    /// - `Err(DbErr)`: Database error
    pub async fn get_active_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Aircraft>, u64), DbErr> {
        let paginator = entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::Active.eq(true))
            .order_by_asc(entity::aircraft::Column::Registration)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let aircraft = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Aircraft::from_entity)
            .collect();

        Ok((aircraft, total))
    }

    /// Active aircraft of one airline, ordered by registration.
    pub async fn get_active_by_airline(&self, airline_id: i32) -> Result<Vec<Aircraft>, DbErr> {
        Ok(entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::AirlineId.eq(airline_id))
            .filter(entity::aircraft::Column::Active.eq(true))
            .order_by_asc(entity::aircraft::Column::Registration)
            .all(self.db)
            .await?
            .into_iter()
            .map(Aircraft::from_entity)
            .collect())
    }

    /// Writes every mutable field if the stored version still equals `aircraft.version`.
    ///
    /// # Returns
    /// - `Ok(Aircraft)`: The stored aircraft with its version incremented
    /// - `Err(DbErr::RecordNotUpdated)`: Row missing or version moved on
    /// - `Err(DbErr)`: Other database error
    pub async fn update(&self, aircraft: Aircraft) -> Result<Aircraft, DbErr> {
        let expected_version = aircraft.version;

        let entity = entity::prelude::Aircraft::update(entity::aircraft::ActiveModel {
            id: ActiveValue::Unchanged(aircraft.id),
            registration: ActiveValue::NotSet,
            aircraft_type: ActiveValue::Set(aircraft.aircraft_type),
            model: ActiveValue::Set(aircraft.model),
            manufacturer: ActiveValue::Set(aircraft.manufacturer),
            capacity: ActiveValue::Set(aircraft.capacity),
            max_range: ActiveValue::Set(aircraft.max_range),
            cruise_speed: ActiveValue::Set(aircraft.cruise_speed),
            airline_id: ActiveValue::Set(aircraft.airline_id),
            active: ActiveValue::Set(aircraft.active),
            version: ActiveValue::Set(expected_version + 1),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .validate()?
        .filter(entity::aircraft::Column::Version.eq(expected_version))
        .exec(self.db)
        .await?;

        Ok(Aircraft::from_entity(entity))
    }
}
