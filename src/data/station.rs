use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::station::{CreateStationParams, Station};

pub struct StationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active station.
    ///
    /// # Returns
    /// - `Ok(Station)`: The created station
    /// - `Err(DbErr)`: Database error, including a unique violation on the station code
    pub async fn create(&self, params: CreateStationParams) -> Result<Station, DbErr> {
        let now = Utc::now().naive_utc();

        let entity = entity::station::ActiveModel {
            station_code: ActiveValue::Set(params.station_code),
            station_name: ActiveValue::Set(params.station_name),
            city: ActiveValue::Set(params.city),
            country: ActiveValue::Set(params.country),
            address: ActiveValue::Set(params.address),
            timezone: ActiveValue::Set(params.timezone),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            altitude: ActiveValue::Set(params.altitude),
            description: ActiveValue::Set(params.description),
            active: ActiveValue::Set(true),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Station::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Station>, DbErr> {
        Ok(entity::prelude::Station::find_by_id(id)
            .one(self.db)
            .await?
            .map(Station::from_entity))
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<Station>, DbErr> {
        Ok(entity::prelude::Station::find()
            .filter(entity::station::Column::StationCode.eq(code))
            .one(self.db)
            .await?
            .map(Station::from_entity))
    }

    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Station::find()
            .filter(entity::station::Column::StationCode.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether any station holds `name`, compared case-insensitively.
    pub async fn name_exists_ignore_case(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Station::find()
            .filter(sea_orm::sea_query::ExprTrait::eq(
                Func::lower(Expr::col(entity::station::Column::StationName)),
                name.to_lowercase(),
            ))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets paginated active stations ordered by code.
    ///
    /// # Returns
    /// - `Ok((stations, total))`: Stations for the page and total active count
    /// - `Err(DbErr)`: Database error
    pub async fn get_active_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Station>, u64), DbErr> {
        let paginator = entity::prelude::Station::find()
            .filter(entity::station::Column::Active.eq(true))
            .order_by_asc(entity::station::Column::StationCode)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let stations = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Station::from_entity)
            .collect();

        Ok((stations, total))
    }

    /// Active stations in `country`, ordered by code.
    pub async fn get_active_by_country(&self, country: &str) -> Result<Vec<Station>, DbErr> {
        Ok(entity::prelude::Station::find()
            .filter(entity::station::Column::Active.eq(true))
            .filter(entity::station::Column::Country.eq(country))
            .order_by_asc(entity::station::Column::StationCode)
            .all(self.db)
            .await?
            .into_iter()
            .map(Station::from_entity)
            .collect())
    }

    /// Writes every mutable field if the stored version still equals `station.version`.
    ///
    /// # Returns
    /// - `Ok(Station)`: The stored station with its version incremented
    /// - `Err(DbErr::RecordNotUpdated)`: Row missing or version moved on
    /// - `Err(DbErr)`: Other database error
    pub async fn update(&self, station: Station) -> Result<Station, DbErr> {
        let expected_version = station.version;

        let entity = entity::prelude::Station::update(entity::station::ActiveModel {
            id: ActiveValue::Unchanged(station.id),
            station_code: ActiveValue::NotSet,
            station_name: ActiveValue::Set(station.station_name),
            city: ActiveValue::Set(station.city),
            country: ActiveValue::Set(station.country),
            address: ActiveValue::Set(station.address),
            timezone: ActiveValue::Set(station.timezone),
            latitude: ActiveValue::Set(station.latitude),
            longitude: ActiveValue::Set(station.longitude),
            altitude: ActiveValue::Set(station.altitude),
            description: ActiveValue::Set(station.description),
            active: ActiveValue::Set(station.active),
            version: ActiveValue::Set(expected_version + 1),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .validate()?
        .filter(entity::station::Column::Version.eq(expected_version))
        .exec(self.db)
        .await?;

        Ok(Station::from_entity(entity))
    }
}
