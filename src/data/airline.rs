use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::airline::{Airline, CreateAirlineParams};

pub struct AirlineRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirlineRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active airline.
    ///
    /// # Returns
    /// - `Ok(Airline)`: The created airline
    /// - `Err(DbErr)`: Database error, including a unique violation on the airline code
    pub async fn create(&self, params: CreateAirlineParams) -> Result<Airline, DbErr> {
        let now = Utc::now().naive_utc();

        let entity = entity::airline::ActiveModel {
            airline_code: ActiveValue::Set(params.airline_code),
            airline_name: ActiveValue::Set(params.airline_name),
            description: ActiveValue::Set(params.description),
            country: ActiveValue::Set(params.country),
            city: ActiveValue::Set(params.city),
            active: ActiveValue::Set(true),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Airline::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Airline>, DbErr> {
        Ok(entity::prelude::Airline::find_by_id(id)
            .one(self.db)
            .await?
            .map(Airline::from_entity))
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<Airline>, DbErr> {
        Ok(entity::prelude::Airline::find()
            .filter(entity::airline::Column::AirlineCode.eq(code))
            .one(self.db)
            .await?
            .map(Airline::from_entity))
    }

    /// Whether any airline, active or not, holds `code`.
    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Airline::find()
            .filter(entity::airline::Column::AirlineCode.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether any airline holds `name`, compared case-insensitively.
    pub async fn name_exists_ignore_case(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Airline::find()
            .filter(sea_orm::sea_query::ExprTrait::eq(
                Func::lower(Expr::col(entity::airline::Column::AirlineName)),
                name.to_lowercase(),
            ))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets paginated active airlines ordered by code.
    ///
    /// # Returns
    /// - `Ok((airlines, total))`: Airlines for the page and total active count
    /// - `Err(DbErr)`: Database error
    pub async fn get_active_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Airline>, u64), DbErr> {
        let paginator = entity::prelude::Airline::find()
            .filter(entity::airline::Column::Active.eq(true))
            .order_by_asc(entity::airline::Column::AirlineCode)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let airlines = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Airline::from_entity)
            .collect();

        Ok((airlines, total))
    }

    /// Writes every mutable field if the stored version still equals `airline.version`.
    ///
    /// # Returns
    /// - `Ok(Airline)`: The stored airline with its version incremented
    /// - `Err(DbErr::RecordNotUpdated)`: Row missing or version moved on
    /// - `Err(DbErr)`: Other database error
    pub async fn update(&self, airline: Airline) -> Result<Airline, DbErr> {
        let expected_version = airline.version;

        let entity = entity::prelude::Airline::update(entity::airline::ActiveModel {
            id: ActiveValue::Unchanged(airline.id),
            airline_code: ActiveValue::NotSet,
            airline_name: ActiveValue::Set(airline.airline_name),
            description: ActiveValue::Set(airline.description),
            country: ActiveValue::Set(airline.country),
            city: ActiveValue::Set(airline.city),
            active: ActiveValue::Set(airline.active),
            version: ActiveValue::Set(expected_version + 1),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .validate()?
        .filter(entity::airline::Column::Version.eq(expected_version))
        .exec(self.db)
        .await?;

        Ok(Airline::from_entity(entity))
    }
}
