use sea_orm::entity::prelude::*;

/// A recurring flight definition.
///
/// `operating_days` stores upper-case weekday names separated by commas
/// (`MONDAY,WEDNESDAY,FRIDAY`); NULL or empty means the schedule operates daily.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub flight_number: String,
    pub airline_code: String,
    pub aircraft_registration: Option<String>,
    pub departure_station_code: String,
    pub arrival_station_code: String,
    pub departure_time: Time,
    pub arrival_time: Time,
    pub flight_type: String,
    pub operating_days: Option<String>,
    pub effective_from: Date,
    pub effective_to: Date,
    pub duration_minutes: Option<i32>,
    pub distance_km: Option<i32>,
    pub passenger_capacity: Option<i32>,
    pub terminal: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(indexed)]
    pub active: bool,
    pub version: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
