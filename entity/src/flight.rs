use sea_orm::entity::prelude::*;

/// A concrete flight occurrence, either created ad hoc or generated from a schedule.
///
/// `status` and `flight_type` hold the upper-case enum names (`SCHEDULED`,
/// `INTERNATIONAL`, ...). `version` is the optimistic locking counter and is only
/// ever incremented by the repository.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub flight_number: String,
    #[sea_orm(indexed)]
    pub airline_code: String,
    pub aircraft_registration: Option<String>,
    pub departure_station_code: String,
    pub arrival_station_code: String,
    pub flight_date: DateTime,
    #[sea_orm(indexed)]
    pub scheduled_departure_time: DateTime,
    pub scheduled_arrival_time: DateTime,
    pub actual_departure_time: Option<DateTime>,
    pub actual_arrival_time: Option<DateTime>,
    pub status: String,
    pub flight_type: String,
    pub gate: Option<String>,
    pub terminal: Option<String>,
    pub delay_minutes: Option<i32>,
    pub duration_minutes: Option<i32>,
    pub distance_km: Option<i32>,
    pub passenger_capacity: Option<i32>,
    pub booked_passengers: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub active: bool,
    pub version: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flight_leg::Entity")]
    FlightLeg,
}

impl Related<super::flight_leg::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightLeg.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Partial unique index allowing one active flight per flight number.
///
/// The derive cannot express a filtered index, so it is created from raw SQL right
/// after the table. The syntax is shared by SQLite and PostgreSQL.
pub const ACTIVE_FLIGHT_NUMBER_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
    idx_flight_active_flight_number ON flight (flight_number) WHERE active";
