use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_leg")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub flight_id: i32,
    pub leg_number: i32,
    pub departure_station_code: String,
    pub arrival_station_code: String,
    pub scheduled_departure_time: DateTime,
    pub scheduled_arrival_time: DateTime,
    pub actual_departure_time: Option<DateTime>,
    pub actual_arrival_time: Option<DateTime>,
    pub status: String,
    pub gate: Option<String>,
    pub terminal: Option<String>,
    pub delay_minutes: Option<i32>,
    pub duration_minutes: Option<i32>,
    pub distance_km: Option<i32>,
    pub ground_time_minutes: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub version: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::FlightId",
        to = "super::flight::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Flight,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
