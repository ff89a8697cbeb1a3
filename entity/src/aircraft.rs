use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aircraft")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub registration: String,
    pub aircraft_type: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub capacity: Option<i32>,
    pub max_range: Option<i32>,
    pub cruise_speed: Option<i32>,
    #[sea_orm(indexed)]
    pub airline_id: i32,
    #[sea_orm(indexed)]
    pub active: bool,
    pub version: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::airline::Entity",
        from = "Column::AirlineId",
        to = "super::airline::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Airline,
}

impl Related<super::airline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airline.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
