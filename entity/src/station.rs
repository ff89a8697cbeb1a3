use sea_orm::entity::prelude::*;

/// An airport served by the network, keyed by its three letter code.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "station")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub station_code: String,
    pub station_name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub timezone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Elevation in feet.
    pub altitude: Option<i32>,
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
