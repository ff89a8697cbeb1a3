use sea_orm::entity::prelude::*;

/// Archived copy of a published domain event.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub event_type: String,
    pub source_service: String,
    pub entity_type: String,
    #[sea_orm(indexed)]
    pub entity_id: String,
    #[sea_orm(indexed)]
    pub event_timestamp: DateTime,
    #[sea_orm(column_type = "Text", nullable)]
    pub event_data: Option<String>,
    pub correlation_id: Option<String>,
    pub user_id: Option<String>,
    pub archived_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
