use crate::{
    data::station::StationRepository,
    model::station::{CreateStationParams, Station},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::station::StationFactory};

mod create;
mod get_active_by_country;
