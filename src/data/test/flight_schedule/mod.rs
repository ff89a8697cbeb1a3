use crate::{
    data::flight_schedule::FlightScheduleRepository,
    model::{
        flight_schedule::{CreateFlightScheduleParams, OperatingDays},
        status::FlightType,
    },
};
use chrono::{NaiveTime, Weekday};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, fixture};

mod create;
mod get_active_paginated;
