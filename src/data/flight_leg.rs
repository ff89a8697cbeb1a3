use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::{
    flight_leg::{CreateFlightLegParams, FlightLeg},
    status::FlightStatus,
};

pub struct FlightLegRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightLegRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new leg in `SCHEDULED` status.
    ///
    /// # Returns
    /// - `Ok(FlightLeg)`: The created leg
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateFlightLegParams) -> Result<FlightLeg, DbErr> {
        let now = Utc::now().naive_utc();

        let entity = entity::flight_leg::ActiveModel {
            flight_id: ActiveValue::Set(params.flight_id),
            leg_number: ActiveValue::Set(params.leg_number),
            departure_station_code: ActiveValue::Set(params.departure_station_code),
            arrival_station_code: ActiveValue::Set(params.arrival_station_code),
            scheduled_departure_time: ActiveValue::Set(params.scheduled_departure_time),
            scheduled_arrival_time: ActiveValue::Set(params.scheduled_arrival_time),
            actual_departure_time: ActiveValue::Set(None),
            actual_arrival_time: ActiveValue::Set(None),
            status: ActiveValue::Set(FlightStatus::Scheduled.as_str().to_string()),
            gate: ActiveValue::Set(params.gate),
            terminal: ActiveValue::Set(params.terminal),
            delay_minutes: ActiveValue::Set(None),
            duration_minutes: ActiveValue::Set(params.duration_minutes),
            distance_km: ActiveValue::Set(params.distance_km),
            ground_time_minutes: ActiveValue::Set(params.ground_time_minutes),
            description: ActiveValue::Set(params.description),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        to_domain(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<FlightLeg>, DbErr> {
        entity::prelude::FlightLeg::find_by_id(id)
            .one(self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    /// Gets every leg of a flight ordered by leg number.
    pub async fn get_by_flight(&self, flight_id: i32) -> Result<Vec<FlightLeg>, DbErr> {
        entity::prelude::FlightLeg::find()
            .filter(entity::flight_leg::Column::FlightId.eq(flight_id))
            .order_by_asc(entity::flight_leg::Column::LegNumber)
            .all(self.db)
            .await?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    /// Checks whether a flight already has a leg with the given number.
    pub async fn leg_number_exists(&self, flight_id: i32, leg_number: i32) -> Result<bool, DbErr> {
        let leg = entity::prelude::FlightLeg::find()
            .filter(entity::flight_leg::Column::FlightId.eq(flight_id))
            .filter(entity::flight_leg::Column::LegNumber.eq(leg_number))
            .one(self.db)
            .await?;

        Ok(leg.is_some())
    }

    /// Writes the operational fields of a leg if its version is still current.
    ///
    /// # Returns
    /// - `Ok(FlightLeg)`: The stored leg with the new version
    /// - `Err(DbErr::RecordNotUpdated)`: Leg missing or version changed since it was read
    /// - `Err(DbErr)`: Other database error
    pub async fn update(&self, leg: FlightLeg) -> Result<FlightLeg, DbErr> {
        let expected_version = leg.version;

        let entity = entity::prelude::FlightLeg::update(entity::flight_leg::ActiveModel {
            id: ActiveValue::Unchanged(leg.id),
            scheduled_departure_time: ActiveValue::Set(leg.state.scheduled_departure_time),
            scheduled_arrival_time: ActiveValue::Set(leg.state.scheduled_arrival_time),
            actual_departure_time: ActiveValue::Set(leg.state.actual_departure_time),
            actual_arrival_time: ActiveValue::Set(leg.state.actual_arrival_time),
            status: ActiveValue::Set(leg.state.status.as_str().to_string()),
            delay_minutes: ActiveValue::Set(leg.state.delay_minutes),
            gate: ActiveValue::Set(leg.gate),
            terminal: ActiveValue::Set(leg.terminal),
            description: ActiveValue::Set(leg.description),
            version: ActiveValue::Set(expected_version + 1),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .validate()?
        .filter(entity::flight_leg::Column::Version.eq(expected_version))
        .exec(self.db)
        .await?;

        to_domain(entity)
    }
}

fn to_domain(entity: entity::flight_leg::Model) -> Result<FlightLeg, DbErr> {
    FlightLeg::from_entity(entity).map_err(|e| DbErr::Custom(e.to_string()))
}
