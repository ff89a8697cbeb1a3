//! Segments of multi-leg flights.
//!
//! Legs carry the same operational state as a flight and go through the same
//! lifecycle rules.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{
    error::{flight::FlightError, internal::InternalError},
    model::lifecycle::{Lifecycle, OperationalState},
};

/// A persisted leg of a flight, ordered by `leg_number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightLeg {
    pub id: i32,
    /// Owning flight. Legs are removed with their flight.
    pub flight_id: i32,
    /// 1-based position within the flight.
    pub leg_number: i32,
    pub departure_station_code: String,
    pub arrival_station_code: String,
    pub state: OperationalState,
    pub gate: Option<String>,
    pub terminal: Option<String>,
    pub duration_minutes: Option<i32>,
    pub distance_km: Option<i32>,
    /// Turnaround time at the arrival station before the next leg.
    pub ground_time_minutes: Option<i32>,
    pub description: Option<String>,
    pub version: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl FlightLeg {
    pub fn from_entity(entity: entity::flight_leg::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            flight_id: entity.flight_id,
            leg_number: entity.leg_number,
            departure_station_code: entity.departure_station_code,
            arrival_station_code: entity.arrival_station_code,
            state: OperationalState {
                status: entity.status.parse()?,
                scheduled_departure_time: entity.scheduled_departure_time,
                scheduled_arrival_time: entity.scheduled_arrival_time,
                actual_departure_time: entity.actual_departure_time,
                actual_arrival_time: entity.actual_arrival_time,
                delay_minutes: entity.delay_minutes,
            },
            gate: entity.gate,
            terminal: entity.terminal,
            duration_minutes: entity.duration_minutes,
            distance_km: entity.distance_km,
            ground_time_minutes: entity.ground_time_minutes,
            description: entity.description,
            version: entity.version,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl Lifecycle for FlightLeg {
    fn state(&self) -> &OperationalState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut OperationalState {
        &mut self.state
    }
}

/// Parameters for adding a leg to a flight.
#[derive(Debug, Clone)]
pub struct CreateFlightLegParams {
    pub flight_id: i32,
    pub leg_number: i32,
    pub departure_station_code: String,
    pub arrival_station_code: String,
    pub scheduled_departure_time: NaiveDateTime,
    pub scheduled_arrival_time: NaiveDateTime,
    pub gate: Option<String>,
    pub terminal: Option<String>,
    pub duration_minutes: Option<i32>,
    pub distance_km: Option<i32>,
    pub ground_time_minutes: Option<i32>,
    pub description: Option<String>,
}

impl CreateFlightLegParams {
    /// Rejects a leg number below 1 or an arrival that is not after departure.
    pub fn validate(&self) -> Result<(), FlightError> {
        if self.leg_number < 1 {
            return Err(FlightError::InvalidArgument(format!(
                "Leg number must be at least 1, got {}",
                self.leg_number
            )));
        }

        if self.scheduled_arrival_time <= self.scheduled_departure_time {
            return Err(FlightError::InvalidArgument(format!(
                "Leg {} arrival {} must be after departure {}",
                self.leg_number, self.scheduled_arrival_time, self.scheduled_departure_time
            )));
        }

        Ok(())
    }
}
