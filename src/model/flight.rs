//! Domain models for flight instances.
//!
//! `Flight` is the persisted flight converted from its entity at the repository
//! boundary. `NewFlight` is an unsaved flight, produced either by the schedule
//! generator or from `CreateFlightParams` for an ad-hoc flight.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{
    error::{flight::FlightError, internal::InternalError},
    model::{
        lifecycle::{Lifecycle, OperationalState},
        status::{FlightStatus, FlightType},
    },
};

/// A persisted flight instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    /// Unique identifier for the flight.
    pub id: i32,
    /// Flight number, unique among active flights (e.g. `TK123`).
    pub flight_number: String,
    /// IATA/ICAO airline code.
    pub airline_code: String,
    /// Registration of the assigned aircraft, if one is assigned.
    pub aircraft_registration: Option<String>,
    pub departure_station_code: String,
    pub arrival_station_code: String,
    /// Date of the flight, carried as the scheduled departure datetime.
    pub flight_date: NaiveDateTime,
    /// Status, scheduled/actual times and delay.
    pub state: OperationalState,
    pub flight_type: FlightType,
    pub gate: Option<String>,
    pub terminal: Option<String>,
    pub duration_minutes: Option<i32>,
    pub distance_km: Option<i32>,
    pub passenger_capacity: Option<i32>,
    pub booked_passengers: Option<i32>,
    pub description: Option<String>,
    /// False once the flight has been soft deleted.
    pub active: bool,
    /// Optimistic locking counter, managed by the repository.
    pub version: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Flight {
    /// Converts an entity model to a flight domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Flight)` - The converted flight
    /// - `Err(InternalError::UnknownEnumValue)` - Stored status or type is not recognized
    pub fn from_entity(entity: entity::flight::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            flight_number: entity.flight_number,
            airline_code: entity.airline_code,
            aircraft_registration: entity.aircraft_registration,
            departure_station_code: entity.departure_station_code,
            arrival_station_code: entity.arrival_station_code,
            flight_date: entity.flight_date,
            state: OperationalState {
                status: entity.status.parse()?,
                scheduled_departure_time: entity.scheduled_departure_time,
                scheduled_arrival_time: entity.scheduled_arrival_time,
                actual_departure_time: entity.actual_departure_time,
                actual_arrival_time: entity.actual_arrival_time,
                delay_minutes: entity.delay_minutes,
            },
            flight_type: entity.flight_type.parse()?,
            gate: entity.gate,
            terminal: entity.terminal,
            duration_minutes: entity.duration_minutes,
            distance_km: entity.distance_km,
            passenger_capacity: entity.passenger_capacity,
            booked_passengers: entity.booked_passengers,
            description: entity.description,
            active: entity.active,
            version: entity.version,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn status(&self) -> FlightStatus {
        self.state.status
    }

    /// Booked passengers as a percentage of capacity.
    ///
    /// `None` when capacity is missing or zero, or when no booking count is known.
    pub fn load_factor(&self) -> Option<f64> {
        load_factor(self.passenger_capacity, self.booked_passengers)
    }
}

impl Lifecycle for Flight {
    fn state(&self) -> &OperationalState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut OperationalState {
        &mut self.state
    }
}

/// Computes `booked / capacity * 100`.
pub fn load_factor(capacity: Option<i32>, booked: Option<i32>) -> Option<f64> {
    match (capacity, booked) {
        (Some(capacity), Some(booked)) if capacity != 0 => {
            Some(f64::from(booked) / f64::from(capacity) * 100.0)
        }
        _ => None,
    }
}

/// A flight that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFlight {
    pub flight_number: String,
    pub airline_code: String,
    pub aircraft_registration: Option<String>,
    pub departure_station_code: String,
    pub arrival_station_code: String,
    pub flight_date: NaiveDateTime,
    pub state: OperationalState,
    pub flight_type: FlightType,
    pub gate: Option<String>,
    pub terminal: Option<String>,
    pub duration_minutes: Option<i32>,
    pub distance_km: Option<i32>,
    pub passenger_capacity: Option<i32>,
    pub description: Option<String>,
    pub active: bool,
}

/// Parameters for creating an ad-hoc flight that does not come from a schedule.
#[derive(Debug, Clone)]
pub struct CreateFlightParams {
    pub flight_number: String,
    pub airline_code: String,
    pub aircraft_registration: Option<String>,
    pub departure_station_code: String,
    pub arrival_station_code: String,
    pub flight_date: NaiveDateTime,
    pub scheduled_departure_time: NaiveDateTime,
    pub scheduled_arrival_time: NaiveDateTime,
    pub flight_type: FlightType,
    pub gate: Option<String>,
    pub terminal: Option<String>,
    pub duration_minutes: Option<i32>,
    pub distance_km: Option<i32>,
    pub passenger_capacity: Option<i32>,
    pub description: Option<String>,
}

impl CreateFlightParams {
    /// Validates the parameters and builds a `SCHEDULED` flight.
    ///
    /// # Returns
    /// - `Ok(NewFlight)` - Active flight in `SCHEDULED` status
    /// - `Err(FlightError::InvalidArgument)` - Arrival is not after departure
    pub fn into_new_flight(self) -> Result<NewFlight, FlightError> {
        if self.scheduled_arrival_time <= self.scheduled_departure_time {
            return Err(FlightError::InvalidArgument(format!(
                "Scheduled arrival {} must be after scheduled departure {}",
                self.scheduled_arrival_time, self.scheduled_departure_time
            )));
        }

        Ok(NewFlight {
            flight_number: self.flight_number,
            airline_code: self.airline_code,
            aircraft_registration: self.aircraft_registration,
            departure_station_code: self.departure_station_code,
            arrival_station_code: self.arrival_station_code,
            flight_date: self.flight_date,
            state: OperationalState::scheduled(
                self.scheduled_departure_time,
                self.scheduled_arrival_time,
            ),
            flight_type: self.flight_type,
            gate: self.gate,
            terminal: self.terminal,
            duration_minutes: self.duration_minutes,
            distance_km: self.distance_km,
            passenger_capacity: self.passenger_capacity,
            description: self.description,
            active: true,
        })
    }
}

/// Parameters for updating the operational details of a flight.
///
/// Only provided fields are updated. Route and schedule fields cannot be changed
/// here; schedule shifts go through the delay event.
#[derive(Debug, Clone, Default)]
pub struct UpdateFlightParams {
    /// ID of the flight to update.
    pub id: i32,
    /// Version read by the caller; the update fails if the stored version differs.
    pub version: i64,
    pub gate: Option<String>,
    pub terminal: Option<String>,
    pub actual_departure_time: Option<NaiveDateTime>,
    pub actual_arrival_time: Option<NaiveDateTime>,
    pub status: Option<FlightStatus>,
    pub booked_passengers: Option<i32>,
    pub description: Option<String>,
}

impl UpdateFlightParams {
    /// Applies the provided fields to a flight.
    ///
    /// # Returns
    /// - `Ok(Flight)` - The flight with updated fields
    /// - `Err(FlightError::InvalidArgument)` - Negative booked passenger count
    pub fn apply_to(self, mut flight: Flight) -> Result<Flight, FlightError> {
        if let Some(booked) = self.booked_passengers {
            if booked < 0 {
                return Err(FlightError::InvalidArgument(format!(
                    "Booked passengers must not be negative, got {}",
                    booked
                )));
            }
            flight.booked_passengers = Some(booked);
        }

        if let Some(gate) = self.gate {
            flight.gate = Some(gate);
        }
        if let Some(terminal) = self.terminal {
            flight.terminal = Some(terminal);
        }
        if let Some(time) = self.actual_departure_time {
            flight.state.actual_departure_time = Some(time);
        }
        if let Some(time) = self.actual_arrival_time {
            flight.state.actual_arrival_time = Some(time);
        }
        if let Some(status) = self.status {
            flight.state.status = status;
        }
        if let Some(description) = self.description {
            flight.description = Some(description);
        }

        Ok(flight)
    }
}
