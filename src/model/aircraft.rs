use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{
    error::reference::ReferenceError,
    model::reference::{non_negative, optional_text, require_text},
};

/// A registered airframe belonging to one airline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aircraft {
    pub id: i32,
    /// Unique tail registration, e.g. `TC-JFK`.
    pub registration: String,
    pub aircraft_type: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    /// Passenger seats.
    pub capacity: Option<i32>,
    /// Range in kilometres.
    pub max_range: Option<i32>,
    /// Cruise speed in km/h.
    pub cruise_speed: Option<i32>,
    pub airline_id: i32,
    pub active: bool,
    pub version: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Aircraft {
    pub fn from_entity(entity: entity::aircraft::Model) -> Self {
        Self {
            id: entity.id,
            registration: entity.registration,
            aircraft_type: entity.aircraft_type,
            model: entity.model,
            manufacturer: entity.manufacturer,
            capacity: entity.capacity,
            max_range: entity.max_range,
            cruise_speed: entity.cruise_speed,
            airline_id: entity.airline_id,
            active: entity.active,
            version: entity.version,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAircraftParams {
    pub registration: String,
    pub aircraft_type: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub capacity: Option<i32>,
    pub max_range: Option<i32>,
    pub cruise_speed: Option<i32>,
    /// Must reference an existing airline.
    pub airline_id: i32,
}

impl CreateAircraftParams {
    pub fn validate(&self) -> Result<(), ReferenceError> {
        require_text("Registration", &self.registration, 5, 10)?;
        require_text("Aircraft type", &self.aircraft_type, 2, 20)?;
        optional_text("Model", self.model.as_deref(), 100)?;
        optional_text("Manufacturer", self.manufacturer.as_deref(), 50)?;
        non_negative("Capacity", self.capacity)?;
        non_negative("Max range", self.max_range)?;
        non_negative("Cruise speed", self.cruise_speed)
    }
}

/// Changes to an aircraft. `None` leaves a field unchanged.
///
/// The registration is immutable; setting `airline_id` transfers the aircraft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAircraftParams {
    pub aircraft_type: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub capacity: Option<i32>,
    pub max_range: Option<i32>,
    pub cruise_speed: Option<i32>,
    pub airline_id: Option<i32>,
}

impl UpdateAircraftParams {
    pub fn validate(&self) -> Result<(), ReferenceError> {
        if let Some(aircraft_type) = &self.aircraft_type {
            require_text("Aircraft type", aircraft_type, 2, 20)?;
        }
        optional_text("Model", self.model.as_deref(), 100)?;
        optional_text("Manufacturer", self.manufacturer.as_deref(), 50)?;
        non_negative("Capacity", self.capacity)?;
        non_negative("Max range", self.max_range)?;
        non_negative("Cruise speed", self.cruise_speed)
    }

    pub fn apply_to(self, mut aircraft: Aircraft) -> Aircraft {
        if let Some(aircraft_type) = self.aircraft_type {
            aircraft.aircraft_type = aircraft_type;
        }
        if self.model.is_some() {
            aircraft.model = self.model;
        }
        if self.manufacturer.is_some() {
            aircraft.manufacturer = self.manufacturer;
        }
        if self.capacity.is_some() {
            aircraft.capacity = self.capacity;
        }
        if self.max_range.is_some() {
            aircraft.max_range = self.max_range;
        }
        if self.cruise_speed.is_some() {
            aircraft.cruise_speed = self.cruise_speed;
        }
        if let Some(airline_id) = self.airline_id {
            aircraft.airline_id = airline_id;
        }
        aircraft
    }
}
