use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{
    error::reference::ReferenceError,
    model::reference::{optional_text, require_text},
};

/// A carrier operating flights under its two or three character code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airline {
    pub id: i32,
    /// Unique carrier code.
    pub airline_code: String,
    /// Unique ignoring case.
    pub airline_name: String,
    pub description: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    /// Inactive and soft-deleted airlines are kept but hidden from listings.
    pub active: bool,
    pub version: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Airline {
    pub fn from_entity(entity: entity::airline::Model) -> Self {
        Self {
            id: entity.id,
            airline_code: entity.airline_code,
            airline_name: entity.airline_name,
            description: entity.description,
            country: entity.country,
            city: entity.city,
            active: entity.active,
            version: entity.version,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAirlineParams {
    pub airline_code: String,
    pub airline_name: String,
    pub description: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

impl CreateAirlineParams {
    pub fn validate(&self) -> Result<(), ReferenceError> {
        require_text("Airline code", &self.airline_code, 2, 3)?;
        require_text("Airline name", &self.airline_name, 2, 100)?;
        optional_text("Description", self.description.as_deref(), 200)?;
        optional_text("Country", self.country.as_deref(), 50)?;
        optional_text("City", self.city.as_deref(), 50)
    }
}

/// Changes to an airline's descriptive fields. `None` leaves a field unchanged.
///
/// The airline code is immutable once created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAirlineParams {
    pub airline_name: Option<String>,
    pub description: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

impl UpdateAirlineParams {
    pub fn validate(&self) -> Result<(), ReferenceError> {
        if let Some(name) = &self.airline_name {
            require_text("Airline name", name, 2, 100)?;
        }
        optional_text("Description", self.description.as_deref(), 200)?;
        optional_text("Country", self.country.as_deref(), 50)?;
        optional_text("City", self.city.as_deref(), 50)
    }

    /// Overwrites the fields that are set.
    pub fn apply_to(self, mut airline: Airline) -> Airline {
        if let Some(name) = self.airline_name {
            airline.airline_name = name;
        }
        if self.description.is_some() {
            airline.description = self.description;
        }
        if self.country.is_some() {
            airline.country = self.country;
        }
        if self.city.is_some() {
            airline.city = self.city;
        }
        airline
    }
}
