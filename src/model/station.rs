use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{
    error::reference::ReferenceError,
    model::reference::{optional_text, require_text},
};

/// An airport served by the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: i32,
    /// Unique three letter airport code.
    pub station_code: String,
    /// Unique ignoring case.
    pub station_name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    /// Zone name such as `Europe/Istanbul`.
    pub timezone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Elevation in feet.
    pub altitude: Option<i32>,
    pub description: Option<String>,
    pub active: bool,
    pub version: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Station {
    pub fn from_entity(entity: entity::station::Model) -> Self {
        Self {
            id: entity.id,
            station_code: entity.station_code,
            station_name: entity.station_name,
            city: entity.city,
            country: entity.country,
            address: entity.address,
            timezone: entity.timezone,
            latitude: entity.latitude,
            longitude: entity.longitude,
            altitude: entity.altitude,
            description: entity.description,
            active: entity.active,
            version: entity.version,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateStationParams {
    pub station_code: String,
    pub station_name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub timezone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<i32>,
    pub description: Option<String>,
}

impl CreateStationParams {
    pub fn validate(&self) -> Result<(), ReferenceError> {
        require_text("Station code", &self.station_code, 3, 3)?;
        require_text("Station name", &self.station_name, 2, 100)?;
        check_descriptive(
            self.city.as_deref(),
            self.country.as_deref(),
            self.address.as_deref(),
            self.timezone.as_deref(),
            self.description.as_deref(),
        )?;
        check_coordinates(self.latitude, self.longitude)
    }
}

/// Changes to a station. `None` leaves a field unchanged.
///
/// The station code is immutable once created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateStationParams {
    pub station_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub timezone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<i32>,
    pub description: Option<String>,
}

impl UpdateStationParams {
    pub fn validate(&self) -> Result<(), ReferenceError> {
        if let Some(name) = &self.station_name {
            require_text("Station name", name, 2, 100)?;
        }
        check_descriptive(
            self.city.as_deref(),
            self.country.as_deref(),
            self.address.as_deref(),
            self.timezone.as_deref(),
            self.description.as_deref(),
        )?;
        check_coordinates(self.latitude, self.longitude)
    }

    pub fn apply_to(self, mut station: Station) -> Station {
        if let Some(name) = self.station_name {
            station.station_name = name;
        }
        if self.city.is_some() {
            station.city = self.city;
        }
        if self.country.is_some() {
            station.country = self.country;
        }
        if self.address.is_some() {
            station.address = self.address;
        }
        if self.timezone.is_some() {
            station.timezone = self.timezone;
        }
        if self.latitude.is_some() {
            station.latitude = self.latitude;
        }
        if self.longitude.is_some() {
            station.longitude = self.longitude;
        }
        if self.altitude.is_some() {
            station.altitude = self.altitude;
        }
        if self.description.is_some() {
            station.description = self.description;
        }
        station
    }
}

fn check_descriptive(
    city: Option<&str>,
    country: Option<&str>,
    address: Option<&str>,
    timezone: Option<&str>,
    description: Option<&str>,
) -> Result<(), ReferenceError> {
    optional_text("City", city, 50)?;
    optional_text("Country", country, 50)?;
    optional_text("Address", address, 100)?;
    optional_text("Timezone", timezone, 20)?;
    optional_text("Description", description, 200)
}

fn check_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Result<(), ReferenceError> {
    if let Some(latitude) = latitude.filter(|lat| !(-90.0..=90.0).contains(lat)) {
        return Err(ReferenceError::OutOfRange {
            field: "Latitude",
            value: latitude.to_string(),
        });
    }
    if let Some(longitude) = longitude.filter(|lon| !(-180.0..=180.0).contains(lon)) {
        return Err(ReferenceError::OutOfRange {
            field: "Longitude",
            value: longitude.to_string(),
        });
    }

    Ok(())
}
