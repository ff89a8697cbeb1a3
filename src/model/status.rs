//! Flight status and flight type enums.
//!
//! Both enums are plain tags. Their persisted form is the upper-case name returned by
//! `as_str`, and human-readable metadata is looked up through `status_display` and
//! `type_display` instead of living on the variants.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::internal::InternalError;

/// Operational status of a flight or flight leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    Scheduled,
    Delayed,
    Boarding,
    Departed,
    InFlight,
    Arrived,
    Cancelled,
    Diverted,
}

/// Commercial category of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightType {
    Domestic,
    International,
    Charter,
    Cargo,
}

/// Display name and description for an enum tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayInfo {
    pub name: &'static str,
    pub description: &'static str,
}

impl FlightStatus {
    pub const ALL: [FlightStatus; 8] = [
        FlightStatus::Scheduled,
        FlightStatus::Delayed,
        FlightStatus::Boarding,
        FlightStatus::Departed,
        FlightStatus::InFlight,
        FlightStatus::Arrived,
        FlightStatus::Cancelled,
        FlightStatus::Diverted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "SCHEDULED",
            FlightStatus::Delayed => "DELAYED",
            FlightStatus::Boarding => "BOARDING",
            FlightStatus::Departed => "DEPARTED",
            FlightStatus::InFlight => "IN_FLIGHT",
            FlightStatus::Arrived => "ARRIVED",
            FlightStatus::Cancelled => "CANCELLED",
            FlightStatus::Diverted => "DIVERTED",
        }
    }

    /// Arrived and cancelled flights have no defined way back out.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlightStatus::Arrived | FlightStatus::Cancelled)
    }
}

impl FlightType {
    pub const ALL: [FlightType; 4] = [
        FlightType::Domestic,
        FlightType::International,
        FlightType::Charter,
        FlightType::Cargo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlightType::Domestic => "DOMESTIC",
            FlightType::International => "INTERNATIONAL",
            FlightType::Charter => "CHARTER",
            FlightType::Cargo => "CARGO",
        }
    }
}

/// Looks up the display metadata for a flight status.
pub fn status_display(status: FlightStatus) -> DisplayInfo {
    let (name, description) = match status {
        FlightStatus::Scheduled => ("Scheduled", "Flight is scheduled"),
        FlightStatus::Delayed => ("Delayed", "Flight is delayed"),
        FlightStatus::Boarding => ("Boarding", "Passengers are boarding"),
        FlightStatus::Departed => ("Departed", "Flight has departed"),
        FlightStatus::InFlight => ("In Flight", "Flight is in the air"),
        FlightStatus::Arrived => ("Arrived", "Flight has arrived"),
        FlightStatus::Cancelled => ("Cancelled", "Flight is cancelled"),
        FlightStatus::Diverted => ("Diverted", "Flight is diverted"),
    };

    DisplayInfo { name, description }
}

/// Looks up the display metadata for a flight type.
pub fn type_display(flight_type: FlightType) -> DisplayInfo {
    let (name, description) = match flight_type {
        FlightType::Domestic => ("Domestic", "Domestic flight"),
        FlightType::International => ("International", "International flight"),
        FlightType::Charter => ("Charter", "Charter flight"),
        FlightType::Cargo => ("Cargo", "Cargo flight"),
    };

    DisplayInfo { name, description }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FlightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlightStatus {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FlightStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| InternalError::UnknownEnumValue {
                kind: "FlightStatus",
                value: value.to_string(),
            })
    }
}

impl FromStr for FlightType {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FlightType::ALL
            .into_iter()
            .find(|flight_type| flight_type.as_str() == value)
            .ok_or_else(|| InternalError::UnknownEnumValue {
                kind: "FlightType",
                value: value.to_string(),
            })
    }
}
