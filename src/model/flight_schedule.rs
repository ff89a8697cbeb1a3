//! Recurring flight schedule templates and the flight instance generator.
//!
//! A `FlightSchedule` describes a flight that repeats on a set of weekdays inside an
//! inclusive effective window. `FlightSchedule::instantiate` turns a template and a
//! calendar date into an unsaved `NewFlight`, applying the window and weekday checks
//! and correcting arrivals that cross midnight.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;
use std::fmt;

use crate::{
    error::{
        flight::{FlightError, NotOperatingReason},
        internal::InternalError,
    },
    model::{flight::NewFlight, lifecycle::OperationalState, status::FlightType},
};

/// Set of weekdays a schedule operates on.
///
/// Stored as a 7-bit mask with Monday as bit 0. An empty set means the schedule
/// operates every day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OperatingDays(u8);

impl OperatingDays {
    const WEEK: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// The empty set, which operates every day.
    pub fn every_day() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << day.num_days_from_monday();
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True if the day is in the set, or if the set is empty.
    pub fn operates_on(&self, day: Weekday) -> bool {
        self.is_empty() || self.0 & (1 << day.num_days_from_monday()) != 0
    }

    /// Days in the set, Monday first.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        Self::WEEK
            .into_iter()
            .filter(|day| self.0 & (1 << day.num_days_from_monday()) != 0)
    }

    /// Parses the persisted comma separated list of upper-case weekday names.
    ///
    /// A missing or blank column is the empty set.
    pub fn from_column(value: Option<&str>) -> Result<Self, InternalError> {
        let mut days = Self::every_day();

        for name in value
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
        {
            let day = Self::WEEK
                .into_iter()
                .find(|day| weekday_name(*day) == name)
                .ok_or_else(|| InternalError::UnknownWeekday(name.to_string()))?;
            days.insert(day);
        }

        Ok(days)
    }

    /// Persisted form, `None` for the empty set.
    pub fn to_column(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        Some(self.days().map(weekday_name).collect::<Vec<_>>().join(","))
    }
}

impl FromIterator<Weekday> for OperatingDays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut days = Self::every_day();
        for day in iter {
            days.insert(day);
        }
        days
    }
}

impl fmt::Display for OperatingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_column() {
            Some(days) => f.write_str(&days),
            None => f.write_str("DAILY"),
        }
    }
}

impl Serialize for OperatingDays {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.days().map(weekday_name))
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}

/// A persisted recurring flight definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSchedule {
    pub id: i32,
    /// Flight number given to every generated flight. Not unique across schedules.
    pub flight_number: String,
    pub airline_code: String,
    pub aircraft_registration: Option<String>,
    pub departure_station_code: String,
    pub arrival_station_code: String,
    /// Local departure time of day.
    pub departure_time: NaiveTime,
    /// Local arrival time of day. Earlier than `departure_time` for overnight flights.
    pub arrival_time: NaiveTime,
    pub flight_type: FlightType,
    pub operating_days: OperatingDays,
    /// First date the schedule operates, inclusive.
    pub effective_from: NaiveDate,
    /// Last date the schedule operates, inclusive.
    pub effective_to: NaiveDate,
    pub duration_minutes: Option<i32>,
    pub distance_km: Option<i32>,
    pub passenger_capacity: Option<i32>,
    pub terminal: Option<String>,
    pub description: Option<String>,
    /// Deactivated schedules are kept but no longer instantiated.
    pub active: bool,
    pub version: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl FlightSchedule {
    /// Converts an entity model to a schedule domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(FlightSchedule)` - The converted schedule
    /// - `Err(InternalError)` - Unknown flight type or weekday name in the row
    pub fn from_entity(entity: entity::flight_schedule::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            flight_number: entity.flight_number,
            airline_code: entity.airline_code,
            aircraft_registration: entity.aircraft_registration,
            departure_station_code: entity.departure_station_code,
            arrival_station_code: entity.arrival_station_code,
            departure_time: entity.departure_time,
            arrival_time: entity.arrival_time,
            flight_type: entity.flight_type.parse()?,
            operating_days: OperatingDays::from_column(entity.operating_days.as_deref())?,
            effective_from: entity.effective_from,
            effective_to: entity.effective_to,
            duration_minutes: entity.duration_minutes,
            distance_km: entity.distance_km,
            passenger_capacity: entity.passenger_capacity,
            terminal: entity.terminal,
            description: entity.description,
            active: entity.active,
            version: entity.version,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// True if the schedule produces a flight on `date`.
    pub fn operates_on(&self, date: NaiveDate) -> bool {
        self.check_operates(date).is_ok()
    }

    /// Arrival time of day falls before departure time of day.
    pub fn is_overnight(&self) -> bool {
        self.arrival_time < self.departure_time
    }

    /// Builds the flight this schedule produces on `date`.
    ///
    /// The effective window is checked before the weekday. Departure and arrival are
    /// the schedule's times of day on `date`; an arrival clock time strictly earlier
    /// than the departure clock time is moved to the next day. Equal clock times are
    /// treated as same-day.
    ///
    /// The active flag is not consulted here.
    ///
    /// # Returns
    /// - `Ok(NewFlight)` - Active flight in `SCHEDULED` status
    /// - `Err(FlightError::ScheduleNotOperating)` - Date outside the window or not an operating day
    /// - `Err(FlightError::InvalidArgument)` - Overnight arrival past the last representable date
    pub fn instantiate(&self, date: NaiveDate) -> Result<NewFlight, FlightError> {
        self.check_operates(date)?;

        let departure = date.and_time(self.departure_time);
        let mut arrival = date.and_time(self.arrival_time);
        if self.is_overnight() {
            arrival = arrival.checked_add_signed(Duration::days(1)).ok_or_else(|| {
                FlightError::InvalidArgument(format!("Overnight arrival after {} is out of range", date))
            })?;
        }

        Ok(NewFlight {
            flight_number: self.flight_number.clone(),
            airline_code: self.airline_code.clone(),
            aircraft_registration: self.aircraft_registration.clone(),
            departure_station_code: self.departure_station_code.clone(),
            arrival_station_code: self.arrival_station_code.clone(),
            flight_date: departure,
            state: OperationalState::scheduled(departure, arrival),
            flight_type: self.flight_type,
            gate: None,
            terminal: self.terminal.clone(),
            duration_minutes: self.duration_minutes,
            distance_km: self.distance_km,
            passenger_capacity: self.passenger_capacity,
            description: self.description.clone(),
            active: true,
        })
    }

    fn check_window(&self, date: NaiveDate) -> Result<(), FlightError> {
        let reason = if date < self.effective_from {
            NotOperatingReason::BeforeEffectiveFrom
        } else if date > self.effective_to {
            NotOperatingReason::AfterEffectiveTo
        } else {
            return Ok(());
        };

        Err(FlightError::ScheduleNotOperating { date, reason })
    }

    fn check_operates(&self, date: NaiveDate) -> Result<(), FlightError> {
        self.check_window(date)?;

        if !self.operating_days.operates_on(date.weekday()) {
            return Err(FlightError::ScheduleNotOperating {
                date,
                reason: NotOperatingReason::NotAnOperatingDay,
            });
        }

        Ok(())
    }
}

/// Parameters for creating a schedule template.
#[derive(Debug, Clone)]
pub struct CreateFlightScheduleParams {
    pub flight_number: String,
    pub airline_code: String,
    pub aircraft_registration: Option<String>,
    pub departure_station_code: String,
    pub arrival_station_code: String,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    pub flight_type: FlightType,
    pub operating_days: OperatingDays,
    pub effective_from: NaiveDate,
    pub effective_to: NaiveDate,
    pub duration_minutes: Option<i32>,
    pub distance_km: Option<i32>,
    pub passenger_capacity: Option<i32>,
    pub terminal: Option<String>,
    pub description: Option<String>,
}

impl CreateFlightScheduleParams {
    /// Rejects an effective window that ends before it starts.
    pub fn validate(&self) -> Result<(), FlightError> {
        if self.effective_from > self.effective_to {
            return Err(FlightError::InvalidArgument(format!(
                "Effective from {} must not be after effective to {}",
                self.effective_from, self.effective_to
            )));
        }

        Ok(())
    }
}
