//! Flight lifecycle state machine.
//!
//! Operational events are applied by `apply_event`, a pure function that consumes a
//! flight (or leg) and returns the transformed value. The rules are shared between
//! `Flight` and `FlightLeg` through the `Lifecycle` trait, which only exposes the
//! `OperationalState` embedded in both.
//!
//! No transition is rejected: cancelling an arrived flight simply overwrites the
//! status. The only validation is that delays are non-negative and keep the
//! schedule within the calendar range.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{error::flight::FlightError, model::status::FlightStatus};

/// Status plus the schedule, actual-time and delay fields the lifecycle rules touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationalState {
    pub status: FlightStatus,
    pub scheduled_departure_time: NaiveDateTime,
    pub scheduled_arrival_time: NaiveDateTime,
    pub actual_departure_time: Option<NaiveDateTime>,
    pub actual_arrival_time: Option<NaiveDateTime>,
    pub delay_minutes: Option<i32>,
}

impl OperationalState {
    /// Fresh state in `SCHEDULED` with no actual times and no delay.
    pub fn scheduled(departure: NaiveDateTime, arrival: NaiveDateTime) -> Self {
        Self {
            status: FlightStatus::Scheduled,
            scheduled_departure_time: departure,
            scheduled_arrival_time: arrival,
            actual_departure_time: None,
            actual_arrival_time: None,
            delay_minutes: None,
        }
    }

    pub fn is_delayed(&self) -> bool {
        self.delay_minutes.is_some_and(|minutes| minutes > 0)
    }

    pub fn is_departed(&self) -> bool {
        self.actual_departure_time.is_some()
    }

    pub fn is_arrived(&self) -> bool {
        self.actual_arrival_time.is_some()
    }
}

/// An operational event applied to a flight or leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightEvent {
    /// Delay by the given minutes. Shifts both scheduled times.
    Delay(i32),
    MarkDeparted(NaiveDateTime),
    MarkArrived(NaiveDateTime),
    Cancel,
    /// Generic status change that auto-stamps missing actual times.
    SetStatus(FlightStatus),
}

impl FlightEvent {
    /// Upper-case event name used when the event is published.
    pub fn name(&self) -> &'static str {
        match self {
            FlightEvent::Delay(_) => "DELAYED",
            FlightEvent::MarkDeparted(_) => "DEPARTED",
            FlightEvent::MarkArrived(_) => "ARRIVED",
            FlightEvent::Cancel => "CANCELLED",
            FlightEvent::SetStatus(_) => "STATUS_CHANGED",
        }
    }
}

/// Anything carrying an `OperationalState` the lifecycle rules can act on.
pub trait Lifecycle {
    fn state(&self) -> &OperationalState;
    fn state_mut(&mut self) -> &mut OperationalState;
}

impl Lifecycle for OperationalState {
    fn state(&self) -> &OperationalState {
        self
    }

    fn state_mut(&mut self) -> &mut OperationalState {
        self
    }
}

/// Applies an operational event and returns the updated subject.
///
/// `now` is only consulted by `SetStatus`, which stamps the actual departure or
/// arrival time when moving to `DEPARTED`/`ARRIVED` and the field is still empty.
///
/// Repeated delays are not cumulative-safe: each call overwrites `delay_minutes`
/// but shifts the already-shifted schedule again, so two 30 minute delays move the
/// schedule by 60 minutes while `delay_minutes` reads 30.
///
/// # Returns
/// - `Ok(T)` - The subject with the event applied
/// - `Err(FlightError::InvalidArgument)` - Negative delay minutes, or a delay that
///   pushes a scheduled time past the representable range
pub fn apply_event<T: Lifecycle>(
    mut subject: T,
    event: FlightEvent,
    now: NaiveDateTime,
) -> Result<T, FlightError> {
    let state = subject.state_mut();

    match event {
        FlightEvent::Delay(minutes) => {
            if minutes < 0 {
                return Err(FlightError::InvalidArgument(format!(
                    "Delay minutes must not be negative, got {}",
                    minutes
                )));
            }

            let shift = Duration::minutes(i64::from(minutes));
            let (Some(departure), Some(arrival)) = (
                state.scheduled_departure_time.checked_add_signed(shift),
                state.scheduled_arrival_time.checked_add_signed(shift),
            ) else {
                return Err(FlightError::InvalidArgument(format!(
                    "Delay of {} minutes moves the schedule out of range",
                    minutes
                )));
            };

            state.delay_minutes = Some(minutes);
            state.status = FlightStatus::Delayed;
            state.scheduled_departure_time = departure;
            state.scheduled_arrival_time = arrival;
        }
        FlightEvent::MarkDeparted(time) => {
            state.actual_departure_time = Some(time);
            state.status = FlightStatus::Departed;
        }
        FlightEvent::MarkArrived(time) => {
            state.actual_arrival_time = Some(time);
            state.status = FlightStatus::Arrived;
        }
        FlightEvent::Cancel => {
            state.status = FlightStatus::Cancelled;
        }
        FlightEvent::SetStatus(status) => {
            state.status = status;

            if status == FlightStatus::Departed && state.actual_departure_time.is_none() {
                state.actual_departure_time = Some(now);
            }

            if status == FlightStatus::Arrived && state.actual_arrival_time.is_none() {
                state.actual_arrival_time = Some(now);
            }
        }
    }

    Ok(subject)
}
