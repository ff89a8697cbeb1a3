use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the schedule generator and the lifecycle rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlightError {
    /// The schedule does not produce a flight on the requested date.
    ///
    /// Raised when the date falls outside the effective window or is not one of the
    /// schedule's operating weekdays. Instantiating a flight for such a date is a
    /// caller logic error and is never recovered silently.
    #[error("Schedule does not operate on {date}: {reason}")]
    ScheduleNotOperating {
        /// The requested flight date
        date: NaiveDate,
        /// Which check rejected the date
        reason: NotOperatingReason,
    },

    /// The schedule has been deactivated and can no longer produce flights.
    #[error("Schedule {0} is inactive")]
    ScheduleInactive(i32),

    /// A numeric or temporal argument violates a domain invariant.
    #[error("{0}")]
    InvalidArgument(String),
}

/// Reason a schedule rejected a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotOperatingReason {
    BeforeEffectiveFrom,
    AfterEffectiveTo,
    NotAnOperatingDay,
}

impl std::fmt::Display for NotOperatingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::BeforeEffectiveFrom => "date is before the effective-from date",
            Self::AfterEffectiveTo => "date is after the effective-to date",
            Self::NotAnOperatingDay => "weekday is not an operating day",
        };
        f.write_str(reason)
    }
}
