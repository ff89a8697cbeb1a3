//! Shared application state.
//!
//! `AppState` is built once at startup and cloned into background jobs. Every field is
//! cheap to clone: the database connection is a pool, the cache and event sink are
//! reference counted.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{
    cache::FlightCache,
    event::EventPublisher,
    service::{
        aircraft::AircraftService, airline::AirlineService, event_log::EventLogService,
        flight::FlightService, flight_schedule::FlightScheduleService, station::StationService,
    },
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Flight cache shared by every service instance.
    pub flight_cache: FlightCache,

    /// Sink for domain events published after writes.
    pub events: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        flight_cache: FlightCache,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            db,
            flight_cache,
            events,
        }
    }

    pub fn flights(&self) -> FlightService<'_> {
        FlightService::new(&self.db, &self.flight_cache, self.events.as_ref())
    }

    pub fn schedules(&self) -> FlightScheduleService<'_> {
        FlightScheduleService::new(&self.db, &self.flight_cache, self.events.as_ref())
    }

    pub fn airlines(&self) -> AirlineService<'_> {
        AirlineService::new(&self.db, self.events.as_ref())
    }

    pub fn aircraft(&self) -> AircraftService<'_> {
        AircraftService::new(&self.db, self.events.as_ref())
    }

    pub fn stations(&self) -> StationService<'_> {
        StationService::new(&self.db, self.events.as_ref())
    }

    pub fn event_logs(&self) -> EventLogService<'_> {
        EventLogService::new(&self.db)
    }
}
