//! In-memory flight cache.
//!
//! Flights are cached by flight number on read. Any write to the flight table clears
//! the whole cache and bumps its generation. A reader records the generation before
//! querying the database and only caches its result if no invalidation happened in
//! between, so a read racing a write cannot reinstate a stale entry.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use crate::model::flight::Flight;

#[derive(Default)]
struct Entries {
    flights: HashMap<String, Flight>,
    generation: u64,
}

/// Flight-number keyed cache shared between clones.
#[derive(Clone, Default)]
pub struct FlightCache {
    entries: Arc<RwLock<Entries>>,
}

impl FlightCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the cached flight, if any.
    pub async fn get(&self, flight_number: &str) -> Option<Flight> {
        self.entries.read().await.flights.get(flight_number).cloned()
    }

    /// Current invalidation generation. Read it before loading a flight to cache.
    pub async fn generation(&self) -> u64 {
        self.entries.read().await.generation
    }

    /// Caches a flight loaded while `generation` was current.
    ///
    /// # Returns
    /// - `true` - The flight was cached
    /// - `false` - The cache was invalidated since `generation`; nothing was stored
    pub async fn insert_if_current(&self, flight: Flight, generation: u64) -> bool {
        let mut entries = self.entries.write().await;

        if entries.generation != generation {
            return false;
        }

        entries.flights.insert(flight.flight_number.clone(), flight);
        true
    }

    /// Drops every cached flight and starts a new generation.
    pub async fn invalidate_all(&self) {
        let mut entries = self.entries.write().await;
        entries.flights.clear();
        entries.generation += 1;
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.flights.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.flights.is_empty()
    }
}
