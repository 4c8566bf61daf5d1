//! Process-local gateway stores used when no database is configured.
//!
//! Contents live for the lifetime of the process. Replacement swaps the
//! whole collection under a write lock, so readers never see a partial
//! replace.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{
    EventRepository, EventRepositoryError, LocationRepository, LocationRepositoryError,
};
use crate::domain::{Event, Location};

const POISONED: &str = "in-memory store lock poisoned";

/// In-memory [`EventRepository`].
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventRepository {
    /// Repository pre-populated with `events`.
    pub fn with_events(mut events: Vec<Event>) -> Self {
        events.sort_by(Event::chronological);
        Self {
            events: RwLock::new(events),
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn list(&self) -> Result<Vec<Event>, EventRepositoryError> {
        self.events
            .read()
            .map(|events| events.clone())
            .map_err(|_| EventRepositoryError::query(POISONED))
    }

    async fn replace_all(&self, events: &[Event]) -> Result<Vec<Event>, EventRepositoryError> {
        let mut sorted = events.to_vec();
        sorted.sort_by(Event::chronological);
        let mut guard = self
            .events
            .write()
            .map_err(|_| EventRepositoryError::query(POISONED))?;
        guard.clone_from(&sorted);
        Ok(sorted)
    }
}

/// In-memory [`LocationRepository`].
#[derive(Debug, Default)]
pub struct InMemoryLocationRepository {
    locations: RwLock<Vec<Location>>,
}

impl InMemoryLocationRepository {
    /// Repository pre-populated with `locations`.
    pub fn with_locations(locations: Vec<Location>) -> Self {
        Self {
            locations: RwLock::new(locations),
        }
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn list(&self) -> Result<Vec<Location>, LocationRepositoryError> {
        self.locations
            .read()
            .map(|locations| locations.clone())
            .map_err(|_| LocationRepositoryError::query(POISONED))
    }

    async fn replace_all(
        &self,
        locations: &[Location],
    ) -> Result<Vec<Location>, LocationRepositoryError> {
        let replacement: Vec<Location> = locations
            .iter()
            .cloned()
            .map(Location::with_owned_periods)
            .collect();
        let mut guard = self
            .locations
            .write()
            .map_err(|_| LocationRepositoryError::query(POISONED))?;
        guard.clone_from(&replacement);
        Ok(replacement)
    }
}
