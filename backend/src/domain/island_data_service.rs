//! Island data gateway service.
//!
//! Implements both gateway driving ports over the event and location
//! repositories. Reads run concurrently; writes run one after the other with
//! events first, and only after the whole payload has been validated.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::try_join;
use tracing::{error, info};

use crate::domain::ports::{
    EventRepository, EventRepositoryError, IslandDataCommand, IslandDataMeta, IslandDataQuery,
    IslandDataSnapshot, LocationRepository, LocationRepositoryError, ReplaceIslandDataRequest,
    ReplaceIslandDataResponse,
};
use crate::domain::{Error, Location, validate_events, validate_locations};

fn map_event_error(err: EventRepositoryError) -> Error {
    error!(error = %err, "event repository failure");
    match err {
        EventRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("event store unavailable: {message}"))
        }
        EventRepositoryError::Query { message } => {
            Error::internal(format!("event store error: {message}"))
        }
    }
}

fn map_location_error(err: LocationRepositoryError) -> Error {
    error!(error = %err, "location repository failure");
    match err {
        LocationRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("location store unavailable: {message}"))
        }
        LocationRepositoryError::Query { message } => {
            Error::internal(format!("location store error: {message}"))
        }
    }
}

/// Gateway service backed by one event and one location repository.
pub struct IslandDataService<E, L> {
    events: Arc<E>,
    locations: Arc<L>,
}

impl<E, L> Clone for IslandDataService<E, L> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
            locations: Arc::clone(&self.locations),
        }
    }
}

impl<E, L> IslandDataService<E, L> {
    /// Create a service over the given repositories.
    pub fn new(events: Arc<E>, locations: Arc<L>) -> Self {
        Self { events, locations }
    }
}

#[async_trait]
impl<E, L> IslandDataQuery for IslandDataService<E, L>
where
    E: EventRepository,
    L: LocationRepository,
{
    async fn snapshot(&self) -> Result<IslandDataSnapshot, Error> {
        let events = async { self.events.list().await.map_err(map_event_error) };
        let locations = async { self.locations.list().await.map_err(map_location_error) };
        let (events, locations) = try_join(events, locations).await?;

        let meta = IslandDataMeta::now(Some(events.len()), Some(locations.len()));
        Ok(IslandDataSnapshot {
            events,
            locations,
            meta,
        })
    }
}

#[async_trait]
impl<E, L> IslandDataCommand for IslandDataService<E, L>
where
    E: EventRepository,
    L: LocationRepository,
{
    async fn replace(
        &self,
        request: ReplaceIslandDataRequest,
    ) -> Result<ReplaceIslandDataResponse, Error> {
        if request.is_empty() {
            return Err(Error::invalid_request(
                "request body must contain events, locations or both",
            ));
        }
        if let Some(events) = request.events.as_deref() {
            validate_events(events).map_err(|err| {
                Error::invalid_request(format!("invalid events payload: {err}"))
                    .with_details(err.details())
            })?;
        }
        if let Some(locations) = request.locations.as_deref() {
            validate_locations(locations).map_err(|err| {
                Error::invalid_request(format!("invalid locations payload: {err}"))
                    .with_details(err.details())
            })?;
        }
        let locations: Option<Vec<Location>> = request
            .locations
            .map(|locations| locations.into_iter().map(Location::with_owned_periods).collect());

        let saved_events = match request.events.as_deref() {
            Some(events) => {
                let saved = self
                    .events
                    .replace_all(events)
                    .await
                    .map_err(map_event_error)?;
                info!(count = saved.len(), "replaced events");
                Some(saved)
            }
            None => None,
        };
        let saved_locations = match locations.as_deref() {
            Some(locations) => {
                let saved = self
                    .locations
                    .replace_all(locations)
                    .await
                    .map_err(map_location_error)?;
                info!(count = saved.len(), "replaced locations");
                Some(saved)
            }
            None => None,
        };

        let meta = IslandDataMeta::now(
            saved_events.as_ref().map(Vec::len),
            saved_locations.as_ref().map(Vec::len),
        );
        Ok(ReplaceIslandDataResponse {
            events: saved_events,
            locations: saved_locations,
            meta,
        })
    }
}

#[cfg(test)]
#[path = "island_data_service_tests.rs"]
mod tests;
