//! Driven port for persisting gateway events.

use async_trait::async_trait;

use crate::domain::Event;

use super::define_port_error;

define_port_error! {
    /// Errors raised by event storage adapters.
    pub enum EventRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "event store connection failed: {message}",
        /// A statement failed or a row could not be converted.
        Query { message: String } =>
            "event store query failed: {message}",
    }
}

/// Port for reading and replacing the event collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// All events ordered by date, then time (untimed last), then id.
    async fn list(&self) -> Result<Vec<Event>, EventRepositoryError>;

    /// Atomically replace every stored event with `events` and return the
    /// stored collection in list order.
    async fn replace_all(&self, events: &[Event]) -> Result<Vec<Event>, EventRepositoryError>;
}
