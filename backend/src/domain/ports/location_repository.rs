//! Driven port for persisting gateway locations and their opening periods.

use async_trait::async_trait;

use crate::domain::Location;

use super::define_port_error;

define_port_error! {
    /// Errors raised by location storage adapters.
    pub enum LocationRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "location store connection failed: {message}",
        /// A statement failed or a row could not be converted.
        Query { message: String } =>
            "location store query failed: {message}",
    }
}

/// Port for reading and replacing locations with nested opening periods.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// All locations in stored order, each carrying exactly its own periods.
    async fn list(&self) -> Result<Vec<Location>, LocationRepositoryError>;

    /// Atomically replace every location and period and return the stored
    /// collection in list order.
    async fn replace_all(
        &self,
        locations: &[Location],
    ) -> Result<Vec<Location>, LocationRepositoryError>;
}
