//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod event_repository;
mod island_data_command;
mod island_data_query;
mod location_repository;

#[cfg(test)]
pub use event_repository::MockEventRepository;
pub use event_repository::{EventRepository, EventRepositoryError};
#[cfg(test)]
pub use island_data_command::MockIslandDataCommand;
pub use island_data_command::{
    IslandDataCommand, ReplaceIslandDataRequest, ReplaceIslandDataResponse,
};
#[cfg(test)]
pub use island_data_query::MockIslandDataQuery;
pub use island_data_query::{IslandDataMeta, IslandDataQuery, IslandDataSnapshot};
#[cfg(test)]
pub use location_repository::MockLocationRepository;
pub use location_repository::{LocationRepository, LocationRepositoryError};
