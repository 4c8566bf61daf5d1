//! Builders wiring gateway repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use island_guide::domain::ports::{EventRepository, LocationRepository};
use island_guide::domain::{ContentStore, IslandDataService};
use island_guide::inbound::http::state::{HttpState, HttpStatePorts};
use island_guide::outbound::memory::{InMemoryEventRepository, InMemoryLocationRepository};
use island_guide::outbound::persistence::{
    DbPool, DieselEventRepository, DieselLocationRepository,
};

/// Expose one service through both gateway ports.
fn gateway_ports<E, L>(events: Arc<E>, locations: Arc<L>) -> HttpStatePorts
where
    E: EventRepository + 'static,
    L: LocationRepository + 'static,
{
    let service = Arc::new(IslandDataService::new(events, locations));
    HttpStatePorts {
        island_data: service.clone(),
        island_data_command: service,
    }
}

/// Build HTTP state, using PostgreSQL repositories when a pool is
/// available and in-memory ones otherwise.
pub(crate) fn build_http_state(
    content: Arc<ContentStore>,
    pool: Option<&DbPool>,
) -> web::Data<HttpState> {
    let ports = match pool {
        Some(pool) => {
            info!("island data gateway backed by PostgreSQL");
            gateway_ports(
                Arc::new(DieselEventRepository::new(pool.clone())),
                Arc::new(DieselLocationRepository::new(pool.clone())),
            )
        }
        None => {
            info!("island data gateway backed by process memory");
            gateway_ports(
                Arc::new(InMemoryEventRepository::default()),
                Arc::new(InMemoryLocationRepository::default()),
            )
        }
    };
    web::Data::new(HttpState::new(content, ports))
}
