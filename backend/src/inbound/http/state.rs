//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`. They read static
//! content from the immutable [`ContentStore`] and reach the gateway only
//! through its driving ports, so tests can swap in doubles without I/O.

use std::sync::Arc;

use crate::domain::ContentStore;
use crate::domain::ports::{IslandDataCommand, IslandDataQuery};

/// Gateway port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Gateway reads.
    pub island_data: Arc<dyn IslandDataQuery>,
    /// Gateway writes.
    pub island_data_command: Arc<dyn IslandDataCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Fixture-backed content tables.
    pub content: Arc<ContentStore>,
    /// Gateway reads.
    pub island_data: Arc<dyn IslandDataQuery>,
    /// Gateway writes.
    pub island_data_command: Arc<dyn IslandDataCommand>,
}

impl HttpState {
    /// Construct state from the content store and gateway ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use camino::Utf8Path;
    /// use island_guide::domain::IslandDataService;
    /// use island_guide::inbound::http::state::{HttpState, HttpStatePorts};
    /// use island_guide::outbound::fixtures::load_content_store;
    /// use island_guide::outbound::memory::{InMemoryEventRepository, InMemoryLocationRepository};
    ///
    /// let content = load_content_store(Utf8Path::new("fixtures")).expect("fixtures load");
    /// let service = Arc::new(IslandDataService::new(
    ///     Arc::new(InMemoryEventRepository::default()),
    ///     Arc::new(InMemoryLocationRepository::default()),
    /// ));
    /// let state = HttpState::new(
    ///     Arc::new(content),
    ///     HttpStatePorts {
    ///         island_data: service.clone(),
    ///         island_data_command: service,
    ///     },
    /// );
    /// assert!(state.content.blog_posts().len() > 0);
    /// ```
    pub fn new(content: Arc<ContentStore>, ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            island_data,
            island_data_command,
        } = ports;
        Self {
            content,
            island_data,
            island_data_command,
        }
    }
}
