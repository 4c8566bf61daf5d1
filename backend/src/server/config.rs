//! HTTP server configuration object and helpers.

use std::sync::Arc;

use island_guide::domain::ContentStore;
use island_guide::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) content: Arc<ContentStore>,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Serve `content` on `bind_addr` with in-memory gateway stores.
    #[must_use]
    pub fn new(bind_addr: (String, u16), content: Arc<ContentStore>) -> Self {
        Self {
            bind_addr,
            content,
            db_pool: None,
        }
    }

    /// Back the gateway with PostgreSQL instead of in-memory stores.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
