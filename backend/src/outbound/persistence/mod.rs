//! PostgreSQL persistence for the island data gateway.
//!
//! Repositories translate between Diesel rows (`models.rs`, `schema.rs`) and
//! domain types; no business rules live here. Connections come from a `bb8`
//! pool through `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use island_guide::outbound::persistence::{
//!     DbPool, DieselEventRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://localhost/amrum";
//! run_pending_migrations(url).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let events = DieselEventRepository::new(pool);
//! # let _ = events;
//! # Ok(())
//! # }
//! ```

mod diesel_event_repository;
pub(crate) mod diesel_helpers;
mod diesel_location_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_event_repository::DieselEventRepository;
pub use diesel_location_repository::DieselLocationRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
