//! Outbound adapters implementing domain ports and loading static content.
//!
//! - **fixtures**: reads the JSON content fixtures into a `ContentStore`
//! - **memory**: process-local gateway repositories, used without a database
//! - **persistence**: PostgreSQL gateway repositories using Diesel ORM
//!
//! Adapters translate between domain types and storage representations.
//! They contain no business logic.

pub mod fixtures;
pub mod memory;
pub mod persistence;
