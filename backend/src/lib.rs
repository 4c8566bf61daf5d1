//! Island guide backend library.
//!
//! Exposes the domain model, inbound HTTP adapters, outbound fixture,
//! in-memory and PostgreSQL adapters, and the OpenAPI document. The binary
//! in `main.rs` wires these together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
pub use settings::ServerSettings;
