//! Domain primitives, content collections and gateway services.
//!
//! Purpose: define the island guide's strongly typed content, the generic
//! filter engine and the events/locations gateway behind transport-agnostic
//! ports. Adapters live in `inbound` and `outbound`.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - ContentStore and the content types: immutable fixture-backed tables.
//! - FilterCriteria / ListView: list filtering shared by every content type.
//! - FerrySchedule: validated ferry timetable.
//! - Event / Location / OpeningPeriod: gateway records.
//! - IslandDataService: gateway driving-port implementation.

pub mod content;
pub mod error;
pub mod ferry;
pub mod filter;
pub(crate) mod hh_mm;
pub mod island_data;
pub mod island_data_service;
pub mod ports;
pub(crate) mod slug;
pub mod trace_id;

pub use self::content::{
    Accommodation, Activity, Beach, BlogPost, ContentCollections, ContentStore,
    ContentValidationError, Restaurant,
};
pub use self::error::{Error, ErrorCode};
pub use self::ferry::{
    Departure, FerryRoute, FerrySchedule, FerryScheduleError, FerrySeason, UnknownFerryRoute,
};
pub use self::filter::{
    FilterCriteria, Filterable, ListLayout, ListView, TagGroup, UnknownTagGroup,
    distinct_categories, distinct_tags, filter_items,
};
pub use self::island_data::{
    Event, IslandDataValidationError, Location, OpeningPeriod, validate_events,
    validate_locations,
};
pub use self::island_data_service::IslandDataService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient result alias for domain and HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;
