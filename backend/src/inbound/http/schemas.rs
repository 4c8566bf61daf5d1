//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their wire shape for the generated document.

#![expect(
    dead_code,
    reason = "Wrappers exist only for OpenAPI schema generation via utoipa"
)]

use utoipa::ToSchema;

/// Stable machine-readable error codes.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error envelope returned by every failing endpoint.
#[derive(ToSchema)]
#[schema(as = ErrorEnvelope)]
#[schema(rename_all = "camelCase")]
pub struct ErrorEnvelopeSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message; redacted for internal errors.
    #[schema(example = "invalid events payload: duplicate event id e1")]
    message: String,
    /// Structured context for client errors.
    details: Option<serde_json::Value>,
    /// HTTP status code.
    #[schema(example = 400)]
    status: u16,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// Gateway event.
#[derive(ToSchema)]
#[schema(as = Event)]
#[schema(rename_all = "camelCase")]
pub struct EventSchema {
    #[schema(example = "sommerkonzert-2024")]
    id: String,
    #[schema(example = "Sommerkonzert in der Kirche")]
    title: String,
    #[schema(format = Date, example = "2024-07-12")]
    date: String,
    #[schema(example = "19:30")]
    time: Option<String>,
    location: Option<String>,
    description: Option<String>,
    category: Option<String>,
    image: Option<String>,
    link: Option<String>,
}

/// Opening period nested in a location.
#[derive(ToSchema)]
#[schema(as = OpeningPeriod)]
#[schema(rename_all = "camelCase")]
pub struct OpeningPeriodSchema {
    id: String,
    location_id: Option<String>,
    #[schema(example = "Hauptsaison")]
    name: String,
    #[schema(example = "Di–So")]
    days: String,
    #[schema(example = "10:00–17:00")]
    hours: String,
}

/// Gateway location with opening periods.
#[derive(ToSchema)]
#[schema(as = Location)]
#[schema(rename_all = "camelCase")]
pub struct LocationSchema {
    #[schema(example = "oeoemrang-huus")]
    id: String,
    #[schema(example = "Öömrang Hüs")]
    name: String,
    category: Option<String>,
    description: Option<String>,
    address: Option<String>,
    phone: Option<String>,
    website: Option<String>,
    opening_periods: Vec<OpeningPeriodSchema>,
}

/// Gateway response metadata.
#[derive(ToSchema)]
#[schema(as = IslandDataMeta)]
#[schema(rename_all = "camelCase")]
pub struct IslandDataMetaSchema {
    #[schema(format = DateTime)]
    generated_at: String,
    event_count: Option<u64>,
    location_count: Option<u64>,
}

/// Gateway read response.
#[derive(ToSchema)]
#[schema(as = IslandDataSnapshot)]
pub struct IslandDataSnapshotSchema {
    events: Vec<EventSchema>,
    locations: Vec<LocationSchema>,
    #[schema(rename = "_meta")]
    meta: IslandDataMetaSchema,
}

/// Gateway write request.
#[derive(ToSchema)]
#[schema(as = ReplaceIslandDataRequest)]
pub struct ReplaceIslandDataRequestSchema {
    events: Option<Vec<EventSchema>>,
    locations: Option<Vec<LocationSchema>>,
}

/// Gateway write response.
#[derive(ToSchema)]
#[schema(as = ReplaceIslandDataResponse)]
pub struct ReplaceIslandDataResponseSchema {
    events: Option<Vec<EventSchema>>,
    locations: Option<Vec<LocationSchema>>,
    #[schema(rename = "_meta")]
    meta: IslandDataMetaSchema,
}
