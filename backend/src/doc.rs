//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every inbound HTTP path plus the schema wrappers from
//! [`crate::inbound::http::schemas`], so domain types stay free of utoipa.
//! The document backs Swagger UI in debug builds and is printed by the
//! `openapi-dump` binary.

use crate::inbound::http::blog::{BlogListResponse, BlogTagsResponse};
use crate::inbound::http::ferry::{DepartureView, RouteDeparturesResponse};
use crate::inbound::http::listings::{FilterOptions, ListResponse};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorEnvelopeSchema, EventSchema, IslandDataMetaSchema,
    IslandDataSnapshotSchema, LocationSchema, OpeningPeriodSchema, ReplaceIslandDataRequestSchema,
    ReplaceIslandDataResponseSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Amrum island guide API",
        description = "Read-only island content plus the events and locations gateway.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::listings::list_accommodations,
        crate::inbound::http::listings::get_accommodation,
        crate::inbound::http::listings::list_restaurants,
        crate::inbound::http::listings::get_restaurant,
        crate::inbound::http::listings::list_beaches,
        crate::inbound::http::listings::get_beach,
        crate::inbound::http::listings::list_activities,
        crate::inbound::http::listings::get_activity,
        crate::inbound::http::blog::list_blog_posts,
        crate::inbound::http::blog::list_blog_tags,
        crate::inbound::http::blog::get_blog_post,
        crate::inbound::http::ferry::get_ferry_schedule,
        crate::inbound::http::ferry::get_ferry_departures,
        crate::inbound::http::island_data::get_island_data,
        crate::inbound::http::island_data::replace_island_data,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorCodeSchema,
        ErrorEnvelopeSchema,
        ListResponse,
        FilterOptions,
        BlogListResponse,
        BlogTagsResponse,
        DepartureView,
        RouteDeparturesResponse,
        EventSchema,
        OpeningPeriodSchema,
        LocationSchema,
        IslandDataMetaSchema,
        IslandDataSnapshotSchema,
        ReplaceIslandDataRequestSchema,
        ReplaceIslandDataResponseSchema,
    )),
    tags(
        (name = "content", description = "Accommodations, restaurants, beaches and activities"),
        (name = "blog", description = "Island blog"),
        (name = "ferry", description = "Ferry timetable"),
        (name = "island-data", description = "Events and locations gateway"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
