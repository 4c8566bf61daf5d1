//! Island data gateway endpoint.
//!
//! ```text
//! GET  /api/v1/data
//! POST /api/v1/data   {"events": [...]?, "locations": [...]?}
//! ```
//!
//! A POST replaces every collection it names; collections it omits are left
//! untouched.

use actix_web::{HttpResponse, get, post, web};

use crate::domain::ports::ReplaceIslandDataRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::no_store_header;
use crate::inbound::http::schemas::{
    ErrorEnvelopeSchema, IslandDataSnapshotSchema, ReplaceIslandDataRequestSchema,
    ReplaceIslandDataResponseSchema,
};
use crate::inbound::http::state::HttpState;

/// Read events and locations.
#[utoipa::path(
    get,
    path = "/api/v1/data",
    responses(
        (status = 200, description = "Events and locations", body = IslandDataSnapshotSchema),
        (status = 503, description = "Store unavailable", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["island-data"],
    operation_id = "getIslandData"
)]
#[get("/data")]
pub async fn get_island_data(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let snapshot = state.island_data.snapshot().await?;
    Ok(HttpResponse::Ok()
        .insert_header(no_store_header())
        .json(snapshot))
}

/// Replace events, locations or both.
#[utoipa::path(
    post,
    path = "/api/v1/data",
    request_body = ReplaceIslandDataRequestSchema,
    responses(
        (status = 200, description = "Stored collections", body = ReplaceIslandDataResponseSchema),
        (status = 400, description = "Invalid payload", body = ErrorEnvelopeSchema),
        (status = 503, description = "Store unavailable", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["island-data"],
    operation_id = "replaceIslandData"
)]
#[post("/data")]
pub async fn replace_island_data(
    state: web::Data<HttpState>,
    payload: web::Json<ReplaceIslandDataRequest>,
) -> ApiResult<HttpResponse> {
    let response = state
        .island_data_command
        .replace(payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok()
        .insert_header(no_store_header())
        .json(response))
}
