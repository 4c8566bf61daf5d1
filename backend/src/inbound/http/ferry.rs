//! Ferry timetable endpoints.
//!
//! ```text
//! GET /api/v1/ferry
//! GET /api/v1/ferry/{season}/{route}
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Error, FerryRoute};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::public_content_header;
use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use crate::inbound::http::state::HttpState;

/// A departure with its note code resolved against the glossary.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartureView {
    /// Departure time (`HH:MM`).
    #[schema(example = "07:30")]
    pub time: String,
    /// Note code, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Glossary text for the note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_text: Option<String>,
}

/// Departures for one route in one season.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteDeparturesResponse {
    /// Season name as stored.
    pub season: String,
    /// Validity period of the season.
    pub period: String,
    /// Route key.
    #[schema(example = "DagebullAmrum")]
    pub route: String,
    /// Departure harbour.
    pub origin: String,
    /// Arrival harbour.
    pub destination: String,
    /// Sailings; empty when the route does not run this season.
    pub departures: Vec<DepartureView>,
}

/// Fetch the full ferry timetable.
#[utoipa::path(
    get,
    path = "/api/v1/ferry",
    responses((status = 200, description = "Ferry timetable", body = serde_json::Value)),
    tags = ["ferry"],
    operation_id = "getFerrySchedule"
)]
#[get("/ferry")]
pub async fn get_ferry_schedule(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok()
        .insert_header(public_content_header())
        .json(state.content.ferry_schedule()))
}

/// Fetch the departures for one route in one season.
#[utoipa::path(
    get,
    path = "/api/v1/ferry/{season}/{route}",
    params(
        ("season" = String, Path, description = "Season name, case-insensitive", example = "Sommer"),
        ("route" = String, Path, description = "Route key", example = "DagebullAmrum")
    ),
    responses(
        (status = 200, description = "Departures", body = RouteDeparturesResponse),
        (status = 400, description = "Unknown route key", body = ErrorEnvelopeSchema),
        (status = 404, description = "Unknown season", body = ErrorEnvelopeSchema)
    ),
    tags = ["ferry"],
    operation_id = "getFerryDepartures"
)]
#[get("/ferry/{season}/{route}")]
pub async fn get_ferry_departures(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (season_name, raw_route) = path.into_inner();
    let route: FerryRoute = raw_route.parse().map_err(|err| {
        Error::invalid_request(format!("{err}")).with_details(serde_json::json!({
            "route": raw_route,
            "supported": FerryRoute::ALL.iter().map(|r| r.as_str()).collect::<Vec<_>>(),
        }))
    })?;
    let schedule = state.content.ferry_schedule();
    let season = state
        .content
        .ferry_season(&season_name)
        .ok_or_else(|| Error::not_found(format!("ferry season {season_name} not found")))?;

    let departures = season
        .departures(route)
        .iter()
        .map(|departure| DepartureView {
            time: departure.time.format("%H:%M").to_string(),
            note: departure.note.clone(),
            note_text: departure
                .note
                .as_deref()
                .and_then(|code| schedule.note(code))
                .map(str::to_owned),
        })
        .collect();

    Ok(HttpResponse::Ok()
        .insert_header(public_content_header())
        .json(RouteDeparturesResponse {
            season: season.name.clone(),
            period: season.period.clone(),
            route: route.as_str().to_owned(),
            origin: route.origin().to_owned(),
            destination: route.destination().to_owned(),
            departures,
        }))
}
