//! List and detail endpoints for accommodations, restaurants, beaches and
//! activities.
//!
//! ```text
//! GET /api/v1/accommodations?search=&category=&features=&layout=
//! GET /api/v1/accommodations/{id}
//! GET /api/v1/restaurants?...&cuisine=
//! GET /api/v1/restaurants/{id}
//! GET /api/v1/beaches?...&seasons=
//! GET /api/v1/beaches/{id}
//! GET /api/v1/activities?...&seasons=
//! GET /api/v1/activities/{id}
//! ```

use std::sync::Arc;

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    Error, Filterable, ListLayout, ListView, TagGroup, distinct_categories, distinct_tags,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::public_content_header;
use crate::inbound::http::query::ListQuery;
use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use crate::inbound::http::state::HttpState;

pub(crate) fn to_json_value<T: Serialize>(value: T) -> Result<serde_json::Value, Error> {
    serde_json::to_value(value).map_err(|err| Error::internal(err.to_string()))
}

/// Values a client can offer as filter choices for a listing.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Distinct categories in collection order.
    pub categories: Vec<String>,
    /// Distinct features, when the listing carries them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    /// Distinct seasons, when the listing carries them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasons: Option<Vec<String>>,
    /// Distinct cuisines, when the listing carries them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<Vec<String>>,
}

impl FilterOptions {
    fn collect<T: Filterable>(items: &[T]) -> Self {
        let group = |group: TagGroup| {
            T::TAG_GROUPS.contains(&group).then(|| {
                distinct_tags(items, group)
                    .into_iter()
                    .map(str::to_owned)
                    .collect()
            })
        };
        Self {
            categories: distinct_categories(items)
                .into_iter()
                .map(str::to_owned)
                .collect(),
            features: group(TagGroup::Features),
            seasons: group(TagGroup::Seasons),
            cuisine: group(TagGroup::Cuisine),
        }
    }
}

/// Filtered listing.
///
/// An empty `items` array with a non-zero `total` means the filters excluded
/// everything; clients offer a reset.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    /// Matching items in collection order.
    #[schema(value_type = Vec<serde_json::Value>)]
    pub items: serde_json::Value,
    /// Number of matching items.
    pub count: usize,
    /// Size of the unfiltered collection.
    pub total: usize,
    /// `true` when any filter was applied.
    pub filtered: bool,
    /// Layout echoed back for the client (`grid` or `list`).
    #[schema(value_type = String, example = "grid")]
    pub layout: ListLayout,
    /// Available filter values over the whole collection.
    pub filters: FilterOptions,
}

pub(crate) fn list_response<T>(items: &Arc<[T]>, query: &ListQuery) -> ApiResult<HttpResponse>
where
    T: Filterable + Serialize,
{
    let view = ListView::new(Arc::clone(items))
        .with_criteria(query.criteria_for::<T>()?)
        .with_layout(query.layout());
    let visible = view.visible();
    let response = ListResponse {
        count: visible.len(),
        items: to_json_value(&visible)?,
        total: view.total(),
        filtered: view.is_filtered(),
        layout: view.layout(),
        filters: FilterOptions::collect(view.all()),
    };
    Ok(HttpResponse::Ok()
        .insert_header(public_content_header())
        .json(response))
}

fn detail_response<T: Serialize>(kind: &str, id: &str, item: Option<&T>) -> ApiResult<HttpResponse> {
    let item = item.ok_or_else(|| {
        Error::not_found(format!("{kind} {id} not found"))
            .with_details(serde_json::json!({ "id": id }))
    })?;
    Ok(HttpResponse::Ok()
        .insert_header(public_content_header())
        .json(item))
}

/// List accommodations.
#[utoipa::path(
    get,
    path = "/api/v1/accommodations",
    params(ListQuery),
    responses(
        (status = 200, description = "Filtered accommodations", body = ListResponse),
        (status = 400, description = "Unsupported filter", body = ErrorEnvelopeSchema)
    ),
    tags = ["content"],
    operation_id = "listAccommodations"
)]
#[get("/accommodations")]
pub async fn list_accommodations(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    list_response(state.content.accommodations(), &query)
}

/// Fetch one accommodation.
#[utoipa::path(
    get,
    path = "/api/v1/accommodations/{id}",
    params(("id" = String, Path, description = "Accommodation id")),
    responses(
        (status = 200, description = "Accommodation", body = serde_json::Value),
        (status = 404, description = "Unknown id", body = ErrorEnvelopeSchema)
    ),
    tags = ["content"],
    operation_id = "getAccommodation"
)]
#[get("/accommodations/{id}")]
pub async fn get_accommodation(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    detail_response("accommodation", &id, state.content.accommodation_by_id(&id))
}

/// List restaurants.
#[utoipa::path(
    get,
    path = "/api/v1/restaurants",
    params(ListQuery),
    responses(
        (status = 200, description = "Filtered restaurants", body = ListResponse),
        (status = 400, description = "Unsupported filter", body = ErrorEnvelopeSchema)
    ),
    tags = ["content"],
    operation_id = "listRestaurants"
)]
#[get("/restaurants")]
pub async fn list_restaurants(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    list_response(state.content.restaurants(), &query)
}

/// Fetch one restaurant.
#[utoipa::path(
    get,
    path = "/api/v1/restaurants/{id}",
    params(("id" = String, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant", body = serde_json::Value),
        (status = 404, description = "Unknown id", body = ErrorEnvelopeSchema)
    ),
    tags = ["content"],
    operation_id = "getRestaurant"
)]
#[get("/restaurants/{id}")]
pub async fn get_restaurant(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    detail_response("restaurant", &id, state.content.restaurant_by_id(&id))
}

/// List beaches.
#[utoipa::path(
    get,
    path = "/api/v1/beaches",
    params(ListQuery),
    responses(
        (status = 200, description = "Filtered beaches", body = ListResponse),
        (status = 400, description = "Unsupported filter", body = ErrorEnvelopeSchema)
    ),
    tags = ["content"],
    operation_id = "listBeaches"
)]
#[get("/beaches")]
pub async fn list_beaches(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    list_response(state.content.beaches(), &query)
}

/// Fetch one beach.
#[utoipa::path(
    get,
    path = "/api/v1/beaches/{id}",
    params(("id" = String, Path, description = "Beach id")),
    responses(
        (status = 200, description = "Beach", body = serde_json::Value),
        (status = 404, description = "Unknown id", body = ErrorEnvelopeSchema)
    ),
    tags = ["content"],
    operation_id = "getBeach"
)]
#[get("/beaches/{id}")]
pub async fn get_beach(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    detail_response("beach", &id, state.content.beach_by_id(&id))
}

/// List activities.
#[utoipa::path(
    get,
    path = "/api/v1/activities",
    params(ListQuery),
    responses(
        (status = 200, description = "Filtered activities", body = ListResponse),
        (status = 400, description = "Unsupported filter", body = ErrorEnvelopeSchema)
    ),
    tags = ["content"],
    operation_id = "listActivities"
)]
#[get("/activities")]
pub async fn list_activities(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    list_response(state.content.activities(), &query)
}

/// Fetch one activity.
#[utoipa::path(
    get,
    path = "/api/v1/activities/{id}",
    params(("id" = String, Path, description = "Activity id")),
    responses(
        (status = 200, description = "Activity", body = serde_json::Value),
        (status = 404, description = "Unknown id", body = ErrorEnvelopeSchema)
    ),
    tags = ["content"],
    operation_id = "getActivity"
)]
#[get("/activities/{id}")]
pub async fn get_activity(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    detail_response("activity", &id, state.content.activity_by_id(&id))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::inbound::http::test_utils::{get_json, test_state};
    use actix_web::http::StatusCode;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn ids(body: &Value) -> Vec<&str> {
        body["items"]
            .as_array()
            .expect("items array")
            .iter()
            .filter_map(|item| item["id"].as_str())
            .collect()
    }

    #[actix_web::test]
    async fn unfiltered_listing_returns_everything() {
        let (status, body) = get_json(test_state(), "/api/v1/beaches").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], body["total"]);
        assert_eq!(body["filtered"], json!(false));
        assert_eq!(body["layout"], json!("grid"));
        assert_eq!(ids(&body), ["kniepsand", "hundestrand"]);
    }

    #[actix_web::test]
    async fn feature_filter_requires_every_feature() {
        let (_, body) = get_json(
            test_state(),
            "/api/v1/accommodations?features=WLAN,%20Sauna&layout=list",
        )
        .await;

        assert_eq!(ids(&body), ["seeblick"]);
        assert_eq!(body["layout"], json!("list"));
        assert_eq!(body["total"], json!(2));
    }

    #[rstest]
    #[case("/api/v1/restaurants?cuisine=Fisch,Regional", &["strandhalle"])]
    #[case("/api/v1/restaurants?cuisine=Italienisch,Fisch", &[])]
    #[case("/api/v1/restaurants?cuisine=Fisch", &["strandhalle"])]
    #[case("/api/v1/beaches?seasons=Herbst,Winter", &["hundestrand"])]
    #[case("/api/v1/beaches?seasons=Sommer,Herbst", &[])]
    #[actix_web::test]
    async fn tag_filters_require_every_selected_value(#[case] uri: &str, #[case] expected: &[&str]) {
        let (status, body) = get_json(test_state(), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), expected);
    }

    #[actix_web::test]
    async fn no_match_keeps_total_for_reset() {
        let (status, body) = get_json(test_state(), "/api/v1/activities?search=skipiste").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], json!(0));
        assert_eq!(body["total"], json!(1));
        assert_eq!(body["filtered"], json!(true));
    }

    #[actix_web::test]
    async fn unsupported_filter_is_rejected() {
        let (status, body) = get_json(test_state(), "/api/v1/beaches?cuisine=Fisch").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("invalid_request"));
        assert_eq!(body["status"], json!(400));
    }

    #[rstest]
    #[case("/api/v1/accommodations/seeblick", StatusCode::OK)]
    #[case("/api/v1/restaurants/pizzeria", StatusCode::OK)]
    #[case("/api/v1/beaches/kniepsand", StatusCode::OK)]
    #[case("/api/v1/activities/wattwanderung", StatusCode::OK)]
    #[case("/api/v1/beaches/unbekannt", StatusCode::NOT_FOUND)]
    #[actix_web::test]
    async fn detail_endpoints(#[case] uri: &str, #[case] expected: StatusCode) {
        let (status, body) = get_json(test_state(), uri).await;

        assert_eq!(status, expected);
        if expected == StatusCode::OK {
            assert_eq!(Some(body["id"].as_str().unwrap_or_default()), uri.rsplit('/').next());
        } else {
            assert_eq!(body["code"], json!("not_found"));
        }
    }

    #[actix_web::test]
    async fn filter_options_cover_the_whole_collection() {
        let (_, body) = get_json(test_state(), "/api/v1/beaches?seasons=Winter").await;

        assert_eq!(body["filters"]["categories"], json!(["Badestrand", "Hundestrand"]));
        assert!(body["filters"].get("cuisine").is_none());
        assert_eq!(ids(&body), ["hundestrand"]);
    }
}
