//! End-to-end coverage for the read-only content endpoints over the shipped
//! fixtures.

#[path = "support/island_app.rs"]
mod app;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use app::{JsonResponse, http_state, ids, init_app, send};
use rstest::rstest;
use serde_json::json;

async fn get(uri: &str) -> JsonResponse {
    let app = init_app(http_state()).await;
    send(&app, TestRequest::get().uri(uri)).await
}

#[rstest]
#[case("/api/v1/accommodations?features=WLAN,Meerblick", &["hotel-seeblick", "strandhotel-kniep"])]
#[case("/api/v1/accommodations?category=Ferienwohnung", &["friesenhaus-am-deich", "duenenhof-sueddorf"])]
#[case("/api/v1/accommodations?search=KNIEP", &["strandhotel-kniep"])]
#[case("/api/v1/restaurants?cuisine=Fisch", &["strandhalle-norddorf", "friesenstube-sueddorf"])]
#[case("/api/v1/beaches?seasons=Winter", &["hundestrand-norddorf", "wattseite-steenodde"])]
#[case("/api/v1/activities?category=Natur&seasons=Sommer", &["wattwanderung-foehr"])]
#[actix_web::test]
async fn list_filters_keep_collection_order(#[case] uri: &str, #[case] expected: &[&str]) {
    let res = get(uri).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(ids(&res.body["items"]), expected);
    assert_eq!(res.body["count"], json!(expected.len()));
    assert_eq!(res.body["filtered"], json!(true));
}

#[actix_web::test]
async fn unfiltered_listing_reports_totals_and_filter_choices() {
    let res = get("/api/v1/accommodations?layout=list").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["count"], json!(6));
    assert_eq!(res.body["total"], json!(6));
    assert_eq!(res.body["filtered"], json!(false));
    assert_eq!(res.body["layout"], json!("list"));
    assert_eq!(res.body["filters"]["categories"][0], json!("Hotel"));
    assert!(res.body["filters"].get("cuisine").is_none());
    assert_eq!(res.cache_control.as_deref(), Some("public, max-age=300"));
}

#[actix_web::test]
async fn filters_that_exclude_everything_return_an_empty_page() {
    let res = get("/api/v1/beaches?search=zugspitze").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["items"], json!([]));
    assert_eq!(res.body["total"], json!(5));
}

#[actix_web::test]
async fn unsupported_tag_group_is_a_bad_request() {
    let res = get("/api/v1/accommodations?seasons=Sommer").await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], json!("invalid_request"));
    assert_eq!(res.body["details"]["parameter"], json!("seasons"));
}

#[actix_web::test]
async fn detail_lookup_returns_the_item() {
    let res = get("/api/v1/restaurants/teestube-nebel").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["id"], json!("teestube-nebel"));
}

#[actix_web::test]
async fn missing_item_uses_error_envelope_with_trace_id() {
    let res = get("/api/v1/beaches/ostsee").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["code"], json!("not_found"));
    assert_eq!(res.body["status"], json!(404));
    let trace_id = res.trace_id.expect("trace-id header");
    assert_eq!(res.body["traceId"], json!(trace_id));
}

#[actix_web::test]
async fn blog_posts_are_newest_first_with_stable_ties() {
    let res = get("/api/v1/blog").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(ids(&res.body["posts"]), ["3", "1", "5", "2", "4"]);
    assert_eq!(res.body["total"], json!(5));
}

#[rstest]
#[case("/api/v1/blog?tag=Wandern", &["3", "1"])]
#[case("/api/v1/blog?tag=wandern", &[])]
#[case("/api/v1/blog?limit=2", &["3", "1"])]
#[case("/api/v1/blog?tag=Friesisch&limit=1", &["2"])]
#[actix_web::test]
async fn blog_listing_filters(#[case] uri: &str, #[case] expected: &[&str]) {
    let res = get(uri).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(ids(&res.body["posts"]), expected);
    assert_eq!(res.body["count"], json!(expected.len()));
}

#[actix_web::test]
async fn blog_tags_are_distinct_and_sorted() {
    let res = get("/api/v1/blog/tags").await;

    let tags: Vec<String> =
        serde_json::from_value(res.body["tags"].clone()).expect("tags are strings");
    let mut sorted = tags.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(tags, sorted);
    assert!(tags.iter().any(|tag| tag == "Wandern"));
}

#[actix_web::test]
async fn blog_post_is_found_by_slug() {
    let res = get("/api/v1/blog/biikebrennen").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["id"], json!("4"));
}

#[actix_web::test]
async fn ferry_departures_resolve_note_codes() {
    let res = get("/api/v1/ferry/sommer/DagebullAmrum").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["season"], json!("Sommer"));
    assert_eq!(res.body["origin"], json!("Dagebüll"));
    let departures = res.body["departures"].as_array().expect("departures");
    assert_eq!(departures.len(), 4);
    assert_eq!(departures[1], json!({"time": "10:15", "note": "S", "noteText": "nur samstags"}));
    assert!(departures[0].get("note").is_none());
}

#[rstest]
#[case("/api/v1/ferry/Sommer/HusumAmrum", StatusCode::BAD_REQUEST, "invalid_request")]
#[case("/api/v1/ferry/Herbst/DagebullAmrum", StatusCode::NOT_FOUND, "not_found")]
#[actix_web::test]
async fn ferry_lookup_errors(#[case] uri: &str, #[case] status: StatusCode, #[case] code: &str) {
    let res = get(uri).await;

    assert_eq!(res.status, status);
    assert_eq!(res.body["code"], json!(code));
}
