//! End-to-end coverage for the events and locations gateway backed by the
//! in-memory stores.

#[expect(
    dead_code,
    reason = "Shared harness exposes response fields this suite does not inspect."
)]
#[path = "support/island_app.rs"]
mod app;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use app::{http_state, ids, init_app, send};
use serde_json::{Value, json};

fn payload() -> Value {
    json!({
        "events": [
            {"id": "lesung", "title": "Lesung im Gemeindehaus", "date": "2024-08-02"},
            {"id": "markt", "title": "Kunsthandwerkermarkt", "date": "2024-07-12"},
            {"id": "konzert", "title": "Shantychor", "date": "2024-07-12", "time": "19:30",
             "location": "Kurmuschel Wittdün", "category": "Musik"},
            {"id": "fruehkonzert", "title": "Hafenkonzert", "date": "2024-07-12", "time": "10:00"}
        ],
        "locations": [
            {"id": "muehle", "name": "Windmühle Süddorf", "category": "Museum", "openingPeriods": [
                {"id": "m-sommer", "name": "Sommer", "days": "Mo–Sa", "hours": "10–12"},
                {"id": "m-winter", "name": "Winter", "days": "Mi", "hours": "14–16"}
            ]},
            {"id": "leuchtturm", "name": "Leuchtturm Amrum", "openingPeriods": [
                {"id": "l-sommer", "name": "Sommer", "days": "Mo–Fr", "hours": "09–12:30"}
            ]},
            {"id": "bibliothek", "name": "Inselbibliothek", "openingPeriods": []}
        ]
    })
}

#[actix_web::test]
async fn replaced_data_reads_back_in_display_order() {
    let app = init_app(http_state()).await;

    let saved = send(&app, TestRequest::post().uri("/api/v1/data").set_json(payload())).await;
    assert_eq!(saved.status, StatusCode::OK);
    assert_eq!(saved.body["_meta"]["eventCount"], json!(4));
    assert_eq!(saved.body["_meta"]["locationCount"], json!(3));

    let read = send(&app, TestRequest::get().uri("/api/v1/data")).await;
    assert_eq!(read.status, StatusCode::OK);
    assert_eq!(ids(&read.body["events"]), ["fruehkonzert", "konzert", "markt", "lesung"]);
    assert_eq!(ids(&read.body["locations"]), ["muehle", "leuchtturm", "bibliothek"]);
    assert!(read.body["_meta"]["generatedAt"].is_string());
}

#[actix_web::test]
async fn locations_own_their_opening_periods() {
    let app = init_app(http_state()).await;
    send(&app, TestRequest::post().uri("/api/v1/data").set_json(payload())).await;

    let read = send(&app, TestRequest::get().uri("/api/v1/data")).await;
    let muehle = &read.body["locations"][0];
    assert_eq!(ids(&muehle["openingPeriods"]), ["m-sommer", "m-winter"]);
    for period in muehle["openingPeriods"].as_array().expect("periods") {
        assert_eq!(period["locationId"], json!("muehle"));
    }
    assert_eq!(read.body["locations"][2]["openingPeriods"], json!([]));
}

#[actix_web::test]
async fn replacing_one_collection_leaves_the_other() {
    let app = init_app(http_state()).await;
    send(&app, TestRequest::post().uri("/api/v1/data").set_json(payload())).await;

    let saved = send(
        &app,
        TestRequest::post().uri("/api/v1/data").set_json(json!({"events": []})),
    )
    .await;
    assert_eq!(saved.status, StatusCode::OK);
    assert!(saved.body.get("locations").is_none());

    let read = send(&app, TestRequest::get().uri("/api/v1/data")).await;
    assert_eq!(read.body["events"], json!([]));
    assert_eq!(ids(&read.body["locations"]).len(), 3);
}

#[actix_web::test]
async fn invalid_payload_is_rejected_without_writing() {
    let app = init_app(http_state()).await;
    send(&app, TestRequest::post().uri("/api/v1/data").set_json(payload())).await;

    let rejected = send(
        &app,
        TestRequest::post().uri("/api/v1/data").set_json(json!({
            "events": [
                {"id": "dup", "title": "A", "date": "2024-07-01"},
                {"id": "dup", "title": "B", "date": "2024-07-02"}
            ]
        })),
    )
    .await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected.body["code"], json!("invalid_request"));

    let read = send(&app, TestRequest::get().uri("/api/v1/data")).await;
    assert_eq!(ids(&read.body["events"]).len(), 4);
}

#[actix_web::test]
async fn empty_replacement_body_is_a_bad_request() {
    let app = init_app(http_state()).await;

    let res = send(&app, TestRequest::post().uri("/api/v1/data").set_json(json!({}))).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["status"], json!(400));
}

#[actix_web::test]
async fn malformed_dates_fail_deserialisation() {
    let app = init_app(http_state()).await;

    let res = send(
        &app,
        TestRequest::post().uri("/api/v1/data").set_json(json!({
            "events": [{"id": "x", "title": "X", "date": "12.07.2024"}]
        })),
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], json!("invalid_request"));
}

#[actix_web::test]
async fn gateway_responses_are_not_cached() {
    let app = init_app(http_state()).await;

    let res = send(&app, TestRequest::get().uri("/api/v1/data")).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.cache_control.as_deref(), Some("no-store"));
    assert_eq!(res.body["events"], json!([]));
}

#[actix_web::test]
async fn readiness_probe_reports_ready() {
    let app = init_app(http_state()).await;

    let res = send(&app, TestRequest::get().uri("/health/ready")).await;

    assert_eq!(res.status, StatusCode::OK);
}
