//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use crate::domain::{ContentCollections, ContentStore, IslandDataService};
use crate::inbound::http::configure;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::{InMemoryEventRepository, InMemoryLocationRepository};

fn from_json<T: serde::de::DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("test content deserialises")
}

/// Small content store covering every collection.
pub fn sample_content() -> ContentStore {
    ContentStore::new(ContentCollections {
        accommodations: from_json(json!([
            {"id": "seeblick", "name": "Hotel Seeblick", "type": "Hotel",
             "description": "Direkt am Deich", "location": "Norddorf",
             "features": ["WLAN", "Sauna", "Meerblick"], "rating": 4.5},
            {"id": "duenenhof", "name": "Dünenhof", "type": "Ferienwohnung",
             "description": "Ruhige Wohnung", "location": "Nebel", "features": ["WLAN"]}
        ])),
        restaurants: from_json(json!([
            {"id": "strandhalle", "name": "Strandhalle", "type": "Restaurant",
             "cuisine": ["Fisch", "Regional"], "description": "Mit Blick aufs Meer",
             "location": "Wittdün"},
            {"id": "teestube", "name": "Teestube", "type": "Café", "cuisine": ["Kuchen"],
             "description": "Friesentorte", "location": "Nebel"},
            {"id": "pizzeria", "name": "Pizzeria Nebel", "type": "Restaurant",
             "cuisine": ["Italienisch"], "description": "Steinofen", "location": "Nebel"}
        ])),
        beaches: from_json(json!([
            {"id": "kniepsand", "name": "Kniepsand", "type": "Badestrand",
             "description": "Breiter Sandstrand", "location": "Wittdün",
             "features": ["Strandkorbvermietung"], "seasons": ["Sommer"]},
            {"id": "hundestrand", "name": "Hundestrand Norddorf", "type": "Hundestrand",
             "description": "Hunde willkommen", "location": "Norddorf",
             "features": ["Hunde erlaubt"], "seasons": ["Frühling", "Herbst", "Winter"]}
        ])),
        activities: from_json(json!([
            {"id": "wattwanderung", "name": "Wattwanderung nach Föhr", "category": "Natur",
             "description": "Geführte Tour", "location": "Norddorf",
             "seasons": ["Sommer", "Herbst"], "duration": "4 Stunden"}
        ])),
        blog_posts: from_json(json!([
            {"id": "1", "slug": "leuchtturm-runde", "title": "Runde zum Leuchtturm",
             "excerpt": "", "content": "", "author": "Redaktion", "publishDate": "2023-09-10",
             "category": "Ausflüge", "tags": ["Wandern"]},
            {"id": "2", "slug": "kniepsand-wandern", "title": "Über den Kniepsand",
             "excerpt": "", "content": "", "author": "Redaktion", "publishDate": "2024-05-01",
             "category": "Natur", "tags": ["Wandern", "Natur"]},
            {"id": "3", "slug": "vogelzug", "title": "Vogelzug im Herbst",
             "excerpt": "", "content": "", "author": "Redaktion", "publishDate": "2024-10-01",
             "category": "Natur", "tags": ["Vögel", "Natur"]}
        ])),
        ferry: from_json(json!({
            "seasons": [
                {"name": "Sommer", "period": "01.04. – 31.10.", "routes": {
                    "DagebullAmrum": [{"time": "07:30"}, {"time": "10:15", "note": "S"}]
                }},
                {"name": "Winter", "period": "01.11. – 31.03.", "routes": {
                    "DagebullAmrum": [{"time": "09:30"}]
                }}
            ],
            "notes": {"S": "nur samstags"}
        })),
    })
    .expect("sample content is valid")
}

/// HTTP state over [`sample_content`] and fresh in-memory gateway stores.
pub fn test_state() -> web::Data<HttpState> {
    let service = Arc::new(IslandDataService::new(
        Arc::new(InMemoryEventRepository::default()),
        Arc::new(InMemoryLocationRepository::default()),
    ));
    web::Data::new(HttpState::new(
        Arc::new(sample_content()),
        HttpStatePorts {
            island_data: service.clone(),
            island_data_command: service,
        },
    ))
}

async fn call(state: web::Data<HttpState>, req: test::TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;
    let res = test::call_service(&app, req.to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// Issue a GET and decode the JSON body.
pub async fn get_json(state: web::Data<HttpState>, uri: &str) -> (StatusCode, Value) {
    call(state, test::TestRequest::get().uri(uri)).await
}

/// Issue a JSON POST and decode the JSON body.
pub async fn post_json(state: web::Data<HttpState>, uri: &str, body: Value) -> (StatusCode, Value) {
    call(state, test::TestRequest::post().uri(uri).set_json(body)).await
}
