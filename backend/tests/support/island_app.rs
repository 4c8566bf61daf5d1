//! Shared application harness for island guide integration suites.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use camino::Utf8PathBuf;
use island_guide::Trace;
use island_guide::domain::{ContentStore, IslandDataService};
use island_guide::inbound::http::configure;
use island_guide::inbound::http::health::{HealthState, live, ready};
use island_guide::inbound::http::state::{HttpState, HttpStatePorts};
use island_guide::outbound::fixtures::load_content_store;
use island_guide::outbound::memory::{InMemoryEventRepository, InMemoryLocationRepository};
use serde_json::Value;

/// Fixtures shipped with the backend.
pub(crate) fn shipped_fixtures_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Content store built from the shipped fixtures.
pub(crate) fn shipped_content() -> Arc<ContentStore> {
    Arc::new(load_content_store(&shipped_fixtures_dir()).expect("shipped fixtures are valid"))
}

/// HTTP state over the shipped fixtures with empty in-memory gateway stores.
pub(crate) fn http_state() -> web::Data<HttpState> {
    let service = Arc::new(IslandDataService::new(
        Arc::new(InMemoryEventRepository::default()),
        Arc::new(InMemoryLocationRepository::default()),
    ));
    web::Data::new(HttpState::new(
        shipped_content(),
        HttpStatePorts {
            island_data: service.clone(),
            island_data_command: service,
        },
    ))
}

/// Initialise the full application as the server wires it, minus Swagger.
pub(crate) async fn init_app(
    state: web::Data<HttpState>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    test::init_service(
        App::new()
            .app_data(health)
            .app_data(state)
            .wrap(Trace)
            .configure(configure)
            .service(ready)
            .service(live),
    )
    .await
}

/// Response status, selected headers and decoded JSON body.
pub(crate) struct JsonResponse {
    pub(crate) status: StatusCode,
    pub(crate) cache_control: Option<String>,
    pub(crate) trace_id: Option<String>,
    pub(crate) body: Value,
}

/// Send `req` and decode the JSON body.
pub(crate) async fn send<S>(app: &S, req: test::TestRequest) -> JsonResponse
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let res = test::call_service(app, req.to_request()).await;
    let header = |name: &str| {
        res.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    let status = res.status();
    let cache_control = header("cache-control");
    let trace_id = header("trace-id");
    let bytes = test::read_body(res).await;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    JsonResponse {
        status,
        cache_control,
        trace_id,
        body,
    }
}

/// Identifiers of the objects in a JSON array.
pub(crate) fn ids(array: &Value) -> Vec<String> {
    array
        .as_array()
        .expect("JSON array")
        .iter()
        .map(|item| item["id"].as_str().expect("string id").to_owned())
        .collect()
}
