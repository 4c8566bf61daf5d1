//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod state_builders;

pub use config::ServerConfig;
#[cfg(feature = "metrics")]
use metrics::make_metrics;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use island_guide::Trace;
#[cfg(debug_assertions)]
use island_guide::doc::ApiDoc;
use island_guide::inbound::http::configure;
use island_guide::inbound::http::health::{HealthState, live, ready};
use island_guide::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use state_builders::build_http_state;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the HTTP server and mark `health_state` ready once bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(config.content, config.db_pool.as_ref());
    #[cfg(feature = "metrics")]
    let prometheus = make_metrics()?;

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
