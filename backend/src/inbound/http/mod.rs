//! HTTP inbound adapter exposing the island guide REST endpoints.

pub mod blog;
pub mod cache_control;
pub mod error;
pub mod ferry;
pub mod health;
pub mod island_data;
pub mod listings;
pub mod query;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use error::ApiResult;

/// Largest accepted gateway payload.
pub const JSON_PAYLOAD_LIMIT: usize = 1024 * 1024;

/// Register every `/api/v1` route plus the extractor error handlers.
///
/// # Examples
/// ```no_run
/// use actix_web::App;
/// use island_guide::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(
                web::JsonConfig::default()
                    .limit(JSON_PAYLOAD_LIMIT)
                    .error_handler(error::json_error_handler),
            )
            .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
            .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
            .service(listings::list_accommodations)
            .service(listings::get_accommodation)
            .service(listings::list_restaurants)
            .service(listings::get_restaurant)
            .service(listings::list_beaches)
            .service(listings::get_beach)
            .service(listings::list_activities)
            .service(listings::get_activity)
            .service(blog::list_blog_posts)
            .service(blog::list_blog_tags)
            .service(blog::get_blog_post)
            .service(ferry::get_ferry_schedule)
            .service(ferry::get_ferry_departures)
            .service(island_data::get_island_data)
            .service(island_data::replace_island_data),
    );
}
