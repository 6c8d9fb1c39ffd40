use actix_cors::Cors;
use actix_web::{HttpResponse, error, http, web};

use crate::handlers::health_handlers::health_check;
use crate::handlers::url_handlers::{create_short_url, get_url_analytics, redirect_to_url};

/// Reject unparsable bodies with the same JSON error shape as other failures
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::error!("Invalid JSON in request body: {}", err);
        let response = HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "Invalid JSON in request body" }));
        error::InternalError::from_response(err, response).into()
    })
}

/// Allow all origins for the static frontend
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["POST", "GET", "OPTIONS"])
        .allowed_headers(vec![http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
        .max_age(3600)
}

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.service(
        web::scope("/api")
            .route("/health/check", web::get().to(health_check))
            .route("/analytics/{short_code}", web::get().to(get_url_analytics)),
    );
    cfg.route("/", web::post().to(create_short_url));
    // Redirect route last so it never shadows the API scope
    cfg.route("/{short_code}", web::get().to(redirect_to_url));
}
