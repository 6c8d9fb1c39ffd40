use actix_web::{HttpResponse, Responder, Result, http, web};

use crate::state::app_state::AppState;
use crate::structs::url_request::{UrlAnalyticsResponse, UrlRequest, UrlResponse};

/// Create a shortened URL
pub async fn create_short_url(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<UrlRequest>,
) -> Result<impl Responder> {
    let shortened = app_state.shortener.create_short_url(&req.long_url).await?;
    Ok(HttpResponse::Ok().json(UrlResponse::from(shortened)))
}

/// Redirect to original URL
pub async fn redirect_to_url(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let code = path.into_inner();

    match app_state.redirector.resolve(&code).await {
        Ok(long_url) => HttpResponse::MovedPermanently()
            .append_header((http::header::LOCATION, long_url))
            .append_header((
                http::header::CACHE_CONTROL,
                "no-cache, no-store, must-revalidate",
            ))
            .append_header((http::header::PRAGMA, "no-cache"))
            .append_header((http::header::EXPIRES, "0"))
            .finish(),
        Err(e) => e.timestamped_response(),
    }
}

/// Get analytics for a specific URL
pub async fn get_url_analytics(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let code = path.into_inner();

    match app_state.redirector.stats(&code).await {
        Ok(mapping) => HttpResponse::Ok().json(UrlAnalyticsResponse::from(mapping)),
        Err(e) => e.timestamped_response(),
    }
}
