use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[derive(Debug, Error)]
pub enum ShortenerError {
    /// Malformed or missing long URL
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid short code format")]
    InvalidCode,

    #[error("Short URL not found")]
    NotFound,

    /// Every candidate code collided with an existing mapping
    #[error("unable to mint a unique short code after {0} attempts")]
    CapacityExhausted(usize),

    /// Backing store timed out or returned an error
    #[error("registry store unavailable: {0}")]
    StoreUnavailable(String),
}

impl ShortenerError {
    pub fn invalid_url() -> Self {
        ShortenerError::InvalidInput("Invalid URL format".to_string())
    }

    /// Message safe to return to clients. Server-side failures never leak detail.
    pub fn public_message(&self) -> String {
        match self {
            ShortenerError::CapacityExhausted(_) | ShortenerError::StoreUnavailable(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Error body carrying the time of failure, as returned by lookup endpoints.
    pub fn timestamped_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.public_message(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }
}

impl ResponseError for ShortenerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ShortenerError::InvalidInput(_) | ShortenerError::InvalidCode => {
                StatusCode::BAD_REQUEST
            }
            ShortenerError::NotFound => StatusCode::NOT_FOUND,
            ShortenerError::CapacityExhausted(_) | ShortenerError::StoreUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.public_message() }))
    }
}

impl From<mongodb::error::Error> for ShortenerError {
    fn from(e: mongodb::error::Error) -> Self {
        ShortenerError::StoreUnavailable(format!("Database error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(ShortenerError::invalid_url().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ShortenerError::InvalidCode.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ShortenerError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ShortenerError::CapacityExhausted(10).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ShortenerError::StoreUnavailable("timeout".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn hides_internal_detail_from_clients() {
        let err = ShortenerError::StoreUnavailable("connection refused at 10.0.0.3".into());
        assert_eq!(err.public_message(), "Internal server error");
        assert!(err.to_string().contains("connection refused"));

        assert_eq!(ShortenerError::invalid_url().public_message(), "Invalid URL format");
        assert_eq!(ShortenerError::NotFound.public_message(), "Short URL not found");
    }
}
