use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::url::UrlMapping;
use crate::services::ShortenedUrl;

#[derive(Deserialize, Serialize, Debug)]
pub struct UrlRequest {
    #[serde(default)]
    pub long_url: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UrlResponse {
    pub short_url: String,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<ShortenedUrl> for UrlResponse {
    fn from(shortened: ShortenedUrl) -> Self {
        Self {
            short_url: shortened.short_url,
            short_code: shortened.short_code,
            long_url: shortened.long_url,
            created_at: shortened.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UrlAnalyticsResponse {
    pub short_code: String,
    pub long_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_accessed: Option<DateTime<Utc>>,
}

impl From<UrlMapping> for UrlAnalyticsResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            short_code: mapping.short_code,
            long_url: mapping.long_url,
            click_count: mapping.click_count,
            created_at: mapping.created_at,
            last_accessed: mapping.last_accessed,
        }
    }
}
