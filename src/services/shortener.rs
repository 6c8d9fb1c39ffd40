use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{error, info, warn};

use crate::errors::{Result, ShortenerError};
use crate::models::url::UrlMapping;
use crate::store::{RegistryStore, within};
use crate::utils::code_generator::{CodeGenerator, is_reserved_code};
use crate::utils::url_validator::is_valid_long_url;

pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Outcome of a successful shortening.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortenedUrl {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

/// Mints short codes and persists new mappings.
///
/// Every call writes a fresh mapping, so submitting the same long URL twice
/// yields two distinct codes.
pub struct ShorteningService {
    store: Arc<dyn RegistryStore>,
    generator: Arc<dyn CodeGenerator>,
    base_url: String,
    max_attempts: usize,
    store_timeout: Duration,
}

impl ShorteningService {
    pub fn new(
        store: Arc<dyn RegistryStore>,
        generator: Arc<dyn CodeGenerator>,
        base_url: &str,
        max_attempts: usize,
        store_timeout: Duration,
    ) -> Self {
        Self {
            store,
            generator,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_attempts: max_attempts.max(1),
            store_timeout,
        }
    }

    pub fn short_url_for(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    pub async fn create_short_url(&self, long_url: &str) -> Result<ShortenedUrl> {
        let long_url = long_url.trim();
        if long_url.is_empty() {
            return Err(ShortenerError::InvalidInput(
                "long_url is required".to_string(),
            ));
        }
        if !is_valid_long_url(long_url) {
            return Err(ShortenerError::invalid_url());
        }

        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate_code(long_url);
            if is_reserved_code(&code) {
                warn!("Skipping reserved short code {} (attempt {})", code, attempt);
                continue;
            }
            let mapping = UrlMapping::new(code.clone(), long_url.to_string());

            // No retry on timeout: the write may have landed.
            let inserted = within(
                self.store_timeout,
                "put_if_absent",
                self.store.put_if_absent(&code, &mapping),
            )
            .await
            .inspect_err(|e| error!("Failed to store mapping for {}: {}", code, e))?;

            if inserted {
                let short_url = self.short_url_for(&code);
                info!("Created short URL: {} for {}", short_url, long_url);
                return Ok(ShortenedUrl {
                    short_code: code,
                    short_url,
                    long_url: mapping.long_url,
                    created_at: mapping.created_at,
                });
            }

            warn!("Short code collision on {} (attempt {})", code, attempt);
        }

        error!(
            "Unable to generate unique short code after {} attempts",
            self.max_attempts
        );
        Err(ShortenerError::CapacityExhausted(self.max_attempts))
    }
}
