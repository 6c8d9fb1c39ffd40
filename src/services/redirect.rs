use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

use crate::errors::{Result, ShortenerError};
use crate::models::url::UrlMapping;
use crate::store::{RegistryStore, within, within_retry_once};
use crate::utils::code_generator::is_valid_short_code;

/// Resolves short codes and records clicks.
pub struct RedirectService {
    store: Arc<dyn RegistryStore>,
    store_timeout: Duration,
}

impl RedirectService {
    pub fn new(store: Arc<dyn RegistryStore>, store_timeout: Duration) -> Self {
        Self {
            store,
            store_timeout,
        }
    }

    /// Look up the target of `short_code` and count the visit.
    ///
    /// A failed click update is logged and otherwise ignored.
    pub async fn resolve(&self, short_code: &str) -> Result<String> {
        let mapping = self.lookup(short_code).await?;

        if let Err(e) = within(
            self.store_timeout,
            "increment_click",
            self.store.increment_click(short_code),
        )
        .await
        {
            warn!("Failed to update click count for {}: {}", short_code, e);
        }

        info!("Redirecting {} to {}", short_code, mapping.long_url);
        Ok(mapping.long_url)
    }

    /// Stored mapping with its analytics, without counting a visit.
    pub async fn stats(&self, short_code: &str) -> Result<UrlMapping> {
        self.lookup(short_code).await
    }

    async fn lookup(&self, short_code: &str) -> Result<UrlMapping> {
        if !is_valid_short_code(short_code) {
            warn!("Invalid short code format: {}", short_code);
            return Err(ShortenerError::InvalidCode);
        }

        let found = within_retry_once(self.store_timeout, "get", || {
            self.store.get(short_code)
        })
        .await?;

        found.ok_or_else(|| {
            info!("Short code not found: {}", short_code);
            ShortenerError::NotFound
        })
    }
}
