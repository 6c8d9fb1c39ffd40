pub mod memory;
pub mod mongo;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::{Result, ShortenerError};
use crate::models::url::UrlMapping;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Key-value registry holding one [`UrlMapping`] per short code.
///
/// Every method is a single-key operation the backend performs atomically;
/// callers never lock around them.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Insert `mapping` under `code` unless the code is taken.
    /// Returns `false` when a mapping already exists.
    async fn put_if_absent(&self, code: &str, mapping: &UrlMapping) -> Result<bool>;

    async fn get(&self, code: &str) -> Result<Option<UrlMapping>>;

    /// Add one to `click_count` and stamp `last_accessed`. Unknown codes are ignored.
    async fn increment_click(&self, code: &str) -> Result<()>;

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Run one store call under `timeout`, mapping expiry to `StoreUnavailable`.
pub async fn within<T, F>(timeout: Duration, op: &str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => Err(ShortenerError::StoreUnavailable(format!(
            "{} timed out after {}ms",
            op,
            timeout.as_millis()
        ))),
    }
}

/// Like [`within`], but a failed attempt is retried exactly once.
/// Only for idempotent calls.
pub async fn within_retry_once<T, F, Fut>(timeout: Duration, op: &str, mut call: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match within(timeout, op, call()).await {
        Err(ShortenerError::StoreUnavailable(reason)) => {
            log::warn!("{} failed ({}), retrying once", op, reason);
            within(timeout, op, call()).await
        }
        other => other,
    }
}
