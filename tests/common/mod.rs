#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use urlsnip::config::AppConfig;
use urlsnip::errors::{Result, ShortenerError};
use urlsnip::models::url::UrlMapping;
use urlsnip::store::{MemoryStore, RegistryStore};
use urlsnip::utils::code_generator::CodeGenerator;

pub const BASE_URL: &str = "https://sn.ip";

pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "BASE_URL" => Some(BASE_URL.to_string()),
        "STORE_TIMEOUT_MS" => Some("200".to_string()),
        _ => None,
    })
    .expect("test config")
}

/// Hands out a scripted list of codes, then repeats the last one.
pub struct ScriptedGenerator {
    codes: Mutex<VecDeque<String>>,
    last: Mutex<String>,
}

impl ScriptedGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            last: Mutex::new(codes.last().copied().unwrap_or("aaaaaa").to_string()),
        }
    }
}

impl CodeGenerator for ScriptedGenerator {
    fn generate_code(&self, _long_url: &str) -> String {
        match self.codes.lock().unwrap().pop_front() {
            Some(code) => code,
            None => self.last.lock().unwrap().clone(),
        }
    }
}

/// Memory store with injectable faults.
#[derive(Default)]
pub struct FaultyStore {
    pub inner: MemoryStore,
    pub fail_increments: bool,
    pub fail_ping: bool,
    pub put_delay: Option<Duration>,
    pub get_delay: Option<Duration>,
}

#[async_trait]
impl RegistryStore for FaultyStore {
    async fn put_if_absent(&self, code: &str, mapping: &UrlMapping) -> Result<bool> {
        if let Some(delay) = self.put_delay {
            tokio::time::sleep(delay).await;
        }
        self.inner.put_if_absent(code, mapping).await
    }

    async fn get(&self, code: &str) -> Result<Option<UrlMapping>> {
        if let Some(delay) = self.get_delay {
            tokio::time::sleep(delay).await;
        }
        self.inner.get(code).await
    }

    async fn increment_click(&self, code: &str) -> Result<()> {
        if self.fail_increments {
            return Err(ShortenerError::StoreUnavailable("analytics write failed".into()));
        }
        self.inner.increment_click(code).await
    }

    async fn ping(&self) -> Result<()> {
        if self.fail_ping {
            return Err(ShortenerError::StoreUnavailable("no primary".into()));
        }
        Ok(())
    }
}

pub fn memory_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

pub fn is_code_shape(code: &str, len: usize) -> bool {
    code.len() == len && code.chars().all(|c| c.is_ascii_alphanumeric())
}
