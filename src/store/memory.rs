use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::Result;
use crate::models::url::UrlMapping;
use crate::store::RegistryStore;

/// Process-local registry. Suitable for a single instance and for tests.
#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<HashMap<String, UrlMapping>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl RegistryStore for MemoryStore {
    async fn put_if_absent(&self, code: &str, mapping: &UrlMapping) -> Result<bool> {
        match self.rows.write().await.entry(code.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(mapping.clone());
                Ok(true)
            }
        }
    }

    async fn get(&self, code: &str) -> Result<Option<UrlMapping>> {
        Ok(self.rows.read().await.get(code).cloned())
    }

    async fn increment_click(&self, code: &str) -> Result<()> {
        if let Some(mapping) = self.rows.write().await.get_mut(code) {
            mapping.record_click(Utc::now());
        }
        Ok(())
    }
}
