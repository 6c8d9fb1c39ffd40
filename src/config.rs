use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::services::shortener::DEFAULT_MAX_ATTEMPTS;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, MIN_CODE_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    MongoDb { uri: String, database: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: String,
    pub port: u16,
    pub base_url: String,
    pub store: StoreBackend,
    pub url_table: String,
    pub code_length: usize,
    pub max_attempts: usize,
    pub store_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = parse_or(&get, "PORT", 8080u16)?;
        let bind_address = get("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1".to_string());
        let base_url = get("BASE_URL").unwrap_or_else(|| format!("http://localhost:{}", port));

        let mongodb_uri = get("MONGODB_URI");
        let backend = get("STORE_BACKEND").map(|v| v.to_ascii_lowercase());
        let store = match (backend.as_deref(), mongodb_uri) {
            (Some("memory"), _) | (None, None) => StoreBackend::Memory,
            (Some("mongodb") | None, Some(uri)) => StoreBackend::MongoDb {
                uri,
                database: get("MONGODB_DATABASE").unwrap_or_else(|| "urlsnip".to_string()),
            },
            (Some("mongodb"), None) => bail!("STORE_BACKEND=mongodb requires MONGODB_URI"),
            (Some(other), _) => bail!("Unknown STORE_BACKEND: {}", other),
        };

        let url_table = get("URL_TABLE").unwrap_or_else(|| "urls".to_string());

        let code_length = parse_or(&get, "CODE_LENGTH", DEFAULT_CODE_LENGTH)?;
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code_length) {
            bail!(
                "CODE_LENGTH must be between {} and {}, got {}",
                MIN_CODE_LENGTH,
                MAX_CODE_LENGTH,
                code_length
            );
        }

        let max_attempts = parse_or(&get, "MAX_CODE_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?;
        if max_attempts == 0 {
            bail!("MAX_CODE_ATTEMPTS must be at least 1");
        }

        let timeout_ms = parse_or(&get, "STORE_TIMEOUT_MS", 3000u64)?;

        Ok(Self {
            bind_address,
            port,
            base_url,
            store,
            url_table,
            code_length,
            max_attempts,
            store_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_in_memory_store() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.url_table, "urls");
        assert_eq!(config.code_length, 6);
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.store_timeout, Duration::from_millis(3000));
    }

    #[test]
    fn picks_mongodb_when_uri_present() {
        let config = config_from(&[
            ("MONGODB_URI", "mongodb://localhost:27017"),
            ("MONGODB_DATABASE", "links"),
        ])
        .unwrap();
        assert_eq!(
            config.store,
            StoreBackend::MongoDb {
                uri: "mongodb://localhost:27017".into(),
                database: "links".into(),
            }
        );

        let forced = config_from(&[
            ("MONGODB_URI", "mongodb://localhost:27017"),
            ("STORE_BACKEND", "memory"),
        ])
        .unwrap();
        assert_eq!(forced.store, StoreBackend::Memory);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("CODE_LENGTH", "2")]).is_err());
        assert!(config_from(&[("CODE_LENGTH", "9")]).is_err());
        assert!(config_from(&[("MAX_CODE_ATTEMPTS", "0")]).is_err());
        assert!(config_from(&[("STORE_BACKEND", "mongodb")]).is_err());
        assert!(config_from(&[("STORE_BACKEND", "dynamo")]).is_err());
    }

    #[test]
    fn base_url_follows_port_unless_set() {
        let config = config_from(&[("PORT", "9000")]).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");

        let config = config_from(&[("BASE_URL", "https://sn.ip")]).unwrap();
        assert_eq!(config.base_url, "https://sn.ip");
    }
}
