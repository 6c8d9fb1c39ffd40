use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UrlMapping {
    #[serde(rename = "_id")]
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub click_count: i64, // Number of successful redirects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed: Option<DateTime<Utc>>,
}

impl UrlMapping {
    pub fn new(short_code: String, long_url: String) -> Self {
        Self {
            short_code,
            long_url,
            created_at: Utc::now(),
            click_count: 0,
            last_accessed: None,
        }
    }

    /// Record one successful redirect.
    pub fn record_click(&mut self, at: DateTime<Utc>) {
        self.click_count += 1;
        self.last_accessed = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mapping_starts_unvisited() {
        let mapping = UrlMapping::new("abc123".into(), "https://example.com".into());
        assert_eq!(mapping.click_count, 0);
        assert!(mapping.last_accessed.is_none());
    }

    #[test]
    fn record_click_bumps_counter_and_timestamp() {
        let mut mapping = UrlMapping::new("abc123".into(), "https://example.com".into());
        let now = Utc::now();
        mapping.record_click(now);
        mapping.record_click(now);
        assert_eq!(mapping.click_count, 2);
        assert_eq!(mapping.last_accessed, Some(now));
    }

    #[test]
    fn short_code_is_stored_as_document_id() {
        let mapping = UrlMapping::new("abc123".into(), "https://example.com".into());
        let value = serde_json::to_value(&mapping).unwrap();
        assert_eq!(value["_id"], "abc123");
        assert!(value.get("last_accessed").is_none());
    }
}
