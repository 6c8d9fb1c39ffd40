use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::{Collection, Database};

use crate::errors::Result;
use crate::models::url::UrlMapping;
use crate::store::RegistryStore;

const DUPLICATE_KEY: i32 = 11000;

/// Registry backed by a MongoDB collection.
///
/// The short code is the document `_id`, so the primary-key index gives
/// create-if-absent for free.
pub struct MongoStore {
    db: Database,
    urls: Collection<UrlMapping>,
}

impl MongoStore {
    pub fn new(db: Database, collection: &str) -> Self {
        let urls = db.collection::<UrlMapping>(collection);
        Self { db, urls }
    }
}

fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

#[async_trait]
impl RegistryStore for MongoStore {
    async fn put_if_absent(&self, code: &str, mapping: &UrlMapping) -> Result<bool> {
        debug_assert_eq!(code, mapping.short_code);
        match self.urls.insert_one(mapping).await {
            Ok(_) => Ok(true),
            Err(e) if is_duplicate_key(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn get(&self, code: &str) -> Result<Option<UrlMapping>> {
        Ok(self.urls.find_one(doc! { "_id": code }).await?)
    }

    async fn increment_click(&self, code: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        self.urls
            .update_one(
                doc! { "_id": code },
                doc! {
                    "$inc": { "click_count": 1_i64 },
                    "$set": { "last_accessed": now },
                },
            )
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
