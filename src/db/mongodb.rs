use std::time::Duration;

use anyhow::{Context, Result};
use mongodb::{Client, Database, options::ClientOptions};

/// Connect to MongoDB and return a handle to the named database.
pub async fn get_database(uri: &str, name: &str, timeout: Duration) -> Result<Database> {
    let mut options = ClientOptions::parse(uri)
        .await
        .context("Failed to parse MONGODB_URI")?;
    options.app_name = Some("urlsnip".to_string());
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    let client = Client::with_options(options).context("Failed to create MongoDB client")?;
    Ok(client.database(name))
}
