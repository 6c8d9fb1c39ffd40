use std::sync::Arc;

use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use urlsnip::config::{AppConfig, StoreBackend};
use urlsnip::db::mongodb::get_database;
use urlsnip::routes::{cors, init_routes};
use urlsnip::state::app_state::AppState;
use urlsnip::store::{MemoryStore, MongoStore, RegistryStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize the registry store
    let store: Arc<dyn RegistryStore> = match &config.store {
        StoreBackend::Memory => {
            info!("Using in-memory registry store");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::MongoDb { uri, database } => {
            match get_database(uri, database, config.store_timeout).await {
                Ok(db) => {
                    info!("Using MongoDB registry store {}.{}", database, config.url_table);
                    Arc::new(MongoStore::new(db, &config.url_table))
                }
                Err(e) => {
                    error!("Error connecting to the database: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let app_state = web::Data::new(AppState::new(&config, store));

    info!(
        "Listening on {}:{}, short URLs under {}",
        config.bind_address, config.port, config.base_url
    );

    HttpServer::new(move || {
        let logger = Logger::new("%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %D ms");
        App::new()
            .wrap(logger)
            .wrap(cors())
            .app_data(app_state.clone())
            .configure(init_routes)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
