use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{RedirectService, ShorteningService};
use crate::store::RegistryStore;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

pub struct AppState {
    pub shortener: ShorteningService,
    pub redirector: RedirectService,
    pub store: Arc<dyn RegistryStore>,
}

impl AppState {
    pub fn new(config: &AppConfig, store: Arc<dyn RegistryStore>) -> Self {
        let generator = Arc::new(RandomCodeGenerator::new(config.code_length));
        Self::with_generator(config, store, generator)
    }

    pub fn with_generator(
        config: &AppConfig,
        store: Arc<dyn RegistryStore>,
        generator: Arc<dyn CodeGenerator>,
    ) -> Self {
        Self {
            shortener: ShorteningService::new(
                store.clone(),
                generator,
                &config.base_url,
                config.max_attempts,
                config.store_timeout,
            ),
            redirector: RedirectService::new(store.clone(), config.store_timeout),
            store,
        }
    }
}
