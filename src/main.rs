//! Clearview boot binary.
//!
//! Loads configuration, wires the adapters, decides the launch route and
//! re-applies the stored font size for returning users.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clearview::adapters::{
    FileKeyValueStore, InMemoryKeyValueStore, KeyValueProfileStore, UnsupportedNativeSettings,
};
use clearview::application::AppState;
use clearview::config::{AppConfig, LoggingConfig, StorageBackend, StorageConfig};
use clearview::domain::onboarding::EntryRoute;
use clearview::ports::KeyValueStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let state = AppState::load(
        Arc::new(KeyValueProfileStore::new(key_value_store(&config.storage))),
        Arc::new(UnsupportedNativeSettings::new()),
        config.display.settings()?,
    )
    .await;

    let route = state.onboarding_gate().decide_entry_route().await;
    if route == EntryRoute::MainApp {
        let size = state.display.current();
        let outcome = state.applier.try_apply(size).await;
        tracing::info!(%outcome, "Restored font size {}", size);
    }

    println!("{}", route);
    Ok(())
}

fn key_value_store(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match config.backend {
        StorageBackend::File => {
            tracing::info!("Using file storage at {}", config.data_dir.display());
            Arc::new(FileKeyValueStore::new(&config.data_dir))
        }
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage");
            Arc::new(InMemoryKeyValueStore::new())
        }
    }
}

fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
