//! Storage layer for FinOrden
//!
//! A durable key-value store holds the movement list as one JSON document.
//! The [`PersistenceGateway`] wraps it with the load fallback chain
//! (store, seed resource, built-in demo data) and best-effort saving.

pub mod demo;
pub mod file_io;
pub mod gateway;
pub mod seed;
pub mod store;

pub use demo::default_movements;
pub use gateway::{LoadOutcome, LoadSource, PersistenceGateway, STORAGE_KEY};
pub use seed::{seed_source_for, FileSeed, HttpSeed, SeedSource};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::config::paths::FinordenPaths;
use crate::config::settings::Settings;
use crate::error::FinordenError;

/// Build the gateway for an installation: file store under the data
/// directory, seed taken from settings
pub fn open_gateway(
    paths: &FinordenPaths,
    settings: &Settings,
) -> Result<PersistenceGateway, FinordenError> {
    paths.ensure_directories()?;

    let store = FileStore::new(paths.store_dir());
    let seed = seed_source_for(&settings.seed_source, settings.seed_timeout());

    Ok(PersistenceGateway::new(Box::new(store), seed))
}
