//! Sri Maa content store.
//!
//! An in-memory content store and query layer for the Sri Maa devotional app:
//! six entity collections plus a saying-of-the-day singleton, populated from a
//! swappable content source and filtered at read time by the UI screens.

pub mod config;
pub mod errors;
pub mod models;
pub mod query;
pub mod services;
pub mod source;
pub mod store;

use config::Config;
use store::ContentStore;

/// Application context owned by the composition root and passed by reference
/// to every screen. No ambient singleton; the root decides who sees it.
#[derive(Debug)]
pub struct AppContext {
    pub store: ContentStore,
    pub config: Config,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            store: ContentStore::new(),
            config,
        }
    }
}

#[cfg(test)]
mod tests;
