use std::path::Path;
use std::sync::Arc;

use crate::app::error::{ReaderError, Result};
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::{FeedClient, Fetcher};
use crate::registry::Registry;
use crate::store::FileStore;

pub struct AppContext {
    pub store: Arc<FileStore>,
    pub registry: Registry,
}

impl AppContext {
    /// Wire the application together from `config`. `data_dir` overrides the
    /// configured data directory.
    pub fn new(config: Config, data_dir: Option<&Path>) -> Result<Self> {
        let data_dir = config
            .data_dir(data_dir)
            .map_err(|e| ReaderError::Config(e.to_string()))?;

        let store = Arc::new(FileStore::open(&data_dir, config.storage.cache_naming)?);
        let fetcher: Arc<dyn Fetcher + Send + Sync> =
            Arc::new(HttpFetcher::with_config(&config.http)?);
        let registry = Registry::new(store.clone(), FeedClient::new(fetcher));

        Ok(Self { store, registry })
    }

    /// Load the configuration from `config_path`, or from the default location
    /// when none is given, then wire the application.
    pub fn load(config_path: Option<&Path>, data_dir: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .map_err(|e| ReaderError::Config(e.to_string()))?;

        Self::new(config, data_dir)
    }
}
