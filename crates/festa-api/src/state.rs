//! Application state.

use std::sync::Arc;

use festa_storage::BucketClient;

use crate::auth::SessionStore;
use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub storage: Arc<BucketClient>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Create new application state, reading storage settings from the
    /// environment.
    pub fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let storage = BucketClient::from_env()?;

        Ok(Self {
            config,
            storage: Arc::new(storage),
            sessions: Arc::new(SessionStore::new()),
        })
    }
}
