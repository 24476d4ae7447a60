use std::sync::Arc;

use ideas_db::Store;

use crate::config::ServerConfig;
use crate::services::{AccountDirectory, IdeaLedger};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The store both services were built over; kept for health checks and
    /// shutdown.
    pub store: Arc<dyn Store>,
    pub accounts: Arc<AccountDirectory>,
    pub ideas: Arc<IdeaLedger>,
}

impl AppState {
    /// Wire both services to the same explicitly constructed store.
    pub fn new<S: Store + 'static>(config: ServerConfig, store: Arc<S>) -> Self {
        let accounts = AccountDirectory::new(store.clone(), config.min_password_length);
        let ideas = IdeaLedger::new(store.clone());

        Self {
            config: Arc::new(config),
            store,
            accounts: Arc::new(accounts),
            ideas: Arc::new(ideas),
        }
    }
}
