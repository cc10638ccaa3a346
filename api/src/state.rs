use std::sync::Arc;

use common::config::Settings;
use common::db::{repositories::StudentRepository, DbConnector};

/// Application state shared across all handlers
///
/// Configuration is loaded once at startup and threaded through here; no
/// handler reads the environment directly.
#[derive(Clone, Debug)]
pub struct AppState {
    pub connector: DbConnector,
    pub config: Arc<Settings>,
}

impl AppState {
    /// Create a new AppState instance
    pub fn new(connector: DbConnector, config: Settings) -> Self {
        Self {
            connector,
            config: Arc::new(config),
        }
    }

    /// Build a student repository over this state's connection provider
    pub fn students(&self) -> StudentRepository {
        StudentRepository::new(self.connector.clone())
    }
}
