use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::repository::EmployeeRepo;

/// Shared application state available to all axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the repository sits behind an `Arc<RwLock>` so
/// each request gets single-operation atomicity and nothing more (last
/// write wins).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory record collection.
    pub repo: Arc<RwLock<EmployeeRepo>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State over a freshly seeded repository.
    pub fn seeded(config: ServerConfig) -> Self {
        Self {
            repo: Arc::new(RwLock::new(EmployeeRepo::seeded())),
            config: Arc::new(config),
        }
    }
}
