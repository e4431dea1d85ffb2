//! Application state for the API server

use crate::Config;
use crate::service::LaunchQueries;
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// This struct is cloned for each request (cheap Arc clone).
#[derive(Clone)]
pub struct AppState {
    /// Launch use cases
    pub launches: Arc<dyn LaunchQueries>,

    /// Configuration (read-only)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(launches: Arc<dyn LaunchQueries>, config: Arc<Config>) -> Self {
        Self { launches, config }
    }
}
