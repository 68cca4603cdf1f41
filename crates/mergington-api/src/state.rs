//! Application state.

use std::sync::Arc;
use std::time::Instant;

use mergington_core::{default_activities, ActivityRegistry};

/// Application state shared across handlers.
pub struct AppState {
    pub registry: Arc<ActivityRegistry>,
    start_time: Instant,
}

impl AppState {
    pub fn new(registry: Arc<ActivityRegistry>) -> Self {
        Self {
            registry,
            start_time: Instant::now(),
        }
    }

    /// Get uptime.
    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(ActivityRegistry::new(default_activities())))
    }
}
