//! Application state for the API server

use std::sync::Arc;
use std::time::Instant;

use softdesk_application::Services;
use softdesk_domain::{IdentityProvider, Store};

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Authorized use cases
    pub services: Arc<Services>,
    /// Server start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            services: Arc::new(Services::new(store, identity)),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
