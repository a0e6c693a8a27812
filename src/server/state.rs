//! Application State
//!
//! Shared state accessible by all handlers. The dashboard itself holds no
//! state; handlers compose it fresh from the static datasets on every request.

use std::time::Instant;

use crate::page::RenderOptions;

/// Shared application state for all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Chart canvas size
    pub options: RenderOptions,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
