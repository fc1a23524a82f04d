//! Client configuration

use std::time::Duration;

use shared::query::{DEFAULT_LIMIT, MAX_LIMIT};

/// Client configuration for connecting to roster-server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3002")
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// Rows per page requested by the list view
    pub page_size: u32,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            page_size: DEFAULT_LIMIT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the page size, clamped to what the server accepts
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_LIMIT);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3002")
    }
}
