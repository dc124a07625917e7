//! Server configuration.

use std::time::Duration;

/// Runtime knobs; defaults match the documented behavior.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Verbose request/response tracing on stderr (`--log`).
    pub verbose: bool,
    /// Minimum delay between workspace polls.
    pub watch_interval: Duration,
    /// Byte cap for hover previews of target files.
    pub hover_preview_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            watch_interval: Duration::from_secs(2),
            hover_preview_bytes: 1024,
        }
    }
}
