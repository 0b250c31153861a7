//! Transport configuration for the loader.

use serde::Deserialize;

/// HTTP transport options. The loader itself imposes no timeout; one is
/// only applied when configured here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoaderConfig {
    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Verify TLS certificates of remote sources.
    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { timeout_secs: None, verify_tls: default_verify_tls() }
    }
}

fn default_verify_tls() -> bool {
    true
}
