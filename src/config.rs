// Client configuration. Built once by the caller and handed to
// `BggClient`; never read from globals or the environment.

use std::time::Duration;

/// Production base URL of the BGG XML API2.
pub const BGG_XMLAPI2_URL: &str = "https://www.boardgamegeek.com/xmlapi2";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the endpoint paths are joined onto. Trailing slashes are
    /// tolerated.
    pub base_url: String,
    /// Whole-request timeout applied by the transport.
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration for a server other than the production API, e.g. a
    /// local mock in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BGG_XMLAPI2_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("bgg-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
