//! Schedule page source configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_url() -> String {
    "https://floridareview.co.uk/things-to-do/current-launch-schedule".into()
}

/// The page rejects requests without a browser-like user agent.
fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0 Safari/537.36"
        .into()
}

fn default_accept_language() -> String {
    "en-GB,en;q=0.9".into()
}

const fn default_timeout_secs() -> u64 {
    20
}

fn default_detail_marker() -> String {
    "Launch".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Schedule page URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// `User-Agent` header sent with the page request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// `Accept-Language` header sent with the page request.
    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    /// Request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Prefix of the paragraph that completes a mission entry.
    #[serde(default = "default_detail_marker")]
    pub detail_marker: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
            timeout_secs: default_timeout_secs(),
            detail_marker: default_detail_marker(),
        }
    }
}

impl SourceConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
