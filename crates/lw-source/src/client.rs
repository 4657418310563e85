//! HTTP client for the launch schedule page.

use lw_config::SourceConfig;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};

use crate::error::SourceError;
use crate::http::into_body;

/// Fetches schedule pages with the configured browser-like headers.
pub struct PageClient {
    http: reqwest::Client,
    url: String,
}

impl PageClient {
    /// Build a client from the `[source]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidHeader`] for a header value that is not
    /// valid HTTP, or [`SourceError::Http`] if the client cannot be built.
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)?,
        );

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }

    /// The configured schedule page URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the configured schedule page.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch`].
    pub async fn fetch_schedule(&self) -> Result<String, SourceError> {
        self.fetch(&self.url).await
    }

    /// Fetch `url` and return its body.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure or a non-success status.
    pub async fn fetch(&self, url: &str) -> Result<String, SourceError> {
        tracing::debug!(url, "fetching schedule page");
        let body = into_body(self.http.get(url).send().await?).await?;
        tracing::debug!(url, bytes = body.len(), "schedule page fetched");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        let config = SourceConfig::default();
        let client = PageClient::new(&config).unwrap();
        assert_eq!(client.url(), config.url);
    }

    #[test]
    fn rejects_header_with_newline() {
        let config = SourceConfig {
            accept_language: "en\nX-Injected: 1".into(),
            ..Default::default()
        };
        assert!(matches!(
            PageClient::new(&config),
            Err(SourceError::InvalidHeader(_))
        ));
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_fetch_schedule() {
        let client = PageClient::new(&SourceConfig::default()).unwrap();
        let body = client.fetch_schedule().await.unwrap();
        println!("fetched {} bytes", body.len());
        assert!(body.to_lowercase().contains("<h2"));
    }
}
