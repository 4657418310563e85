//! HTTP status handling for the page client.

use crate::error::SourceError;

/// Fallback when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Turn a response into its body text, mapping failure statuses to errors.
///
/// - **429 Too Many Requests** → [`SourceError::RateLimited`], using the
///   `Retry-After` seconds or 60 s if absent or unparseable.
/// - **Non-success status** → [`SourceError::Api`] with the response body.
pub async fn into_body(resp: reqwest::Response) -> Result<String, SourceError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(SourceError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        });
    }
    if !status.is_success() {
        return Err(SourceError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp.text().await?)
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
