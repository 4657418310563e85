use anyhow::Context;
use lw_config::SourceConfig;
use lw_core::entities::{Fragment, MissionRecord};
use lw_parser::MissionExtractor;
use lw_source::{PageClient, load_fragments, scan_fragments};

use crate::cli::root_commands::SourceArgs;

/// Produce the fragment stream from a JSONL file or by fetching the page.
pub async fn load(args: &SourceArgs, config: &SourceConfig) -> anyhow::Result<Vec<Fragment>> {
    if let Some(path) = &args.fragments {
        let fragments = load_fragments(path)
            .with_context(|| format!("failed to read fragments from {}", path.display()))?;
        tracing::debug!(path = %path.display(), count = fragments.len(), "fragments loaded");
        return Ok(fragments);
    }

    let client = PageClient::new(config).context("failed to build HTTP client")?;
    let url = args.url.as_deref().unwrap_or_else(|| client.url());
    let html = client
        .fetch(url)
        .await
        .with_context(|| format!("failed to fetch schedule page {url}"))?;
    let fragments = scan_fragments(&html);
    tracing::debug!(url, bytes = html.len(), count = fragments.len(), "page scanned");
    Ok(fragments)
}

/// Run the extractor configured by `config` over `fragments`.
pub fn extract(fragments: &[Fragment], config: &SourceConfig) -> anyhow::Result<Vec<MissionRecord>> {
    let extractor = MissionExtractor::new(config.detail_marker.as_str());
    tracing::debug!(marker = extractor.detail_marker(), "extracting missions");
    extractor
        .extract(fragments)
        .context("failed to extract missions")
}
