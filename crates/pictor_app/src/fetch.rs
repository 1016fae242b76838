use anyhow::{Context, Result};
use std::io::Read;

/// Hard cap on a single download; audited plates are a few megabytes.
const MAX_DOWNLOAD_BYTES: u64 = 64 * 1024 * 1024;

pub struct Download {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// One blocking GET per URL. The content-type header is carried back
/// verbatim so the audit can weigh the declared type against the bytes.
pub fn fetch_bytes(url: &str) -> Result<Download> {
    let response = ureq::get(url)
        .set("User-Agent", concat!("pictor/", env!("CARGO_PKG_VERSION")))
        .call()
        .with_context(|| format!("Request failed: {url}"))?;

    if !(200..300).contains(&response.status()) {
        anyhow::bail!("Request for {} returned HTTP {}", url, response.status());
    }

    let content_type = response.header("content-type").map(str::to_string);

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_DOWNLOAD_BYTES)
        .read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read response body from {url}"))?;

    Ok(Download {
        bytes,
        content_type,
    })
}
