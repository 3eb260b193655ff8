// ABOUTME: HTTP fetching for the gleaner pipeline using a blocking reqwest client.
// ABOUTME: Issues a single GET and returns the decoded body text, or a Fetch error.

use crate::error::ScrapeError;

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub url: String,
    pub final_url: String,
    pub body: String,
}

/// Fetch the resource at `url` with one blocking GET request.
///
/// Redirects are followed by the transport's default policy; the returned
/// `final_url` is the post-redirect URL. Any non-success HTTP status or
/// transport failure (DNS, refused connection, timeout) is a Fetch error;
/// partial content is never returned. No retries, no caching.
pub fn fetch(client: &reqwest::blocking::Client, url: &str) -> Result<FetchResult, ScrapeError> {
    if url.is_empty() {
        return Err(ScrapeError::config(
            url,
            "Fetch",
            Some(anyhow::anyhow!("empty URL")),
        ));
    }

    // URL syntax beyond the scheme check is the transport's concern.
    let parsed = url::Url::parse(url).map_err(|e| {
        ScrapeError::fetch(url, "Fetch", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;
    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ScrapeError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    let response = client.get(url).send().map_err(|e| {
        ScrapeError::fetch(url, "Fetch", Some(anyhow::anyhow!("request failed: {}", e)))
    })?;

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        return Err(ScrapeError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("HTTP status {}", status.as_u16())),
        ));
    }

    // Charset-aware decoding is delegated to reqwest; the body text is
    // returned without further transformation.
    let body = response.text().map_err(|e| {
        ScrapeError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("failed to read body: {}", e)),
        )
    })?;

    Ok(FetchResult {
        status: status.as_u16(),
        url: url.to_string(),
        final_url,
        body,
    })
}
