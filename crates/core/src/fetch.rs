//! Fetching article pages and loading entry files.
//!
//! The HTTP side of this module is best-effort: [`fetch_url`] reports typed
//! errors, while [`fetch_full_content`] and the [`ContentFetcher`] seam used by
//! the resolver collapse every failure into `None` so a missing article page
//! never costs the caller its entry.

use std::fs;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use url::Url;

use crate::extract::ExtractConfig;
#[cfg(feature = "fetch")]
use crate::extract::extract_main_text;
use crate::{FeedbriefError, Result};

/// Browser-like User-Agent; many article hosts refuse obvious bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP client configuration for fetching article pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Extraction settings applied to fetched pages.
    pub extract: ExtractConfig,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            extract: ExtractConfig::default(),
        }
    }
}

/// Source of full article text for a URL.
///
/// Implementations must never fail loudly: anything that goes wrong is
/// reported as `None` and the caller keeps the content it already has.
pub trait ContentFetcher: Send + Sync {
    /// Fetches `url` and extracts its main text, giving up after `timeout`.
    fn fetch(&self, url: &str, timeout: Duration) -> impl Future<Output = Option<String>> + Send;
}

/// [`ContentFetcher`] that retrieves pages over HTTP(S).
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
    /// Builds a fetcher with one pooled client for all requests.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = build_client(&config)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    async fn fetch_page(&self, url: &str, timeout: Duration) -> Result<String> {
        get_text(&self.client, url, timeout).await
    }
}

#[cfg(feature = "fetch")]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Option<String> {
        let html = match self.fetch_page(url, timeout).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(url, error = %e, "failed to fetch article content");
                return None;
            }
        };

        match extract_main_text(&html, &self.config.extract) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!(url, error = %e, "could not extract substantial content");
                None
            }
        }
    }
}

#[cfg(feature = "fetch")]
fn build_client(config: &FetchConfig) -> Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(FeedbriefError::HttpError)
}

#[cfg(feature = "fetch")]
async fn get_text(client: &Client, url: &str, timeout: Duration) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| FeedbriefError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(FeedbriefError::InvalidUrl(format!(
            "unsupported scheme '{}' (expected http or https)",
            parsed_url.scheme()
        )));
    }

    let timeout_err = |e: reqwest::Error| {
        if e.is_timeout() { FeedbriefError::Timeout { timeout: timeout.as_secs() } } else { FeedbriefError::HttpError(e) }
    };

    let response = client
        .get(parsed_url)
        .timeout(timeout)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(timeout_err)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedbriefError::HttpStatus { status: status.as_u16() });
    }

    response.text().await.map_err(timeout_err)
}

/// Fetches HTML content from a URL.
///
/// Performs a GET request with the configured User-Agent, following
/// redirects, and returns the body of a successful response.
///
/// # Errors
///
/// [`FeedbriefError::InvalidUrl`], [`FeedbriefError::Timeout`],
/// [`FeedbriefError::HttpStatus`] or [`FeedbriefError::HttpError`].
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let client = build_client(config)?;
    get_text(&client, url, Duration::from_secs(config.timeout)).await
}

/// Fetches a page and extracts its article text.
///
/// Returns `None` on any transport failure, non-success status, or when the
/// extracted text is not long enough to be an article.
#[cfg(feature = "fetch")]
pub async fn fetch_full_content(url: &str, config: &FetchConfig) -> Option<String> {
    match HttpFetcher::new(config.clone()) {
        Ok(fetcher) => fetcher.fetch(url, Duration::from_secs(config.timeout)).await,
        Err(e) => {
            tracing::error!(url, error = %e, "could not build HTTP client");
            None
        }
    }
}

/// Reads a local file to a string.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(FeedbriefError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(FeedbriefError::from)
    }
}

/// Reads all of standard input.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer)
}
