//! Entry resolution: turning raw feed entries into summarizable articles.
//!
//! The main entry point is the [`Resolver`], which normalizes an entry's
//! content, decides whether it is only a teaser, fetches the full article when
//! needed, and bounds the result to a maximum length.
//!
//! # Example
//!
//! ```rust,no_run
//! use feedbrief_core::{EntriesResponse, Resolver, ResolverConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = std::fs::read_to_string("entries.json")?;
//! let entries = EntriesResponse::from_json(&json)?.entries;
//!
//! let config = ResolverConfig::builder().max_content_length(800).concurrency(4).build();
//! let resolver = Resolver::http(config)?;
//! for article in resolver.resolve_batch(entries).await {
//!     println!("{}: {} chars", article.title, article.length());
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::article::ResolvedArticle;
use crate::classify::is_summary_only;
use crate::entry::RawEntry;
use crate::fetch::{ContentFetcher, FetchConfig};
use crate::normalize::normalize;
use crate::truncate::truncate;

#[cfg(feature = "fetch")]
use crate::{Result, fetch::HttpFetcher};

/// Default maximum length of resolved content, in characters.
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 500;

/// Configuration for the [`Resolver`].
///
/// # Example
///
/// ```rust
/// use feedbrief_core::ResolverConfig;
///
/// let config = ResolverConfig::builder()
///     .max_content_length(1000)
///     .allow_fetch(false)
///     .build();
/// assert_eq!(config.max_content_length, 1000);
/// ```
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Maximum length of resolved content in characters (default: 500).
    pub max_content_length: usize,

    /// Whether teaser content may be replaced by the fetched page (default: true).
    pub allow_fetch: bool,

    /// Maximum number of entries resolved at once (default: 1, sequential).
    pub concurrency: usize,

    /// Settings for fetching article pages. `fetch.timeout` also bounds
    /// every fetch made through the resolver.
    pub fetch: FetchConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            allow_fetch: true,
            concurrency: 1,
            fetch: FetchConfig::default(),
        }
    }
}

impl ResolverConfig {
    /// Creates a new builder for ResolverConfig.
    pub fn builder() -> ResolverConfigBuilder {
        ResolverConfigBuilder::new()
    }

    /// Timeout applied to each article fetch.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch.timeout)
    }
}

/// Builder for ResolverConfig.
pub struct ResolverConfigBuilder {
    config: ResolverConfig,
}

impl ResolverConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ResolverConfig::default() }
    }

    /// Sets the maximum content length.
    pub fn max_content_length(mut self, value: usize) -> Self {
        self.config.max_content_length = value;
        self
    }

    /// Sets whether full articles may be fetched.
    pub fn allow_fetch(mut self, value: bool) -> Self {
        self.config.allow_fetch = value;
        self
    }

    /// Sets how many entries may be resolved at once. Zero is treated as one.
    pub fn concurrency(mut self, value: usize) -> Self {
        self.config.concurrency = value.max(1);
        self
    }

    /// Sets the fetch timeout in seconds.
    pub fn timeout(mut self, secs: u64) -> Self {
        self.config.fetch.timeout = secs;
        self
    }

    /// Sets the User-Agent sent when fetching articles.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Sets the minimum length extracted page text must exceed.
    pub fn min_article_chars(mut self, value: usize) -> Self {
        self.config.fetch.extract.min_chars = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> ResolverConfig {
        self.config
    }
}

impl Default for ResolverConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves raw entries into [`ResolvedArticle`]s.
///
/// Resolution never fails: when the full article cannot be fetched the
/// entry's own content is used, and absent metadata gets defaults.
pub struct Resolver<F> {
    config: ResolverConfig,
    fetcher: Arc<F>,
}

impl<F> Clone for Resolver<F> {
    fn clone(&self) -> Self {
        Self { config: self.config.clone(), fetcher: Arc::clone(&self.fetcher) }
    }
}

#[cfg(feature = "fetch")]
impl Resolver<HttpFetcher> {
    /// Creates a resolver that fetches articles over HTTP.
    pub fn http(config: ResolverConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.fetch.clone())?;
        Ok(Self::with_config(fetcher, config))
    }
}

impl<F: ContentFetcher> Resolver<F> {
    /// Creates a resolver with default settings.
    pub fn new(fetcher: F) -> Self {
        Self::with_config(fetcher, ResolverConfig::default())
    }

    /// Creates a resolver with a custom configuration.
    pub fn with_config(fetcher: F, config: ResolverConfig) -> Self {
        Self { config, fetcher: Arc::new(fetcher) }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves one entry using the configured length bound and fetch policy.
    pub async fn resolve(&self, entry: &RawEntry) -> ResolvedArticle {
        self.resolve_with(entry, self.config.max_content_length, self.config.allow_fetch)
            .await
    }

    /// Resolves one entry with an explicit length bound and fetch policy.
    ///
    /// The entry content is normalized; if fetching is allowed, the entry has a
    /// URL and the content looks like a teaser, the full article replaces it
    /// when it can be retrieved. The result is truncated to
    /// `max_content_length` characters.
    pub async fn resolve_with(&self, entry: &RawEntry, max_content_length: usize, allow_fetch: bool) -> ResolvedArticle {
        let mut text = normalize(entry.content.as_deref());

        if allow_fetch
            && let Some(url) = entry.url.as_deref().filter(|url| !url.is_empty())
            && is_summary_only(Some(text.as_str()))
        {
            tracing::debug!(entry_id = entry.id, url, "detected summary content, fetching full article");

            match self.fetch_with_timeout(url).await {
                Some(full) => {
                    tracing::debug!(entry_id = entry.id, chars = full.chars().count(), "fetched full article");
                    text = full;
                }
                None => {
                    tracing::warn!(entry_id = entry.id, url, "failed to fetch full content, using original content");
                }
            }
        }

        let (content, truncated) = truncate(&text, max_content_length);
        ResolvedArticle::from_entry(entry, content, truncated)
    }

    async fn fetch_with_timeout(&self, url: &str) -> Option<String> {
        let timeout = self.config.fetch_timeout();
        match tokio::time::timeout(timeout, self.fetcher.fetch(url, timeout)).await {
            Ok(content) => content,
            Err(_) => {
                tracing::warn!(url, timeout_secs = timeout.as_secs(), "article fetch timed out");
                None
            }
        }
    }
}

impl<F: ContentFetcher + 'static> Resolver<F> {
    /// Resolves a batch of entries with at most `concurrency` in flight.
    ///
    /// Every entry is attempted. An entry whose resolution panics is logged
    /// and left out; the remaining articles keep their input order.
    pub async fn resolve_batch(&self, entries: Vec<RawEntry>) -> Vec<ResolvedArticle> {
        let total = entries.len();
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let mut tasks = JoinSet::new();

        for (index, entry) in entries.into_iter().enumerate() {
            let resolver = self.clone();
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok()?;
                Some((index, resolver.resolve(&entry).await))
            });
        }

        let mut resolved = Vec::with_capacity(total);
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Some(item)) => resolved.push(item),
                Ok(None) => tracing::error!("resolution semaphore closed unexpectedly"),
                Err(e) => tracing::error!(error = %e, "entry resolution failed, skipping entry"),
            }
        }
        resolved.sort_by_key(|(index, _)| *index);

        if resolved.is_empty() {
            tracing::info!("nothing to process");
        } else {
            tracing::debug!(resolved = resolved.len(), total, "resolved entries");
        }

        resolved.into_iter().map(|(_, article)| article).collect()
    }
}
