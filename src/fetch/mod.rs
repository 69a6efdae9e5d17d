//! Page sources.
//!
//! A [`PageSource`] turns a URL into HTML text. [`HttpFetcher`] does a plain
//! GET; [`BrowserFetcher`] (feature `browser`) renders the page in headless
//! Chrome first; [`StaticSource`] serves a document already in memory.

use std::time::Duration;

use crate::error::Result;

mod http;
pub use http::HttpFetcher;

#[cfg(feature = "browser")]
mod browser;
#[cfg(feature = "browser")]
pub use browser::BrowserFetcher;

/// Desktop Chrome User-Agent sent by both fetchers.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Request timeout of the article and page tools.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Request timeout of the link list tool.
pub const LINK_LIST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetcher configuration.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use rs_htmlextract::fetch::FetchOptions;
///
/// let options = FetchOptions {
///     settle_delay: Duration::from_secs(1),
///     ..FetchOptions::default()
/// };
/// assert_eq!(options.timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// HTTP request timeout.
    ///
    /// Default: 10 seconds
    pub timeout: Duration,

    /// User-Agent header.
    pub user_agent: String,

    /// Browser navigation timeout.
    ///
    /// Default: 30 seconds
    pub page_load_timeout: Duration,

    /// How long the browser waits for `<body>` to appear.
    ///
    /// Default: 10 seconds
    pub body_wait: Duration,

    /// Fixed pause after load so scripts can finish rendering.
    ///
    /// Default: 3 seconds
    pub settle_delay: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_load_timeout: Duration::from_secs(30),
            body_wait: Duration::from_secs(10),
            settle_delay: Duration::from_secs(3),
        }
    }
}

impl FetchOptions {
    /// Same options with a different HTTP timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Something that can produce the HTML of a page.
pub trait PageSource {
    /// Fetch `url` and return its HTML as text.
    ///
    /// # Errors
    ///
    /// Implementations report transport, status and rendering failures.
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<S: PageSource + ?Sized> PageSource for Box<S> {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

/// A fixed document returned for every URL.
///
/// Used for local files and as a test double.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    html: String,
}

impl StaticSource {
    /// Serve `html` for any URL.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Read a local file, decoding it like a fetched page.
    ///
    /// # Errors
    ///
    /// [`crate::Error::Io`] when the file cannot be read.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::new(crate::encoding::decode_html(&bytes).text))
    }
}

impl PageSource for StaticSource {
    fn fetch(&self, _url: &str) -> Result<String> {
        Ok(self.html.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = FetchOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert_eq!(options.page_load_timeout, Duration::from_secs(30));
        assert_eq!(options.body_wait, Duration::from_secs(10));
        assert_eq!(options.settle_delay, Duration::from_secs(3));
        assert!(options.user_agent.contains("Chrome/91"));
    }

    #[test]
    fn test_with_timeout() {
        let options = FetchOptions::default().with_timeout(LINK_LIST_TIMEOUT);
        assert_eq!(options.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_static_source_ignores_url() {
        let source = StaticSource::new("<p>hi</p>");
        assert_eq!(source.fetch("http://a").ok().as_deref(), Some("<p>hi</p>"));
        assert_eq!(source.fetch("").ok().as_deref(), Some("<p>hi</p>"));

        let boxed: Box<dyn PageSource> = Box::new(source);
        assert_eq!(boxed.fetch("x").ok().as_deref(), Some("<p>hi</p>"));
    }

    #[test]
    fn test_static_source_missing_file() {
        let result = StaticSource::from_file("/definitely/not/here.html");
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
