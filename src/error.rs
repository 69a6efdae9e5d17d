//! Error types for rs-htmlextract.
//!
//! This module defines the error types returned by the tools and their
//! collaborators. Resolution misses are never errors: a selector that matches
//! nothing yields an empty string or an empty link list.

/// Error type for tool invocations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required parameter was missing or blank.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// The page URL could not be parsed.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// Network failure while fetching the page.
    #[error("failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {status} for {url}")]
    HttpStatus {
        /// Numeric status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Headless browser rendering failed.
    #[error("browser rendering failed: {0}")]
    Render(String),

    /// Browser rendering was requested but the crate was built without it.
    #[error("browser rendering requires the `browser` feature")]
    BrowserUnavailable,

    /// The fetched page had no content to parse.
    #[error("page content is empty")]
    EmptyDocument,

    /// Reading a local document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A parameter file was not valid JSON for the tool.
    #[error("invalid parameters: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tool operations.
pub type Result<T> = std::result::Result<T, Error>;
