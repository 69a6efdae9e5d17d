//! Result types for tool output.
//!
//! Every payload serializes to the labeled fields the host expects. Failures
//! become a single `{"error": "..."}` object; partial results are never
//! reported alongside an error.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Fields extracted by the article tool.
///
/// Fields whose selector matched nothing are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleFields {
    /// Title text.
    pub title: String,

    /// Body text.
    pub content: String,

    /// Tag list text.
    pub tags: String,

    /// Source/byline text.
    pub source: String,

    /// Keywords meta content.
    pub keywords: String,

    /// Description meta content.
    pub description: String,

    /// The requested URL.
    pub url: String,
}

/// Output of the page summary tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    /// The page source as fetched or rendered.
    pub html: String,

    /// `<title>` text.
    pub title: String,

    /// Keywords meta content.
    pub keywords: String,

    /// Description meta content.
    pub description: String,

    /// The requested URL.
    pub url: String,
}

/// Output of the link list tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkList {
    /// Unique absolute URLs in first-seen order.
    pub links: Vec<String>,

    /// Number of entries in `links`.
    pub count: usize,
}

impl LinkList {
    /// Wrap a resolved link list.
    #[must_use]
    pub fn new(links: Vec<String>) -> Self {
        let count = links.len();
        Self { links, count }
    }
}

/// Payload or error message, as handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput<T> {
    /// Successful extraction.
    Success(T),
    /// Single descriptive failure.
    Failure {
        /// Human-readable message.
        error: String,
    },
}

impl<T> ToolOutput<T> {
    /// Whether this is a failure payload.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

impl<T> From<Result<T>> for ToolOutput<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure {
                error: err.to_string(),
            },
        }
    }
}
