//! Tool parameters.
//!
//! One struct per tool, deserializable from the host's kebab-case parameter
//! maps. All fields are public; `Default` gives the documented defaults, so
//! partial maps deserialize cleanly.
//!
//! # Example
//!
//! ```rust
//! use rs_htmlextract::ArticleParams;
//!
//! let params: ArticleParams = serde_json::from_str(r#"{
//!     "url": "https://example.com/news/1",
//!     "title-selector": "news-title",
//!     "content-selector": "news-body"
//! }"#)?;
//! assert!(params.validate().is_ok());
//! assert!(!params.render_with_browser);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::links::LinkQuery;
use crate::transform::Transform;
use crate::url_utils::parse_page_url;

/// Fail with [`Error::MissingParameter`] when `value` is blank.
fn require(value: &str, name: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::MissingParameter(name))
    } else {
        Ok(())
    }
}

/// The page URL must be present and absolute.
fn require_page_url(url: &str) -> Result<()> {
    require(url, "url")?;
    parse_page_url(url).map(drop)
}

/// Parameters of the article extraction tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ArticleParams {
    /// Page to extract from. Required.
    pub url: String,

    /// Class names locating the title element. Required.
    pub title_selector: String,

    /// Class names locating the body element. Required.
    pub content_selector: String,

    /// Class names locating the tag list.
    pub tag_selector: String,

    /// Class names locating the source/byline element.
    pub source_selector: String,

    /// Literal strings to replace (comma separated).
    pub replace_target: String,

    /// Replacements, paired index-wise with `replace_target`.
    pub replace_with: String,

    /// Literal strings to delete (comma separated).
    pub delete_target: String,

    /// Render the page in a headless browser before parsing.
    ///
    /// Default: `false`
    pub render_with_browser: bool,
}

impl ArticleParams {
    /// Check required fields.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`] naming the first blank required field, or
    /// [`Error::InvalidUrl`] when the URL is not absolute.
    pub fn validate(&self) -> Result<()> {
        require_page_url(&self.url)?;
        require(&self.title_selector, "title-selector")?;
        require(&self.content_selector, "content-selector")
    }

    /// Replace/delete rules bundled for application to every field.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(&self.replace_target, &self.replace_with, &self.delete_target)
    }
}

/// Parameters of the link list tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LinkListParams {
    /// List page to collect links from. Required.
    pub url: String,

    /// Class names locating the link containers. Required.
    pub container_selector: String,

    /// Class names or a bracketed tag (`<li>`) for the children of each
    /// container that hold the anchors.
    pub sub_container_selector: String,

    /// Class names of the anchors themselves.
    pub anchor_class_selector: String,

    /// Explicit base for relative hrefs; the page URL is used when blank.
    pub base_url: String,

    /// Keywords that drop a link when its URL contains them.
    pub block_keywords: String,

    /// Render the page in a headless browser before parsing.
    ///
    /// Default: `false`
    pub render_with_browser: bool,
}

impl LinkListParams {
    /// Check required fields.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`] naming the first blank required field, or
    /// [`Error::InvalidUrl`] when the URL is not absolute.
    pub fn validate(&self) -> Result<()> {
        require_page_url(&self.url)?;
        require(&self.container_selector, "container-selector")
    }

    /// Parsed selectors, URLs and blocklist.
    #[must_use]
    pub fn link_query(&self) -> LinkQuery {
        LinkQuery::from_raw(
            &self.container_selector,
            &self.sub_container_selector,
            &self.anchor_class_selector,
            &self.base_url,
            &self.url,
            &self.block_keywords,
        )
    }
}

/// Parameters of the page summary tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PageParams {
    /// Page to summarize. Required.
    pub url: String,

    /// Render the page in a headless browser before parsing.
    ///
    /// Default: `true`
    pub render_with_browser: bool,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            url: String::new(),
            render_with_browser: true,
        }
    }
}

impl PageParams {
    /// Check required fields.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`] when the URL is blank, or
    /// [`Error::InvalidUrl`] when it is not absolute.
    pub fn validate(&self) -> Result<()> {
        require_page_url(&self.url)
    }
}
