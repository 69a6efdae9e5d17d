//! # rs-htmlextract
//!
//! Selector-driven field and link extraction from web pages.
//!
//! Callers name the CSS class tokens that mark a page's title, body, tags and
//! source, or the containers holding a list of links. The library finds those
//! elements with a tolerant three-tier class match, pulls their text or hrefs,
//! and applies literal find/replace and deletion rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_htmlextract::{list_links, LinkListParams, StaticSource};
//!
//! let source = StaticSource::new(r#"
//!     <ul class="news-list">
//!         <li><a href="/story/1">One</a></li>
//!         <li><a href="/story/2">Two</a></li>
//!         <li><a href="javascript:void(0)">More</a></li>
//!     </ul>"#);
//!
//! let params = LinkListParams {
//!     url: "https://example.com/news/".to_string(),
//!     container_selector: "news-list".to_string(),
//!     ..LinkListParams::default()
//! };
//!
//! let list = list_links(&params, &source)?;
//! assert_eq!(list.links, vec![
//!     "https://example.com/story/1",
//!     "https://example.com/story/2",
//! ]);
//! # Ok::<(), rs_htmlextract::Error>(())
//! ```
//!
//! ## Tools
//!
//! - **Article extraction** ([`html_extract`]): title, content, tags, source,
//!   keywords and description of a detail page
//! - **Link list** ([`list_links`]): unique absolute URLs from list containers
//! - **Page summary** ([`page_info`]): raw HTML plus title and meta fields
//!
//! Pages come from a [`PageSource`]: [`HttpFetcher`] for plain GETs,
//! `BrowserFetcher` (feature `browser`) for headless Chrome rendering, and
//! [`StaticSource`] for documents already in memory.

mod error;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Class selector parsing and the tiered element locator.
pub mod selector;

/// Whitespace-normalized text extraction.
pub mod text;

/// Href resolution, blocklist filtering and link collection.
pub mod links;

/// URL joining and blocklist rules.
pub mod url_utils;

/// Literal find/replace and deletion transforms.
pub mod transform;

/// Title and meta tag extraction.
pub mod metadata;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page sources: HTTP, headless browser, static.
pub mod fetch;

/// Tool parameter structs.
pub mod params;

/// Tool output payloads.
pub mod result;

/// Tool entry points.
pub mod tools;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::{FetchOptions, HttpFetcher, PageSource, StaticSource};
pub use params::{ArticleParams, LinkListParams, PageParams};
pub use result::{ArticleFields, LinkList, PageSummary, ToolOutput};
pub use tools::{html_extract, list_links, page_info, source_for};

#[cfg(feature = "browser")]
pub use fetch::BrowserFetcher;
