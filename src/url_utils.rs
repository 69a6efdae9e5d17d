//! URL Utility Functions
//!
//! URL parsing, href joining and the URL blocklist filter used when turning
//! anchors into absolute link lists. Everything here is string and URI algebra;
//! nothing touches the network.

use url::Url;

use crate::error::{Error, Result};
use crate::selector::parse_class_names;

/// Parse a page URL, reporting why it is unusable.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when the string is not an absolute URL.
pub fn parse_page_url(url_str: &str) -> Result<Url> {
    Url::parse(url_str.trim()).map_err(|e| Error::InvalidUrl {
        url: url_str.to_string(),
        reason: e.to_string(),
    })
}

/// Join an href onto a user-supplied base URL.
///
/// The base loses any trailing slashes. Root-relative hrefs are appended
/// directly, hrefs starting with `http` are kept verbatim, and anything else is
/// appended after a `/`. No dot-segment resolution takes place.
///
/// # Examples
/// ```
/// use rs_htmlextract::url_utils::join_with_base;
///
/// assert_eq!(join_with_base("/a", "http://x.com/"), "http://x.com/a");
/// assert_eq!(join_with_base("b.html", "http://x.com/news"), "http://x.com/news/b.html");
/// assert_eq!(join_with_base("https://y.org/", "http://x.com"), "https://y.org/");
/// ```
#[must_use]
pub fn join_with_base(href: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    if href.starts_with('/') {
        format!("{base}{href}")
    } else if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{base}/{href}")
    }
}

/// Resolve an href against the page URL with RFC 3986 semantics.
///
/// Returns the href unchanged when the join fails.
#[must_use]
pub fn join_with_page(href: &str, page: &Url) -> String {
    match page.join(href) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => href.to_string(),
    }
}

/// Keywords that cause a URL to be dropped, matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockList {
    keywords: Vec<String>,
}

impl BlockList {
    /// Parse a comma/space separated keyword string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            keywords: parse_class_names(raw)
                .into_iter()
                .map(|k| k.to_lowercase())
                .collect(),
        }
    }

    /// Lowercased keywords in the order given.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether `url` must be discarded.
    ///
    /// Empty URLs, a bare `#` on its own or after a site root, and
    /// `javascript:` URLs are always blocked. Otherwise a URL is blocked when it contains any
    /// keyword.
    #[must_use]
    pub fn blocks(&self, url: &str) -> bool {
        if is_dead_link(url) {
            return true;
        }

        let lowered = url.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Links that never lead anywhere: empty, a bare `#` (also once joined onto a
/// site root), or `javascript:`.
#[must_use]
pub fn is_dead_link(url: &str) -> bool {
    let trimmed = url.trim();
    trimmed.is_empty()
        || is_root_fragment(trimmed)
        || trimmed
            .get(..11)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("javascript:"))
}

/// `#`, `/#` or an absolute URL with path `/` and an empty fragment.
fn is_root_fragment(url: &str) -> bool {
    let Some(before) = url.strip_suffix('#') else {
        return false;
    };

    match Url::parse(url) {
        Ok(parsed) => parsed.fragment() == Some("") && parsed.path() == "/",
        Err(_) => before.is_empty() || before == "/",
    }
}

/// Decide whether a URL must be discarded, given a raw keyword string.
///
/// # Examples
/// ```
/// use rs_htmlextract::url_utils::should_block_url;
///
/// assert!(should_block_url("http://x.com/#", ""));
/// assert!(!should_block_url("http://x.com/page", "ads"));
/// assert!(should_block_url("http://x.com/ads/page", "ads"));
/// ```
#[must_use]
pub fn should_block_url(url: &str, blockurl: &str) -> bool {
    BlockList::parse(blockurl).blocks(url)
}
