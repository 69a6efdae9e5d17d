//! Selector Parsing
//!
//! Turns the loosely written selector strings users supply ("news-title",
//! "post, body", "item list") into ordered class-name token lists, and decides
//! once whether a sub-container selector names classes or a literal tag such
//! as `<li>`.
//!
//! Element resolution itself lives in [`locator`].

use std::sync::LazyLock;

use regex::Regex;

pub mod locator;

/// A bracketed single tag name: `<li>`, `<span>`, `<h2>`.
#[allow(clippy::expect_used)]
static BRACKETED_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<([a-zA-Z][a-zA-Z0-9]*)>$").expect("BRACKETED_TAG_RE regex")
});

/// Split a class-name or keyword string into tokens.
///
/// Commas count as whitespace. Tokens keep their order and duplicates are
/// preserved; blank input yields an empty list.
///
/// # Example
///
/// ```rust
/// use rs_htmlextract::selector::parse_class_names;
///
/// assert_eq!(parse_class_names("post, body  main"), vec!["post", "body", "main"]);
/// assert!(parse_class_names(" , ").is_empty());
/// ```
#[must_use]
pub fn parse_class_names(raw: &str) -> Vec<String> {
    raw.replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Check whether the input is a bracketed HTML tag like `<li>`.
#[must_use]
pub fn is_html_tag(text: &str) -> bool {
    BRACKETED_TAG_RE.is_match(text.trim())
}

/// Extract the tag name from a bracketed tag (`<li>` gives `li`).
#[must_use]
pub fn extract_tag_name(text: &str) -> Option<String> {
    BRACKETED_TAG_RE
        .captures(text.trim())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
}

/// How the children of a link container are selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubContainer {
    /// Class-name tokens, resolved with the tiered locator.
    Classes(Vec<String>),
    /// A literal tag name; every descendant with that tag is taken.
    Tag(String),
}

impl SubContainer {
    /// Parse a sub-container parameter.
    ///
    /// Returns `None` for blank input or input with no usable tokens.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rs_htmlextract::selector::SubContainer;
    ///
    /// assert_eq!(SubContainer::parse("<li>"), Some(SubContainer::Tag("li".into())));
    /// assert_eq!(
    ///     SubContainer::parse("item,row"),
    ///     Some(SubContainer::Classes(vec!["item".into(), "row".into()]))
    /// );
    /// assert_eq!(SubContainer::parse("  "), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if let Some(tag) = extract_tag_name(raw) {
            return Some(Self::Tag(tag));
        }

        let tokens = parse_class_names(raw);
        if tokens.is_empty() {
            None
        } else {
            Some(Self::Classes(tokens))
        }
    }
}
