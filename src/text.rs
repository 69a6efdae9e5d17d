//! Text extraction from located elements.
//!
//! Text nodes are trimmed one by one and glued together without a separator,
//! then whitespace runs collapse to a single space. Script and style bodies
//! never count as text.

use std::sync::LazyLock;

use dom_query::Selection;
use regex::Regex;

use crate::selector::locator::find_first_by_classes;
use crate::selector::parse_class_names;

/// Any run of whitespace.
#[allow(clippy::expect_used)]
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Tags whose text children are not page text.
const SKIPPED_PARENTS: &[&str] = &["script", "style"];

/// Collapse every whitespace run into one space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Clean text of an element and its descendants.
///
/// Returns an empty string for an empty selection or an element without text.
///
/// # Example
///
/// ```rust
/// use rs_htmlextract::{dom, text::element_text};
///
/// let doc = dom::parse("<div>  Hello <b> big </b>\n world </div>");
/// assert_eq!(element_text(&doc.select("div")), "Hellobigworld");
/// ```
#[must_use]
pub fn element_text(el: &Selection) -> String {
    let Some(root) = el.nodes().first() else {
        return String::new();
    };

    let mut out = String::new();
    for node in root.descendants() {
        if !node.is_text() {
            continue;
        }

        let skipped = node
            .parent()
            .and_then(|parent| parent.node_name())
            .is_some_and(|tag| SKIPPED_PARENTS.iter().any(|s| tag.eq_ignore_ascii_case(s)));
        if skipped {
            continue;
        }

        out.push_str(node.text().trim());
    }

    collapse_whitespace(&out)
}

/// Text of the first element matching a raw class selector string.
///
/// Blank selectors and misses both give an empty string.
#[must_use]
pub fn extract_text_by_class(root: &Selection, class_names: &str) -> String {
    let tokens = parse_class_names(class_names);
    find_first_by_classes(root, &tokens)
        .map(|el| element_text(&el))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn test_simple_title() {
        let doc = dom::parse(r#"<div class="title">Hello</div>"#);
        let root = dom::document_root(&doc);

        assert_eq!(extract_text_by_class(&root, "title"), "Hello");
    }

    #[test]
    fn test_nodes_trimmed_and_joined() {
        let doc = dom::parse("<p>  first </p>");
        assert_eq!(element_text(&doc.select("p")), "first");

        let doc = dom::parse("<div><p> one </p>\n<p> two </p></div>");
        assert_eq!(element_text(&doc.select("div")), "onetwo");
    }

    #[test]
    fn test_inner_whitespace_collapsed() {
        let doc = dom::parse("<p>a   b\n\n\tc</p>");
        assert_eq!(element_text(&doc.select("p")), "a b c");
    }

    #[test]
    fn test_script_and_style_skipped() {
        let doc = dom::parse(
            "<div>Body<script>var x = 1;</script><style>.a{}</style> text</div>",
        );
        assert_eq!(element_text(&doc.select("div")), "Bodytext");
    }

    #[test]
    fn test_empty_element_and_selection() {
        let doc = dom::parse("<div class='empty'>   </div>");
        assert_eq!(element_text(&doc.select("div")), "");
        assert_eq!(element_text(&doc.select("section")), "");
    }

    #[test]
    fn test_first_match_wins() {
        let doc = dom::parse(r#"<p class="c">one</p><p class="c">two</p>"#);
        let root = dom::document_root(&doc);

        assert_eq!(extract_text_by_class(&root, "c"), "one");
    }

    #[test]
    fn test_blank_selector_and_miss() {
        let doc = dom::parse(r#"<p class="c">one</p>"#);
        let root = dom::document_root(&doc);

        assert_eq!(extract_text_by_class(&root, ""), "");
        assert_eq!(extract_text_by_class(&root, "zzz"), "");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace(" a \u{a0} b\n"), " a b ");
    }
}
