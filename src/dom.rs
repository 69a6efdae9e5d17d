//! DOM Operations Adapter
//!
//! The document tree provider used by the extraction engine. A thin function
//! layer over the `dom_query` crate that exposes the node capabilities the
//! locator and extractors rely on: tag name, attributes, text content,
//! children, and tree-position identity.
//!
//! The engine never mutates a parsed document; every helper here is a read.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
///
/// Malformed markup is tolerated the way html5ever tolerates it.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Selection wrapping the document root node.
///
/// Descendant queries against it cover every element of the page, including
/// `<html>` itself.
#[inline]
#[must_use]
pub fn document_root(doc: &Document) -> Selection<'_> {
    Selection::from(doc.root())
}

// === Node Identity ===

/// Tree-position identity of the first node in a selection.
///
/// Two handles referring to the same node share the same id, even when the
/// rendered text of distinct nodes is identical.
#[inline]
#[must_use]
pub fn node_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|node| node.id)
}

/// Split a multi-node selection into single-node handles, in document order.
#[must_use]
pub fn handles<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

// === Attribute Operations ===

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Individual class names of an element, in attribute order.
#[must_use]
pub fn class_list(sel: &Selection) -> Vec<String> {
    class_name(sel)
        .map(|class| class.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Check whether an element carries `class` as one of its class names.
#[must_use]
pub fn has_class(sel: &Selection, class: &str) -> bool {
    sel.attr("class")
        .is_some_and(|attr| attr.split_whitespace().any(|c| c == class))
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all attributes as key-value pairs
///
/// Returns empty vector if node has no attributes or if selection is empty.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Check an element's tag name, ignoring ASCII case.
#[must_use]
pub fn is_tag(sel: &Selection, tag: &str) -> bool {
    tag_name(sel).is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

// === Text Content ===

/// Get all text content of node and descendants, unmodified.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Tree Navigation ===

/// Get direct element children
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

// === Querying ===

/// Query all descendant elements by CSS selector
///
/// An invalid selector yields an empty selection.
#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}

/// Get descendant elements by tag name
#[inline]
#[must_use]
pub fn get_elements_by_tag_name<'a>(sel: &Selection<'a>, tag: &str) -> Selection<'a> {
    sel.select(tag)
}

/// All descendant elements of `root`, in document order.
#[inline]
#[must_use]
pub fn descendant_elements<'a>(root: &Selection<'a>) -> Vec<Selection<'a>> {
    handles(&root.select("*"))
}
