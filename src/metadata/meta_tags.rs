//! HTML Meta Tag Extraction
//!
//! Reads `<meta>` keywords and description values and the document `<title>`.
//! Each field has an ordered list of meta keys; the first tag carrying a
//! non-blank `content` wins.

use dom_query::{Document, Selection};

use crate::dom;
use crate::text::collapse_whitespace;

/// Attributes that name a meta tag, in lookup order.
const NAME_ATTRIBUTES: [&str; 2] = ["name", "property"];

/// Extra keys tried after `name`/`property` equal to the field itself.
#[must_use]
pub fn fallback_keys(meta_name: &str) -> &'static [(&'static str, &'static str)] {
    match meta_name.to_ascii_lowercase().as_str() {
        "description" => &[
            ("property", "og:description"),
            ("name", "twitter:description"),
        ],
        "keywords" => &[("name", "keyword"), ("property", "article:tag")],
        _ => &[],
    }
}

/// Non-blank, trimmed `content` of the first meta tag where `attr` equals `value`.
fn find_meta(metas: &[Selection], attr: &str, value: &str, ignore_case: bool) -> Option<String> {
    metas
        .iter()
        .filter(|meta| {
            dom::get_attribute(meta, attr).is_some_and(|v| {
                if ignore_case {
                    v.eq_ignore_ascii_case(value)
                } else {
                    v == value
                }
            })
        })
        .filter_map(|meta| dom::get_attribute(meta, "content"))
        .map(|content| content.trim().to_string())
        .find(|content| !content.is_empty())
}

/// Content of a named meta tag, or an empty string.
///
/// Lookup order: `name` then `property` equal to `meta_name`, the same two
/// ignoring ASCII case, then the field-specific keys of [`fallback_keys`].
///
/// # Example
///
/// ```rust
/// use rs_htmlextract::{dom, metadata::meta_content};
///
/// let doc = dom::parse(r#"<head><meta property="og:description" content=" Summary "></head>"#);
/// assert_eq!(meta_content(&doc, "description"), "Summary");
/// assert_eq!(meta_content(&doc, "keywords"), "");
/// ```
#[must_use]
pub fn meta_content(doc: &Document, meta_name: &str) -> String {
    let metas = dom::handles(&doc.select("meta"));

    let exact = [false, true].into_iter().flat_map(|ignore_case| {
        NAME_ATTRIBUTES
            .iter()
            .map(move |attr| (*attr, meta_name, ignore_case))
    });
    let extra = fallback_keys(meta_name)
        .iter()
        .map(|(attr, value)| (*attr, *value, false));

    exact
        .chain(extra)
        .find_map(|(attr, value, ignore_case)| find_meta(&metas, attr, value, ignore_case))
        .unwrap_or_default()
}

/// Trimmed text of the first `<title>` element, or an empty string.
#[must_use]
pub fn document_title(doc: &Document) -> String {
    dom::handles(&doc.select("title"))
        .first()
        .map(|t| collapse_whitespace(dom::text_content(t).trim()))
        .unwrap_or_default()
}
