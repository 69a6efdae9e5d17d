//! Link Resolver
//!
//! Collects anchors from class-located containers and turns their hrefs into a
//! deduplicated list of absolute URLs.

use std::collections::HashSet;

use dom_query::Selection;
use tracing::debug;
use url::Url;

use crate::dom;
use crate::selector::locator::{find_elements_by_classes, find_sub_containers};
use crate::selector::{parse_class_names, SubContainer};
use crate::url_utils::{is_dead_link, join_with_base, join_with_page, BlockList};

/// Everything needed to pull a link list out of a document.
#[derive(Debug, Clone, Default)]
pub struct LinkQuery {
    /// Class tokens locating the link containers.
    pub container: Vec<String>,
    /// Optional selector for the children holding the anchors.
    pub sub_container: Option<SubContainer>,
    /// Class tokens for the anchors themselves; takes precedence over
    /// `sub_container`.
    pub anchor_classes: Vec<String>,
    /// Explicit base for joining relative hrefs.
    pub base_url: Option<String>,
    /// The URL the document was loaded from.
    pub page_url: Option<Url>,
    /// URLs matching these are dropped.
    pub blocklist: BlockList,
}

impl LinkQuery {
    /// Build a query from the raw parameter strings.
    ///
    /// Blank optional strings count as absent. A page URL that does not parse
    /// is kept as `None`; relative hrefs are then passed through unresolved, so
    /// callers validate it first (see [`crate::LinkListParams::validate`]).
    #[must_use]
    pub fn from_raw(
        container: &str,
        sub_container: &str,
        anchor_classes: &str,
        base_url: &str,
        page_url: &str,
        blocklist: &str,
    ) -> Self {
        let base_url = base_url.trim();
        Self {
            container: parse_class_names(container),
            sub_container: SubContainer::parse(sub_container),
            anchor_classes: parse_class_names(anchor_classes),
            base_url: (!base_url.is_empty()).then(|| base_url.to_string()),
            page_url: Url::parse(page_url.trim()).ok(),
            blocklist: BlockList::parse(blocklist),
        }
    }

    /// Turn one href into an absolute URL.
    #[must_use]
    pub fn resolve(&self, href: &str) -> String {
        resolve_href(href, self.base_url.as_deref(), self.page_url.as_ref())
    }
}

/// Compute the absolute URL for an href.
///
/// With a base URL the simple joining rules of [`join_with_base`] apply;
/// without one the href is resolved against the page URL.
///
/// # Example
///
/// ```rust
/// use rs_htmlextract::links::resolve_href;
///
/// assert_eq!(resolve_href("/a", Some("http://x.com/"), None), "http://x.com/a");
/// ```
#[must_use]
pub fn resolve_href(href: &str, base_url: Option<&str>, page_url: Option<&Url>) -> String {
    match (base_url, page_url) {
        (Some(base), _) => join_with_base(href, base),
        (None, Some(page)) => join_with_page(href, page),
        (None, None) => href.to_string(),
    }
}

/// Anchors with an `href` attribute below `root`.
fn anchors_with_href<'a>(root: &Selection<'a>) -> Vec<Selection<'a>> {
    dom::handles(&dom::query_selector_all(root, "a[href]"))
}

/// Anchors selected inside one container according to the query.
fn anchors_in<'a>(container: &Selection<'a>, query: &LinkQuery) -> Vec<Selection<'a>> {
    if !query.anchor_classes.is_empty() {
        return find_elements_by_classes(container, &query.anchor_classes, Some("a"));
    }

    match &query.sub_container {
        Some(sub) => find_sub_containers(container, sub)
            .iter()
            .flat_map(anchors_with_href)
            .collect(),
        None => anchors_with_href(container),
    }
}

/// Resolve anchors into unique absolute URLs.
///
/// Anchors without an href, or whose raw href is a dead link (`#`,
/// `javascript:`), are skipped. Resolved URLs the blocklist rejects are
/// dropped, and each URL appears once, at its first position.
#[must_use]
pub fn resolve_links(anchors: &[Selection], query: &LinkQuery) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for anchor in anchors {
        let Some(href) = dom::get_attribute(anchor, "href") else {
            continue;
        };
        if is_dead_link(&href) {
            continue;
        }

        let full_url = query.resolve(&href);
        if query.blocklist.blocks(&full_url) {
            debug!(url = %full_url, "blocked link");
            continue;
        }

        if seen.insert(full_url.clone()) {
            links.push(full_url);
        }
    }

    links
}

/// Collect the link list described by `query` from a document subtree.
///
/// Returns an empty list when no container tokens are given or no container
/// is found.
///
/// # Example
///
/// ```rust
/// use rs_htmlextract::dom;
/// use rs_htmlextract::links::{collect_links, LinkQuery};
///
/// let doc = dom::parse(r#"<ul class="news"><li><a href="/a">A</a></li></ul>"#);
/// let query = LinkQuery::from_raw("news", "", "", "http://x.com/", "http://x.com/list", "");
///
/// let links = collect_links(&dom::document_root(&doc), &query);
/// assert_eq!(links, vec!["http://x.com/a"]);
/// ```
#[must_use]
pub fn collect_links(root: &Selection, query: &LinkQuery) -> Vec<String> {
    let containers = find_elements_by_classes(root, &query.container, None);
    if containers.is_empty() {
        debug!(container = ?query.container, "no link container found");
        return Vec::new();
    }

    let anchors: Vec<Selection> = containers
        .iter()
        .flat_map(|container| anchors_in(container, query))
        .collect();

    let links = resolve_links(&anchors, query);
    debug!(
        containers = containers.len(),
        anchors = anchors.len(),
        links = links.len(),
        "links collected"
    );
    links
}
