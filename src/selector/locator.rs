//! Element Locator
//!
//! Resolves a class-token list against a tree or subtree with three fallback
//! tiers, tried in order until one produces a match:
//!
//! 1. **Exact combination** (only for more than one token): elements carrying
//!    every token as a class.
//! 2. **Single token**: the first token, in order, that some element carries as
//!    a whole class name; all of that token's matches are returned.
//! 3. **Substring**: the first token, in order, that appears inside some
//!    element's class attribute (case-sensitive).
//!
//! Every tier walks descendants in document order, so the same input always
//! yields the same elements in the same order. Callers must not rely on which
//! tier fired.

use std::collections::HashSet;

use dom_query::Selection;
use tracing::debug;

use super::SubContainer;
use crate::dom;

/// One resolution strategy: root, tokens, optional tag constraint.
pub type Tier = for<'a> fn(&Selection<'a>, &[String], Option<&str>) -> Vec<Selection<'a>>;

/// The fallback chain, in the order it is tried.
pub const TIERS: &[(&str, Tier)] = &[
    ("exact-combination", exact_combination),
    ("single-token", single_token),
    ("substring", substring),
];

/// Locate elements under `root` matching the class tokens.
///
/// Returns an empty list when `tokens` is empty or no tier matches. The result
/// holds single-node handles, deduplicated by tree position.
///
/// # Example
///
/// ```rust
/// use rs_htmlextract::dom;
/// use rs_htmlextract::selector::locator::find_elements_by_classes;
///
/// let doc = dom::parse(r#"<div class="a">only a</div><div class="a b">both</div>"#);
/// let root = dom::document_root(&doc);
/// let tokens = vec!["a".to_string(), "b".to_string()];
///
/// let found = find_elements_by_classes(&root, &tokens, None);
/// assert_eq!(found.len(), 1);
/// assert_eq!(dom::text_content(&found[0]).to_string(), "both");
/// ```
#[must_use]
pub fn find_elements_by_classes<'a>(
    root: &Selection<'a>,
    tokens: &[String],
    tag: Option<&str>,
) -> Vec<Selection<'a>> {
    if tokens.is_empty() {
        return Vec::new();
    }

    for (name, tier) in TIERS {
        let found = tier(root, tokens, tag);
        if !found.is_empty() {
            debug!(tier = *name, matches = found.len(), ?tokens, "locator resolved");
            return dedup_by_node(found);
        }
    }

    debug!(?tokens, "locator found no match");
    Vec::new()
}

/// First element the locator resolves, if any.
#[must_use]
pub fn find_first_by_classes<'a>(root: &Selection<'a>, tokens: &[String]) -> Option<Selection<'a>> {
    find_elements_by_classes(root, tokens, None).into_iter().next()
}

/// Resolve the children of a link container.
///
/// A tag selector takes every descendant with that tag, bypassing the tiers.
#[must_use]
pub fn find_sub_containers<'a>(root: &Selection<'a>, sub: &SubContainer) -> Vec<Selection<'a>> {
    match sub {
        SubContainer::Classes(tokens) => find_elements_by_classes(root, tokens, None),
        SubContainer::Tag(tag) => dom::handles(&dom::get_elements_by_tag_name(root, tag)),
    }
}

/// Drop repeated handles to the same node, keeping first-seen order.
#[must_use]
pub fn dedup_by_node(elements: Vec<Selection<'_>>) -> Vec<Selection<'_>> {
    let mut seen = HashSet::new();
    elements
        .into_iter()
        .filter(|el| dom::node_id(el).is_some_and(|id| seen.insert(id)))
        .collect()
}

// === Tiers ===

/// Elements with a class attribute, optionally restricted to one tag.
fn candidates<'a>(root: &Selection<'a>, tag: Option<&str>) -> Vec<Selection<'a>> {
    dom::descendant_elements(root)
        .into_iter()
        .filter(|el| el.has_attr("class"))
        .filter(|el| tag.is_none_or(|t| dom::is_tag(el, t)))
        .collect()
}

fn exact_combination<'a>(
    root: &Selection<'a>,
    tokens: &[String],
    tag: Option<&str>,
) -> Vec<Selection<'a>> {
    if tokens.len() < 2 {
        return Vec::new();
    }

    candidates(root, tag)
        .into_iter()
        .filter(|el| tokens.iter().all(|t| dom::has_class(el, t)))
        .collect()
}

fn single_token<'a>(
    root: &Selection<'a>,
    tokens: &[String],
    tag: Option<&str>,
) -> Vec<Selection<'a>> {
    first_token_matches(candidates(root, tag), tokens, |el, token| {
        dom::has_class(el, token)
    })
}

fn substring<'a>(root: &Selection<'a>, tokens: &[String], tag: Option<&str>) -> Vec<Selection<'a>> {
    first_token_matches(candidates(root, tag), tokens, |el, token| {
        dom::class_name(el).is_some_and(|class| class.contains(token.as_str()))
    })
}

/// Matches for the first token, in order, that matches anything.
fn first_token_matches<'a, F>(
    candidates: Vec<Selection<'a>>,
    tokens: &[String],
    rule: F,
) -> Vec<Selection<'a>>
where
    F: Fn(&Selection<'a>, &String) -> bool,
{
    for token in tokens {
        let matches: Vec<Selection<'a>> = candidates
            .iter()
            .filter(|el| rule(*el, token))
            .cloned()
            .collect();
        if !matches.is_empty() {
            return matches;
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &str) -> Vec<String> {
        crate::selector::parse_class_names(raw)
    }

    fn texts(found: &[Selection]) -> Vec<String> {
        found
            .iter()
            .map(|el| dom::text_content(el).trim().to_string())
            .collect()
    }

    #[test]
    fn test_exact_combination_preferred_over_single_class() {
        let doc = dom::parse(
            r#"
            <div class="a">only a</div>
            <div class="b">only b</div>
            <div class="a b">both</div>
        "#,
        );
        let root = dom::document_root(&doc);

        let found = find_elements_by_classes(&root, &tokens("a b"), None);
        assert_eq!(texts(&found), vec!["both"]);
    }

    #[test]
    fn test_single_token_stops_at_first_matching_token() {
        let doc = dom::parse(
            r#"
            <p class="second">s1</p>
            <p class="first">f1</p>
            <p class="first">f2</p>
        "#,
        );
        let root = dom::document_root(&doc);

        // No element has both; "first" matches, so "second" is never consulted.
        let found = find_elements_by_classes(&root, &tokens("first,second"), None);
        assert_eq!(texts(&found), vec!["f1", "f2"]);
    }

    #[test]
    fn test_single_token_skips_tokens_without_matches() {
        let doc = dom::parse(r#"<p class="real">x</p>"#);
        let root = dom::document_root(&doc);

        let found = find_elements_by_classes(&root, &tokens("ghost real"), None);
        assert_eq!(texts(&found), vec!["x"]);
    }

    #[test]
    fn test_substring_fallback() {
        let doc = dom::parse(
            r#"
            <div class="article-title-main">Headline</div>
            <div class="sidebar">Side</div>
        "#,
        );
        let root = dom::document_root(&doc);

        let found = find_elements_by_classes(&root, &tokens("title"), None);
        assert_eq!(texts(&found), vec!["Headline"]);
    }

    #[test]
    fn test_substring_is_case_sensitive() {
        let doc = dom::parse(r#"<div class="ArticleTitle">Headline</div>"#);
        let root = dom::document_root(&doc);

        assert!(find_elements_by_classes(&root, &tokens("title"), None).is_empty());
        assert_eq!(
            find_elements_by_classes(&root, &tokens("Title"), None).len(),
            1
        );
    }

    #[test]
    fn test_exact_tier_not_used_for_single_token() {
        let doc = dom::parse(r#"<div class="titles">a</div><div class="title">b</div>"#);
        let root = dom::document_root(&doc);

        let found = find_elements_by_classes(&root, &tokens("title"), None);
        assert_eq!(texts(&found), vec!["b"]);
    }

    #[test]
    fn test_tag_constraint() {
        let doc = dom::parse(
            r#"
            <span class="link">not an anchor</span>
            <a class="link" href="/x">anchor</a>
        "#,
        );
        let root = dom::document_root(&doc);

        let found = find_elements_by_classes(&root, &tokens("link"), Some("a"));
        assert_eq!(texts(&found), vec!["anchor"]);
    }

    #[test]
    fn test_tag_constraint_applies_to_substring_tier() {
        let doc = dom::parse(
            r#"
            <div class="item-link">div</div>
            <a class="item-link" href="/x">anchor</a>
        "#,
        );
        let root = dom::document_root(&doc);

        let found = find_elements_by_classes(&root, &tokens("link"), Some("a"));
        assert_eq!(texts(&found), vec!["anchor"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let doc = dom::parse(r#"<div class="x">x</div>"#);
        let root = dom::document_root(&doc);

        assert!(find_elements_by_classes(&root, &tokens("nothing"), None).is_empty());
        assert!(find_elements_by_classes(&root, &[], None).is_empty());
    }

    #[test]
    fn test_search_is_scoped_to_subtree() {
        let doc = dom::parse(
            r#"
            <div id="one"><p class="item">inside</p></div>
            <p class="item">outside</p>
        "#,
        );
        let scope = doc.select("#one");

        let found = find_elements_by_classes(&scope, &tokens("item"), None);
        assert_eq!(texts(&found), vec!["inside"]);
    }

    #[test]
    fn test_identical_text_elements_are_kept() {
        let doc = dom::parse(r#"<p class="row">same</p><p class="row">same</p>"#);
        let root = dom::document_root(&doc);

        let found = find_elements_by_classes(&root, &tokens("row"), None);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_dedup_by_node_removes_repeated_handles() {
        let doc = dom::parse(r#"<div class="a b">x</div><div class="a">y</div>"#);
        let root = dom::document_root(&doc);

        let mut found = exact_combination(&root, &tokens("a b"), None);
        found.extend(single_token(&root, &tokens("a"), None));
        assert_eq!(found.len(), 3);

        let unique = dedup_by_node(found);
        assert_eq!(texts(&unique), vec!["x", "y"]);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let doc = dom::parse(
            r#"<div class="c1">1</div><div class="c2">2</div><div class="c1">3</div>"#,
        );
        let root = dom::document_root(&doc);
        let toks = tokens("c2 c1");

        let first = find_elements_by_classes(&root, &toks, None);
        let second = find_elements_by_classes(&root, &toks, None);
        let ids: Vec<_> = first.iter().map(dom::node_id).collect();
        let ids_again: Vec<_> = second.iter().map(dom::node_id).collect();
        assert_eq!(ids, ids_again);
        assert_eq!(texts(&first), vec!["2"]);
    }

    #[test]
    fn test_find_first_by_classes() {
        let doc = dom::parse(r#"<h1 class="title">First</h1><h2 class="title">Second</h2>"#);
        let root = dom::document_root(&doc);

        let first = find_first_by_classes(&root, &tokens("title"));
        assert_eq!(first.map(|el| dom::text_content(&el).to_string()), Some("First".to_string()));
    }

    #[test]
    fn test_find_sub_containers_by_tag() {
        let doc = dom::parse(
            r#"<ul class="list"><li class="x">a</li><li>b</li></ul><li>outside</li>"#,
        );
        let list = doc.select("ul");

        let found = find_sub_containers(&list, &SubContainer::Tag("li".into()));
        assert_eq!(texts(&found), vec!["a", "b"]);
    }

    #[test]
    fn test_find_sub_containers_by_class() {
        let doc = dom::parse(r#"<ul><li class="x">a</li><li>b</li></ul>"#);
        let list = doc.select("ul");

        let found = find_sub_containers(&list, &SubContainer::Classes(tokens("x")));
        assert_eq!(texts(&found), vec!["a"]);
    }
}
