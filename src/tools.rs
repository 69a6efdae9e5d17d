//! Tool entry points.
//!
//! Each tool validates its parameters, fetches the page through a
//! [`PageSource`], and runs the extraction on the parsed document. The
//! `extract_*`/`summarize_page` functions do the same work on HTML already in
//! hand.

use tracing::{debug, info};

use crate::dom;
use crate::error::{Error, Result};
use crate::fetch::{FetchOptions, HttpFetcher, PageSource};
use crate::links::collect_links;
use crate::metadata::{extract_page_meta, meta_content};
use crate::params::{ArticleParams, LinkListParams, PageParams};
use crate::result::{ArticleFields, LinkList, PageSummary};
use crate::text::extract_text_by_class;

/// Pick the page source for a call.
///
/// # Errors
///
/// [`Error::BrowserUnavailable`] when rendering is requested and the crate
/// was built without the `browser` feature; otherwise whatever building the
/// fetcher reports.
pub fn source_for(render_with_browser: bool, options: &FetchOptions) -> Result<Box<dyn PageSource>> {
    if render_with_browser {
        browser_source(options)
    } else {
        Ok(Box::new(HttpFetcher::new(options)?))
    }
}

#[cfg(feature = "browser")]
fn browser_source(options: &FetchOptions) -> Result<Box<dyn PageSource>> {
    Ok(Box::new(crate::fetch::BrowserFetcher::new(options)?))
}

#[cfg(not(feature = "browser"))]
fn browser_source(_options: &FetchOptions) -> Result<Box<dyn PageSource>> {
    Err(Error::BrowserUnavailable)
}

fn fetch_page(source: &dyn PageSource, url: &str) -> Result<String> {
    let html = source.fetch(url)?;
    if html.trim().is_empty() {
        return Err(Error::EmptyDocument);
    }
    Ok(html)
}

/// Extract the article fields from a document.
///
/// Replacements touch title, content, keywords and description; deletions
/// touch every text field.
#[must_use]
pub fn extract_article(html: &str, params: &ArticleParams) -> ArticleFields {
    let doc = dom::parse(html);
    let root = dom::document_root(&doc);
    let transform = params.transform();

    let title = extract_text_by_class(&root, &params.title_selector);
    let content = extract_text_by_class(&root, &params.content_selector);
    let tags = extract_text_by_class(&root, &params.tag_selector);
    let source = extract_text_by_class(&root, &params.source_selector);
    let keywords = meta_content(&doc, "keywords");
    let description = meta_content(&doc, "description");

    debug!(
        title = !title.is_empty(),
        content = content.len(),
        tags = !tags.is_empty(),
        source = !source.is_empty(),
        "article fields located"
    );

    ArticleFields {
        title: transform.apply(&title),
        content: transform.apply(&content),
        tags: transform.delete(&tags),
        source: transform.delete(&source),
        keywords: transform.apply(&keywords),
        description: transform.apply(&description),
        url: params.url.clone(),
    }
}

/// Collect the link list from a document.
#[must_use]
pub fn extract_link_list(html: &str, params: &LinkListParams) -> LinkList {
    let doc = dom::parse(html);
    let root = dom::document_root(&doc);
    LinkList::new(collect_links(&root, &params.link_query()))
}

/// Summarize a document: raw HTML plus repaired title, keywords and
/// description.
#[must_use]
pub fn summarize_page(html: String, url: &str) -> PageSummary {
    let meta = {
        let doc = dom::parse(&html);
        extract_page_meta(&doc).repaired()
    };

    PageSummary {
        html,
        title: meta.title,
        keywords: meta.keywords,
        description: meta.description,
        url: url.to_string(),
    }
}

/// Article extraction tool.
///
/// # Example
///
/// ```rust
/// use rs_htmlextract::{html_extract, ArticleParams, StaticSource};
///
/// let source = StaticSource::new(
///     r#"<h1 class="headline">Hello</h1><div class="story">Body text</div>"#,
/// );
/// let params = ArticleParams {
///     url: "https://example.com/a".to_string(),
///     title_selector: "headline".to_string(),
///     content_selector: "story".to_string(),
///     ..ArticleParams::default()
/// };
///
/// let fields = html_extract(&params, &source)?;
/// assert_eq!(fields.title, "Hello");
/// assert_eq!(fields.content, "Body text");
/// # Ok::<(), rs_htmlextract::Error>(())
/// ```
///
/// # Errors
///
/// Parameter validation, fetch failures and empty pages.
pub fn html_extract(params: &ArticleParams, source: &dyn PageSource) -> Result<ArticleFields> {
    params.validate()?;
    info!(url = %params.url, "extracting article");

    let html = fetch_page(source, &params.url)?;
    Ok(extract_article(&html, params))
}

/// Link list tool.
///
/// # Errors
///
/// Parameter validation, fetch failures and empty pages.
pub fn list_links(params: &LinkListParams, source: &dyn PageSource) -> Result<LinkList> {
    params.validate()?;
    info!(url = %params.url, "listing links");

    let html = fetch_page(source, &params.url)?;
    let list = extract_link_list(&html, params);
    info!(url = %params.url, count = list.count, "links listed");
    Ok(list)
}

/// Page summary tool.
///
/// # Errors
///
/// Parameter validation, fetch failures and empty pages.
pub fn page_info(params: &PageParams, source: &dyn PageSource) -> Result<PageSummary> {
    params.validate()?;
    info!(url = %params.url, "summarizing page");

    let html = fetch_page(source, &params.url)?;
    Ok(summarize_page(html, &params.url))
}
