//! Metadata extraction module.
//!
//! Page-level fields that do not come from class selectors: the `<title>`
//! element and the keywords/description meta tags.

pub mod meta_tags;

use dom_query::Document;

use crate::encoding::repair_or_keep;

pub use meta_tags::{document_title, meta_content};

/// Title, keywords and description of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    /// `<title>` text.
    pub title: String,
    /// Keywords meta content.
    pub keywords: String,
    /// Description meta content.
    pub description: String,
}

impl PageMeta {
    /// Undo Latin-1 mojibake in every field.
    #[must_use]
    pub fn repaired(self) -> Self {
        Self {
            title: repair_or_keep(&self.title),
            keywords: repair_or_keep(&self.keywords),
            description: repair_or_keep(&self.description),
        }
    }
}

/// Extract title, keywords and description.
#[must_use]
pub fn extract_page_meta(doc: &Document) -> PageMeta {
    PageMeta {
        title: document_title(doc),
        keywords: meta_content(doc, "keywords"),
        description: meta_content(doc, "description"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn test_extract_page_meta() {
        let doc = dom::parse(
            r#"<html><head>
                <title>Daily News</title>
                <meta name="keywords" content="news, daily">
                <meta name="description" content="All the news">
            </head></html>"#,
        );

        let meta = extract_page_meta(&doc);
        assert_eq!(meta.title, "Daily News");
        assert_eq!(meta.keywords, "news, daily");
        assert_eq!(meta.description, "All the news");
    }

    #[test]
    fn test_repaired() {
        let meta = PageMeta {
            title: "CafÃ©".to_string(),
            keywords: "plain".to_string(),
            description: String::new(),
        }
        .repaired();

        assert_eq!(meta.title, "Café");
        assert_eq!(meta.keywords, "plain");
        assert_eq!(meta.description, "");
    }
}
