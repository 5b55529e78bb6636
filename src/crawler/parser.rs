//! HTML parser for extracting report rows
//!
//! This module turns page markup into:
//! - Content rows (from `h1`, `h2`, `p` and `a` elements, in document order)
//! - The raw `href` of the first "next" anchor, if any

use crate::state::{ContentRow, ContentTag};
use crate::url::resolve_link;
use scraper::{ElementRef, Html};
use url::Url;

/// A reportable element as seen in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement<'a> {
    pub tag: ContentTag,

    /// Visible text with surrounding whitespace trimmed
    pub text: String,

    /// Raw `href` attribute, if present
    pub href: Option<&'a str>,
}

impl PageElement<'_> {
    /// Returns true for an anchor whose text contains "next" in any case
    pub fn is_next_link(&self) -> bool {
        self.tag.is_anchor() && self.text.to_lowercase().contains("next")
    }

    /// Builds the report row for this element
    ///
    /// Returns `None` for elements without visible text. Anchor links are
    /// resolved against `base_url` when there is one; other tags get an
    /// empty link.
    pub fn to_row(&self, page_url: &str, base_url: Option<&Url>) -> Option<ContentRow> {
        if self.text.is_empty() {
            return None;
        }

        let link = match (self.tag.is_anchor(), self.href, base_url) {
            (true, Some(href), Some(base)) => resolve_link(href, base).unwrap_or_default(),
            _ => String::new(),
        };

        Some(ContentRow {
            source_url: page_url.to_string(),
            tag: self.tag,
            content: self.text.clone(),
            link,
        })
    }
}

/// Extracted information from one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// Rows in document order
    pub rows: Vec<ContentRow>,

    /// `href` of the first "next" anchor; empty when that anchor has none
    pub next_href: Option<String>,
}

/// Lazily walks the document, yielding every `h1`, `h2`, `p` and `a`
/// element in document order
pub fn content_elements(document: &Html) -> impl Iterator<Item = PageElement<'_>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter_map(|element| {
            let tag = ContentTag::from_name(element.value().name())?;
            Some(PageElement {
                tag,
                text: visible_text(&element),
                href: element.value().attr("href"),
            })
        })
}

/// Parses HTML content and extracts rows and the next-page link
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `page_url` - The URL the content was fetched from, as requested
///
/// Rows carry `page_url` verbatim as their source.
///
/// # Example
///
/// ```
/// use page_trail::crawler::parse_page;
///
/// let html = r#"<h1>Title</h1><p>Hello</p><a href="/x">Next</a>"#;
/// let parsed = parse_page(html, "https://example.com/");
/// assert_eq!(parsed.rows.len(), 3);
/// assert_eq!(parsed.next_href.as_deref(), Some("/x"));
/// ```
pub fn parse_page(html: &str, page_url: &str) -> ParsedPage {
    let document = Html::parse_document(html);
    let base_url = Url::parse(page_url).ok();
    let mut parsed = ParsedPage::default();

    for element in content_elements(&document) {
        if parsed.next_href.is_none() && element.is_next_link() {
            parsed.next_href = Some(element.href.unwrap_or_default().to_string());
        }

        if let Some(row) = element.to_row(page_url, base_url.as_ref()) {
            tracing::trace!("{} row: {}", row.tag, row.content);
            parsed.rows.push(row);
        }
    }

    parsed
}

/// Convenience function for extracting just the rows from HTML
pub fn extract_rows(html: &str, page_url: &str) -> Vec<ContentRow> {
    parse_page(html, page_url).rows
}

/// Trims every text node and joins the pieces without a separator
fn visible_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
