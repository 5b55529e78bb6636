//! Report row definitions
//!
//! A crawl produces one `ContentRow` per non-empty heading, paragraph or
//! anchor it encounters, in document order.
use std::fmt;

/// The element kinds that produce report rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentTag {
    /// Top-level heading
    H1,
    /// Second-level heading
    H2,
    /// Paragraph
    P,
    /// Anchor; the only kind that carries a link
    A,
}

impl ContentTag {
    /// All tags in report order
    pub const ALL: [ContentTag; 4] = [Self::H1, Self::H2, Self::P, Self::A];

    /// Returns the lowercase HTML element name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::P => "p",
            Self::A => "a",
        }
    }

    /// Maps an HTML element name to a tag, if it is one we report on
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "p" => Some(Self::P),
            "a" => Some(Self::A),
            _ => None,
        }
    }

    pub fn is_anchor(&self) -> bool {
        matches!(self, Self::A)
    }
}

impl fmt::Display for ContentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRow {
    /// The page the element was found on
    pub source_url: String,

    /// Element kind
    pub tag: ContentTag,

    /// Trimmed visible text; never empty
    pub content: String,

    /// Absolute link target for anchors, empty otherwise
    pub link: String,
}

impl ContentRow {
    /// Returns true if the row carries a link
    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}
