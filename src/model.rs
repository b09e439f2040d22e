//! Output data model for a parsed RSS 2.0 document.
//!
//! All fields are optional because RSS in the wild omits freely; the parser
//! fills in whatever the document supplies and leaves the rest `None`.
//! Collections preserve document order.

use chrono::{DateTime, FixedOffset};
use url::Url;

/// A parsed RSS channel and its items.
///
/// Returned by value when parsing completes: the parser relinquishes
/// ownership, so nothing can mutate a feed behind the caller's back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<Url>,
    pub pub_date: Option<DateTime<FixedOffset>>,
    /// Channel-level `<category>` labels in occurrence order.
    /// Duplicates are kept; this is a list, not a set.
    pub categories: Vec<String>,
    /// Items in document order.
    pub items: Vec<Item>,
}

/// A single `<item>` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Full-text body from `<content:encoded>`, distinct from the
    /// (usually truncated) description.
    pub content: Option<String>,
    pub link: Option<Url>,
    pub pub_date: Option<DateTime<FixedOffset>>,
    /// Item-level `<category>` labels in occurrence order.
    pub categories: Vec<String>,
    /// Human-readable name from the text of a `<source>` element.
    pub source_name: Option<String>,
    /// The `url` attribute of a `<source>` element.
    pub source_url: Option<Url>,
    /// `<media:thumbnail>` entries in occurrence order.
    pub thumbnails: Vec<Thumbnail>,
}

impl Item {
    /// Creates an empty item with pre-sized category and thumbnail lists.
    ///
    /// The capacities come from [`ParserConfig`](crate::ParserConfig) and are
    /// pure allocation hints; they never affect parsed output.
    pub fn with_capacity(categories: usize, thumbnails: usize) -> Self {
        Item {
            categories: Vec::with_capacity(categories),
            thumbnails: Vec::with_capacity(thumbnails),
            ..Item::default()
        }
    }
}

/// Dimension value meaning "not supplied by the feed".
pub const UNSPECIFIED_DIMENSION: i32 = -1;

/// A `<media:thumbnail>` reference attached to an item.
///
/// Only created when the element carries a parseable `url` attribute;
/// elements without one are dropped entirely, so `url` is not optional here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: Url,
    /// Pixel height, or [`UNSPECIFIED_DIMENSION`] if the attribute was
    /// missing or not numeric.
    pub height: i32,
    /// Pixel width, or [`UNSPECIFIED_DIMENSION`].
    pub width: i32,
}
