//! Parser construction options.
//!
//! The only knobs are collection pre-sizing hints for the per-item vectors.

/// Sizing hints consumed when the parser is constructed.
///
/// `category_hint` and `thumbnail_hint` are the expected number of
/// `<category>` and `<media:thumbnail>` elements per item. They only seed
/// `Vec::with_capacity`; parsed output is identical for any values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Expected categories per item.
    pub category_hint: usize,
    /// Expected thumbnails per item.
    pub thumbnail_hint: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            category_hint: 3,
            thumbnail_hint: 2,
        }
    }
}
