//! RFC-822 date parsing for `<pubDate>` values.
//!
//! Published feeds deviate from RFC 822 constantly: seconds go missing,
//! years shrink to two digits, zones arrive as names, offsets, or nothing
//! at all, and some publishers emit ISO 8601 outright. Parsing works down a
//! ladder of progressively sloppier formats and answers `None` rather than
//! failing the document over one bad date.

use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Non-RFC-822 formats that still carry an explicit UTC offset.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S %z",
    "%a, %d %b %Y %H:%M %z",
];

/// Formats without any zone information. Interpreted as UTC.
const ZONELESS_FORMATS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S",
    "%a, %d %b %Y %H:%M",
    "%d %b %Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses an RFC-822-style date string, tolerating common feed deviations.
///
/// Tries strict RFC 2822 first (which already covers two-digit years,
/// missing seconds, and the obsolete named zones like `GMT` and `EST`),
/// then RFC 3339, then the sloppy fallback formats above. A trailing `UTC`
/// token (not a legal RFC 822 zone, but common) is normalized to `+0000`.
///
/// Returns `None` when nothing matches; callers leave the field unset.
pub fn parse_rfc822(input: &str) -> Option<DateTime<FixedOffset>> {
    let raw = input.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc2822(raw) {
        return Some(date);
    }

    if let Some(stripped) = raw.strip_suffix("UTC") {
        let patched = format!("{}+0000", stripped);
        if let Ok(date) = DateTime::parse_from_rfc2822(&patched) {
            return Some(date);
        }
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date);
    }

    for format in OFFSET_FORMATS {
        if let Ok(date) = DateTime::parse_from_str(raw, format) {
            return Some(date);
        }
    }

    for format in ZONELESS_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(date.and_utc().fixed_offset());
        }
    }

    None
}
