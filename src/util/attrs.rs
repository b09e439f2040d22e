//! Typed readers over an XML element's attribute set.
//!
//! Attribute access is deliberately forgiving: a missing attribute is an
//! `Option`, never an error, and a malformed entry is skipped so one broken
//! attribute cannot take down the whole element.

use quick_xml::events::BytesStart;

/// Reads attribute `name` as an unescaped string, or `None` when absent.
pub fn str_value(start: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    for attr in start.attributes() {
        let attr = match attr {
            Ok(attr) => attr,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed attribute");
                continue;
            }
        };
        if attr.key.as_ref() != name {
            continue;
        }
        return match attr.unescape_value() {
            Ok(value) => Some(value.into_owned()),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping attribute with invalid escape");
                None
            }
        };
    }
    None
}

/// Reads attribute `name` as an integer.
///
/// A missing or non-numeric value yields the caller-supplied `default`.
pub fn int_value(start: &BytesStart<'_>, name: &[u8], default: i32) -> i32 {
    str_value(start, name)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
