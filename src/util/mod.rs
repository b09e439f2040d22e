//! Small pure helpers the parser core calls into.
//!
//! - [`parse_rfc822`] - tolerant RFC-822 date parsing for `<pubDate>`
//! - [`str_value`] / [`int_value`] - typed attribute extraction with defaults

mod attrs;
mod dates;

pub use attrs::{int_value, str_value};
pub use dates::parse_rfc822;
