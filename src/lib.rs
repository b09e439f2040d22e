//! Streaming RSS 2.0 parser for headline ticker apps.
//!
//! This crate is the parsing core a ticker UI sits on top of: it consumes a
//! stream of XML events and incrementally builds a [`Feed`] of [`Item`]s,
//! tracking whether each recognized field belongs to the channel or to the
//! item currently in progress. Only the element set a ticker actually needs
//! is routed (`title`, `description`, `content:encoded`, `link`,
//! `category`, `pubDate`, `source`, `media:thumbnail`, and the `item`
//! boundary); everything else in the document is skipped without cost or
//! complaint, which keeps the parser forward-compatible with whatever
//! extension elements feeds grow next.
//!
//! # Architecture
//!
//! - [`handler`] - the push-based state machine ([`FeedHandler`]) with the
//!   dispatch tables and lazy text buffering
//! - [`parser`] - the `quick-xml` driver ([`parse_str`] / [`parse_reader`])
//! - [`model`] - the output types ([`Feed`], [`Item`], [`Thumbnail`])
//! - [`util`] - tolerant RFC-822 date parsing and attribute extraction
//!
//! Fetching documents over the network, refresh scheduling, and rendering
//! are the embedding application's business; nothing here does I/O beyond
//! the reader you hand in, and nothing here spawns a thread.
//!
//! # Example
//!
//! ```
//! use tickerfeed::{parse_str, ParserConfig};
//!
//! let xml = r#"
//!     <rss version="2.0">
//!       <channel>
//!         <title>Example News</title>
//!         <item>
//!           <title>First headline</title>
//!           <category>tech</category>
//!         </item>
//!       </channel>
//!     </rss>"#;
//!
//! let feed = parse_str(xml, ParserConfig::default()).unwrap();
//! assert_eq!(feed.title.as_deref(), Some("Example News"));
//! assert_eq!(feed.items.len(), 1);
//! assert_eq!(feed.items[0].categories, vec!["tech"]);
//! ```

pub mod config;
pub mod handler;
pub mod model;
pub mod parser;
pub mod util;

pub use config::ParserConfig;
pub use handler::FeedHandler;
pub use model::{Feed, Item, Thumbnail, UNSPECIFIED_DIMENSION};
pub use parser::{parse_reader, parse_str, ParseError};
