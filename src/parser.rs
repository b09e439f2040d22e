//! Tokenizer driver: walks `quick-xml` events into a [`FeedHandler`].
//!
//! The handler itself never touches the tokenizer; this module is the
//! boundary adapter. It maps start/empty/text/cdata/end events onto the
//! handler's push protocol and turns the one hard failure mode, an XML
//! syntax error from the tokenizer, into [`ParseError`]. Everything
//! recoverable (unknown elements, bad dates, missing attributes) is already
//! absorbed inside the handler.

use std::io::BufRead;

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

use crate::config::ParserConfig;
use crate::handler::FeedHandler;
use crate::model::Feed;

/// Errors that can fail an entire parse.
///
/// Per-element problems never end up here; only the tokenizer rejecting the
/// document does.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying document is not well-formed XML (or reading it
    /// failed). Propagated from the tokenizer unmodified.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Parses one RSS document from a string.
pub fn parse_str(xml: &str, config: ParserConfig) -> Result<Feed, ParseError> {
    parse_reader(xml.as_bytes(), config)
}

/// Parses one RSS document from a buffered reader.
///
/// Drives the event loop to end-of-document and returns the completed
/// [`Feed`]. No items is a valid result, not an error.
///
/// # Security
///
/// XXE is structurally impossible here: `quick-xml` (0.37) does not parse
/// `<!ENTITY>` declarations, so only the five XML builtin entities ever
/// resolve. Custom entity references surface as an escape error.
pub fn parse_reader<R: BufRead>(input: R, config: ParserConfig) -> Result<Feed, ParseError> {
    // No trim_text here: the handler buffers character data verbatim, and
    // titles with meaningful leading/trailing whitespace must survive.
    let mut reader = Reader::from_reader(input);

    let mut handler = FeedHandler::new(config);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => handler.open(&e),
            // Self-closing elements (the usual shape of <media:thumbnail/>)
            // are an open and a close with nothing between.
            Event::Empty(e) => {
                handler.open(&e);
                handler.close(e.name());
            }
            Event::Text(e) => {
                // Only decode for elements somebody is collecting; ignored
                // subtrees cost nothing.
                if handler.is_buffering() {
                    handler.text(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                // CDATA is literal character data: no entity resolution, so
                // HTML markup embedded in descriptions passes through as-is.
                if handler.is_buffering() {
                    handler.text(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::End(e) => handler.close(e.name()),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(handler.into_feed())
}
