//! The parsing state machine.
//!
//! [`FeedHandler`] is a push-based consumer of XML events: the tokenizer
//! calls [`open`](FeedHandler::open), [`text`](FeedHandler::text), and
//! [`close`](FeedHandler::close) in document order, and the handler builds a
//! [`Feed`] incrementally. Recognized element names route through two static
//! dispatch tables; everything else passes through untouched, which is how
//! unknown elements and vendor extensions are ignored without error.
//!
//! Text is buffered lazily: a buffer exists only between the open and close
//! of an element present in the content dispatch table. Elements with no
//! dispatch entry never pay for an allocation, and the driver can consult
//! [`is_buffering`](FeedHandler::is_buffering) to skip decoding their
//! character data entirely.
//!
//! One handler parses one document. Events must be well-formed (matching
//! open/close pairs); behavior under unbalanced events is undefined, as
//! enforcing that is the tokenizer's job.

use quick_xml::events::BytesStart;
use quick_xml::name::QName;
use url::Url;

use crate::config::ParserConfig;
use crate::model::{Feed, Item, Thumbnail, UNSPECIFIED_DIMENSION};
use crate::util::{int_value, parse_rfc822, str_value};

/// Qualified name of the element that bounds an item.
const ITEM: &[u8] = b"item";

/// Routing actions applied to an element's accumulated text at close time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentField {
    Title,
    Description,
    /// `<content:encoded>`. Item-only, ignored at feed scope.
    Content,
    Link,
    /// Additive: every occurrence appends, order preserved.
    Category,
    PubDate,
    /// The text of `<source>`. Item-only.
    SourceName,
}

/// Routing actions applied to an element's attributes at open time.
/// No text buffering is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrField {
    /// The `url` attribute of `<source>`.
    SourceUrl,
    /// `<media:thumbnail>`, via its url/height/width attributes.
    Thumbnail,
}

/// Content dispatch table, keyed by the qualified element name (namespace
/// prefix included, compared verbatim). A miss means "not our element".
fn content_field(name: &[u8]) -> Option<ContentField> {
    match name {
        b"title" => Some(ContentField::Title),
        b"description" => Some(ContentField::Description),
        b"content:encoded" => Some(ContentField::Content),
        b"link" => Some(ContentField::Link),
        b"category" => Some(ContentField::Category),
        b"pubDate" => Some(ContentField::PubDate),
        b"source" => Some(ContentField::SourceName),
        _ => None,
    }
}

/// Attribute dispatch table. `source` appears here and in the content table:
/// one element occurrence sets both the source name (text) and the source
/// URL (attribute).
fn attr_field(name: &[u8]) -> Option<AttrField> {
    match name {
        b"media:thumbnail" => Some(AttrField::Thumbnail),
        b"source" => Some(AttrField::SourceUrl),
        _ => None,
    }
}

/// Which object recognized content fields currently route to.
///
/// Exactly one variant is active at any point in the parse. There is no
/// third state and no nesting: `<item>` inside `<item>` is not valid RSS
/// and is not modeled.
enum Scope {
    /// Between items: fields belong to the channel.
    Feed,
    /// Inside an `<item>`: fields belong to the in-progress item, which is
    /// owned here exclusively until its close event moves it into the feed.
    Item(Item),
}

/// The active content field and the text accumulated for it so far.
struct PendingText {
    field: ContentField,
    buffer: String,
}

/// Push-based RSS 2.0 parser core.
///
/// Feed one document's events through [`open`](Self::open) /
/// [`text`](Self::text) / [`close`](Self::close), then take the result with
/// [`into_feed`](Self::into_feed). Consuming `self` there makes the
/// one-document-per-handler contract a compile-time fact.
pub struct FeedHandler {
    config: ParserConfig,
    feed: Feed,
    scope: Scope,
    pending: Option<PendingText>,
}

impl FeedHandler {
    pub fn new(config: ParserConfig) -> Self {
        FeedHandler {
            config,
            feed: Feed::default(),
            scope: Scope::Feed,
            pending: None,
        }
    }

    /// Element-open event.
    ///
    /// Applies attribute actions immediately, then decides what to do with
    /// the element's upcoming text: recognized content elements start a
    /// fresh buffer (a nested recognized element overwrites it; the last
    /// opened one wins until its own close), `<item>` enters item scope,
    /// and anything else changes nothing.
    pub fn open(&mut self, start: &BytesStart<'_>) {
        let name = start.name();
        if let Some(field) = attr_field(name.as_ref()) {
            self.apply_attributes(field, start);
        }
        if let Some(field) = content_field(name.as_ref()) {
            self.pending = Some(PendingText {
                field,
                buffer: String::new(),
            });
        } else if name.as_ref() == ITEM {
            self.scope = Scope::Item(Item::with_capacity(
                self.config.category_hint,
                self.config.thumbnail_hint,
            ));
        }
    }

    /// Character-data event. Chunks append verbatim, with no trimming;
    /// chunk boundaries carry no meaning. Discarded unless buffering.
    pub fn text(&mut self, chunk: &str) {
        if let Some(pending) = self.pending.as_mut() {
            pending.buffer.push_str(chunk);
        }
    }

    /// Element-close event.
    ///
    /// A live buffer is dispatched and cleared first; otherwise `</item>`
    /// moves the in-progress item into the feed and re-enters feed scope.
    /// Closing anything else, including an `</item>` that never opened,
    /// is a no-op.
    pub fn close(&mut self, name: QName<'_>) {
        if let Some(PendingText { field, buffer }) = self.pending.take() {
            self.apply_content(field, buffer);
        } else if name.as_ref() == ITEM {
            if let Scope::Item(item) = std::mem::replace(&mut self.scope, Scope::Feed) {
                self.feed.items.push(item);
            }
        }
    }

    /// True while text for a recognized element is being collected. The
    /// driver uses this to skip decoding character data nobody wants.
    pub fn is_buffering(&self) -> bool {
        self.pending.is_some()
    }

    /// Consumes the handler and yields the completed feed.
    ///
    /// A document with no `<item>` elements yields an empty item list; that
    /// is a valid feed, not an error.
    pub fn into_feed(self) -> Feed {
        self.feed
    }

    fn apply_content(&mut self, field: ContentField, text: String) {
        match field {
            ContentField::Title => match &mut self.scope {
                Scope::Feed => self.feed.title = Some(text),
                Scope::Item(item) => item.title = Some(text),
            },
            ContentField::Description => match &mut self.scope {
                Scope::Feed => self.feed.description = Some(text),
                Scope::Item(item) => item.description = Some(text),
            },
            ContentField::Content => {
                if let Scope::Item(item) = &mut self.scope {
                    item.content = Some(text);
                }
            }
            ContentField::Link => {
                if let Some(url) = parse_url(&text, "link") {
                    match &mut self.scope {
                        Scope::Feed => self.feed.link = Some(url),
                        Scope::Item(item) => item.link = Some(url),
                    }
                }
            }
            ContentField::Category => match &mut self.scope {
                Scope::Feed => self.feed.categories.push(text),
                Scope::Item(item) => item.categories.push(text),
            },
            ContentField::PubDate => match parse_rfc822(&text) {
                Some(date) => match &mut self.scope {
                    Scope::Feed => self.feed.pub_date = Some(date),
                    Scope::Item(item) => item.pub_date = Some(date),
                },
                None => {
                    tracing::warn!(value = %text.trim(), "Ignoring unparseable pubDate");
                }
            },
            ContentField::SourceName => {
                if let Scope::Item(item) = &mut self.scope {
                    item.source_name = Some(text);
                }
            }
        }
    }

    fn apply_attributes(&mut self, field: AttrField, start: &BytesStart<'_>) {
        // Both attribute actions target the in-progress item; outside item
        // scope the element has no effect.
        let item = match &mut self.scope {
            Scope::Item(item) => item,
            Scope::Feed => return,
        };
        match field {
            AttrField::SourceUrl => {
                if let Some(value) = str_value(start, b"url") {
                    if let Some(url) = parse_url(&value, "source") {
                        item.source_url = Some(url);
                    }
                }
            }
            AttrField::Thumbnail => {
                let value = match str_value(start, b"url") {
                    Some(value) => value,
                    None => {
                        tracing::debug!("Dropping media:thumbnail without url attribute");
                        return;
                    }
                };
                let height = int_value(start, b"height", UNSPECIFIED_DIMENSION);
                let width = int_value(start, b"width", UNSPECIFIED_DIMENSION);
                if let Some(url) = parse_url(&value, "media:thumbnail") {
                    item.thumbnails.push(Thumbnail { url, height, width });
                }
            }
        }
    }
}

/// URL parsing with the crate-wide skip policy: a value `url` rejects is
/// logged and treated as absent rather than failing the parse.
fn parse_url(text: &str, element: &str) -> Option<Url> {
    match Url::parse(text) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!(error = %e, element, value = %text.trim(), "Ignoring unparseable URL");
            None
        }
    }
}
