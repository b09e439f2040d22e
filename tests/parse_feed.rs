//! Document-level tests for the RSS parser: whole documents in, completed
//! feeds out.
//!
//! The handler's per-event behavior is covered by its unit tests; these
//! exercise the full pipeline through the quick-xml driver, including
//! entity decoding, CDATA, self-closing elements, and the tolerated
//! real-world junk (bad dates, extension elements, missing attributes).

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tickerfeed::{parse_str, Feed, ParseError, ParserConfig, UNSPECIFIED_DIMENSION};
use url::Url;

fn parse(xml: &str) -> Feed {
    parse_str(xml, ParserConfig::default()).expect("document should parse")
}

// ============================================================================
// Core routing
// ============================================================================

#[test]
fn round_trip_minimal_ticker_document() {
    let feed = parse(
        r#"<rss version="2.0"><channel>
            <title>T</title>
            <item>
                <title>first</title>
                <category>one</category>
            </item>
            <item>
                <title>second</title>
                <category>two</category>
                <media:thumbnail url="http://x/y.png" height="10"/>
            </item>
        </channel></rss>"#,
    );

    assert_eq!(feed.title.as_deref(), Some("T"));
    assert_eq!(feed.items.len(), 2);
    assert_eq!(feed.items[0].title.as_deref(), Some("first"));
    assert_eq!(feed.items[0].categories, vec!["one"]);
    assert_eq!(feed.items[1].title.as_deref(), Some("second"));
    assert_eq!(feed.items[1].categories, vec!["two"]);

    let thumbs = &feed.items[1].thumbnails;
    assert_eq!(thumbs.len(), 1);
    assert_eq!(thumbs[0].url.as_str(), "http://x/y.png");
    assert_eq!(thumbs[0].height, 10);
    assert_eq!(thumbs[0].width, UNSPECIFIED_DIMENSION);
}

#[test]
fn channel_and_item_fields_route_to_their_own_scope() {
    let feed = parse(
        r#"<rss><channel>
            <title>Channel title</title>
            <description>Channel description</description>
            <link>http://example.com/</link>
            <pubDate>Tue, 10 Jun 2003 04:00:00 GMT</pubDate>
            <category>news</category>
            <item>
                <title>Item title</title>
                <description>Item description</description>
                <link>http://example.com/1</link>
                <pubDate>Wed, 11 Jun 2003 09:30:00 GMT</pubDate>
                <category>updates</category>
            </item>
        </channel></rss>"#,
    );

    assert_eq!(feed.title.as_deref(), Some("Channel title"));
    assert_eq!(feed.description.as_deref(), Some("Channel description"));
    assert_eq!(feed.link, Some(Url::parse("http://example.com/").unwrap()));
    assert_eq!(feed.categories, vec!["news"]);
    assert!(feed.pub_date.is_some());

    let item = &feed.items[0];
    assert_eq!(item.title.as_deref(), Some("Item title"));
    assert_eq!(item.description.as_deref(), Some("Item description"));
    assert_eq!(item.link, Some(Url::parse("http://example.com/1").unwrap()));
    assert_eq!(item.categories, vec!["updates"]);
    assert!(item.pub_date.is_some());
    assert!(feed.pub_date < item.pub_date);
}

#[test]
fn categories_keep_occurrence_order_across_interleaved_elements() {
    let feed = parse(
        r#"<rss><channel><item>
            <category>a</category>
            <title>t</title>
            <category>b</category>
            <enclosure url="http://example.com/x.mp3"/>
            <category>a</category>
        </item></channel></rss>"#,
    );
    assert_eq!(feed.items[0].categories, vec!["a", "b", "a"]);
}

#[test]
fn source_element_sets_name_and_url_together() {
    let feed = parse(
        r#"<rss><channel><item>
            <source url="http://src">Example</source>
        </item></channel></rss>"#,
    );
    let item = &feed.items[0];
    assert_eq!(item.source_name.as_deref(), Some("Example"));
    assert_eq!(item.source_url, Some(Url::parse("http://src").unwrap()));
}

#[test]
fn content_encoded_is_distinct_from_description() {
    let feed = parse(
        r#"<rss><channel><item>
            <description>short teaser</description>
            <content:encoded><![CDATA[<p>the full <b>story</b></p>]]></content:encoded>
        </item></channel></rss>"#,
    );
    let item = &feed.items[0];
    assert_eq!(item.description.as_deref(), Some("short teaser"));
    assert_eq!(item.content.as_deref(), Some("<p>the full <b>story</b></p>"));
}

// ============================================================================
// Tolerated junk
// ============================================================================

#[test]
fn unknown_elements_change_nothing() {
    let with_noise = parse(
        r#"<rss><channel>
            <title>T</title>
            <foo:bar>nested <deeper>text</deeper> everywhere</foo:bar>
            <atom:link href="http://example.com/self"/>
            <item><title>i</title><guid>abc-123</guid></item>
        </channel></rss>"#,
    );
    let without_noise = parse(
        r#"<rss><channel>
            <title>T</title>
            <item><title>i</title></item>
        </channel></rss>"#,
    );
    assert_eq!(with_noise, without_noise);
}

#[test]
fn thumbnail_without_url_is_dropped_entirely() {
    let feed = parse(
        r#"<rss><channel><item>
            <media:thumbnail height="10" width="20"/>
        </item></channel></rss>"#,
    );
    assert!(feed.items[0].thumbnails.is_empty());
}

#[test]
fn thumbnail_outside_item_scope_is_dropped() {
    let feed = parse(
        r#"<rss><channel>
            <media:thumbnail url="http://x/y.png"/>
            <title>T</title>
        </channel></rss>"#,
    );
    assert_eq!(feed.title.as_deref(), Some("T"));
    assert!(feed.items.is_empty());
}

#[test]
fn unparseable_pub_date_leaves_field_unset() {
    let feed = parse(
        r#"<rss><channel>
            <pubDate>the day before yesterday</pubDate>
            <item><title>still here</title></item>
        </channel></rss>"#,
    );
    assert_eq!(feed.pub_date, None);
    assert_eq!(feed.items.len(), 1);
}

#[test]
fn real_world_sloppy_pub_dates_parse() {
    let feed = parse(
        r#"<rss><channel>
            <item><pubDate>Tue, 10 Jun 03 04:00 GMT</pubDate></item>
            <item><pubDate>2003-06-10T04:00:00Z</pubDate></item>
            <item><pubDate>Tue, 10 Jun 2003 04:00:00 UTC</pubDate></item>
        </channel></rss>"#,
    );
    for item in &feed.items {
        assert!(item.pub_date.is_some());
    }
    assert_eq!(feed.items[0].pub_date, feed.items[1].pub_date);
    assert_eq!(feed.items[1].pub_date, feed.items[2].pub_date);
}

// ============================================================================
// Text fidelity
// ============================================================================

#[test]
fn whitespace_inside_recognized_elements_survives() {
    let feed = parse("<rss><channel><title>  spaced  out  </title></channel></rss>");
    assert_eq!(feed.title.as_deref(), Some("  spaced  out  "));
}

#[test]
fn entities_decode_once_only() {
    // "[&lt;source&gt;]" embedded as literal text in the document must come
    // out as "[<source>]": decoded at the XML layer, not re-parsed.
    let feed = parse(
        "<rss><channel><title>Story [&lt;source&gt;] &amp; more</title></channel></rss>",
    );
    assert_eq!(feed.title.as_deref(), Some("Story [<source>] & more"));
}

#[test]
fn character_data_split_by_comments_concatenates() {
    let feed = parse("<rss><channel><title>Brea<!-- chunk boundary -->king</title></channel></rss>");
    assert_eq!(feed.title.as_deref(), Some("Breaking"));
}

// ============================================================================
// Document-shape edge cases
// ============================================================================

#[test]
fn document_without_items_yields_empty_feed() {
    let feed = parse("<rss><channel><title>quiet day</title></channel></rss>");
    assert_eq!(feed.title.as_deref(), Some("quiet day"));
    assert!(feed.items.is_empty());
}

#[test]
fn self_closing_item_yields_an_empty_item() {
    let feed = parse("<rss><channel><item/></channel></rss>");
    assert_eq!(feed.items.len(), 1);
    assert_eq!(feed.items[0].title, None);
}

#[test]
fn malformed_xml_fails_the_whole_parse() {
    let result = parse_str("<rss><channel><title>oops", ParserConfig::default());
    assert!(matches!(result, Err(ParseError::Xml(_))));
}

#[test]
fn sizing_hints_do_not_affect_output() {
    let xml = r#"<rss><channel>
        <item>
            <category>a</category><category>b</category>
            <media:thumbnail url="http://x/1.png"/>
        </item>
    </channel></rss>"#;
    let tiny = parse_str(
        xml,
        ParserConfig {
            category_hint: 0,
            thumbnail_hint: 0,
        },
    )
    .unwrap();
    let roomy = parse_str(
        xml,
        ParserConfig {
            category_hint: 64,
            thumbnail_hint: 64,
        },
    )
    .unwrap();
    assert_eq!(tiny, roomy);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Every `<item>` boundary produces exactly one item, in document order,
    /// no matter what the titles contain (within XML-safe characters).
    #[test]
    fn item_count_and_order_match_boundaries(
        titles in proptest::collection::vec("[A-Za-z0-9 ]{1,20}", 0..20)
    ) {
        let mut xml = String::from("<rss><channel><title>C</title>");
        for title in &titles {
            xml.push_str("<item><title>");
            xml.push_str(title);
            xml.push_str("</title></item>");
        }
        xml.push_str("</channel></rss>");

        let feed = parse_str(&xml, ParserConfig::default()).unwrap();
        prop_assert_eq!(feed.items.len(), titles.len());
        for (item, expected) in feed.items.iter().zip(&titles) {
            prop_assert_eq!(item.title.as_deref(), Some(expected.as_str()));
        }
    }

    /// Category lists have exactly one entry per occurrence, in order.
    #[test]
    fn category_count_matches_occurrences(labels in proptest::collection::vec("[a-z]{1,8}", 0..10)) {
        let mut xml = String::from("<rss><channel><item>");
        for label in &labels {
            xml.push_str("<category>");
            xml.push_str(label);
            xml.push_str("</category>");
        }
        xml.push_str("</item></channel></rss>");

        let feed = parse_str(&xml, ParserConfig::default()).unwrap();
        prop_assert_eq!(&feed.items[0].categories, &labels);
    }
}
