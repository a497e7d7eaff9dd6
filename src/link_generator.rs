use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::data_models::{Platform, SearchLink, SearchResultItem, TemplateKind, UrlTemplate};

/// Characters left untouched by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Whitespace as understood by browsers when trimming or matching `\s`.
/// Unlike `char::is_whitespace`, NEL (U+0085) is not included and the BOM is.
pub fn is_query_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000d}'
            | '\u{0020}'
            | '\u{00a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

pub fn trim_query(raw: &str) -> &str {
    raw.trim_matches(is_query_whitespace)
}

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

pub fn strip_whitespace(query: &str) -> String {
    query.chars().filter(|c| !is_query_whitespace(*c)).collect()
}

pub fn render_template(template: &UrlTemplate, query: &str) -> String {
    let encoded = match template.kind {
        TemplateKind::QueryEncode => encode_uri_component(query),
        TemplateKind::HandleEncode => encode_uri_component(&strip_whitespace(query)),
    };
    format!("{}{}{}", template.prefix, encoded, template.suffix)
}

/// A link counts as a direct profile attempt when its URL contains
/// `/` followed by the encoded, whitespace-free query.
pub fn is_direct_attempt(url: &str, query: &str) -> bool {
    let needle = format!("/{}", encode_uri_component(&strip_whitespace(query)));
    url.contains(&needle)
}

/// Links for one platform, deduplicated by URL (first occurrence wins).
pub fn platform_links(platform: &Platform, query: &str) -> Vec<SearchLink> {
    let mut links: Vec<SearchLink> = Vec::with_capacity(platform.templates.len());
    for template in platform.templates {
        let url = render_template(template, query);
        if links.iter().any(|l| l.url == url) {
            continue;
        }
        links.push(SearchLink {
            is_direct_attempt: is_direct_attempt(&url, query),
            url,
            query_text: query.to_string(),
        });
    }
    links
}

/// Builds the result set for `query` over `platforms`, keeping their order.
/// Platforms that produce no links are left out.
pub fn generate<I>(query: &str, platforms: I) -> Vec<SearchResultItem>
where
    I: IntoIterator<Item = &'static Platform>,
{
    platforms
        .into_iter()
        .filter_map(|platform| {
            let links = platform_links(platform, query);
            if links.is_empty() {
                None
            } else {
                Some(SearchResultItem { platform, links })
            }
        })
        .collect()
}

#[test]
fn test_encode_uri_component() {
    assert_eq!(encode_uri_component("john doe"), "john%20doe");
    assert_eq!(encode_uri_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
    assert_eq!(encode_uri_component("a&b=c/d?e#f"), "a%26b%3Dc%2Fd%3Fe%23f");
    assert_eq!(encode_uri_component("@handle"), "%40handle");
    assert_eq!(encode_uri_component("josé"), "jos%C3%A9");
    assert_eq!(encode_uri_component("100%"), "100%25");
}

#[test]
fn test_strip_and_trim_whitespace() {
    assert_eq!(strip_whitespace("john  doe\tsmith\n"), "johndoesmith");
    assert_eq!(strip_whitespace("a\u{00a0}b\u{feff}c"), "abc");
    assert_eq!(trim_query("  \u{feff}john doe \u{3000}"), "john doe");
    assert_eq!(trim_query(" \t\n "), "");
    assert_eq!(strip_whitespace("a\u{000b}b\u{2028}c\u{205f}d"), "abcd");
}

#[test]
fn test_next_line_is_not_whitespace() {
    assert!(!is_query_whitespace('\u{85}'));
    assert_eq!(trim_query("\u{85}john"), "\u{85}john");
    assert_eq!(strip_whitespace("john\u{85} doe"), "john\u{85}doe");
    assert_eq!(
        encode_uri_component(&strip_whitespace("john\u{85}doe")),
        "john%C2%85doe"
    );
}

#[test]
fn test_is_direct_attempt_heuristic() {
    assert!(is_direct_attempt("https://www.instagram.com/johndoe/", "john doe"));
    assert!(is_direct_attempt("https://www.reddit.com/user/johndoe/", "john doe"));
    // `@` handles put the marker between the slash and the name.
    assert!(!is_direct_attempt("https://www.tiktok.com/@johndoe", "john doe"));
    assert!(!is_direct_attempt(
        "https://www.instagram.com/explore/search/keyword/?q=john%20doe",
        "john doe"
    ));
    // The heuristic matches on the URL alone, so a query that collides with a
    // path segment of a search page is reported as direct.
    assert!(is_direct_attempt(
        "https://www.instagram.com/explore/search/keyword/?q=search",
        "search"
    ));
}
