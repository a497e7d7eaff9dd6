use socialeye::data_models::{Platform, UrlTemplate};
use socialeye::link_generator::{generate, platform_links};
use socialeye::platforms::{PLATFORMS, find_platform};

mod test_helpers {
    use super::*;

    pub fn platform(id: &str) -> &'static Platform {
        find_platform(id).unwrap()
    }

    pub fn urls(platform_id: &str, query: &str) -> Vec<String> {
        platform_links(platform(platform_id), query)
            .into_iter()
            .map(|l| l.url)
            .collect()
    }

    /// Both templates render to the same URL for whitespace-free queries.
    pub static DUPLICATING: Platform = Platform {
        id: "dup",
        name: "Duplicating",
        icon: "globe",
        theme_color: None,
        templates: &[
            UrlTemplate::handle("https://example.test/", ""),
            UrlTemplate::query("https://example.test/", ""),
            UrlTemplate::handle("https://example.test/", ""),
        ],
    };

    pub static EMPTY: Platform = Platform {
        id: "empty",
        name: "No templates",
        icon: "globe",
        theme_color: None,
        templates: &[],
    };
}

use test_helpers::*;

#[test]
fn test_instagram_search_and_handle_links() {
    let links = platform_links(platform("instagram"), "john doe");
    assert_eq!(links.len(), 2);

    assert_eq!(
        links[0].url,
        "https://www.instagram.com/explore/search/keyword/?q=john%20doe"
    );
    assert!(!links[0].is_direct_attempt);
    assert_eq!(links[0].label(), "Search for: john doe");

    assert_eq!(links[1].url, "https://www.instagram.com/johndoe/");
    assert!(links[1].is_direct_attempt);
    assert_eq!(links[1].label(), "Direct profile attempt for: john doe");

    assert!(links.iter().all(|l| l.query_text == "john doe"));
}

#[test]
fn test_catalog_urls_for_two_word_query() {
    let q = "john doe";
    assert_eq!(
        urls("facebook", q),
        vec!["https://www.facebook.com/search/people/?q=john%20doe"]
    );
    assert_eq!(
        urls("x-twitter", q),
        vec!["https://x.com/search?q=john%20doe&f=user"]
    );
    assert_eq!(
        urls("youtube", q),
        vec![
            "https://www.youtube.com/results?search_query=john%20doe",
            "https://www.youtube.com/@johndoe",
        ]
    );
    assert_eq!(
        urls("tiktok", q),
        vec![
            "https://www.tiktok.com/search/user?q=john%20doe",
            "https://www.tiktok.com/@johndoe",
        ]
    );
    assert_eq!(
        urls("linkedin", q),
        vec!["https://www.linkedin.com/search/results/people/?keywords=john%20doe"]
    );
    assert_eq!(
        urls("pinterest", q),
        vec!["https://www.pinterest.com/search/users/?q=john%20doe"]
    );
    assert_eq!(
        urls("reddit", q),
        vec![
            "https://www.reddit.com/search/?q=john%20doe&type=user",
            "https://www.reddit.com/user/johndoe/",
        ]
    );
    assert_eq!(urls("threads", q), vec!["https://www.threads.net/johndoe"]);
    assert_eq!(urls("snapchat", q), vec!["https://www.snapchat.com/add/johndoe"]);
}

#[test]
fn test_special_characters_are_encoded() {
    assert_eq!(
        urls("facebook", "o'brien & co"),
        vec!["https://www.facebook.com/search/people/?q=o'brien%20%26%20co"]
    );
    assert_eq!(
        urls("threads", "zoë  k"),
        vec!["https://www.threads.net/zo%C3%ABk"]
    );
}

#[test]
fn test_at_handles_are_not_flagged_direct() {
    // `/@name` does not contain `/name`, so these stay search-style.
    let links = platform_links(platform("tiktok"), "john doe");
    assert!(links.iter().all(|l| !l.is_direct_attempt));

    let links = platform_links(platform("youtube"), "jdoe");
    assert_eq!(links[1].url, "https://www.youtube.com/@jdoe");
    assert!(!links[1].is_direct_attempt);
}

#[test]
fn test_direct_attempt_flags_across_catalog() {
    let flags = |query: &str| -> Vec<(&'static str, Vec<bool>)> {
        generate(query, PLATFORMS.iter())
            .into_iter()
            .map(|item| {
                let flags = item.links.iter().map(|l| l.is_direct_attempt).collect();
                (item.platform.id, flags)
            })
            .collect()
    };

    assert_eq!(
        flags("john doe"),
        vec![
            ("instagram", vec![false, true]),
            ("facebook", vec![false]),
            ("x-twitter", vec![false]),
            ("youtube", vec![false, false]),
            ("tiktok", vec![false, false]),
            ("linkedin", vec![false]),
            ("pinterest", vec![false]),
            ("reddit", vec![false, true]),
            ("threads", vec![true]),
            ("snapchat", vec![true]),
        ]
    );

    // A query equal to a search path segment flags the search URLs too.
    assert_eq!(
        flags("search"),
        vec![
            ("instagram", vec![true, true]),
            ("facebook", vec![true]),
            ("x-twitter", vec![true]),
            ("youtube", vec![false, false]),
            ("tiktok", vec![true, false]),
            ("linkedin", vec![true]),
            ("pinterest", vec![true]),
            ("reddit", vec![true, true]),
            ("threads", vec![true]),
            ("snapchat", vec![true]),
        ]
    );
}

#[test]
fn test_next_line_is_kept_in_handles() {
    assert_eq!(
        urls("threads", "john\u{85}doe"),
        vec!["https://www.threads.net/john%C2%85doe"]
    );
}

#[test]
fn test_query_colliding_with_path_segment_is_direct() {
    let links = platform_links(platform("instagram"), "search");
    assert_eq!(
        links[0].url,
        "https://www.instagram.com/explore/search/keyword/?q=search"
    );
    assert!(links[0].is_direct_attempt);
}

#[test]
fn test_duplicate_urls_keep_first_occurrence() {
    let links = platform_links(&DUPLICATING, "johndoe");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].url, "https://example.test/johndoe");
    assert!(links[0].is_direct_attempt);

    // With whitespace the query template renders differently.
    let links = platform_links(&DUPLICATING, "john doe");
    let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
    assert_eq!(
        urls,
        vec!["https://example.test/johndoe", "https://example.test/john%20doe"]
    );
}

#[test]
fn test_platforms_without_links_are_omitted() {
    let results = generate("john doe", [&EMPTY, platform("facebook"), &EMPTY]);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].platform.id, "facebook");
}

#[test]
fn test_results_follow_given_platform_order() {
    let results = generate("john doe", PLATFORMS.iter());
    let ids: Vec<&str> = results.iter().map(|r| r.platform.id).collect();
    let catalog: Vec<&str> = PLATFORMS.iter().map(|p| p.id).collect();
    assert_eq!(ids, catalog);
}

#[test]
fn test_generation_is_deterministic() {
    let first = generate("Jane Q. Public", PLATFORMS.iter());
    let second = generate("Jane Q. Public", PLATFORMS.iter());
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.platform.id, b.platform.id);
        assert_eq!(a.links, b.links);
    }
}
