use crate::data_models::{Platform, UrlTemplate};

/// Every supported platform, in display order.
pub static PLATFORMS: &[Platform] = &[
    Platform {
        id: "instagram",
        name: "Instagram",
        icon: "instagram",
        theme_color: Some("bg-gradient-to-r from-purple-500 via-pink-500 to-red-500"),
        templates: &[
            UrlTemplate::query("https://www.instagram.com/explore/search/keyword/?q=", ""),
            UrlTemplate::handle("https://www.instagram.com/", "/"),
        ],
    },
    Platform {
        id: "facebook",
        name: "Facebook",
        icon: "facebook",
        theme_color: Some("bg-blue-600"),
        templates: &[UrlTemplate::query(
            "https://www.facebook.com/search/people/?q=",
            "",
        )],
    },
    Platform {
        id: "x-twitter",
        name: "X (Twitter)",
        icon: "twitter",
        theme_color: Some("bg-black"),
        templates: &[UrlTemplate::query("https://x.com/search?q=", "&f=user")],
    },
    Platform {
        id: "youtube",
        name: "YouTube",
        icon: "youtube",
        theme_color: Some("bg-red-600"),
        templates: &[
            UrlTemplate::query("https://www.youtube.com/results?search_query=", ""),
            UrlTemplate::handle("https://www.youtube.com/@", ""),
        ],
    },
    Platform {
        id: "tiktok",
        name: "TikTok",
        icon: "tiktok",
        theme_color: Some("bg-black"),
        templates: &[
            UrlTemplate::query("https://www.tiktok.com/search/user?q=", ""),
            UrlTemplate::handle("https://www.tiktok.com/@", ""),
        ],
    },
    Platform {
        id: "linkedin",
        name: "LinkedIn",
        icon: "linkedin",
        theme_color: Some("bg-sky-700"),
        templates: &[UrlTemplate::query(
            "https://www.linkedin.com/search/results/people/?keywords=",
            "",
        )],
    },
    Platform {
        id: "pinterest",
        name: "Pinterest",
        icon: "globe",
        theme_color: None,
        templates: &[UrlTemplate::query(
            "https://www.pinterest.com/search/users/?q=",
            "",
        )],
    },
    Platform {
        id: "reddit",
        name: "Reddit (User Search)",
        icon: "globe",
        theme_color: None,
        templates: &[
            UrlTemplate::query("https://www.reddit.com/search/?q=", "&type=user"),
            UrlTemplate::handle("https://www.reddit.com/user/", "/"),
        ],
    },
    Platform {
        id: "threads",
        name: "Threads",
        icon: "search",
        theme_color: None,
        templates: &[UrlTemplate::handle("https://www.threads.net/", "")],
    },
    Platform {
        id: "snapchat",
        name: "Snapchat",
        icon: "search",
        theme_color: None,
        templates: &[UrlTemplate::handle("https://www.snapchat.com/add/", "")],
    },
];

pub fn all_platform_ids() -> Vec<&'static str> {
    PLATFORMS.iter().map(|p| p.id).collect()
}

pub fn find_platform(id: &str) -> Option<&'static Platform> {
    PLATFORMS.iter().find(|p| p.id == id)
}
