// tests/feed_properties.rs
// Cross-cutting properties of the cleaning pipeline, exercised through the
// public API over a small synthetic corpus.

use linkedin_feed_cleaner::ingest::types::RawItem;
use linkedin_feed_cleaner::{classifier_from_config, select_image, FeedConfig, Normalizer};

const CORPUS: &[&str] = &[
    "",
    "   ",
    "plain post body with no metadata at all",
    "Bluedot Environmental Ltd.299 followers2wReport this post Real content here",
    "Bluedot Environmental Ltd. | 299 followers | Real content here",
    "Report this post Report this post doubled noise, real content after",
    "1d quick note from the field team",
    "42% of our waste stream is now recycled, and counting",
    "&amp; entities &nbsp; up front",
];

#[test]
fn normalize_never_adds_and_never_leaves_leading_whitespace() {
    let n = Normalizer::new("Bluedot Environmental Ltd.");
    for raw in CORPUS {
        let out = n.normalize(raw);
        assert!(
            out.chars().count() <= raw.chars().count(),
            "grew: {raw:?} -> {out:?}"
        );
        assert_eq!(out, out.trim(), "untrimmed: {raw:?} -> {out:?}");
    }
}

#[test]
fn normalize_is_stable_for_known_noise_families() {
    let n = Normalizer::new("Bluedot Environmental Ltd.");
    for raw in CORPUS {
        let once = n.normalize(raw);
        assert_eq!(n.normalize(&once), once, "unstable on {raw:?}");
    }
}

#[test]
fn foreign_titles_are_never_accepted() {
    let cfg = FeedConfig::default();
    let classifier = classifier_from_config(&cfg).unwrap();
    for title in [
        "",
        "Acme Corp",
        "GreenTech Weekly on LinkedIn",
        "bluedot environmental", // case-sensitive on purpose
    ] {
        let item = RawItem {
            title: title.into(),
            content_text: Some(
                "A perfectly substantial body that would otherwise sail through.".into(),
            ),
            ..Default::default()
        };
        assert!(!classifier.accepts(&item), "accepted foreign title {title:?}");
    }
}

#[test]
fn any_logo_url_is_suppressed_regardless_of_case() {
    let blocked = FeedConfig::default().image.blocked_substrings;
    for url in [
        "https://a.example/logo.png",
        "https://a.example/LOGO.PNG",
        "https://a.example/x/Company-Logo_400.jpg",
        "https://a.example/some/LoGo/deep/path.gif",
    ] {
        assert_eq!(select_image(Some(url), &blocked), None, "{url}");
    }
}
