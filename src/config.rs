// src/config.rs
//! Feed configuration: static feed metadata, filter tuning, and the
//! organization-specific boilerplate literals, all externalized to TOML so
//! pointing the cleaner at a different company page is a config change.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

// --- env defaults & names ---
pub const DEFAULT_FEED_CONFIG_PATH: &str = "config/feed.toml";

pub const ENV_FEED_CONFIG_PATH: &str = "FEED_CONFIG_PATH";
pub const ENV_FEED_OUTPUT_PATH: &str = "FEED_OUTPUT_PATH";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub feed: FeedSection,
    pub source: SourceSection,
    pub filter: FilterSection,
    pub normalize: NormalizeSection,
    pub image: ImageSection,
    pub policy: PolicySection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedSection {
    pub version: String,
    pub title: String,
    pub home_page_url: String,
    pub feed_url: String,
    pub description: String,
    /// Constant title stamped on every emitted item; never copied from source.
    pub item_title: String,
    pub max_items: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceSection {
    pub url: String,
    pub output_path: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterSection {
    /// Case-sensitive substring an item's title must contain to count as
    /// authored by the organization.
    pub organization: String,
    pub min_text_chars: usize,
    /// Anchored regexes; a cleaned text matching any of them is metadata
    /// noise (job titles, bare follower lines), not a post.
    pub reject_prefixes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NormalizeSection {
    /// The page-name literal the aggregator glues onto post bodies.
    pub page_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImageSection {
    pub blocked_substrings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PolicySection {
    pub on_empty: EmptyFeedPolicy,
    pub placeholder_text: String,
}

/// What to do when zero items survive filtering. Upstream deployments
/// disagreed, so it is a policy knob rather than a fixed behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyFeedPolicy {
    /// Emit a valid document with an empty `items` array.
    Empty,
    /// Synthesize a single placeholder item.
    Placeholder,
    /// Treat the run as failed; nothing is persisted.
    Fail,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            version: "https://jsonfeed.org/version/1.1".into(),
            title: "Bluedot Environmental - LinkedIn Feed".into(),
            home_page_url: "https://www.linkedin.com/company/bluedot-environmental-ltd".into(),
            feed_url:
                "https://raw.githubusercontent.com/bluedot-environmental/linkedin-feed/main/feed.json"
                    .into(),
            description: "Latest updates from Bluedot Environmental on LinkedIn".into(),
            item_title: "Bluedot Environmental Update".into(),
            max_items: 10,
        }
    }
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            url: "https://simplefeedmaker.com/feeds/ebd69ced1b67c454dfb039862cd2f1ab.json".into(),
            output_path: "feed.json".into(),
        }
    }
}

impl Default for FilterSection {
    fn default() -> Self {
        Self {
            organization: "Bluedot Environmental".into(),
            min_text_chars: 30,
            reject_prefixes: vec![
                r"^Executive Director at\b".into(),
                r"^Senior\b.{0,80}\bat\b".into(),
                r"^Manager at\b".into(),
                r"^\d+\s+followers\b".into(),
            ],
        }
    }
}

impl Default for NormalizeSection {
    fn default() -> Self {
        Self {
            page_name: "Bluedot Environmental Ltd.".into(),
        }
    }
}

impl Default for ImageSection {
    fn default() -> Self {
        Self {
            blocked_substrings: vec![
                "company-logo".into(),
                "_200_200".into(),
                "_100_100".into(),
                "logo".into(),
                "profile".into(),
            ],
        }
    }
}

impl Default for PolicySection {
    fn default() -> Self {
        Self {
            on_empty: EmptyFeedPolicy::Empty,
            placeholder_text: "No recent updates are available right now. Check back soon.".into(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            feed: FeedSection::default(),
            source: SourceSection::default(),
            filter: FilterSection::default(),
            normalize: NormalizeSection::default(),
            image: ImageSection::default(),
            policy: PolicySection::default(),
        }
    }
}

impl FeedConfig {
    /// Load configuration using env var + fallbacks:
    /// 1) $FEED_CONFIG_PATH
    /// 2) config/feed.toml
    /// 3) built-in defaults
    /// $FEED_OUTPUT_PATH, when set, overrides `source.output_path`.
    pub fn load() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_FEED_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            let content = fs::read_to_string(&pb)
                .with_context(|| format!("reading feed config from {}", pb.display()))?;
            Self::from_toml_str(&content)?
        } else {
            let default_p = PathBuf::from(DEFAULT_FEED_CONFIG_PATH);
            if default_p.exists() {
                let content = fs::read_to_string(&default_p)
                    .with_context(|| format!("reading feed config from {}", default_p.display()))?;
                Self::from_toml_str(&content)?
            } else {
                Self::default()
            }
        };

        if let Ok(out) = std::env::var(ENV_FEED_OUTPUT_PATH) {
            if !out.trim().is_empty() {
                cfg.source.output_path = out;
            }
        }

        Ok(cfg)
    }

    /// Load from a TOML string. Missing sections and fields fall back to
    /// the built-in defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let cfg: FeedConfig = toml::from_str(toml_str).context("parsing feed config toml")?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn defaults_are_sane() {
        let cfg = FeedConfig::default();
        assert_eq!(cfg.feed.max_items, 10);
        assert_eq!(cfg.filter.min_text_chars, 30);
        assert_eq!(cfg.policy.on_empty, EmptyFeedPolicy::Empty);
        assert!(cfg.feed.title.contains("Bluedot Environmental"));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let toml = r#"
            [filter]
            organization = "Acme Corp"
            min_text_chars = 40
            reject_prefixes = ["^CEO at\\b"]

            [policy]
            on_empty = "placeholder"
        "#;
        let cfg = FeedConfig::from_toml_str(toml).unwrap();
        assert_eq!(cfg.filter.organization, "Acme Corp");
        assert_eq!(cfg.filter.min_text_chars, 40);
        assert_eq!(cfg.policy.on_empty, EmptyFeedPolicy::Placeholder);
        // untouched sections keep defaults
        assert_eq!(cfg.feed.max_items, 10);
        assert!(cfg.source.url.contains("simplefeedmaker.com"));
    }

    #[test]
    fn bad_policy_value_is_an_error() {
        let toml = r#"
            [policy]
            on_empty = "explode"
        "#;
        assert!(FeedConfig::from_toml_str(toml).is_err());
    }

    #[serial_test::serial]
    #[test]
    fn env_output_path_overrides_config() {
        env::remove_var(ENV_FEED_CONFIG_PATH);
        env::set_var(ENV_FEED_OUTPUT_PATH, "/tmp/out.json");
        let cfg = FeedConfig::load().unwrap();
        assert_eq!(cfg.source.output_path, "/tmp/out.json");
        env::remove_var(ENV_FEED_OUTPUT_PATH);
    }
}
