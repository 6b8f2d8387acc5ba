// src/ingest/providers/json_feed.rs
//! The SimpleFeedMaker-style upstream: a JSON document with an `items`
//! array of loosely-shaped post records.

use anyhow::{Context, Result};
use async_trait::async_trait;
use metrics::{counter, histogram};
use serde::Deserialize;

use crate::ingest::types::{FeedSource, RawItem};

#[derive(Debug, Deserialize)]
struct UpstreamFeed {
    #[serde(default)]
    items: Vec<RawItem>,
}

pub struct JsonFeedSource {
    mode: Mode,
}

enum Mode {
    Fixture(String),
    Http { url: String, client: reqwest::Client },
}

impl JsonFeedSource {
    /// Parse a captured upstream body. Used by tests and local dry runs.
    pub fn from_fixture_str(s: &str) -> Self {
        Self {
            mode: Mode::Fixture(s.to_string()),
        }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        let client = reqwest::Client::new();
        Self {
            mode: Mode::Http {
                url: url.into(),
                client,
            },
        }
    }

    fn parse_items_from_str(s: &str) -> Result<Vec<RawItem>> {
        let t0 = std::time::Instant::now();
        let feed: UpstreamFeed = serde_json::from_str(s).context("parsing upstream json feed")?;

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("feed_parse_ms").record(ms);
        counter!("feed_items_total").increment(feed.items.len() as u64);
        Ok(feed.items)
    }
}

#[async_trait]
impl FeedSource for JsonFeedSource {
    async fn fetch_items(&self) -> Result<Vec<RawItem>> {
        match &self.mode {
            Mode::Fixture(s) => Self::parse_items_from_str(s),

            Mode::Http { url, client } => {
                let body = match client.get(url).send().await {
                    Ok(resp) => resp.text().await.context("upstream feed .text()")?,
                    Err(e) => {
                        tracing::warn!(error = ?e, provider = "SimpleFeedMaker", "provider http error");
                        counter!("feed_fetch_errors_total").increment(1);
                        return Err(e).context("upstream feed get()");
                    }
                };
                Self::parse_items_from_str(&body)
            }
        }
    }

    fn name(&self) -> &'static str {
        "SimpleFeedMaker"
    }
}
