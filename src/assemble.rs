// src/assemble.rs
//! Output document types and the final assembly step: cap the accepted items
//! and wrap them with the static JSON Feed metadata.

use anyhow::{bail, Result};
use serde::Serialize;

use crate::config::{EmptyFeedPolicy, FeedConfig};

/// One cleaned post, constructed once and never mutated afterwards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NormalizedItem {
    pub id: String,
    pub url: String,
    pub title: String,
    pub content_text: String,
    pub date_published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The wire contract downstream consumers depend on (JSON Feed shaped).
#[derive(Debug, Clone, Serialize)]
pub struct FeedDocument {
    pub version: String,
    pub title: String,
    pub home_page_url: String,
    pub feed_url: String,
    pub description: String,
    pub items: Vec<NormalizedItem>,
}

/// Cap accepted items at `feed.max_items` (stable truncation, original
/// relative order) and wrap them with the feed-level metadata. A zero-item
/// input is resolved by the configured empty-feed policy.
pub fn assemble(cfg: &FeedConfig, mut accepted: Vec<NormalizedItem>) -> Result<FeedDocument> {
    if accepted.is_empty() {
        match cfg.policy.on_empty {
            EmptyFeedPolicy::Empty => {}
            EmptyFeedPolicy::Placeholder => accepted.push(placeholder_item(cfg)),
            EmptyFeedPolicy::Fail => bail!("no items survived filtering"),
        }
    }

    accepted.truncate(cfg.feed.max_items);

    Ok(FeedDocument {
        version: cfg.feed.version.clone(),
        title: cfg.feed.title.clone(),
        home_page_url: cfg.feed.home_page_url.clone(),
        feed_url: cfg.feed.feed_url.clone(),
        description: cfg.feed.description.clone(),
        items: accepted,
    })
}

fn placeholder_item(cfg: &FeedConfig) -> NormalizedItem {
    NormalizedItem {
        id: "post-0".to_string(),
        url: cfg.feed.home_page_url.clone(),
        title: cfg.feed.item_title.clone(),
        content_text: cfg.policy.placeholder_text.clone(),
        date_published: chrono::Utc::now().to_rfc3339(),
        image: None,
    }
}
