// src/ingest/mod.rs
pub mod providers;
pub mod types;

use anyhow::{Context, Result};
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge};
use once_cell::sync::OnceCell;

use crate::assemble::{assemble, FeedDocument, NormalizedItem};
use crate::classify::Classifier;
use crate::config::FeedConfig;
use crate::image::select_image;
use crate::ingest::types::{FeedSource, RawItem};

/// One-time metrics registration (so series show up on a scrape).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "feed_items_total",
            "Total items parsed from the upstream feed."
        );
        describe_counter!(
            "feed_kept_total",
            "Items kept after classification + cleaning."
        );
        describe_counter!(
            "feed_skipped_total",
            "Items dropped as foreign, short, or metadata noise."
        );
        describe_counter!("feed_fetch_errors_total", "Upstream fetch/parse errors.");
        describe_histogram!("feed_parse_ms", "Upstream parse time in milliseconds.");
        describe_gauge!("feed_last_run_ts", "Unix ts when the pipeline last ran.");
    });
}

/// Result of one pipeline run: the assembled document plus counts for the
/// run summary.
#[derive(Debug)]
pub struct FeedOutcome {
    pub document: FeedDocument,
    pub kept: usize,
    pub skipped: usize,
}

/// Classify, clean, and wrap one batch of raw items. Pure sequential pass;
/// the accepted-count accumulator doubles as the positional id fallback.
pub fn clean_batch(
    cfg: &FeedConfig,
    classifier: &Classifier,
    raw: Vec<RawItem>,
) -> (Vec<NormalizedItem>, usize) {
    let mut accepted = Vec::with_capacity(raw.len());
    let mut skipped = 0usize;

    for item in &raw {
        match classifier.evaluate(item) {
            Ok(cleaned) => {
                accepted.push(build_item(cfg, item, cleaned, accepted.len()));
            }
            Err(skip) => {
                skipped += 1;
                tracing::debug!(
                    target: "feed",
                    reason = skip.label(),
                    title = %item.title,
                    "item skipped"
                );
            }
        }
    }

    (accepted, skipped)
}

fn build_item(cfg: &FeedConfig, raw: &RawItem, cleaned: String, index: usize) -> NormalizedItem {
    NormalizedItem {
        id: raw.id.clone().unwrap_or_else(|| format!("post-{index}")),
        url: raw
            .url
            .clone()
            .unwrap_or_else(|| cfg.feed.home_page_url.clone()),
        title: cfg.feed.item_title.clone(),
        content_text: cleaned,
        date_published: raw
            .date_published
            .clone()
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339()),
        image: select_image(raw.image.as_deref(), &cfg.image.blocked_substrings),
    }
}

/// Run the pipeline once: fetch, classify + clean each item in order, then
/// assemble the capped document. A fetch failure aborts the run; per-item
/// skips never do.
pub async fn run_once(
    source: &dyn FeedSource,
    classifier: &Classifier,
    cfg: &FeedConfig,
) -> Result<FeedOutcome> {
    ensure_metrics_described();

    let raw = source
        .fetch_items()
        .await
        .with_context(|| format!("fetching upstream feed from {}", source.name()))?;

    let total = raw.len();
    let (accepted, skipped) = clean_batch(cfg, classifier, raw);
    let kept = accepted.len();
    let document = assemble(cfg, accepted)?;

    // Telemetry
    let now = chrono::Utc::now().timestamp().max(0) as u64;
    counter!("feed_kept_total").increment(kept as u64);
    counter!("feed_skipped_total").increment(skipped as u64);
    gauge!("feed_last_run_ts").set(now as f64);

    tracing::info!(
        target: "feed",
        total,
        kept,
        skipped,
        emitted = document.items.len(),
        "pipeline run complete"
    );

    Ok(FeedOutcome {
        document,
        kept,
        skipped,
    })
}
