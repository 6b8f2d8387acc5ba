//! LinkedIn Feed Cleaner — Binary Entrypoint
//! One-shot job: fetch the aggregated upstream feed, keep the organization's
//! own posts, strip platform noise, and write the cleaned JSON Feed.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use linkedin_feed_cleaner::ingest::providers::json_feed::JsonFeedSource;
use linkedin_feed_cleaner::sink::{FeedSink, FileSink};
use linkedin_feed_cleaner::{classifier_from_config, run_once, FeedConfig};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("feed=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op where the vars come from the environment.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = FeedConfig::load()?;
    let classifier = classifier_from_config(&cfg)?;
    let source = JsonFeedSource::from_url(cfg.source.url.clone());

    let outcome = run_once(&source, &classifier, &cfg).await?;

    let sink = FileSink::new(cfg.source.output_path.clone());
    sink.persist(&outcome.document).await?;

    tracing::info!(
        target: "feed",
        kept = outcome.kept,
        skipped = outcome.skipped,
        path = %cfg.source.output_path,
        "feed generation finished"
    );
    Ok(())
}
