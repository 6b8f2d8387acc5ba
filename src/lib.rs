// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod assemble;
pub mod classify;
pub mod config;
pub mod image;
pub mod ingest;
pub mod normalize;
pub mod sink;

// ---- Re-exports for stable public API ----
pub use crate::assemble::{assemble, FeedDocument, NormalizedItem};
pub use crate::classify::{Classifier, Skip};
pub use crate::config::{EmptyFeedPolicy, FeedConfig};
pub use crate::image::select_image;
pub use crate::ingest::{run_once, FeedOutcome};
pub use crate::normalize::Normalizer;
pub use crate::sink::{FeedSink, FileSink};

use anyhow::Result;

/// Build the classifier straight from a loaded config. Convenience for the
/// binary and integration tests.
pub fn classifier_from_config(cfg: &FeedConfig) -> Result<Classifier> {
    Classifier::new(&cfg.filter, Normalizer::new(&cfg.normalize.page_name))
}
