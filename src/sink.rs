// src/sink.rs
//! Persistence boundary. The pipeline hands a finished document to a sink;
//! a sink failure is terminal for the run.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::assemble::FeedDocument;

#[async_trait::async_trait]
pub trait FeedSink: Send + Sync {
    async fn persist(&self, document: &FeedDocument) -> Result<()>;
}

/// Writes the document as pretty-printed UTF-8 JSON. Non-ASCII characters
/// are kept literal (serde_json does not escape them).
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

pub fn render_document(document: &FeedDocument) -> Result<String> {
    let mut body = serde_json::to_string_pretty(document).context("serializing feed document")?;
    body.push('\n');
    Ok(body)
}

#[async_trait::async_trait]
impl FeedSink for FileSink {
    async fn persist(&self, document: &FeedDocument) -> Result<()> {
        let body = render_document(document)?;
        tokio::fs::write(&self.path, body)
            .await
            .with_context(|| format!("writing feed to {}", self.path.display()))?;
        tracing::info!(target: "feed", path = %self.path.display(), "feed persisted");
        Ok(())
    }
}

// --- Test helper ---
pub struct MockSink {
    pub calls: std::sync::Mutex<Vec<String>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            calls: std::sync::Mutex::new(vec![]),
        }
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FeedSink for MockSink {
    async fn persist(&self, document: &FeedDocument) -> Result<()> {
        self.calls.lock().unwrap().push(render_document(document)?);
        Ok(())
    }
}
