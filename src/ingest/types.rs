// src/ingest/types.rs
use anyhow::Result;

/// One upstream entry, exactly as the aggregator hands it over. Everything
/// except the title is optional in practice.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct RawItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content_text: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub date_published: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the upstream feed and return its items in document order.
    /// A transport or parse failure here is fatal to the run.
    async fn fetch_items(&self) -> Result<Vec<RawItem>>;
    fn name(&self) -> &'static str;
}
