// src/classify.rs
//! Acceptance gate for raw feed items. The upstream aggregator interleaves
//! posts from unrelated pages and injects commenter/job metadata as if it
//! were post content, so classification and cleaning are interleaved: an
//! item is only accepted once its cleaned text also passes the substance
//! checks.

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::FilterSection;
use crate::ingest::types::RawItem;
use crate::normalize::{pick_text_source, Normalizer};

/// Why an item was dropped. Not errors: skips are the normal filtering
/// outcome and never abort the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// Title lacks the organization name; the post belongs to another page.
    TitleMismatch,
    /// Cleaned text fell under the substance floor.
    TooShort { chars: usize },
    /// Cleaned text starts with a known non-content shape (job title, bare
    /// follower line).
    MetadataPrefix { rule: String },
}

impl Skip {
    pub fn label(&self) -> &'static str {
        match self {
            Skip::TitleMismatch => "title_mismatch",
            Skip::TooShort { .. } => "too_short",
            Skip::MetadataPrefix { .. } => "metadata_prefix",
        }
    }
}

#[derive(Debug)]
pub struct Classifier {
    organization: String,
    min_text_chars: usize,
    reject_prefixes: Vec<Regex>,
    normalizer: Normalizer,
}

impl Classifier {
    pub fn new(filter: &FilterSection, normalizer: Normalizer) -> Result<Self> {
        let reject_prefixes = filter
            .reject_prefixes
            .iter()
            .map(|p| Regex::new(p).with_context(|| format!("compiling reject prefix {p:?}")))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            organization: filter.organization.clone(),
            min_text_chars: filter.min_text_chars,
            reject_prefixes,
            normalizer,
        })
    }

    /// Evaluate one raw item. `Ok` carries the cleaned body for the accepted
    /// item; `Err` carries the skip reason.
    pub fn evaluate(&self, item: &RawItem) -> std::result::Result<String, Skip> {
        // 1) Authorship: the aggregator mixes pages into one feed, and the
        //    title is the only per-item signal of origin. Case-sensitive on
        //    purpose: the page name is a proper noun.
        if !item.title.contains(&self.organization) {
            return Err(Skip::TitleMismatch);
        }

        let raw = pick_text_source(
            item.content_text.as_deref(),
            item.summary.as_deref(),
            &item.title,
        );
        let cleaned = self.normalizer.normalize(raw);

        // 2) Substance floor, counted in chars (bodies are user text, not
        //    ASCII).
        let chars = cleaned.chars().count();
        if chars < self.min_text_chars {
            return Err(Skip::TooShort { chars });
        }

        // 3) Residual metadata shapes the prefix stripper leaves alone.
        for re in &self.reject_prefixes {
            if re.is_match(&cleaned) {
                return Err(Skip::MetadataPrefix {
                    rule: re.as_str().to_string(),
                });
            }
        }

        Ok(cleaned)
    }

    pub fn accepts(&self, item: &RawItem) -> bool {
        self.evaluate(item).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(
            &FilterSection::default(),
            Normalizer::new("Bluedot Environmental Ltd."),
        )
        .unwrap()
    }

    fn item(title: &str, content: &str) -> RawItem {
        RawItem {
            id: None,
            title: title.to_string(),
            url: None,
            content_text: Some(content.to_string()),
            summary: None,
            date_published: None,
            image: None,
        }
    }

    #[test]
    fn accepts_noisy_organization_post() {
        let it = item(
            "Bluedot Environmental Ltd.",
            "Bluedot Environmental Ltd.299 followers2wReport this post \
             We are excited to announce our new recycling initiative launching next month.",
        );
        let cleaned = classifier().evaluate(&it).unwrap();
        assert_eq!(
            cleaned,
            "We are excited to announce our new recycling initiative launching next month."
        );
    }

    #[test]
    fn rejects_foreign_title() {
        let it = item("Acme Corp", "Acme Corp hiring now");
        assert_eq!(classifier().evaluate(&it), Err(Skip::TitleMismatch));
    }

    #[test]
    fn title_match_is_case_sensitive() {
        let it = item(
            "bluedot environmental ltd.",
            "A perfectly substantial post body that is long enough to pass.",
        );
        assert_eq!(classifier().evaluate(&it), Err(Skip::TitleMismatch));
    }

    #[test]
    fn rejects_short_cleaned_text() {
        let it = item(
            "Bluedot Environmental Ltd.",
            "Bluedot Environmental Ltd.299 followers2wShort one",
        );
        assert!(matches!(
            classifier().evaluate(&it),
            Err(Skip::TooShort { .. })
        ));
    }

    #[test]
    fn rejects_job_title_prefix_even_when_long() {
        let it = item(
            "Bluedot Environmental Ltd.",
            "Executive Director at Bluedot talks about strategy",
        );
        assert!(matches!(
            classifier().evaluate(&it),
            Err(Skip::MetadataPrefix { .. })
        ));
    }

    #[test]
    fn rejects_senior_role_prefix() {
        let it = item(
            "Bluedot Environmental Ltd.",
            "Senior Sustainability Consultant at Bluedot shares a perspective",
        );
        assert!(matches!(
            classifier().evaluate(&it),
            Err(Skip::MetadataPrefix { .. })
        ));
    }

    #[test]
    fn falls_back_to_summary_when_content_empty() {
        let it = RawItem {
            id: None,
            title: "Bluedot Environmental Ltd.".into(),
            url: None,
            content_text: None,
            summary: Some(
                "Report this post Our annual sustainability report is out now, read the highlights."
                    .into(),
            ),
            date_published: None,
            image: None,
        };
        let cleaned = classifier().evaluate(&it).unwrap();
        assert_eq!(
            cleaned,
            "Our annual sustainability report is out now, read the highlights."
        );
    }
}
