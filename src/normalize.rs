// src/normalize.rs
//! Boilerplate stripping. The aggregator glues page metadata onto the front
//! of every post body ("Bluedot Environmental Ltd.299 followers2wReport this
//! post ..."); each known noise shape is a named prefix rule, applied in a
//! fixed order so new shapes can be appended without touching existing ones.

use regex::Regex;

/// A single named prefix-strip rule. Best effort: when the pattern is not
/// present at the current start of string, the text passes through unchanged.
#[derive(Debug)]
pub struct StripRule {
    pub name: &'static str,
    re: Regex,
}

impl StripRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        // Patterns are built from vetted literals; a failure here is a
        // programming error, not runtime input.
        let re = Regex::new(pattern).expect("strip rule regex");
        Self { name, re }
    }

    /// Strip a leading run of the pattern, repeating until it no longer
    /// matches at the start.
    fn apply<'a>(&self, mut s: &'a str) -> &'a str {
        while let Some(m) = self.re.find(s) {
            if m.start() != 0 || m.end() == 0 {
                break;
            }
            s = &s[m.end()..];
        }
        s
    }
}

#[derive(Debug)]
pub struct Normalizer {
    rules: Vec<StripRule>,
}

impl Normalizer {
    /// Build the rule chain for one organization's page. `page_name` is the
    /// literal the aggregator prepends (e.g. "Bluedot Environmental Ltd.").
    pub fn new(page_name: &str) -> Self {
        let rules = vec![
            StripRule::new(
                "page_name",
                &format!(r"(?i)^\s*{}[[:punct:]]*", regex::escape(page_name)),
            ),
            StripRule::new("followers", r"(?i)^\s*\d+\s+followers"),
            // Relative timestamps the platform renders: 2w, 1d, 5h, 30m.
            // No trailing boundary: the token is usually glued straight onto
            // the next fragment ("2wReport this post").
            StripRule::new("relative_time", r"(?i)^\s*\d+[wdhm]"),
            StripRule::new("report_post", r"(?i)^\s*report this post"),
            // Catch-all for residual metadata glue: punctuation, digits,
            // separators left over between the patterns above.
            StripRule::new("non_letter_residue", r"^[^\p{L}]+"),
        ];
        Self { rules }
    }

    /// Deterministic, pure cleanup of one raw body. Strips only, never adds:
    /// the output is always a suffix of the (entity-decoded) input, trimmed.
    pub fn normalize(&self, raw: &str) -> String {
        // The aggregator entity-escapes bodies; decode before matching so
        // "&nbsp;" and friends don't shield the noise patterns.
        let decoded = html_escape::decode_html_entities(raw).to_string();

        let mut s = decoded.as_str();
        for rule in &self.rules {
            s = rule.apply(s);
        }
        s.trim().to_string()
    }

    #[cfg(test)]
    fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }
}

/// Pick the text source for an item: content_text, then summary, then title,
/// first non-empty wins.
pub fn pick_text_source<'a>(
    content_text: Option<&'a str>,
    summary: Option<&'a str>,
    title: &'a str,
) -> &'a str {
    for candidate in [content_text, summary] {
        if let Some(s) = candidate {
            if !s.trim().is_empty() {
                return s;
            }
        }
    }
    title
}
