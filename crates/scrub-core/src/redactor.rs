//! Keyword and pattern redaction engine

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Literal text written in place of every redacted match.
pub const REPLACEMENT: &str = "[REDACTED]";

/// Per-stage match summary. Carries a category label and a count, never the
/// matched text itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub redaction_type: String,
    pub count: usize,
}

/// Sequential redaction pipeline over a text document.
///
/// Keywords run first, in the order supplied, each as a case-insensitive
/// literal substring match. The three structural patterns run afterwards
/// over the keyword-processed text. Every stage rewrites the full document,
/// so later stages see the text already modified by earlier ones.
pub struct Redactor {
    stages: Vec<(String, Regex)>,
}

impl Redactor {
    pub fn new(keywords: &[String]) -> Self {
        let mut stages = Vec::with_capacity(keywords.len() + 3);

        // Keywords are literals, never patterns: escape before compiling.
        for word in keywords {
            let pattern = RegexBuilder::new(&regex::escape(word))
                .case_insensitive(true)
                .build()
                .unwrap();
            stages.push(("KEYWORD".to_string(), pattern));
        }

        // Structural passes in fixed order. The IPv4 pass must precede the
        // version pass: 4-component numeric sequences match both, and the
        // earlier pass consumes them.
        stages.push((
            "IPV4".to_string(),
            Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").unwrap(),
        ));
        stages.push((
            "VERSION".to_string(),
            Regex::new(r"\b\d+(?:\.\d+){1,3}\b").unwrap(),
        ));
        stages.push((
            "DOMAIN".to_string(),
            Regex::new(r"\b[a-zA-Z0-9.-]+\.(?:com|org|net|edu|gov)\b").unwrap(),
        ));

        Self { stages }
    }

    /// Redact keywords and sensitive patterns from text.
    ///
    /// Returns the redacted document together with one summary entry per
    /// stage that matched at least once.
    pub fn redact(&self, text: &str) -> (String, Vec<RedactionInfo>) {
        let mut result = text.to_string();
        let mut redactions = Vec::new();

        for (redaction_type, pattern) in &self.stages {
            let count = pattern.find_iter(&result).count();

            if count > 0 {
                result = pattern.replace_all(&result, REPLACEMENT).to_string();

                redactions.push(RedactionInfo {
                    redaction_type: redaction_type.clone(),
                    count,
                });
            }
        }

        (result, redactions)
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new(&[])
    }
}
