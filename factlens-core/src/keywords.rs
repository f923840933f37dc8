use crate::analysis::AnalysisRequest;
use crate::normalize::normalize;
use crate::traits::Classifier;
use crate::verdict::{Classification, Strategy, Verdict};
use factlens_common::{FactlensError, Result};

/// Sensational terms that commonly show up in misleading headlines.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "shocking",
    "secret",
    "breaking!!!",
    "miracle",
    "unbelievable",
    "banned",
    "hidden truth",
    "exposed",
    "100% guarantee",
    "cure",
    "conspiracy",
];

/// Terms found in one text plus the verdict they imply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordReport {
    pub matched: Vec<String>,
    pub verdict: Verdict,
}

/// Deterministic substring scorer.
///
/// Each distinct term counts at most once. Two or more hits is `Fake`, one
/// is `PossiblyFake`, none is `Real`.
#[derive(Debug, Clone)]
pub struct KeywordScorer {
    terms: Vec<String>,
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self {
            terms: DEFAULT_KEYWORDS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl KeywordScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scorer over a custom term list.
    ///
    /// Terms are lowercased and deduplicated; a blank term is a configuration
    /// error since it would match every input.
    pub fn with_terms<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if term.is_empty() {
                return Err(FactlensError::Config(
                    "keyword list contains a blank term".to_string(),
                ));
            }
            if !out.contains(&term) {
                out.push(term);
            }
        }
        if out.is_empty() {
            return Err(FactlensError::Config("keyword list is empty".to_string()));
        }
        Ok(Self { terms: out })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Find which terms occur in `text` and map the count to a verdict.
    pub fn evaluate(&self, text: &str) -> KeywordReport {
        let lowered = text.to_lowercase();
        let matched: Vec<String> = self
            .terms
            .iter()
            .filter(|term| lowered.contains(term.as_str()))
            .cloned()
            .collect();
        let verdict = verdict_for_count(matched.len());
        KeywordReport { matched, verdict }
    }

    pub fn score(&self, text: &str) -> Verdict {
        self.evaluate(text).verdict
    }
}

/// Thresholds: `>= 2` fake, `1` possibly fake, `0` real.
pub fn verdict_for_count(count: usize) -> Verdict {
    match count {
        0 => Verdict::Real,
        1 => Verdict::PossiblyFake,
        _ => Verdict::Fake,
    }
}

impl Classifier for KeywordScorer {
    fn strategy(&self) -> Strategy {
        Strategy::Keywords
    }

    fn classify(&self, request: &AnalysisRequest) -> Classification {
        let text = normalize(&request.headline, &request.body);
        let report = self.evaluate(&text);
        tracing::debug!(
            target: "factlens.keywords",
            matched = ?report.matched,
            verdict = %report.verdict,
            "keyword scan"
        );
        Classification {
            strategy: Strategy::Keywords,
            verdict: report.verdict,
            matched_keywords: report.matched,
            confidence: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        let scorer = KeywordScorer::new();
        assert_eq!(scorer.score("council meets on tuesday"), Verdict::Real);
        assert_eq!(scorer.score("a miracle on ice"), Verdict::PossiblyFake);
        assert_eq!(scorer.score("miracle cure"), Verdict::Fake);
    }

    #[test]
    fn case_insensitive() {
        let scorer = KeywordScorer::new();
        assert_eq!(scorer.evaluate("SHOCKING"), scorer.evaluate("shocking"));
    }

    #[test]
    fn repetition_counts_once() {
        let scorer = KeywordScorer::new();
        let report = scorer.evaluate("secret secret secret");
        assert_eq!(report.matched, vec!["secret"]);
        assert_eq!(report.verdict, Verdict::PossiblyFake);
    }

    #[test]
    fn multiword_and_punctuated_terms() {
        let scorer = KeywordScorer::new();
        let report = scorer.evaluate("breaking!!! the hidden truth");
        assert_eq!(report.matched, vec!["breaking!!!", "hidden truth"]);
        assert_eq!(scorer.score("breaking news"), Verdict::Real);
        assert_eq!(scorer.score("a 100% guarantee"), Verdict::PossiblyFake);
    }

    #[test]
    fn substring_matches_inside_words() {
        // "cure" is found inside "secure", mirroring plain substring search.
        let scorer = KeywordScorer::new();
        assert_eq!(scorer.score("a secure vault"), Verdict::PossiblyFake);
    }

    #[test]
    fn custom_terms_are_normalized_and_deduplicated() {
        let scorer = KeywordScorer::with_terms(["Hoax", "hoax ", "Rigged"]).unwrap();
        assert_eq!(scorer.terms(), ["hoax", "rigged"]);
        assert_eq!(scorer.score("A HOAX, rigged!"), Verdict::Fake);
    }

    #[test]
    fn blank_or_empty_term_lists_are_rejected() {
        assert!(matches!(
            KeywordScorer::with_terms(["ok", "  "]),
            Err(FactlensError::Config(_))
        ));
        assert!(KeywordScorer::with_terms(Vec::<String>::new()).is_err());
    }

    #[test]
    fn classify_reports_matches() {
        let request = AnalysisRequest::new("Shocking secret cure revealed", "");
        let c = KeywordScorer::new().classify(&request);
        assert_eq!(c.strategy, Strategy::Keywords);
        assert_eq!(c.verdict, Verdict::Fake);
        assert_eq!(c.matched_keywords, vec!["shocking", "secret", "cure"]);
        assert!(c.confidence.is_none());
    }
}
