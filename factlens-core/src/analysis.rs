use crate::explain::explain_for;
use crate::links::{build_links, FactCheckLink, FactChecker};
use crate::traits::Classifier;
use crate::verdict::{Strategy, Verdict};
use factlens_common::{FactlensError, Result};
use serde::{Deserialize, Serialize};

/// Input collected by the caller. Either field may be empty, not both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub body: String,
}

impl AnalysisRequest {
    pub fn new(headline: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            body: body.into(),
        }
    }

    /// Reject requests where both fields are blank after trimming.
    pub fn validate(&self) -> Result<()> {
        if self.headline.trim().is_empty() && self.body.trim().is_empty() {
            return Err(FactlensError::EmptyInput);
        }
        Ok(())
    }

    /// Text used for fact-checker searches: the headline, or the body when
    /// there is no headline.
    pub fn search_query(&self) -> &str {
        let headline = self.headline.trim();
        if headline.is_empty() {
            self.body.trim()
        } else {
            headline
        }
    }
}

/// Everything the caller renders for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub strategy: Strategy,
    pub verdict: Verdict,
    pub reasoning: String,
    pub advice: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub links: Vec<FactCheckLink>,
}

/// Classify `request`, then attach reasoning, advice and search links.
///
/// ```
/// use factlens_core::{analyze, default_fact_checkers, AnalysisRequest, KeywordScorer, Verdict};
///
/// let request = AnalysisRequest::new("", "This is banned");
/// let report = analyze(&KeywordScorer::new(), &request, &default_fact_checkers()?);
/// assert_eq!(report.verdict, Verdict::PossiblyFake);
/// assert_eq!(report.matched_keywords, vec!["banned"]);
/// assert_eq!(report.links.len(), 5);
/// # Ok::<(), factlens_common::FactlensError>(())
/// ```
pub fn analyze(
    classifier: &dyn Classifier,
    request: &AnalysisRequest,
    checkers: &[FactChecker],
) -> Analysis {
    let classification = classifier.classify(request);
    let verdict = classification.verdict;
    tracing::info!(
        target: "factlens.analysis",
        strategy = %classification.strategy,
        verdict = %verdict,
        "request classified"
    );

    let explanation = explain_for(classification.strategy, verdict);
    Analysis {
        strategy: classification.strategy,
        verdict,
        reasoning: explanation.reasoning,
        advice: explanation.advice,
        matched_keywords: classification.matched_keywords,
        confidence: classification.confidence,
        links: build_links(request.search_query(), checkers),
    }
}
