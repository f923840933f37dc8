//! Headline and article classification for factlens.
//!
//! This crate exposes a common [`traits::Classifier`] interface with two
//! strategies: a deterministic keyword scorer ([`keywords::KeywordScorer`])
//! and a toy Naive Bayes model fit once at startup ([`bayes::TrainedModel`]).
//! Results are explained by [`explain`] and paired with search links into
//! external fact-checking services by [`links`].
//!
//! # Examples
//! ```
//! use factlens_core::{analyze, default_fact_checkers, ensure_classifier_ready};
//! use factlens_core::{AnalysisRequest, ClassifierSettings, Verdict};
//!
//! let classifier = ensure_classifier_ready(&ClassifierSettings::default())?;
//! let request = AnalysisRequest::new("Shocking secret cure revealed", "");
//! let report = analyze(classifier.as_ref(), &request, &default_fact_checkers()?);
//! assert_eq!(report.verdict, Verdict::Fake);
//! # Ok::<(), factlens_common::FactlensError>(())
//! ```
pub mod analysis;
pub mod bayes;
pub mod explain;
pub mod keywords;
pub mod links;
pub mod normalize;
pub mod traits;
pub mod verdict;

pub use analysis::{analyze, Analysis, AnalysisRequest};
pub use bayes::{fit, Label, TrainedModel, TrainingExample};
pub use explain::{explain, explain_for, Explanation};
pub use keywords::KeywordScorer;
pub use links::{build_links, default_fact_checkers, FactCheckLink, FactChecker};
pub use verdict::{Classification, Strategy, Verdict};

use std::sync::Arc;
use traits::Classifier;

/// Which classifier to build and with what data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifierSettings {
    /// `None` uses [`keywords::DEFAULT_KEYWORDS`].
    Keywords { terms: Option<Vec<String>> },
    /// `None` uses [`bayes::default_corpus`].
    Model { corpus: Option<Vec<TrainingExample>> },
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self::Keywords { terms: None }
    }
}

impl ClassifierSettings {
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Keywords { .. } => Strategy::Keywords,
            Self::Model { .. } => Strategy::Model,
        }
    }
}

/// Build the selected classifier, fitting the model when needed.
///
/// Call once during startup and share the returned handle.
pub fn ensure_classifier_ready(
    settings: &ClassifierSettings,
) -> factlens_common::Result<Arc<dyn Classifier>> {
    let classifier: Arc<dyn Classifier> = match settings {
        ClassifierSettings::Keywords { terms: None } => Arc::new(KeywordScorer::new()),
        ClassifierSettings::Keywords { terms: Some(terms) } => {
            Arc::new(KeywordScorer::with_terms(terms)?)
        }
        ClassifierSettings::Model { corpus: None } => Arc::new(TrainedModel::from_default_corpus()?),
        ClassifierSettings::Model {
            corpus: Some(corpus),
        } => Arc::new(fit(corpus)?),
    };
    tracing::info!(strategy = %classifier.strategy(), "classifier ready");
    Ok(classifier)
}

/// Three-valued keyword verdict over the default term set.
pub fn classify_by_keywords(headline: &str, body: &str) -> Verdict {
    KeywordScorer::new().score(&normalize::normalize(headline, body))
}

/// Two-valued model verdict; `model` comes from [`fit`].
pub fn classify_by_model(model: &TrainedModel, text: &str) -> Verdict {
    model.predict(text)
}

/// Search links for `query` across the default fact-checking services.
pub fn build_external_links(query: &str) -> factlens_common::Result<Vec<FactCheckLink>> {
    Ok(build_links(query, &default_fact_checkers()?))
}
