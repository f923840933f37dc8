use crate::analysis::AnalysisRequest;
use crate::verdict::{Classification, Strategy, Verdict};

/// A classification strategy the caller can select without knowing which
/// implementation it holds.
///
/// Implementations are immutable once built, so one instance can serve
/// concurrent callers through an `Arc`.
pub trait Classifier: Send + Sync {
    /// Which strategy this is.
    fn strategy(&self) -> Strategy;

    /// Classify the headline and body of `request`.
    fn classify(&self, request: &AnalysisRequest) -> Classification;

    /// Shorthand for callers that only need the verdict.
    fn verdict(&self, request: &AnalysisRequest) -> Verdict {
        self.classify(request).verdict
    }
}
