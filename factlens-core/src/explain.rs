use crate::verdict::{Strategy, Verdict};
use serde::{Deserialize, Serialize};

/// Reasoning and advice shown alongside a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub reasoning: String,
    pub advice: String,
}

pub fn reasoning(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Fake => {
            "The text contains multiple suspicious or sensational keywords commonly used in misleading content."
        }
        Verdict::PossiblyFake => {
            "The text contains at least one sensational keyword, which may indicate misinformation."
        }
        Verdict::Real => {
            "No major signs of sensational or misleading keywords were detected in the text."
        }
    }
}

/// Reasoning worded for the strategy that produced the verdict.
///
/// The model strategy never yields `PossiblyFake`; if asked anyway it falls
/// back to the keyword wording.
pub fn reasoning_for(strategy: Strategy, verdict: Verdict) -> &'static str {
    match (strategy, verdict) {
        (Strategy::Model, Verdict::Fake) => {
            "The trained classifier found the wording closer to its examples of fabricated stories than to its examples of factual reporting."
        }
        (Strategy::Model, Verdict::Real) => {
            "The trained classifier found the wording closer to its examples of factual reporting than to its examples of fabricated stories."
        }
        _ => reasoning(verdict),
    }
}

pub fn advice(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Fake => {
            "Do not share this content until it is confirmed. Verify the claim with trusted fact-checking organizations and check whether credible outlets report the same information."
        }
        Verdict::PossiblyFake => {
            "Treat this claim with caution. Look for the original source and confirm it with at least one reputable news outlet or fact-checker before sharing."
        }
        Verdict::Real => {
            "No red flags were found, but a clean result is not proof. Check that credible sources report the same information before relying on it."
        }
    }
}

/// Keyword-strategy wording; see [`explain_for`] for model verdicts.
pub fn explain(verdict: Verdict) -> Explanation {
    explain_for(Strategy::Keywords, verdict)
}

pub fn explain_for(strategy: Strategy, verdict: Verdict) -> Explanation {
    Explanation {
        reasoning: reasoning_for(strategy, verdict).to_string(),
        advice: advice(verdict).to_string(),
    }
}
