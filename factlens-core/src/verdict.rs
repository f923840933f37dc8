use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of classifying one request.
///
/// The keyword strategy produces all three values; the model strategy only
/// ever produces [`Verdict::Real`] or [`Verdict::Fake`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Real,
    PossiblyFake,
    Fake,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Real, Verdict::PossiblyFake, Verdict::Fake];

    /// Human-facing label, e.g. `Possibly Fake`.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Real => "Real",
            Verdict::PossiblyFake => "Possibly Fake",
            Verdict::Fake => "Fake",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The classification strategies a caller can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Keywords,
    Model,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Keywords => f.write_str("keywords"),
            Strategy::Model => f.write_str("model"),
        }
    }
}

/// What a [`crate::traits::Classifier`] reports for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub strategy: Strategy,
    pub verdict: Verdict,
    /// Distinct sensational terms found in the text (keyword strategy).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_keywords: Vec<String>,
    /// Posterior probability of the winning label (model strategy).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_screaming_case() {
        let json = serde_json::to_string(&Verdict::PossiblyFake).unwrap();
        assert_eq!(json, "\"POSSIBLY_FAKE\"");
        assert_eq!(Verdict::PossiblyFake.to_string(), "Possibly Fake");
    }

    #[test]
    fn classification_omits_empty_fields() {
        let c = Classification {
            strategy: Strategy::Model,
            verdict: Verdict::Real,
            matched_keywords: Vec::new(),
            confidence: None,
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["strategy"], "model");
        assert!(json.get("matched_keywords").is_none());
        assert!(json.get("confidence").is_none());
    }
}
