//! Toy multinomial Naive Bayes classifier.
//!
//! The model is fit once from a handful of labeled rows and is read-only
//! afterwards. It makes no claim of generalization; it only guarantees a
//! deterministic answer for a given corpus.

use crate::analysis::AnalysisRequest;
use crate::normalize::{normalize, tokenize};
use crate::traits::Classifier;
use crate::verdict::{Classification, Strategy, Verdict};
use factlens_common::{FactlensError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// Laplace smoothing constant.
pub const LAPLACE_ALPHA: f64 = 1.0;

const DEFAULT_CORPUS: [(&str, Label); 4] = [
    (
        "Shocking miracle cure they don't want you to know about",
        Label::Fake,
    ),
    (
        "Secret conspiracy exposed: the hidden truth about the banned pill",
        Label::Fake,
    ),
    (
        "City council approves the annual budget after public hearing",
        Label::Real,
    ),
    (
        "Researchers publish peer-reviewed study on regional rainfall data",
        Label::Real,
    ),
];

/// Model classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Fake,
    Real,
}

impl Label {
    const ALL: [Label; 2] = [Label::Fake, Label::Real];

    fn index(self) -> usize {
        match self {
            Label::Fake => 0,
            Label::Real => 1,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Fake => f.write_str("FAKE"),
            Label::Real => f.write_str("REAL"),
        }
    }
}

impl FromStr for Label {
    type Err = FactlensError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FAKE" => Ok(Label::Fake),
            "REAL" => Ok(Label::Real),
            other => Err(FactlensError::Corpus(format!(
                "unknown label {other:?}; expected FAKE or REAL"
            ))),
        }
    }
}

impl From<Label> for Verdict {
    fn from(label: Label) -> Self {
        match label {
            Label::Fake => Verdict::Fake,
            Label::Real => Verdict::Real,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub text: String,
    pub label: Label,
}

impl TrainingExample {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// The built-in four-row corpus (two FAKE, two REAL).
pub fn default_corpus() -> Vec<TrainingExample> {
    DEFAULT_CORPUS
        .iter()
        .map(|(text, label)| TrainingExample::new(*text, *label))
        .collect()
}

/// Normalized class probabilities for one input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Posterior {
    pub fake: f64,
    pub real: f64,
}

impl Posterior {
    /// Winning label; equal scores resolve to `Real`.
    pub fn label(&self) -> Label {
        if self.real >= self.fake {
            Label::Real
        } else {
            Label::Fake
        }
    }

    pub fn confidence(&self) -> f64 {
        self.fake.max(self.real)
    }
}

#[derive(Debug, Clone)]
struct ClassStats {
    log_prior: f64,
    /// log P(token | class) for every vocabulary token.
    log_likelihood: HashMap<String, f64>,
}

/// Fitted state. Immutable after [`fit`]; safe to share across threads.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    classes: [ClassStats; 2],
    vocabulary: BTreeSet<String>,
    documents: [usize; 2],
}

/// Fit the model over `examples`.
///
/// Fails when the corpus is empty, a class is missing, or a row has no
/// tokens, so a broken corpus is caught at startup rather than producing a
/// degraded model.
///
/// ```
/// use factlens_core::bayes::{default_corpus, fit};
/// use factlens_core::Verdict;
///
/// let model = fit(&default_corpus()).expect("default corpus fits");
/// assert_eq!(model.predict("miracle pill banned"), Verdict::Fake);
/// assert_eq!(model.predict(""), Verdict::Real);
/// ```
pub fn fit(examples: &[TrainingExample]) -> Result<TrainedModel> {
    if examples.is_empty() {
        return Err(FactlensError::Corpus("training corpus is empty".to_string()));
    }

    let mut documents = [0usize; 2];
    let mut token_totals = [0usize; 2];
    let mut counts: [HashMap<String, usize>; 2] = [HashMap::new(), HashMap::new()];
    let mut vocabulary = BTreeSet::new();

    for (idx, example) in examples.iter().enumerate() {
        let tokens = tokenize(&example.text);
        if tokens.is_empty() {
            return Err(FactlensError::Corpus(format!(
                "example {idx} ({:?}) has no tokens",
                example.text
            )));
        }
        let class = example.label.index();
        documents[class] += 1;
        token_totals[class] += tokens.len();
        for token in tokens {
            *counts[class].entry(token.clone()).or_insert(0) += 1;
            vocabulary.insert(token);
        }
    }

    for label in Label::ALL {
        if documents[label.index()] == 0 {
            return Err(FactlensError::Corpus(format!("no {label} examples")));
        }
    }

    let total_docs = examples.len() as f64;
    let vocab_size = vocabulary.len() as f64;
    let classes = Label::ALL.map(|label| {
        let class = label.index();
        let denominator = token_totals[class] as f64 + LAPLACE_ALPHA * vocab_size;
        let log_likelihood = vocabulary
            .iter()
            .map(|token| {
                let count = counts[class].get(token).copied().unwrap_or(0) as f64;
                (token.clone(), ((count + LAPLACE_ALPHA) / denominator).ln())
            })
            .collect();
        ClassStats {
            log_prior: (documents[class] as f64 / total_docs).ln(),
            log_likelihood,
        }
    });

    tracing::debug!(
        target: "factlens.bayes",
        examples = examples.len(),
        vocabulary = vocabulary.len(),
        fake_docs = documents[Label::Fake.index()],
        real_docs = documents[Label::Real.index()],
        "naive bayes fit complete"
    );

    Ok(TrainedModel {
        classes,
        vocabulary,
        documents,
    })
}

impl TrainedModel {
    /// Fit over [`default_corpus`].
    pub fn from_default_corpus() -> Result<Self> {
        fit(&default_corpus())
    }

    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn documents(&self, label: Label) -> usize {
        self.documents[label.index()]
    }

    // Unknown tokens are skipped, so an empty or unseen input scores on priors.
    fn log_scores(&self, tokens: &[String]) -> [f64; 2] {
        self.classes.each_ref().map(|stats| {
            tokens
                .iter()
                .filter_map(|t| stats.log_likelihood.get(t))
                .fold(stats.log_prior, |acc, lp| acc + lp)
        })
    }

    pub fn predict_proba(&self, text: &str) -> Posterior {
        posterior_from_scores(self.log_scores(&tokenize(text)))
    }

    pub fn predict(&self, text: &str) -> Verdict {
        verdict_from_scores(self.log_scores(&tokenize(text)))
    }
}

fn posterior_from_scores([fake, real]: [f64; 2]) -> Posterior {
    let max = fake.max(real);
    let (ef, er) = ((fake - max).exp(), (real - max).exp());
    let sum = ef + er;
    Posterior {
        fake: ef / sum,
        real: er / sum,
    }
}

fn verdict_from_scores([fake, real]: [f64; 2]) -> Verdict {
    if real >= fake {
        Verdict::Real
    } else {
        Verdict::Fake
    }
}

impl Classifier for TrainedModel {
    fn strategy(&self) -> Strategy {
        Strategy::Model
    }

    fn classify(&self, request: &AnalysisRequest) -> Classification {
        let scores = self.log_scores(&tokenize(&normalize(&request.headline, &request.body)));
        let posterior = posterior_from_scores(scores);
        let verdict = verdict_from_scores(scores);
        tracing::debug!(
            target: "factlens.bayes",
            fake = posterior.fake,
            real = posterior.real,
            verdict = %verdict,
            "model prediction"
        );
        Classification {
            strategy: Strategy::Model,
            verdict,
            matched_keywords: Vec::new(),
            confidence: Some(posterior.confidence()),
        }
    }
}
