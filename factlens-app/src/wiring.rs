use anyhow::{Context, Result, anyhow};
use factlens_common::observability::{LogConfig, LogFormat};
use factlens_config::{ClassifierSpec, FactCheckerSpec, FactlensConfig, LoggingSpec};
use factlens_core::traits::Classifier;
use factlens_core::{
    Analysis, AnalysisRequest, ClassifierSettings, FactChecker, Label, Strategy, TrainingExample,
    analyze, default_fact_checkers, ensure_classifier_ready,
};
use std::path::PathBuf;
use std::sync::Arc;

/// A ready classifier plus the services its links point at.
pub struct Pipeline {
    classifier: Arc<dyn Classifier>,
    checkers: Vec<FactChecker>,
}

impl Pipeline {
    pub fn strategy(&self) -> Strategy {
        self.classifier.strategy()
    }

    pub fn analyze(&self, request: &AnalysisRequest) -> Analysis {
        analyze(self.classifier.as_ref(), request, &self.checkers)
    }
}

/// Fit/build everything named by `cfg` once. `strategy` from the command
/// line replaces the configured kind; data for the other kind is dropped.
pub fn build_from_config(cfg: &FactlensConfig, strategy: Option<Strategy>) -> Result<Pipeline> {
    let settings = classifier_settings(&cfg.classifier, strategy)?;
    let classifier = ensure_classifier_ready(&settings)
        .with_context(|| format!("failed to prepare {} classifier", settings.strategy()))?;
    let checkers = build_fact_checkers(cfg.fact_checkers.as_deref())?;
    tracing::debug!(services = checkers.len(), "fact checkers ready");
    Ok(Pipeline {
        classifier,
        checkers,
    })
}

pub fn classifier_settings(
    spec: &ClassifierSpec,
    strategy: Option<Strategy>,
) -> Result<ClassifierSettings> {
    let settings = match (spec, strategy) {
        (ClassifierSpec::Keywords { keywords }, None | Some(Strategy::Keywords)) => {
            ClassifierSettings::Keywords {
                terms: keywords.clone(),
            }
        }
        (ClassifierSpec::Model { corpus }, None | Some(Strategy::Model)) => {
            let corpus = corpus
                .as_ref()
                .map(|rows| {
                    rows.iter()
                        .enumerate()
                        .map(|(idx, row)| {
                            let label: Label = row
                                .label
                                .parse()
                                .with_context(|| format!("corpus row {idx}"))?;
                            Ok(TrainingExample::new(row.text.clone(), label))
                        })
                        .collect::<Result<Vec<_>>>()
                })
                .transpose()?;
            ClassifierSettings::Model { corpus }
        }
        (_, Some(Strategy::Keywords)) => ClassifierSettings::Keywords { terms: None },
        (_, Some(Strategy::Model)) => ClassifierSettings::Model { corpus: None },
    };
    Ok(settings)
}

pub fn build_fact_checkers(specs: Option<&[FactCheckerSpec]>) -> Result<Vec<FactChecker>> {
    match specs {
        None => Ok(default_fact_checkers()?),
        Some([]) => Err(anyhow!("fact_checkers is present but empty")),
        Some(specs) => specs
            .iter()
            .map(|spec| {
                FactChecker::new(spec.name.clone(), &spec.url_template).map_err(Into::into)
            })
            .collect(),
    }
}

pub fn log_config(spec: &LoggingSpec, verbose: bool) -> Result<LogConfig> {
    let format = match spec.format.as_deref() {
        None => LogFormat::Text,
        Some(raw) => {
            LogFormat::parse(raw).ok_or_else(|| anyhow!("unknown logging.format {raw:?}"))?
        }
    };
    let defaults = LogConfig::default();
    Ok(LogConfig {
        log_dir: spec.dir.as_ref().map(PathBuf::from),
        emit_stderr: verbose || spec.stderr.unwrap_or(false),
        format,
        default_filter: spec.filter.clone().unwrap_or(defaults.default_filter),
        ..defaults
    })
}
