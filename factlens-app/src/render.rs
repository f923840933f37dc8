use anyhow::Result;
use clap::ValueEnum;
use factlens_core::{Analysis, Strategy, Verdict};
use std::fmt::Write as _;

/// How the result is printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

pub fn render(analysis: &Analysis, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(analysis),
        OutputFormat::Json => serde_json::to_string_pretty(analysis)?,
        OutputFormat::Yaml => serde_yaml::to_string(analysis)?,
    })
}

fn banner(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Fake => "[x] FAKE",
        Verdict::PossiblyFake => "[!] POSSIBLY FAKE",
        Verdict::Real => "[ok] REAL",
    }
}

fn render_text(a: &Analysis) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Prediction: {}", banner(a.verdict));
    if !a.matched_keywords.is_empty() {
        let _ = writeln!(out, "Matched keywords: {}", a.matched_keywords.join(", "));
    }
    if let Some(confidence) = a.confidence {
        let _ = writeln!(out, "Confidence: {:.1}%", confidence * 100.0);
    }
    let _ = writeln!(out, "\nReasoning:\n  {}", a.reasoning);
    let _ = writeln!(out, "\nAdvice:\n  {}", a.advice);
    let _ = writeln!(out, "\nExternal fact-checking sources:");
    for link in &a.links {
        let _ = writeln!(out, "  - {}: {}", link.name, link.url);
    }
    let note = match a.strategy {
        Strategy::Keywords => "This is a simple rule-based model. For real accuracy, use a trained model.",
        Strategy::Model => "This model was trained on four examples. Treat its verdict as a demonstration only.",
    };
    let _ = write!(out, "\nNote: {note}");
    out
}
