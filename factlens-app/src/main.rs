use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use factlens_common::observability::init_logging;
use factlens_config::{FactlensConfig, FactlensConfigLoader, default_config_path};
use factlens_core::{AnalysisRequest, Strategy};
use render::{OutputFormat, render};
use std::io::Read;
use std::path::PathBuf;
use wiring::{build_from_config, log_config};

mod render;
mod wiring;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Keywords,
    Model,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Keywords => Strategy::Keywords,
            StrategyArg::Model => Strategy::Model,
        }
    }
}

/// Label a headline and/or article as Real, Possibly Fake or Fake.
#[derive(Debug, Parser)]
#[command(name = "factlens", version, about)]
struct Cli {
    /// News headline.
    #[arg(long, default_value = "")]
    headline: String,

    /// Article text; `-` reads it from stdin.
    #[arg(long, default_value = "")]
    body: String,

    /// Classification strategy; overrides the config file.
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Config file (YAML/TOML/JSON). Defaults to the per-user factlens.yaml.
    #[arg(long, env = "FACTLENS_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Mirror logs to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(explicit: Option<&PathBuf>) -> Result<FactlensConfig> {
    let loader = FactlensConfigLoader::new();
    let loader = match (explicit, default_config_path()) {
        (Some(path), _) => loader.with_file(path),
        (None, Some(path)) => loader.with_optional_file(path),
        (None, None) => loader,
    };
    loader.load().context("failed to load configuration")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let body = if cli.body == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read article text from stdin")?;
        buf
    } else {
        cli.body
    };
    let request = AnalysisRequest::new(cli.headline, body);
    request.validate()?;

    // 1) Load config (env wins over files)
    let cfg = load_config(cli.config.as_ref())?;

    // 2) Logging before the model fit so startup failures are recorded
    let log_path = init_logging(log_config(&cfg.logging, cli.verbose)?)?;
    tracing::debug!(path = %log_path.display(), "factlens starting");

    // 3) Build the classifier once, then analyze
    let pipeline = build_from_config(&cfg, cli.strategy.map(Strategy::from))?;
    tracing::info!(strategy = %pipeline.strategy(), "pipeline ready");
    let analysis = pipeline.analyze(&request);

    println!("{}", render(&analysis, cli.format)?);
    Ok(())
}
