use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use stitcher::settings::{load_config, save_config};
use stitcher::{default_label_mapping, PredictionRecord, Stitcher, StitcherConfig, StitcherParameters};

#[derive(Debug, Parser)]
#[command(
    name = "stitcher",
    about = "Stitch per-timepoint label predictions into time frames",
    disable_help_subcommand = true
)]
struct CliArgs {
    /// JSON array of prediction records, ordered by timePoint
    #[arg(value_name = "PREDICTIONS")]
    predictions: PathBuf,

    /// JSON stitcher config; missing fields take defaults
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Write the time frames here instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Minimum score for a timepoint to join a time frame
    #[arg(long = "min-frame-score")]
    min_frame_score: Option<f64>,

    /// Minimum aggregate score for a time frame
    #[arg(long = "min-timeframe-score")]
    min_timeframe_score: Option<f64>,

    /// Minimum number of timepoints in a time frame
    #[arg(long = "min-frame-count")]
    min_frame_count: Option<usize>,

    /// Rebin classifier labels with the built-in bars/slate/chyron/credits
    /// mapping when the config has none
    #[arg(long = "default-label-mapping")]
    default_label_mapping: bool,

    /// Save the effective config to this file
    #[arg(long = "save-config", value_name = "FILE")]
    save_config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long = "pretty")]
    pretty: bool,
}

impl CliArgs {
    fn parameters(&self) -> StitcherParameters {
        StitcherParameters {
            min_frame_score: self.min_frame_score,
            min_timeframe_score: self.min_timeframe_score,
            min_frame_count: self.min_frame_count,
        }
    }

    fn stitcher_config(&self) -> Result<StitcherConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => StitcherConfig::default(),
        };
        if self.default_label_mapping && config.label_mapping.is_none() {
            config = config.with_label_mapping(default_label_mapping());
        }
        Ok(config.with_parameters(&self.parameters()))
    }
}

fn read_predictions(path: &Path) -> Result<Vec<PredictionRecord>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read predictions from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse predictions in {}", path.display()))
}

fn main() -> Result<()> {
    stitcher::init_logging();

    let args = CliArgs::parse();
    let config = args.stitcher_config()?;
    if let Some(path) = &args.save_config {
        save_config(path, &config)?;
    }

    let records = read_predictions(&args.predictions)?;
    info!("Read {} predictions from {}", records.len(), args.predictions.display());

    let output = Stitcher::new(config).stitch_records(records)?;
    info!("Stitched {} time frames", output.timeframes.len());

    let serialized = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    match &args.output {
        Some(path) => fs::write(path, serialized)
            .with_context(|| format!("Failed to write time frames to {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{serialized}")?;
        }
    }

    Ok(())
}
