use std::fmt;
use std::sync::Arc;

use crate::error::{Result, StitchError};
use crate::models::{Prediction, PredictionRecord, StitchOutput, TimeFrame};
use crate::stitching::collect::collect_timeframes;
use crate::stitching::config::{LabelMapping, StitcherConfig};
use crate::stitching::filter::filter_timeframes;
use crate::stitching::overlap::remove_overlapping_timeframes;
use crate::stitching::rebin::rebin_predictions;
use crate::stitching::representatives::set_representatives;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

/// Turns a time-ordered prediction stream into labeled time frames.
#[derive(Debug, Clone, Default)]
pub struct Stitcher {
    config: StitcherConfig,
}

impl Stitcher {
    pub fn new(config: StitcherConfig) -> Self {
        let stitcher = Self { config };
        log_info!("Created {}", stitcher);
        stitcher
    }

    pub fn config(&self) -> &StitcherConfig {
        &self.config
    }

    /// Main stitching function: rebin, collect, filter, resolve overlaps,
    /// pick representatives and sort by start.
    pub fn create_timeframes(&self, mut predictions: Vec<Prediction>) -> Result<Vec<TimeFrame>> {
        validate_predictions(&predictions)?;

        if let Some(mapping) = self.label_mapping() {
            rebin_predictions(&mut predictions, mapping)?;
        }

        let predictions: Vec<Arc<Prediction>> = predictions.into_iter().map(Arc::new).collect();

        let collected = collect_timeframes(&predictions, &self.config);
        log_debug!("Collected {} candidate frames", collected.len());

        let filtered = filter_timeframes(collected, &self.config);
        log_timeframes("Filtered frames", &filtered);

        let mut final_frames = remove_overlapping_timeframes(filtered);
        set_representatives(&mut final_frames, &self.config);
        final_frames.sort_by_key(|tf| tf.start());
        log_timeframes("Final frames", &final_frames);

        Ok(final_frames)
    }

    /// Convert input records, stitch them and package the result.
    pub fn stitch_records(&self, records: Vec<PredictionRecord>) -> Result<StitchOutput> {
        let predictions = records
            .into_iter()
            .map(Prediction::from_record)
            .collect::<Result<Vec<_>>>()?;
        let labelset = self.labelset(&predictions);
        let timeframes = self.create_timeframes(predictions)?;
        Ok(StitchOutput::new(labelset, &timeframes))
    }

    /// Labels frames can carry: the coarse labels when rebinning, otherwise
    /// the vocabulary of the input.
    pub fn labelset(&self, predictions: &[Prediction]) -> Vec<String> {
        match self.label_mapping() {
            Some(mapping) => mapping.keys().cloned().collect(),
            None => predictions
                .first()
                .map(|p| p.labels().map(String::from).collect())
                .unwrap_or_default(),
        }
    }

    fn label_mapping(&self) -> Option<&LabelMapping> {
        self.config
            .label_mapping
            .as_ref()
            .filter(|mapping| !mapping.is_empty())
    }
}

impl fmt::Display for Stitcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Stitcher min_frame_score={} min_timeframe_score={} min_frame_count={}>",
            self.config.min_frame_score, self.config.min_timeframe_score, self.config.min_frame_count
        )
    }
}

/// Stitch with a one-off stitcher.
pub fn create_timeframes(
    predictions: Vec<Prediction>,
    config: &StitcherConfig,
) -> Result<Vec<TimeFrame>> {
    Stitcher::new(config.clone()).create_timeframes(predictions)
}

/// Check that the stream is non-empty, strictly increasing in timepoint and
/// shares one label vocabulary.
pub fn validate_predictions(predictions: &[Prediction]) -> Result<()> {
    let Some(first) = predictions.first() else {
        return Err(StitchError::InvalidPredictionStream(
            "no predictions to stitch".to_string(),
        ));
    };

    for pair in predictions.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.timepoint <= prev.timepoint {
            return Err(StitchError::InvalidPredictionStream(format!(
                "prediction {} at {}ms does not come after {} at {}ms",
                next.reference(),
                next.timepoint,
                prev.reference(),
                prev.timepoint
            )));
        }
    }

    if let Some(odd) = predictions
        .iter()
        .find(|p| !p.labels().eq(first.labels()))
    {
        return Err(StitchError::InvalidPredictionStream(format!(
            "prediction {} has labels [{}] but {} has [{}]",
            odd.reference(),
            odd.labels().collect::<Vec<_>>().join(", "),
            first.reference(),
            first.labels().collect::<Vec<_>>().join(", ")
        )));
    }

    Ok(())
}

fn log_timeframes(header: &str, timeframes: &[TimeFrame]) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    let mut sorted: Vec<&TimeFrame> = timeframes.iter().collect();
    sorted.sort_by_key(|tf| tf.start());
    log_debug!("{} ({})", header, sorted.len());
    for tf in sorted {
        log_debug!("{}", tf);
    }
}
