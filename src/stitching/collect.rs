use std::sync::Arc;

use crate::models::{OpenFrame, Prediction, TimeFrame};
use crate::stitching::config::StitcherConfig;

/// Find runs of predictions for every label where each prediction scores at
/// least `min_frame_score` for that label. Labels are tracked independently,
/// so one timepoint may sit in several candidate frames. Runs with a single
/// prediction are dropped.
pub fn collect_timeframes(
    predictions: &[Arc<Prediction>],
    config: &StitcherConfig,
) -> Vec<TimeFrame> {
    let Some(first) = predictions.first() else {
        return Vec::new();
    };

    // One slot per label, emptied in place whenever its run breaks
    let mut open_frames: Vec<OpenFrame> = first.labels().map(OpenFrame::new).collect();
    let mut timeframes = Vec::new();

    for prediction in predictions {
        for open in open_frames.iter_mut() {
            let score = prediction.score_for_label(open.label());
            match score {
                Some(score) if score >= config.min_frame_score => {
                    open.add_prediction(prediction, score);
                }
                _ => timeframes.extend(open.close()),
            }
        }
    }

    for open in open_frames.iter_mut() {
        timeframes.extend(open.close());
    }

    timeframes.retain(|tf| tf.len() > 1);
    timeframes
}
