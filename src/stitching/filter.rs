use crate::models::TimeFrame;
use crate::stitching::config::StitcherConfig;

pub fn passes_thresholds(frame: &TimeFrame, config: &StitcherConfig) -> bool {
    frame.score() > config.min_timeframe_score && frame.len() >= config.min_frame_count
}

/// Keep frames whose aggregate score is above `min_timeframe_score` and that
/// have at least `min_frame_count` members. Order is preserved.
pub fn filter_timeframes(timeframes: Vec<TimeFrame>, config: &StitcherConfig) -> Vec<TimeFrame> {
    timeframes
        .into_iter()
        .filter(|frame| passes_thresholds(frame, config))
        .collect()
}
