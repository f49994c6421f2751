use crate::models::TimeFrame;
use crate::stitching::config::StitcherConfig;

/// Pick the representative timepoints of a frame.
///
/// Static frames get their single highest scoring timepoint (first one on
/// ties). Other frames drop the below-average timepoints and keep every
/// `representative_stride`-th of the rest, starting with the first.
pub fn select_representatives(frame: &TimeFrame, config: &StitcherConfig) -> Vec<i64> {
    let pairs = frame.timepoints().zip(frame.scores().iter().copied());

    if config.is_static(frame.label()) {
        let mut best: Option<(i64, f64)> = None;
        for (timepoint, score) in pairs {
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((timepoint, score));
            }
        }
        best.map(|(timepoint, _)| vec![timepoint]).unwrap_or_default()
    } else {
        let average = frame.score();
        pairs
            .filter(|(_, score)| *score >= average)
            .step_by(config.representative_stride.max(1))
            .map(|(timepoint, _)| timepoint)
            .collect()
    }
}

pub fn set_representatives(frames: &mut [TimeFrame], config: &StitcherConfig) {
    for frame in frames.iter_mut() {
        let representatives = select_representatives(frame, config);
        frame.set_representatives(representatives);
    }
}
