use std::fmt;
use std::sync::Arc;

use chrono::Duration;

use crate::models::Prediction;

/// In-progress run of predictions for one label.
///
/// The collector keeps one of these per label and empties it in place
/// whenever the run is broken.
#[derive(Debug, Clone)]
pub struct OpenFrame {
    label: String,
    targets: Vec<Arc<Prediction>>,
    scores: Vec<f64>,
}

impl OpenFrame {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            targets: Vec::new(),
            scores: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Append a prediction with its score for this frame's label. The score
    /// is frozen at this point.
    pub fn add_prediction(&mut self, prediction: &Arc<Prediction>, score: f64) {
        self.targets.push(Arc::clone(prediction));
        self.scores.push(score);
    }

    /// Finish the accumulated run and leave this slot empty for the next run.
    /// Returns `None` if nothing was accumulated.
    pub fn close(&mut self) -> Option<TimeFrame> {
        if self.is_empty() {
            return None;
        }
        let targets = std::mem::take(&mut self.targets);
        let scores = std::mem::take(&mut self.scores);
        Some(TimeFrame::finish(self.label.clone(), targets, scores))
    }
}

/// A finished run of predictions for one label. Start, end and aggregate
/// score are fixed when the frame is finished.
#[derive(Debug, Clone)]
pub struct TimeFrame {
    label: String,
    targets: Vec<Arc<Prediction>>,
    scores: Vec<f64>,
    start: i64,
    end: i64,
    score: f64,
    representatives: Vec<i64>,
}

impl TimeFrame {
    /// Callers guarantee `targets` is non-empty and parallel to `scores`.
    fn finish(label: String, targets: Vec<Arc<Prediction>>, scores: Vec<f64>) -> Self {
        let start = targets.first().map_or(0, |p| p.timepoint);
        let end = targets.last().map_or(0, |p| p.timepoint);
        let score = scores.iter().sum::<f64>() / scores.len() as f64;
        Self {
            label,
            targets,
            scores,
            start,
            end,
            score,
            representatives: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn targets(&self) -> &[Arc<Prediction>] {
        &self.targets
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Mean of the member scores.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn timepoints(&self) -> impl Iterator<Item = i64> + '_ {
        self.targets.iter().map(|p| p.timepoint)
    }

    pub fn duration(&self) -> Duration {
        Duration::milliseconds(self.end - self.start)
    }

    pub fn representatives(&self) -> &[i64] {
        &self.representatives
    }

    pub(crate) fn set_representatives(&mut self, representatives: Vec<i64>) {
        self.representatives = representatives;
    }

    /// Member predictions at the representative timepoints, in
    /// representative order.
    pub fn representative_predictions(&self) -> Vec<&Arc<Prediction>> {
        self.representatives
            .iter()
            .filter_map(|tp| self.targets.iter().find(|p| p.timepoint == *tp))
            .collect()
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<TimeFrame {} {}:{} score={:.4}>",
            self.label, self.start, self.end, self.score
        )
    }
}
