use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Coarse label -> fine labels whose scores are summed into it.
pub type LabelMapping = BTreeMap<String, Vec<String>>;

/// Configuration for the stitcher with tunable thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StitcherConfig {
    /// Minimum score for a timepoint to be included in a potential time frame
    pub min_frame_score: f64,

    /// Minimum aggregate score for a time frame to be selected
    #[serde(rename = "minTimeFrameScore")]
    pub min_timeframe_score: f64,

    /// Minimum number of sampled timepoints in a time frame
    pub min_frame_count: usize,

    /// Rebin fine labels into coarse labels before stitching
    pub label_mapping: Option<LabelMapping>,

    /// Frame types whose content does not move (one representative each)
    pub static_labels: BTreeSet<String>,

    /// Keep every n-th above-average timepoint as a representative of
    /// non-static frames
    pub representative_stride: usize,
}

impl Default for StitcherConfig {
    fn default() -> Self {
        Self {
            min_frame_score: 0.01,
            min_timeframe_score: 0.5,
            min_frame_count: 2,
            label_mapping: None,
            static_labels: ["bars", "slate", "chyron"]
                .into_iter()
                .map(String::from)
                .collect(),
            representative_stride: 3,
        }
    }
}

/// Per-request overrides for the thresholds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StitcherParameters {
    pub min_frame_score: Option<f64>,
    #[serde(rename = "minTimeFrameScore")]
    pub min_timeframe_score: Option<f64>,
    pub min_frame_count: Option<usize>,
}

impl StitcherConfig {
    pub fn with_parameters(mut self, parameters: &StitcherParameters) -> Self {
        if let Some(score) = parameters.min_frame_score {
            self.min_frame_score = score;
        }
        if let Some(score) = parameters.min_timeframe_score {
            self.min_timeframe_score = score;
        }
        if let Some(count) = parameters.min_frame_count {
            self.min_frame_count = count;
        }
        self
    }

    pub fn with_label_mapping(mut self, mapping: LabelMapping) -> Self {
        self.label_mapping = Some(mapping);
        self
    }

    pub fn is_static(&self, label: &str) -> bool {
        self.static_labels.contains(label)
    }
}

/// Bins used for the slate/bars/chyron/credits classifier output.
pub fn default_label_mapping() -> LabelMapping {
    let bins: [(&str, &[&str]); 4] = [
        ("bars", &["B"]),
        ("slate", &["S", "S:H", "S:C", "S:D", "S:G"]),
        ("chyron", &["I", "N", "Y"]),
        ("credits", &["C"]),
    ];
    bins.into_iter()
        .map(|(coarse, fine)| {
            (
                coarse.to_string(),
                fine.iter().map(|label| label.to_string()).collect(),
            )
        })
        .collect()
}
