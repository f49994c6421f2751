//! Records exchanged with whatever layer reads predictions and writes
//! time frames.

use serde::{Deserialize, Serialize};

use crate::models::{Classification, TimeFrame};

pub const TIME_UNIT: &str = "milliseconds";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    pub id: String,
    pub source_id: String,
    pub time_point: i64,
    #[serde(default)]
    pub label: Option<String>,
    pub classification: Classification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeFrameRecord {
    pub label: String,
    pub score: f64,
    pub start: i64,
    pub end: i64,
    pub targets: Vec<String>,
    pub representatives: Vec<String>,
    /// `<sourceId>:<id>` for every target.
    pub target_refs: Vec<String>,
}

impl From<&TimeFrame> for TimeFrameRecord {
    fn from(frame: &TimeFrame) -> Self {
        Self {
            label: frame.label().to_string(),
            score: frame.score(),
            start: frame.start(),
            end: frame.end(),
            targets: frame.targets().iter().map(|p| p.id.clone()).collect(),
            representatives: frame
                .representative_predictions()
                .into_iter()
                .map(|p| p.id.clone())
                .collect(),
            target_refs: frame.targets().iter().map(|p| p.reference()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StitchOutput {
    pub time_unit: String,
    pub labelset: Vec<String>,
    pub timeframes: Vec<TimeFrameRecord>,
}

impl StitchOutput {
    pub fn new(labelset: Vec<String>, frames: &[TimeFrame]) -> Self {
        Self {
            time_unit: TIME_UNIT.to_string(),
            labelset,
            timeframes: frames.iter().map(TimeFrameRecord::from).collect(),
        }
    }
}
