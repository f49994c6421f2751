//! Prediction data model.
//!
//! Wraps one sampled timepoint's classification result and keeps the
//! argmax label and its score in sync with the classification.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, StitchError};
use crate::models::records::PredictionRecord;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_warn;

/// Label scores for one timepoint. Ordered by label so that iteration, and
/// therefore argmax tie-breaking, is deterministic.
pub type Classification = BTreeMap<String, f64>;

/// One timestamped multi-label classification result.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub id: String,
    pub source_id: String,
    /// Milliseconds from the start of the video.
    pub timepoint: i64,
    label: String,
    score: f64,
    classification: Classification,
}

impl Prediction {
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        timepoint: i64,
        classification: Classification,
    ) -> Result<Self> {
        let id = id.into();
        let (label, score) = argmax(&classification).ok_or_else(|| {
            StitchError::InvalidPredictionStream(format!(
                "prediction {id} has an empty classification"
            ))
        })?;

        Ok(Self {
            id,
            source_id: source_id.into(),
            timepoint,
            label,
            score,
            classification,
        })
    }

    /// Build a prediction from an input record. The label is always derived
    /// from the classification; a declared label that disagrees is ignored.
    pub fn from_record(record: PredictionRecord) -> Result<Self> {
        let declared = record.label;
        let prediction = Self::new(
            record.id,
            record.source_id,
            record.time_point,
            record.classification,
        )?;

        if let Some(declared) = declared {
            if declared != prediction.label {
                log_warn!(
                    "Prediction {} declares label '{}' but argmax is '{}'; using '{}'",
                    prediction.reference(),
                    declared,
                    prediction.label,
                    prediction.label
                );
            }
        }

        Ok(prediction)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.classification.keys().map(String::as_str)
    }

    pub fn score_for_label(&self, label: &str) -> Option<f64> {
        self.classification.get(label).copied()
    }

    /// Cross reference in `<source_id>:<id>` form.
    pub fn reference(&self) -> String {
        format!("{}:{}", self.source_id, self.id)
    }

    /// Swap in a new classification and re-derive label and score.
    pub(crate) fn replace_classification(&mut self, classification: Classification) -> Result<()> {
        let (label, score) = argmax(&classification).ok_or_else(|| {
            StitchError::InvalidPredictionStream(format!(
                "prediction {} would be left with an empty classification",
                self.reference()
            ))
        })?;
        self.classification = classification;
        self.label = label;
        self.score = score;
        Ok(())
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Prediction source={} id={} timepoint={} label={} score={:.2}>",
            self.source_id, self.id, self.timepoint, self.label, self.score
        )
    }
}

/// Highest scoring label. Ties go to the lexicographically smallest label,
/// and NaN scores never win over a real number.
pub fn argmax(classification: &Classification) -> Option<(String, f64)> {
    let mut best: Option<(&String, f64)> = None;
    for (label, &score) in classification {
        let replace = match best {
            None => true,
            Some((_, best_score)) => score > best_score || (best_score.is_nan() && !score.is_nan()),
        };
        if replace {
            best = Some((label, score));
        }
    }
    best.map(|(label, score)| (label.clone(), score))
}
