use crate::error::{Result, StitchError};
use crate::models::{Classification, Prediction};
use crate::stitching::config::LabelMapping;

/// Sum fine label scores into their coarse labels.
pub fn binned_classification(
    prediction: &Prediction,
    mapping: &LabelMapping,
) -> Result<Classification> {
    let mut binned = Classification::new();
    for (coarse, fine_labels) in mapping {
        let mut total = 0.0;
        for fine in fine_labels {
            total += prediction
                .score_for_label(fine)
                .ok_or_else(|| StitchError::LabelMapping {
                    label: fine.clone(),
                    prediction: prediction.reference(),
                })?;
        }
        binned.insert(coarse.clone(), total);
    }
    Ok(binned)
}

/// Replace the classification of a prediction with its binned version.
pub fn rebin_prediction(prediction: &mut Prediction, mapping: &LabelMapping) -> Result<()> {
    let binned = binned_classification(prediction, mapping)?;
    prediction.replace_classification(binned)
}

/// Rebin every prediction. A missing fine label aborts the whole run.
pub fn rebin_predictions(predictions: &mut [Prediction], mapping: &LabelMapping) -> Result<()> {
    for prediction in predictions.iter_mut() {
        rebin_prediction(prediction, mapping)?;
    }
    Ok(())
}
