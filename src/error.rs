/// Errors raised by the stitching pipeline. Both variants are fatal: the
/// pipeline never returns partial output.
#[derive(Debug, thiserror::Error)]
pub enum StitchError {
    #[error("Invalid prediction stream: {0}")]
    InvalidPredictionStream(String),

    #[error("Label mapping error: label '{label}' missing from prediction {prediction}")]
    LabelMapping { label: String, prediction: String },
}

pub type Result<T> = std::result::Result<T, StitchError>;
