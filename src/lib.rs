//! Stitches a dense stream of per-timepoint label predictions into sparse,
//! non-overlapping labeled time frames.

pub mod error;
pub mod models;
pub mod settings;
pub mod stitching;
mod utils;

pub use error::{Result, StitchError};
pub use models::{Classification, Prediction, PredictionRecord, StitchOutput, TimeFrame, TimeFrameRecord};
pub use stitching::{
    create_timeframes, default_label_mapping, LabelMapping, Stitcher, StitcherConfig,
    StitcherParameters,
};

/// Initialize logging (reads RUST_LOG env var, defaults to info).
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
