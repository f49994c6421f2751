pub mod algorithm;
pub mod collect;
pub mod config;
pub mod filter;
pub mod overlap;
pub mod rebin;
pub mod representatives;

pub use algorithm::{create_timeframes, validate_predictions, Stitcher};
pub use config::{default_label_mapping, LabelMapping, StitcherConfig, StitcherParameters};
