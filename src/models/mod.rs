pub mod prediction;
pub mod records;
pub mod time_frame;

pub use prediction::{Classification, Prediction};
pub use records::{PredictionRecord, StitchOutput, TimeFrameRecord};
pub use time_frame::{OpenFrame, TimeFrame};
