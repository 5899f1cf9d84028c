pub mod label;
pub mod prediction;

pub use label::{Label, ParseLabelError};
pub use prediction::Prediction;
