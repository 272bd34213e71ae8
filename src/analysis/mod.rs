//! Result aggregation and presentation
//!
//! Maps classifier output to demand labels and packages the final result:
//! - Demand levels and their presentation strings
//! - Prediction result and metadata types
//! - Confidence scoring

pub mod confidence;
pub mod label;
pub mod result;

pub use confidence::{compute_confidence, PredictionConfidence};
pub use label::{DemandLevel, LabelMap};
pub use result::{Prediction, PredictionMetadata};
