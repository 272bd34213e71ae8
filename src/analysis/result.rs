//! Prediction result types

use serde::{Deserialize, Serialize};

use crate::analysis::label::DemandLevel;
use crate::ml::centroids::CentroidMatch;

/// Complete prediction result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Demand level for display
    pub level: DemandLevel,

    /// Raw classifier class id behind the level
    pub class_id: u32,

    /// Per-class probabilities, indexed by class id
    pub probabilities: Vec<f32>,

    /// Nearest-centroid diagnostic, when centroids are loaded
    ///
    /// Informational only: computed independently of the classifier and may
    /// name a different cluster than `class_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_centroid: Option<CentroidMatch>,

    /// Prediction metadata
    pub metadata: PredictionMetadata,
}

/// Prediction metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionMetadata {
    /// Engine version
    pub engine_version: String,

    /// Class count of the loaded model
    pub n_classes: usize,

    /// Processing time in microseconds
    pub processing_time_us: f32,

    /// The scaled feature row the classifier saw, in canonical order
    pub scaled_features: Vec<f32>,
}
