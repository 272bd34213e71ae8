//! Confidence scoring for predictions
//!
//! Generates a trustworthiness score for a prediction from the classifier's
//! probability output. Two signals are combined:
//!
//! 1. **Top probability**: how much mass the winning class received
//! 2. **Margin**: the gap between the winning class and the runner-up
//!
//! A prediction that barely edges out the runner-up is treated as less
//! trustworthy than one with the same top probability and a wide margin.

use serde::{Deserialize, Serialize};

use crate::analysis::result::Prediction;

/// Prediction confidence scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionConfidence {
    /// Probability of the predicted class (0.0-1.0)
    pub top_probability: f32,

    /// Probability gap between the predicted class and the runner-up (0.0-1.0)
    pub margin: f32,

    /// Overall confidence (weighted blend of top probability and margin)
    pub overall_confidence: f32,
}

/// Compute confidence scores for a prediction
///
/// # Arguments
///
/// * `prediction` - Result from [`predict_demand`](crate::predict_demand)
///
/// # Returns
///
/// `PredictionConfidence` with the individual signals and the blended score.
/// An empty probability vector yields zero confidence across the board.
///
/// # Example
///
/// ```no_run
/// use pedalcast::{predict_demand, ArtifactBundle, Conditions, PredictorConfig};
/// use pedalcast::analysis::confidence::compute_confidence;
///
/// let bundle = ArtifactBundle::load(&PredictorConfig::default())?;
/// let prediction = predict_demand(&bundle, &Conditions::default())?;
/// let confidence = compute_confidence(&prediction);
///
/// if confidence.is_low_confidence() {
///     println!("Warning: low-confidence prediction");
/// }
/// # Ok::<(), pedalcast::PredictError>(())
/// ```
pub fn compute_confidence(prediction: &Prediction) -> PredictionConfidence {
    log::debug!("Computing confidence for class {}", prediction.class_id);

    if prediction.probabilities.is_empty() {
        return PredictionConfidence {
            top_probability: 0.0,
            margin: 0.0,
            overall_confidence: 0.0,
        };
    }

    let top = prediction
        .probabilities
        .get(prediction.class_id as usize)
        .copied()
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);

    let runner_up = prediction
        .probabilities
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != prediction.class_id as usize)
        .map(|(_, p)| *p)
        .fold(0.0f32, f32::max);

    let margin = (top - runner_up).clamp(0.0, 1.0);

    // Weights: top probability 60%, margin 40%
    let overall_confidence = (top * 0.6 + margin * 0.4).clamp(0.0, 1.0);

    log::debug!(
        "Confidence: top={:.3}, margin={:.3}, overall={:.3}",
        top,
        margin,
        overall_confidence
    );

    PredictionConfidence {
        top_probability: top,
        margin,
        overall_confidence,
    }
}

impl PredictionConfidence {
    /// Check if overall confidence is high (>= 0.7)
    pub fn is_high_confidence(&self) -> bool {
        self.overall_confidence >= 0.7
    }

    /// Check if overall confidence is low (< 0.5)
    pub fn is_low_confidence(&self) -> bool {
        self.overall_confidence < 0.5
    }

    /// Human-readable confidence level: "High", "Medium", or "Low"
    pub fn confidence_level(&self) -> &'static str {
        if self.is_high_confidence() {
            "High"
        } else if self.is_low_confidence() {
            "Low"
        } else {
            "Medium"
        }
    }
}
