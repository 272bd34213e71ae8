//! Affine feature scaling
//!
//! Applies the standardization transform learned at training time:
//! `z[i] = (x[i] - mean[i]) / scale[i]` per feature. The transform is
//! immutable at inference time and applied identically to every row.
//!
//! There is deliberately no bounds check on the incoming values: raw
//! features outside the conventional [0, 1] range scale to
//! out-of-distribution z-scores and flow on to the classifier unchanged.
//!
//! # Example
//!
//! ```
//! use pedalcast::preprocessing::scaler::AffineScaler;
//!
//! let scaler = AffineScaler::new(vec![0.5, 0.5], vec![0.25, 0.5])?;
//! let scaled = scaler.transform_row(&[1.0, 0.0])?;
//! assert_eq!(scaled, vec![2.0, -1.0]);
//! # Ok::<(), pedalcast::PredictError>(())
//! ```

use crate::error::PredictError;

/// Numerical stability floor for scale factors
const EPSILON: f32 = 1e-10;

/// Persisted per-feature affine transform (mean/scale)
#[derive(Debug, Clone)]
pub struct AffineScaler {
    mean: Vec<f32>,
    scale: Vec<f32>,
}

impl AffineScaler {
    /// Build a scaler from persisted mean/scale vectors
    ///
    /// # Errors
    ///
    /// Returns `PredictError` if the vectors are empty, differ in length,
    /// or any scale factor is too close to zero to divide by.
    pub fn new(mean: Vec<f32>, scale: Vec<f32>) -> Result<Self, PredictError> {
        if mean.is_empty() {
            return Err(PredictError::InvalidInput(
                "Scaler has no features".to_string(),
            ));
        }
        if mean.len() != scale.len() {
            return Err(PredictError::SchemaMismatch(format!(
                "Scaler mean has {} entries but scale has {}",
                mean.len(),
                scale.len()
            )));
        }
        if let Some(i) = scale.iter().position(|s| s.abs() <= EPSILON) {
            return Err(PredictError::NumericalError(format!(
                "Scale factor for feature {} is degenerate ({})",
                i, scale[i]
            )));
        }

        Ok(Self { mean, scale })
    }

    /// Number of features this scaler was fitted on
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Fitted per-feature means
    pub fn mean(&self) -> &[f32] {
        &self.mean
    }

    /// Fitted per-feature scale factors
    pub fn scale(&self) -> &[f32] {
        &self.scale
    }

    /// Apply the affine transform to one raw feature row
    ///
    /// # Errors
    ///
    /// Returns `PredictError::InvalidInput` if the row length does not match
    /// the fitted feature count.
    pub fn transform_row(&self, row: &[f32]) -> Result<Vec<f32>, PredictError> {
        if row.len() != self.mean.len() {
            return Err(PredictError::InvalidInput(format!(
                "Row has {} features, scaler was fitted on {}",
                row.len(),
                self.mean.len()
            )));
        }

        Ok(row
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }
}
