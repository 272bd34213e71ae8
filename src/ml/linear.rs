//! Linear classifier inference
//!
//! Evaluates the persisted logistic-regression decision boundary. Two
//! artifact shapes exist:
//!
//! - a single coefficient row: binary model; the decision score passes
//!   through a sigmoid and 0.5 is the class boundary
//! - one coefficient row per class: one-vs-rest model; the class with the
//!   highest decision score wins, probabilities via softmax
//!
//! Weights and intercepts are immutable after load; prediction is a pure
//! dot-product per class.

use crate::error::PredictError;

/// Persisted linear decision boundary (weights + intercepts)
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    /// One row for binary models, one row per class otherwise
    coefficients: Vec<Vec<f32>>,
    intercepts: Vec<f32>,
    classes: Vec<u32>,
    n_features: usize,
}

impl LinearClassifier {
    /// Build a classifier from persisted weights
    ///
    /// # Errors
    ///
    /// Returns `PredictError::SchemaMismatch` if the coefficient matrix is
    /// empty or ragged, the intercept count does not match the row count,
    /// or the class list does not fit the coefficient shape. Class ids must
    /// be contiguous from 0 so a total label map can be checked against them.
    pub fn new(
        coefficients: Vec<Vec<f32>>,
        intercepts: Vec<f32>,
        classes: Vec<u32>,
    ) -> Result<Self, PredictError> {
        if coefficients.is_empty() || coefficients[0].is_empty() {
            return Err(PredictError::SchemaMismatch(
                "Classifier has no coefficients".to_string(),
            ));
        }

        let n_features = coefficients[0].len();
        if let Some(i) = coefficients.iter().position(|row| row.len() != n_features) {
            return Err(PredictError::SchemaMismatch(format!(
                "Coefficient row {} has {} entries, expected {}",
                i,
                coefficients[i].len(),
                n_features
            )));
        }
        if intercepts.len() != coefficients.len() {
            return Err(PredictError::SchemaMismatch(format!(
                "{} intercepts for {} coefficient rows",
                intercepts.len(),
                coefficients.len()
            )));
        }

        let expected_classes = if coefficients.len() == 1 {
            2
        } else {
            coefficients.len()
        };
        if classes.len() != expected_classes {
            return Err(PredictError::SchemaMismatch(format!(
                "{} classes listed for a {}-row coefficient matrix",
                classes.len(),
                coefficients.len()
            )));
        }
        if let Some(i) = (0..classes.len()).position(|i| classes[i] != i as u32) {
            return Err(PredictError::SchemaMismatch(format!(
                "Class ids must be contiguous from 0, found {} at position {}",
                classes[i], i
            )));
        }

        Ok(Self {
            coefficients,
            intercepts,
            classes,
            n_features,
        })
    }

    /// Number of features each coefficient row spans
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of classes this model can emit
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Class ids, in score order
    pub fn classes(&self) -> &[u32] {
        &self.classes
    }

    /// True for single-row (sigmoid) models
    pub fn is_binary(&self) -> bool {
        self.coefficients.len() == 1
    }

    fn sigmoid(z: f32) -> f32 {
        1.0 / (1.0 + (-z).exp())
    }

    /// Raw decision scores `w . x + b`, one per coefficient row
    ///
    /// # Errors
    ///
    /// Returns `PredictError::InvalidInput` on a row-width mismatch.
    pub fn decision_scores(&self, row: &[f32]) -> Result<Vec<f32>, PredictError> {
        if row.len() != self.n_features {
            return Err(PredictError::InvalidInput(format!(
                "Row has {} features, classifier expects {}",
                row.len(),
                self.n_features
            )));
        }

        Ok(self
            .coefficients
            .iter()
            .zip(self.intercepts.iter())
            .map(|(weights, bias)| {
                weights
                    .iter()
                    .zip(row.iter())
                    .map(|(w, x)| w * x)
                    .sum::<f32>()
                    + bias
            })
            .collect())
    }

    /// Per-class probabilities for a scaled row
    ///
    /// Binary models return `[1 - p, p]` from the sigmoid; multiclass models
    /// return the softmax of the decision scores. Probabilities sum to 1.
    ///
    /// # Errors
    ///
    /// Returns `PredictError::InvalidInput` on a row-width mismatch.
    pub fn predict_proba(&self, row: &[f32]) -> Result<Vec<f32>, PredictError> {
        let scores = self.decision_scores(row)?;

        if self.is_binary() {
            let p = Self::sigmoid(scores[0]);
            return Ok(vec![1.0 - p, p]);
        }

        // Softmax with max subtraction for overflow safety
        let max = scores.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
        let sum: f32 = exps.iter().sum();
        Ok(exps.iter().map(|e| e / sum).collect())
    }

    /// Predicted class id for a scaled row
    ///
    /// Binary: class 1 when the sigmoid crosses 0.5 (decision score > 0).
    /// Multiclass: argmax of the decision scores; ties resolve to the lowest
    /// class id.
    ///
    /// # Errors
    ///
    /// Returns `PredictError::InvalidInput` on a row-width mismatch.
    pub fn predict(&self, row: &[f32]) -> Result<u32, PredictError> {
        let scores = self.decision_scores(row)?;

        if self.is_binary() {
            return Ok(if scores[0] > 0.0 {
                self.classes[1]
            } else {
                self.classes[0]
            });
        }

        let mut best = 0;
        for (i, score) in scores.iter().enumerate() {
            if *score > scores[best] {
                best = i;
            }
        }
        Ok(self.classes[best])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_model() -> LinearClassifier {
        LinearClassifier::new(vec![vec![1.0, -1.0]], vec![0.0], vec![0, 1]).unwrap()
    }

    fn four_class_model() -> LinearClassifier {
        // Class k scores feature k directly, so argmax is the largest input.
        LinearClassifier::new(
            vec![
                vec![1.0, 0.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0, 0.0],
                vec![0.0, 0.0, 1.0, 0.0],
                vec![0.0, 0.0, 0.0, 1.0],
            ],
            vec![0.0; 4],
            vec![0, 1, 2, 3],
        )
        .unwrap()
    }

    #[test]
    fn test_sigmoid_midpoint() {
        assert!((LinearClassifier::sigmoid(0.0) - 0.5).abs() < 1e-6);
        assert!(LinearClassifier::sigmoid(10.0) > 0.99);
        assert!(LinearClassifier::sigmoid(-10.0) < 0.01);
    }

    #[test]
    fn test_binary_threshold() {
        let model = binary_model();
        assert_eq!(model.predict(&[2.0, 1.0]).unwrap(), 1);
        assert_eq!(model.predict(&[1.0, 2.0]).unwrap(), 0);
    }

    #[test]
    fn test_binary_proba_sums_to_one() {
        let model = binary_model();
        let proba = model.predict_proba(&[0.3, -0.2]).unwrap();
        assert_eq!(proba.len(), 2);
        assert!((proba.iter().sum::<f32>() - 1.0).abs() < 1e-6);
        assert!(proba[1] > 0.5);
    }

    #[test]
    fn test_multiclass_argmax() {
        let model = four_class_model();
        assert_eq!(model.predict(&[0.1, 3.0, 0.2, 0.3]).unwrap(), 1);
        assert_eq!(model.predict(&[0.1, 0.2, 0.3, 5.0]).unwrap(), 3);
    }

    #[test]
    fn test_multiclass_tie_takes_lowest_class() {
        let model = four_class_model();
        assert_eq!(model.predict(&[1.0, 1.0, 1.0, 1.0]).unwrap(), 0);
    }

    #[test]
    fn test_softmax_proba_sums_to_one() {
        let model = four_class_model();
        let proba = model.predict_proba(&[0.5, 1.5, -0.5, 0.0]).unwrap();
        assert_eq!(proba.len(), 4);
        assert!((proba.iter().sum::<f32>() - 1.0).abs() < 1e-6);
        let argmax = proba
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap()
            .0;
        assert_eq!(argmax, 1);
    }

    #[test]
    fn test_rejects_ragged_coefficients() {
        let result = LinearClassifier::new(
            vec![vec![1.0, 2.0], vec![1.0]],
            vec![0.0, 0.0],
            vec![0, 1],
        );
        assert!(matches!(result, Err(PredictError::SchemaMismatch(_))));
    }

    #[test]
    fn test_rejects_noncontiguous_classes() {
        let result = LinearClassifier::new(vec![vec![1.0]], vec![0.0], vec![1, 2]);
        assert!(matches!(result, Err(PredictError::SchemaMismatch(_))));
    }

    #[test]
    fn test_rejects_intercept_count_mismatch() {
        let result = LinearClassifier::new(vec![vec![1.0]], vec![0.0, 1.0], vec![0, 1]);
        assert!(matches!(result, Err(PredictError::SchemaMismatch(_))));
    }

    #[test]
    fn test_rejects_wrong_row_width() {
        let model = binary_model();
        assert!(matches!(
            model.predict(&[1.0]),
            Err(PredictError::InvalidInput(_))
        ));
    }
}
