//! Nearest-centroid diagnostic
//!
//! Some deployments persist the k-means centroids from the clustering stage
//! of training. When loaded, the pipeline reports which centroid (in scaled
//! feature space) is nearest to the input row. The readout is informational:
//! it never feeds the primary classification, and the two may disagree for a
//! given input; no reconciliation is attempted.

use serde::{Deserialize, Serialize};

use crate::error::PredictError;

/// Result of a nearest-centroid lookup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CentroidMatch {
    /// Index of the nearest centroid
    pub index: usize,
    /// Euclidean distance to it, in scaled feature space
    pub distance: f32,
}

/// Persisted cluster centroids in scaled feature space
#[derive(Debug, Clone)]
pub struct CentroidSet {
    centroids: Vec<Vec<f32>>,
    n_features: usize,
}

impl CentroidSet {
    /// Build a centroid set from the persisted matrix
    ///
    /// # Errors
    ///
    /// Returns `PredictError::SchemaMismatch` if the matrix is empty or
    /// ragged.
    pub fn new(centroids: Vec<Vec<f32>>) -> Result<Self, PredictError> {
        if centroids.is_empty() || centroids[0].is_empty() {
            return Err(PredictError::SchemaMismatch(
                "Centroid artifact has no centroids".to_string(),
            ));
        }

        let n_features = centroids[0].len();
        if let Some(i) = centroids.iter().position(|c| c.len() != n_features) {
            return Err(PredictError::SchemaMismatch(format!(
                "Centroid {} has {} coordinates, expected {}",
                i,
                centroids[i].len(),
                n_features
            )));
        }

        Ok(Self {
            centroids,
            n_features,
        })
    }

    /// Number of centroids
    pub fn n_centroids(&self) -> usize {
        self.centroids.len()
    }

    /// Dimensionality of the centroid space
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Nearest centroid to a scaled row
    ///
    /// Ties resolve to the lowest centroid index.
    ///
    /// # Errors
    ///
    /// Returns `PredictError::InvalidInput` on a row-width mismatch.
    pub fn nearest(&self, row: &[f32]) -> Result<CentroidMatch, PredictError> {
        if row.len() != self.n_features {
            return Err(PredictError::InvalidInput(format!(
                "Row has {} features, centroids have {}",
                row.len(),
                self.n_features
            )));
        }

        let mut best = 0;
        let mut best_sq = f32::INFINITY;
        for (i, centroid) in self.centroids.iter().enumerate() {
            let sq: f32 = centroid
                .iter()
                .zip(row.iter())
                .map(|(c, x)| (c - x) * (c - x))
                .sum();
            if sq < best_sq {
                best = i;
                best_sq = sq;
            }
        }

        Ok(CentroidMatch {
            index: best,
            distance: best_sq.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square_corners() -> CentroidSet {
        CentroidSet::new(vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_nearest_picks_closest() {
        let set = unit_square_corners();
        let m = set.nearest(&[0.9, 0.8]).unwrap();
        assert_eq!(m.index, 3);
        assert!((m.distance - (0.01f32 + 0.04).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_tie_takes_lowest_index() {
        let set = unit_square_corners();
        // Equidistant from all four corners.
        let m = set.nearest(&[0.5, 0.5]).unwrap();
        assert_eq!(m.index, 0);
    }

    #[test]
    fn test_rejects_ragged_matrix() {
        let result = CentroidSet::new(vec![vec![0.0, 0.0], vec![0.0]]);
        assert!(matches!(result, Err(PredictError::SchemaMismatch(_))));
    }

    #[test]
    fn test_rejects_wrong_row_width() {
        let set = unit_square_corners();
        assert!(matches!(
            set.nearest(&[0.5]),
            Err(PredictError::InvalidInput(_))
        ));
    }
}
