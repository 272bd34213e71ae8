//! Configuration parameters for demand prediction

use std::path::{Path, PathBuf};

/// Predictor configuration parameters
///
/// Names the persisted artifact files and the directory they live in.
/// Artifacts are loaded once per process via
/// [`ArtifactBundle::load`](crate::artifacts::bundle::ArtifactBundle::load)
/// and cached for the process lifetime.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// Directory containing the persisted artifacts (default: "artifacts")
    pub artifact_dir: PathBuf,

    /// Scaler artifact filename (default: "logreg_scaler.json")
    pub scaler_file: String,

    /// Classifier artifact filename (default: "logreg_demand_model.json")
    pub model_file: String,

    /// Trained feature-name list filename (default: "logreg_features.json")
    pub features_file: String,

    /// Centroid artifact filename (default: None)
    ///
    /// When set, the nearest-centroid diagnostic is loaded at startup and
    /// reported alongside every prediction. A configured-but-missing file is
    /// fatal at load, like every other artifact.
    pub centroids_file: Option<String>,

    /// Name of the label column appended by the batch variant (default: "demand")
    pub output_column: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from("artifacts"),
            scaler_file: "logreg_scaler.json".to_string(),
            model_file: "logreg_demand_model.json".to_string(),
            features_file: "logreg_features.json".to_string(),
            centroids_file: None,
            output_column: "demand".to_string(),
        }
    }
}

impl PredictorConfig {
    /// Config rooted at the given artifact directory, default filenames
    pub fn with_artifact_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            artifact_dir: dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Full path of the scaler artifact
    pub fn scaler_path(&self) -> PathBuf {
        self.artifact_dir.join(&self.scaler_file)
    }

    /// Full path of the classifier artifact
    pub fn model_path(&self) -> PathBuf {
        self.artifact_dir.join(&self.model_file)
    }

    /// Full path of the trained feature-name list
    pub fn features_path(&self) -> PathBuf {
        self.artifact_dir.join(&self.features_file)
    }

    /// Full path of the centroid artifact, if one is configured
    pub fn centroids_path(&self) -> Option<PathBuf> {
        self.centroids_file
            .as_ref()
            .map(|name| self.artifact_dir.join(name))
    }
}
