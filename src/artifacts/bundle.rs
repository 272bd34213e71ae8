//! The immutable inference context
//!
//! [`ArtifactBundle::load`] deserializes every configured artifact file,
//! validates cross-artifact consistency, and caches the result for the
//! process lifetime. Nothing here is ever mutated or re-saved: the bundle is
//! read-only after load and safe to share across threads.
//!
//! Validation is deliberately front-loaded. The one real correctness hazard
//! in this pipeline is feature order (a scaler or classifier applied to a
//! reordered row produces silently wrong labels), so the persisted feature
//! list is checked against the canonical in-code order here, and every
//! artifact's dimensionality is checked against the feature count. A bundle
//! that loads is a bundle the pipeline can run without further checks.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::analysis::label::LabelMap;
use crate::config::PredictorConfig;
use crate::error::PredictError;
use crate::features::conditions::FEATURE_NAMES;
use crate::ml::centroids::CentroidSet;
use crate::ml::linear::LinearClassifier;
use crate::preprocessing::scaler::AffineScaler;

/// Raw scaler artifact: per-feature mean and scale
#[derive(Debug, Deserialize)]
struct ScalerFile {
    mean: Vec<f32>,
    scale: Vec<f32>,
}

/// Raw classifier artifact: coefficient matrix, intercepts, class list
#[derive(Debug, Deserialize)]
struct ModelFile {
    coefficients: Vec<Vec<f32>>,
    intercepts: Vec<f32>,
    classes: Vec<u32>,
}

/// Raw centroid artifact
#[derive(Debug, Deserialize)]
struct CentroidsFile {
    centroids: Vec<Vec<f32>>,
}

fn read_json<T>(path: &Path) -> Result<T, PredictError>
where
    T: for<'de> Deserialize<'de>,
{
    log::debug!("Loading artifact: {}", path.display());
    let file = File::open(path).map_err(|e| {
        PredictError::ArtifactError(format!("{}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        PredictError::ArtifactError(format!("{}: {}", path.display(), e))
    })
}

/// Immutable bundle of the persisted training artifacts
///
/// # Example
///
/// ```no_run
/// use pedalcast::{ArtifactBundle, PredictorConfig};
///
/// let bundle = ArtifactBundle::load(&PredictorConfig::default())?;
/// println!(
///     "{} features, {} classes",
///     bundle.n_features(),
///     bundle.n_classes()
/// );
/// # Ok::<(), pedalcast::PredictError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    scaler: AffineScaler,
    classifier: LinearClassifier,
    label_map: LabelMap,
    centroids: Option<CentroidSet>,
    feature_names: Vec<String>,
}

impl ArtifactBundle {
    /// Load and validate every configured artifact
    ///
    /// # Errors
    ///
    /// Any missing, unreadable, or mutually inconsistent artifact is fatal:
    /// there is no fallback. Returns `ArtifactError` for I/O and
    /// deserialization failures, `SchemaMismatch` when artifacts disagree
    /// with the canonical feature schema or with each other.
    pub fn load(config: &PredictorConfig) -> Result<Self, PredictError> {
        log::info!(
            "Loading artifacts from {}",
            config.artifact_dir.display()
        );

        let feature_names: Vec<String> = read_json(&config.features_path())?;
        if feature_names.len() != FEATURE_NAMES.len() {
            return Err(PredictError::SchemaMismatch(format!(
                "Artifact lists {} features, engine schema has {}",
                feature_names.len(),
                FEATURE_NAMES.len()
            )));
        }
        for (i, (got, want)) in feature_names.iter().zip(FEATURE_NAMES.iter()).enumerate() {
            if got != want {
                return Err(PredictError::SchemaMismatch(format!(
                    "Feature {}: artifact lists '{}', engine schema expects '{}'",
                    i, got, want
                )));
            }
        }

        let raw_scaler: ScalerFile = read_json(&config.scaler_path())?;
        let scaler = AffineScaler::new(raw_scaler.mean, raw_scaler.scale)?;
        if scaler.n_features() != feature_names.len() {
            return Err(PredictError::SchemaMismatch(format!(
                "Scaler covers {} features, feature list has {}",
                scaler.n_features(),
                feature_names.len()
            )));
        }

        let raw_model: ModelFile = read_json(&config.model_path())?;
        let classifier =
            LinearClassifier::new(raw_model.coefficients, raw_model.intercepts, raw_model.classes)?;
        if classifier.n_features() != feature_names.len() {
            return Err(PredictError::SchemaMismatch(format!(
                "Classifier covers {} features, feature list has {}",
                classifier.n_features(),
                feature_names.len()
            )));
        }

        let label_map = LabelMap::for_class_count(classifier.n_classes())?;

        let centroids = match config.centroids_path() {
            Some(path) => {
                let raw: CentroidsFile = read_json(&path)?;
                let set = CentroidSet::new(raw.centroids)?;
                if set.n_features() != feature_names.len() {
                    return Err(PredictError::SchemaMismatch(format!(
                        "Centroids have {} coordinates, feature list has {}",
                        set.n_features(),
                        feature_names.len()
                    )));
                }
                Some(set)
            }
            None => None,
        };

        log::debug!(
            "Artifacts loaded: {} features, {} classes, centroid diagnostic: {}",
            feature_names.len(),
            classifier.n_classes(),
            centroids.is_some()
        );

        Ok(Self {
            scaler,
            classifier,
            label_map,
            centroids,
            feature_names,
        })
    }

    /// The loaded scaler
    pub fn scaler(&self) -> &AffineScaler {
        &self.scaler
    }

    /// The loaded classifier
    pub fn classifier(&self) -> &LinearClassifier {
        &self.classifier
    }

    /// The label map matching the loaded classifier
    pub fn label_map(&self) -> &LabelMap {
        &self.label_map
    }

    /// The loaded centroids, when configured
    pub fn centroids(&self) -> Option<&CentroidSet> {
        self.centroids.as_ref()
    }

    /// Trained feature names, in artifact order
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Feature count shared by every artifact in the bundle
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Class count of the loaded classifier
    pub fn n_classes(&self) -> usize {
        self.classifier.n_classes()
    }

    /// True when the nearest-centroid diagnostic is available
    pub fn has_centroid_diagnostic(&self) -> bool {
        self.centroids.is_some()
    }
}
