//! # Pedalcast
//!
//! A bike-share demand inference engine: labels weather/calendar conditions
//! with a demand category using persisted, externally trained model
//! artifacts.
//!
//! ## Features
//!
//! - **Typed condition inputs**: the feature schema is declared once in code
//!   and validated against the trained artifact at load, so feature-order
//!   bugs fail at startup instead of corrupting predictions
//! - **Linear inference pipeline**: affine scaling followed by a
//!   logistic-regression decision boundary (binary or four-class artifacts)
//! - **Nearest-centroid diagnostic**: optional secondary readout from the
//!   clustering stage of training, independent of the primary label
//! - **Batch labelling**: CSV tables gain an appended demand column, with
//!   column selection by name
//!
//! ## Quick Start
//!
//! ```no_run
//! use pedalcast::{predict_demand, ArtifactBundle, Conditions, PredictorConfig};
//!
//! // Load the persisted artifacts once at startup
//! let bundle = ArtifactBundle::load(&PredictorConfig::default())?;
//!
//! // Label one set of conditions
//! let prediction = predict_demand(&bundle, &Conditions::default())?;
//!
//! println!("{} {}", prediction.level.badge(), prediction.level.name());
//! # Ok::<(), pedalcast::PredictError>(())
//! ```
//!
//! ## Architecture
//!
//! The inference pipeline is a fixed linear chain:
//!
//! ```text
//! Conditions → Feature Row → Affine Scaling → Linear Classifier → Label Map → Prediction
//! ```
//!
//! All model state is produced by an offline training process and loaded
//! read-only; a prediction is a pure function of its input and the bundle.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod artifacts;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod ml;
pub mod preprocessing;

// Re-export main types
pub use analysis::confidence::{compute_confidence, PredictionConfidence};
pub use analysis::label::DemandLevel;
pub use analysis::result::{Prediction, PredictionMetadata};
pub use artifacts::bundle::ArtifactBundle;
pub use config::PredictorConfig;
pub use error::PredictError;
pub use features::conditions::{Conditions, Season, Weather};
pub use io::csv::CsvTable;

use std::time::Instant;

/// Label one set of conditions
///
/// Runs the full pipeline: canonical feature-order assembly, affine
/// scaling, linear classification, label mapping, and (when centroids are
/// loaded) the nearest-centroid diagnostic.
///
/// Deterministic: identical conditions against the same bundle always yield
/// the identical prediction. Out-of-range normalized values are passed
/// through and produce a defined (if out-of-distribution) label.
///
/// # Arguments
///
/// * `bundle` - Artifacts loaded via [`ArtifactBundle::load`]
/// * `conditions` - The weather/calendar conditions to label
///
/// # Errors
///
/// Cannot fail against a loaded bundle: every contract a prediction relies
/// on is validated at load. The `Result` carries the pipeline's error type
/// for uniformity with the batch entry points.
///
/// # Example
///
/// ```no_run
/// use pedalcast::{predict_demand, ArtifactBundle, Conditions, PredictorConfig};
///
/// let bundle = ArtifactBundle::load(&PredictorConfig::default())?;
/// let prediction = predict_demand(&bundle, &Conditions::default())?;
/// assert_eq!(prediction.probabilities.len(), bundle.n_classes());
/// # Ok::<(), pedalcast::PredictError>(())
/// ```
pub fn predict_demand(
    bundle: &ArtifactBundle,
    conditions: &Conditions,
) -> Result<Prediction, PredictError> {
    let start = Instant::now();
    log::debug!("Labelling conditions: {:?}", conditions);

    let row = conditions.to_row();
    predict_row(bundle, &row, start)
}

/// Label one pre-assembled feature row
///
/// The row must follow the canonical
/// [`FEATURE_NAMES`](features::conditions::FEATURE_NAMES) order. This is
/// the caller's contract, and the reason [`predict_demand`] with its typed
/// input is the preferred entry point.
fn predict_row(
    bundle: &ArtifactBundle,
    row: &[f32],
    start: Instant,
) -> Result<Prediction, PredictError> {
    // Step 1-2: scale the assembled row
    let scaled = bundle.scaler().transform_row(row)?;

    // Step 3: classify
    let probabilities = bundle.classifier().predict_proba(&scaled)?;
    let class_id = bundle.classifier().predict(&scaled)?;

    // Step 4: map to a display label
    let level = bundle.label_map().level(class_id)?;

    // Step 5: optional diagnostic, independent of the primary label
    let nearest_centroid = match bundle.centroids() {
        Some(set) => Some(set.nearest(&scaled)?),
        None => None,
    };

    let processing_time_us = start.elapsed().as_secs_f32() * 1_000_000.0;
    log::debug!(
        "Predicted class {} ({}) in {:.1} us",
        class_id,
        level.name(),
        processing_time_us
    );

    Ok(Prediction {
        level,
        class_id,
        probabilities,
        nearest_centroid,
        metadata: PredictionMetadata {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            n_classes: bundle.n_classes(),
            processing_time_us,
            scaled_features: scaled,
        },
    })
}

/// Label every row of a parsed table
///
/// The trained feature columns are selected **by name**; a missing column
/// fails here, before any scaling is attempted. Extra columns are ignored
/// for inference.
///
/// # Errors
///
/// Returns `PredictError::MissingColumn` if the table lacks a trained
/// feature column and `PredictError::ParseError` for non-numeric feature
/// cells.
pub fn label_table(
    bundle: &ArtifactBundle,
    table: &CsvTable,
) -> Result<Vec<Prediction>, PredictError> {
    let names: Vec<&str> = bundle.feature_names().iter().map(String::as_str).collect();
    let rows = table.select_numeric(&names)?;

    log::debug!("Labelling {} rows", rows.len());
    rows.iter()
        .map(|row| predict_row(bundle, row, Instant::now()))
        .collect()
}

/// Label a CSV document, appending the demand column
///
/// Parses `text`, labels every row via [`label_table`], and renders the
/// input back out with `output_column` appended (the predicted level name
/// per row). All input columns, including ones the model does not use, are
/// preserved.
///
/// # Errors
///
/// Propagates parse, column-selection, and labelling failures unchanged.
///
/// # Example
///
/// ```no_run
/// use pedalcast::{label_csv, ArtifactBundle, PredictorConfig};
///
/// let config = PredictorConfig::default();
/// let bundle = ArtifactBundle::load(&config)?;
/// let input = std::fs::read_to_string("conditions.csv").unwrap();
/// let labelled = label_csv(&bundle, &input, &config.output_column)?;
/// print!("{}", labelled);
/// # Ok::<(), pedalcast::PredictError>(())
/// ```
pub fn label_csv(
    bundle: &ArtifactBundle,
    text: &str,
    output_column: &str,
) -> Result<String, PredictError> {
    let table = CsvTable::parse(text)?;
    let predictions = label_table(bundle, &table)?;

    let labels = predictions
        .iter()
        .map(|p| p.level.name().to_string())
        .collect();
    let labelled = table.with_column(output_column, labels)?;
    Ok(labelled.to_csv())
}
