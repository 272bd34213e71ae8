//! Error types for the demand inference engine

use std::fmt;

/// Errors that can occur while loading artifacts or labelling inputs
#[derive(Debug, Clone)]
pub enum PredictError {
    /// Artifact file missing, unreadable, or not deserializable
    ArtifactError(String),

    /// Persisted artifacts disagree with the canonical feature schema
    SchemaMismatch(String),

    /// Batch table lacks a required feature column
    MissingColumn(String),

    /// Malformed tabular input
    ParseError(String),

    /// Invalid input parameters
    InvalidInput(String),

    /// Numerical error (degenerate scale factors, etc.)
    NumericalError(String),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::ArtifactError(msg) => write!(f, "Artifact error: {}", msg),
            PredictError::SchemaMismatch(msg) => write!(f, "Schema mismatch: {}", msg),
            PredictError::MissingColumn(msg) => write!(f, "Missing column: {}", msg),
            PredictError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            PredictError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PredictError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for PredictError {}
