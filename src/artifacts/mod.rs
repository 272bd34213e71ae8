//! Artifact loading
//!
//! Deserializes the persisted training artifacts (scaler, classifier,
//! feature list, optional centroids) once per process into an immutable
//! [`bundle::ArtifactBundle`].

pub mod bundle;

pub use bundle::ArtifactBundle;
