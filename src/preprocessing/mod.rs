//! Feature preprocessing
//!
//! Applies the persisted affine scaling transform to raw feature rows before
//! classification.

pub mod scaler;

pub use scaler::AffineScaler;
