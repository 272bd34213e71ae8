//! Condition inputs and feature-row assembly
//!
//! Declares the fixed feature schema the artifacts were trained against and
//! assembles typed inputs into rows in that order.

pub mod conditions;

pub use conditions::{Conditions, Season, Weather, FEATURE_NAMES};
