//! Demand levels and the class-id label map
//!
//! The classifier emits an integer class id; [`LabelMap`] turns it into a
//! [`DemandLevel`] for display. The map is built once at artifact load from
//! the persisted class count and is total over the classifier's output
//! range: every id the model can emit has exactly one level.

use serde::{Deserialize, Serialize};

use crate::error::PredictError;

/// Demand category for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemandLevel {
    /// Lowest demand tier (four-level artifacts only)
    VeryLow,
    /// Low demand
    Low,
    /// Typical demand (four-level artifacts only)
    Medium,
    /// Peak demand
    High,
}

impl DemandLevel {
    /// Display name
    ///
    /// # Example
    ///
    /// ```
    /// use pedalcast::analysis::label::DemandLevel;
    ///
    /// assert_eq!(DemandLevel::VeryLow.name(), "Very Low Demand");
    /// assert_eq!(DemandLevel::High.name(), "High Demand");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DemandLevel::VeryLow => "Very Low Demand",
            DemandLevel::Low => "Low Demand",
            DemandLevel::Medium => "Medium Demand",
            DemandLevel::High => "High Demand",
        }
    }

    /// Colored badge marker for terminal/report output
    pub fn badge(&self) -> &'static str {
        match self {
            DemandLevel::VeryLow => "🔵",
            DemandLevel::Low => "🟢",
            DemandLevel::Medium => "🟠",
            DemandLevel::High => "🔴",
        }
    }

    /// One-line description of the tier
    pub fn description(&self) -> &'static str {
        match self {
            DemandLevel::VeryLow => "Bike demand is very low.",
            DemandLevel::Low => "Bike demand is low to moderate.",
            DemandLevel::Medium => "Bike demand is at a typical level.",
            DemandLevel::High => "Bike demand is very high.",
        }
    }

    /// Operational insight line for the tier
    pub fn insight(&self) -> &'static str {
        match self {
            DemandLevel::VeryLow => "Usually occurs in cold or uncomfortable weather.",
            DemandLevel::Low => "Demand is starting to appear but is not yet at its peak.",
            DemandLevel::Medium => "This is the most common condition in the dataset.",
            DemandLevel::High => "The most favorable conditions for riding.",
        }
    }
}

/// Total mapping from classifier class id to demand level
///
/// Defined once at load, immutable afterwards.
#[derive(Debug, Clone)]
pub struct LabelMap {
    levels: Vec<DemandLevel>,
}

impl LabelMap {
    /// Map for binary artifacts: 0 → Low, 1 → High
    pub fn binary() -> Self {
        Self {
            levels: vec![DemandLevel::Low, DemandLevel::High],
        }
    }

    /// Map for four-class artifacts: 0 → Very Low … 3 → High
    pub fn four_level() -> Self {
        Self {
            levels: vec![
                DemandLevel::VeryLow,
                DemandLevel::Low,
                DemandLevel::Medium,
                DemandLevel::High,
            ],
        }
    }

    /// Pick the map matching a persisted classifier's class count
    ///
    /// # Errors
    ///
    /// Returns `PredictError::SchemaMismatch` for class counts no label set
    /// is defined for. This is the totality check of the load-time validation.
    pub fn for_class_count(n_classes: usize) -> Result<Self, PredictError> {
        match n_classes {
            2 => Ok(Self::binary()),
            4 => Ok(Self::four_level()),
            n => Err(PredictError::SchemaMismatch(format!(
                "No label set defined for a {}-class model",
                n
            ))),
        }
    }

    /// Number of class ids this map covers
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True if the map covers no classes (never the case for built maps)
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Demand level for a class id
    ///
    /// # Errors
    ///
    /// Returns `PredictError::InvalidInput` for ids outside the map. With a
    /// validated bundle this cannot happen: the map is checked against the
    /// classifier's class range at load.
    pub fn level(&self, class_id: u32) -> Result<DemandLevel, PredictError> {
        self.levels
            .get(class_id as usize)
            .copied()
            .ok_or_else(|| {
                PredictError::InvalidInput(format!(
                    "Class id {} outside the {}-entry label map",
                    class_id,
                    self.levels.len()
                ))
            })
    }

    /// All levels, in class-id order
    pub fn levels(&self) -> &[DemandLevel] {
        &self.levels
    }
}
