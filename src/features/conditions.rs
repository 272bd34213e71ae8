//! Typed weather/calendar condition inputs
//!
//! The persisted artifacts were trained against a fixed, ordered feature
//! list. `Conditions` declares that schema once: [`FEATURE_NAMES`] is the
//! canonical order and [`Conditions::to_row`] assembles the numeric row in
//! exactly that order. The trained feature list is checked against
//! [`FEATURE_NAMES`] at artifact load, so a reordering bug fails at startup
//! instead of silently corrupting predictions.

use serde::{Deserialize, Serialize};

/// Canonical feature order, as the artifacts were trained
///
/// Index in this array == column index in every persisted artifact
/// (scaler vectors, classifier coefficient rows, centroid coordinates).
pub const FEATURE_NAMES: [&str; 7] = [
    "season",
    "holiday",
    "weathersit",
    "temp",
    "atemp",
    "hum",
    "windspeed",
];

/// Season code (1-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Code 1
    Spring,
    /// Code 2
    Summer,
    /// Code 3
    Fall,
    /// Code 4
    Winter,
}

impl Season {
    /// Numeric code as used in the training data
    pub fn code(&self) -> u32 {
        match self {
            Season::Spring => 1,
            Season::Summer => 2,
            Season::Fall => 3,
            Season::Winter => 4,
        }
    }

    /// Season from its numeric code
    ///
    /// Returns `None` for codes outside 1-4.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

/// Weather situation code (1-4)
///
/// Some artifacts were trained on the 1-3 subset; code 4 inputs against such
/// an artifact are passed through like any other out-of-distribution value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    /// Code 1: clear or partly cloudy
    Clear,
    /// Code 2: mist or overcast
    Mist,
    /// Code 3: light rain or snow
    LightPrecipitation,
    /// Code 4: heavy rain, thunderstorm, or snow
    HeavyPrecipitation,
}

impl Weather {
    /// Numeric code as used in the training data
    pub fn code(&self) -> u32 {
        match self {
            Weather::Clear => 1,
            Weather::Mist => 2,
            Weather::LightPrecipitation => 3,
            Weather::HeavyPrecipitation => 4,
        }
    }

    /// Weather situation from its numeric code
    ///
    /// Returns `None` for codes outside 1-4.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Weather::Clear),
            2 => Some(Weather::Mist),
            3 => Some(Weather::LightPrecipitation),
            4 => Some(Weather::HeavyPrecipitation),
            _ => None,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Weather::Clear => "Clear / Partly cloudy",
            Weather::Mist => "Mist / Overcast",
            Weather::LightPrecipitation => "Light rain / Snow",
            Weather::HeavyPrecipitation => "Heavy rain / Storm",
        }
    }
}

/// One set of weather/calendar conditions to label
///
/// Normalized fields (`temp`, `atemp`, `hum`, `windspeed`) are conventionally
/// in [0, 1]. The range is not enforced: out-of-range values pass through the
/// scaler unchanged and produce an out-of-distribution but defined prediction.
///
/// # Example
///
/// ```
/// use pedalcast::features::conditions::{Conditions, Season, Weather};
///
/// let conditions = Conditions {
///     season: Season::Summer,
///     holiday: false,
///     weathersit: Weather::Clear,
///     temp: 0.7,
///     atemp: 0.68,
///     hum: 0.5,
///     windspeed: 0.15,
/// };
/// let row = conditions.to_row();
/// assert_eq!(row[0], 2.0); // season code comes first
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    /// Season code
    pub season: Season,
    /// Whether the day is a public holiday
    pub holiday: bool,
    /// Weather situation code
    pub weathersit: Weather,
    /// Normalized temperature
    pub temp: f32,
    /// Normalized "feels like" temperature
    pub atemp: f32,
    /// Normalized humidity
    pub hum: f32,
    /// Normalized wind speed
    pub windspeed: f32,
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            season: Season::Spring,
            holiday: false,
            weathersit: Weather::Clear,
            temp: 0.5,
            atemp: 0.5,
            hum: 0.6,
            windspeed: 0.3,
        }
    }
}

impl Conditions {
    /// Assemble the numeric feature row in the canonical [`FEATURE_NAMES`] order
    pub fn to_row(&self) -> [f32; 7] {
        [
            self.season.code() as f32,
            if self.holiday { 1.0 } else { 0.0 },
            self.weathersit.code() as f32,
            self.temp,
            self.atemp,
            self.hum,
            self.windspeed,
        ]
    }

    /// Display name for the holiday flag
    pub fn holiday_name(&self) -> &'static str {
        if self.holiday {
            "Holiday"
        } else {
            "Working day"
        }
    }

    /// Multi-line recap of the entered conditions, for display
    pub fn summary(&self) -> String {
        format!(
            "Season: {}\nDay: {}\nWeather: {}\nTemp: {:.2}\nFeels like: {:.2}\nHumidity: {:.2}\nWind speed: {:.2}",
            self.season.name(),
            self.holiday_name(),
            self.weathersit.name(),
            self.temp,
            self.atemp,
            self.hum,
            self.windspeed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_codes_roundtrip() {
        for code in 1..=4 {
            let season = Season::from_code(code).unwrap();
            assert_eq!(season.code(), code);
        }
        assert_eq!(Season::from_code(0), None);
        assert_eq!(Season::from_code(5), None);
    }

    #[test]
    fn test_weather_codes_roundtrip() {
        for code in 1..=4 {
            let weather = Weather::from_code(code).unwrap();
            assert_eq!(weather.code(), code);
        }
        assert_eq!(Weather::from_code(0), None);
        assert_eq!(Weather::from_code(9), None);
    }

    #[test]
    fn test_row_follows_canonical_order() {
        let conditions = Conditions {
            season: Season::Winter,
            holiday: true,
            weathersit: Weather::Mist,
            temp: 0.1,
            atemp: 0.2,
            hum: 0.3,
            windspeed: 0.4,
        };

        let row = conditions.to_row();
        assert_eq!(row.len(), FEATURE_NAMES.len());
        assert_eq!(row, [4.0, 1.0, 2.0, 0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_default_matches_form_defaults() {
        let row = Conditions::default().to_row();
        assert_eq!(row, [1.0, 0.0, 1.0, 0.5, 0.5, 0.6, 0.3]);
    }

    #[test]
    fn test_summary_names_conditions() {
        let conditions = Conditions {
            season: Season::Fall,
            holiday: true,
            ..Conditions::default()
        };
        let summary = conditions.summary();
        assert!(summary.contains("Fall"));
        assert!(summary.contains("Holiday"));
        assert!(summary.contains("Clear / Partly cloudy"));
    }
}
