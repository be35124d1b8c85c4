//! Hourly weather observations, raw and normalized.
//!
//! A weather source hands over [`RawObservation`]s with the timestamp still in
//! text form. Normalization parses the timestamp and clamps the humidity,
//! producing an [`Observation`] that is never mutated afterwards.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Lowest legal relative humidity, in percent.
pub const RH_MIN: f64 = 0.0;

/// Highest legal relative humidity, in percent.
pub const RH_MAX: f64 = 100.0;

/// One weather sample as delivered by a weather source.
///
/// Tabular weather exports name the columns `temp_c` and `rh`; both are
/// accepted as aliases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    pub timestamp: String,
    #[serde(alias = "temp_c")]
    pub temperature_c: f64,
    #[serde(alias = "rh")]
    pub relative_humidity: f64,
}

impl RawObservation {
    pub fn new(timestamp: impl Into<String>, temperature_c: f64, relative_humidity: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            temperature_c,
            relative_humidity,
        }
    }
}

/// A validated sample with a timezone-aware timestamp.
///
/// `relative_humidity` always lies in `[RH_MIN, RH_MAX]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: DateTime<FixedOffset>,
    pub temperature_c: f64,
    pub relative_humidity: f64,
}

impl Observation {
    /// Calendar date of the sample in its own offset.
    ///
    /// The offset is dropped rather than converted, so the same instant
    /// reported in two offsets can land on different days.
    pub fn local_day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn is_humid_at_least(&self, threshold: f64) -> bool {
        self.relative_humidity >= threshold
    }
}

/// Clamp a humidity reading into the legal percentage range.
pub fn clamp_humidity(value: f64) -> f64 {
    value.clamp(RH_MIN, RH_MAX)
}
