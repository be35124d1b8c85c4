//! Per-day statistics derived from hourly observations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Humidity level counted by `hours_rh_ge_90`.
pub const RH_SATURATED: f64 = 90.0;

/// Humidity level counted by `hours_rh_ge_80` and used for the conditional mean.
pub const RH_HUMID: f64 = 80.0;

/// One calendar day's statistics.
///
/// `mean_temp_when_rh_ge_80` is `None` when the day had no reading at or above
/// [`RH_HUMID`]. It is never zero-filled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub day: NaiveDate,
    pub min_temperature_c: f64,
    pub hours_rh_ge_90: u32,
    pub hours_rh_ge_80: u32,
    pub mean_temp_when_rh_ge_80: Option<f64>,
    pub observation_count: u32,
}

impl DailyAggregate {
    /// Whether the humid-hours mean temperature reaches `threshold`.
    ///
    /// A day without humid hours has no mean and never passes.
    pub fn mean_temp_when_humid_at_least(&self, threshold: f64) -> bool {
        self.mean_temp_when_rh_ge_80
            .is_some_and(|mean| mean >= threshold)
    }

    /// ISO `YYYY-MM-DD` label for the day.
    pub fn day_label(&self) -> String {
        self.day.format("%Y-%m-%d").to_string()
    }
}
