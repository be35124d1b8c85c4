//! Daily aggregator: bucket normalized observations by local calendar day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use blight_types::{DailyAggregate, Observation, RH_HUMID, RH_SATURATED};

/// Running totals for one day bucket.
struct DayAccumulator {
    min_temperature_c: f64,
    hours_rh_ge_90: u32,
    hours_rh_ge_80: u32,
    humid_temperature_sum: f64,
    observation_count: u32,
}

impl DayAccumulator {
    fn new() -> Self {
        Self {
            min_temperature_c: f64::INFINITY,
            hours_rh_ge_90: 0,
            hours_rh_ge_80: 0,
            humid_temperature_sum: 0.0,
            observation_count: 0,
        }
    }

    fn push(&mut self, obs: &Observation) {
        self.min_temperature_c = self.min_temperature_c.min(obs.temperature_c);
        if obs.is_humid_at_least(RH_SATURATED) {
            self.hours_rh_ge_90 += 1;
        }
        if obs.is_humid_at_least(RH_HUMID) {
            self.hours_rh_ge_80 += 1;
            self.humid_temperature_sum += obs.temperature_c;
        }
        self.observation_count += 1;
    }

    fn finish(self, day: NaiveDate) -> DailyAggregate {
        let mean_temp_when_rh_ge_80 = (self.hours_rh_ge_80 > 0)
            .then(|| self.humid_temperature_sum / f64::from(self.hours_rh_ge_80));
        DailyAggregate {
            day,
            min_temperature_c: self.min_temperature_c,
            hours_rh_ge_90: self.hours_rh_ge_90,
            hours_rh_ge_80: self.hours_rh_ge_80,
            mean_temp_when_rh_ge_80,
            observation_count: self.observation_count,
        }
    }
}

/// Group observations into one aggregate per calendar day present.
///
/// Days are keyed on each timestamp's own local date with the offset
/// discarded, and returned in chronological order. Days without observations
/// are not synthesized. Each observation counts once, including duplicates.
pub fn aggregate(observations: &[Observation]) -> Vec<DailyAggregate> {
    let mut buckets: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();
    for obs in observations {
        buckets
            .entry(obs.local_day())
            .or_insert_with(DayAccumulator::new)
            .push(obs);
    }

    let days: Vec<DailyAggregate> = buckets
        .into_iter()
        .map(|(day, acc)| acc.finish(day))
        .collect();

    debug!(
        observations = observations.len(),
        days = days.len(),
        "observations aggregated by day"
    );
    days
}
