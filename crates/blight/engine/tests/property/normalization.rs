//! Property tests: normalization clamps humidity and orders by instant.

use blight_engine::{aggregate, normalize};
use blight_types::RawObservation;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// An hourly record somewhere in the first week of August, in one of a few offsets.
fn arb_observation() -> impl Strategy<Value = RawObservation> {
    (
        1u32..8,
        0u32..24,
        prop_oneof![Just("Z"), Just("+02:00"), Just("-05:00")],
        -10.0f64..35.0,
        -50.0f64..150.0,
    )
        .prop_map(|(day, hour, offset, temp, rh)| {
            RawObservation::new(format!("2025-08-{day:02}T{hour:02}:00:00{offset}"), temp, rh)
        })
}

fn arb_observations(max: usize) -> impl Strategy<Value = Vec<RawObservation>> {
    prop::collection::vec(arb_observation(), 0..max)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Out-of-range humidity lands on the nearest bound; in-range is untouched.
    #[test]
    fn humidity_is_clamped(rh in -1000.0f64..1000.0) {
        let out = normalize(&[RawObservation::new("2025-08-01T00:00:00Z", 10.0, rh)]).unwrap();
        let expected = if rh < 0.0 { 0.0 } else if rh > 100.0 { 100.0 } else { rh };
        prop_assert_eq!(out[0].relative_humidity, expected);
    }

    /// Output is non-decreasing by instant.
    #[test]
    fn output_is_sorted(obs in arb_observations(60)) {
        let out = normalize(&obs).unwrap();
        prop_assert_eq!(out.len(), obs.len());
        for pair in out.windows(2) {
            prop_assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    /// Any permutation of the same records yields the same instant sequence
    /// and the same daily aggregates.
    #[test]
    fn permutation_does_not_change_the_result(
        (original, shuffled) in arb_observations(40)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = normalize(&original).unwrap();
        let b = normalize(&shuffled).unwrap();
        let instants_a: Vec<_> = a.iter().map(|o| o.timestamp).collect();
        let instants_b: Vec<_> = b.iter().map(|o| o.timestamp).collect();
        prop_assert_eq!(instants_a, instants_b);

        let days_a = aggregate(&a);
        let days_b = aggregate(&b);
        prop_assert_eq!(days_a.len(), days_b.len());
        for (x, y) in days_a.iter().zip(&days_b) {
            prop_assert_eq!(x.day, y.day);
            prop_assert_eq!(x.observation_count, y.observation_count);
            prop_assert_eq!(x.hours_rh_ge_90, y.hours_rh_ge_90);
            prop_assert_eq!(x.hours_rh_ge_80, y.hours_rh_ge_80);
            prop_assert_eq!(x.min_temperature_c, y.min_temperature_c);
            prop_assert_eq!(x.mean_temp_when_rh_ge_80.is_some(), y.mean_temp_when_rh_ge_80.is_some());
        }
    }

    /// Aggregates cover every observation exactly once, one entry per day, in order.
    #[test]
    fn aggregates_partition_the_observations(obs in arb_observations(80)) {
        let days = aggregate(&normalize(&obs).unwrap());
        let total: u32 = days.iter().map(|d| d.observation_count).sum();
        prop_assert_eq!(total as usize, obs.len());
        for pair in days.windows(2) {
            prop_assert!(pair[0].day < pair[1].day);
        }
        for d in &days {
            prop_assert!(d.hours_rh_ge_90 <= d.hours_rh_ge_80);
            prop_assert!(d.hours_rh_ge_80 <= d.observation_count);
            prop_assert_eq!(d.mean_temp_when_rh_ge_80.is_none(), d.hours_rh_ge_80 == 0);
        }
    }
}
