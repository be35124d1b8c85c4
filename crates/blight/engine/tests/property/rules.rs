//! Property tests: run length, trigger boundaries and label monotonicity.

use blight_engine::{
    evaluate_days, longest_true_run, HumidRunParams, HuttonRule, LocalAndesParams, LocalAndesRule,
};
use blight_types::DailyAggregate;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// Longest all-true window, by brute force over every window.
fn reference_longest_run(flags: &[bool]) -> u32 {
    let mut best = 0;
    for start in 0..flags.len() {
        for end in start..flags.len() {
            if flags[start..=end].iter().all(|f| *f) {
                best = best.max((end - start + 1) as u32);
            }
        }
    }
    best
}

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
}

/// A chronological run of days whose statistics are drawn at random.
fn arb_days(max: usize) -> impl Strategy<Value = Vec<DailyAggregate>> {
    prop::collection::vec(
        (
            0.0f64..20.0,
            0u32..24,
            0u32..24,
            prop::option::of(0.0f64..20.0),
        ),
        0..max,
    )
    .prop_map(|stats| {
        stats
            .into_iter()
            .enumerate()
            .map(|(i, (min_temp, h90, h80, mean))| {
                let hours_rh_ge_80 = h80.max(h90);
                DailyAggregate {
                    day: start_date() + Days::new(i as u64),
                    min_temperature_c: min_temp,
                    hours_rh_ge_90: h90,
                    hours_rh_ge_80,
                    mean_temp_when_rh_ge_80: if hours_rh_ge_80 == 0 { None } else { mean },
                    observation_count: 24,
                }
            })
            .collect()
    })
}

fn andes(high: u32, moderate: u32) -> LocalAndesRule {
    LocalAndesRule::new(LocalAndesParams {
        min_temp_c: 10.0,
        rh_threshold: 80,
        min_hours_per_day: 6,
        consecutive_days_high: high,
        consecutive_days_mod: moderate,
    })
}

fn hutton(consecutive_days: u32) -> HuttonRule {
    HuttonRule::new(HumidRunParams {
        min_temp_c: 10.0,
        rh_threshold: Some(90),
        min_hours_per_day: 6,
        consecutive_days,
    })
}

fn qualifying_day(offset: u64) -> DailyAggregate {
    DailyAggregate {
        day: start_date() + Days::new(offset),
        min_temperature_c: 12.0,
        hours_rh_ge_90: 8,
        hours_rh_ge_80: 8,
        mean_temp_when_rh_ge_80: Some(13.0),
        observation_count: 24,
    }
}

fn dry_day(offset: u64) -> DailyAggregate {
    DailyAggregate {
        day: start_date() + Days::new(offset),
        min_temperature_c: 12.0,
        hours_rh_ge_90: 0,
        hours_rh_ge_80: 0,
        mean_temp_when_rh_ge_80: None,
        observation_count: 24,
    }
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// The scan matches the brute-force definition.
    #[test]
    fn longest_run_matches_definition(flags in prop::collection::vec(any::<bool>(), 0..64)) {
        prop_assert_eq!(longest_true_run(flags.iter().copied()), reference_longest_run(&flags));
    }

    /// Exactly `n` consecutive qualifying days trigger a rule needing `n`; `n - 1` do not.
    #[test]
    fn hutton_trigger_boundary(n in 1u32..10, leading_dry in 0u64..3) {
        let mut days: Vec<DailyAggregate> = (0..leading_dry).map(dry_day).collect();
        days.extend((0..u64::from(n)).map(|i| qualifying_day(leading_dry + i)));
        days.push(dry_day(leading_dry + u64::from(n)));

        let at = evaluate_days(&hutton(n), &days);
        prop_assert!(at.triggered);
        prop_assert_eq!(at.details.consecutive_true_max, n);

        let above = evaluate_days(&hutton(n + 1), &days);
        prop_assert!(!above.triggered);
    }

    /// Raising either LocalAndes threshold never raises the label.
    #[test]
    fn local_andes_label_is_monotone(
        days in arb_days(20),
        high in 0u32..8,
        moderate in 0u32..8,
        bump in 1u32..5,
    ) {
        let base = evaluate_days(&andes(high, moderate), &days).risk_label.unwrap();
        let higher_high = evaluate_days(&andes(high + bump, moderate), &days).risk_label.unwrap();
        let higher_mod = evaluate_days(&andes(high, moderate + bump), &days).risk_label.unwrap();
        prop_assert!(higher_high <= base);
        prop_assert!(higher_mod <= base);
    }

    /// A day without humid hours never counts as LocalAndes evidence.
    #[test]
    fn days_without_humid_mean_never_qualify(
        days in arb_days(20),
        min_temp in -50.0f64..50.0,
    ) {
        let mut rule = andes(3, 2);
        rule.params.min_temp_c = min_temp;
        rule.params.min_hours_per_day = 0;
        let verdict = evaluate_days(&rule, &days);
        for day in days.iter().filter(|d| d.mean_temp_when_rh_ge_80.is_none()) {
            prop_assert!(!verdict.details.days_meeting_criteria.contains(&day.day));
        }
    }

    /// Evidence is exactly the set of days passing the predicate, in order,
    /// and the run never exceeds the evidence count.
    #[test]
    fn evidence_is_every_qualifying_day(days in arb_days(20)) {
        let rule = hutton(2);
        let verdict = evaluate_days(&rule, &days);
        let expected: Vec<NaiveDate> = days
            .iter()
            .filter(|d| d.min_temperature_c >= 10.0 && d.hours_rh_ge_90 >= 6)
            .map(|d| d.day)
            .collect();
        prop_assert_eq!(&verdict.details.days_meeting_criteria, &expected);
        prop_assert!(verdict.details.consecutive_true_max as usize <= expected.len());
    }
}
