//! Normalizer: parse, validate, clamp and order raw observations.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use tracing::debug;

use blight_types::{clamp_humidity, BlightError, BlightResult, Observation, RawObservation};

/// Offset-carrying layouts tried after RFC 3339. `%#z` takes `+03`,
/// `+0300` and `+03:00` alike.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Offset-less layouts. These are read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Validate and order a batch of raw observations.
///
/// A single unparseable timestamp or non-finite reading rejects the whole
/// batch. Humidity outside `[0, 100]` is clamped silently. The result is
/// sorted by instant; equal instants keep their input order and duplicates
/// are kept.
pub fn normalize(raw: &[RawObservation]) -> BlightResult<Vec<Observation>> {
    let mut observations = raw
        .iter()
        .enumerate()
        .map(|(index, record)| normalize_one(index, record))
        .collect::<BlightResult<Vec<_>>>()?;

    // sort_by_key is stable
    observations.sort_by_key(|obs| obs.timestamp);

    debug!(count = observations.len(), "observations normalized");
    Ok(observations)
}

fn normalize_one(index: usize, record: &RawObservation) -> BlightResult<Observation> {
    let timestamp = parse_timestamp(&record.timestamp).ok_or_else(|| {
        BlightError::invalid_input(
            index,
            format!("unparseable timestamp '{}'", record.timestamp),
        )
    })?;

    if !record.temperature_c.is_finite() {
        return Err(BlightError::invalid_input(
            index,
            format!("temperature_c is not a finite number ({})", record.temperature_c),
        ));
    }
    if !record.relative_humidity.is_finite() {
        return Err(BlightError::invalid_input(
            index,
            format!(
                "relative_humidity is not a finite number ({})",
                record.relative_humidity
            ),
        ));
    }

    Ok(Observation {
        timestamp,
        temperature_c: record.temperature_c,
        relative_humidity: clamp_humidity(record.relative_humidity),
    })
}

/// Parse an ISO-8601 timestamp, keeping its offset.
///
/// Timestamps without an offset are taken to be UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts);
    }
    if let Some(ts) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
    {
        return Some(ts);
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn raw(ts: &str, temp: f64, rh: f64) -> RawObservation {
        RawObservation::new(ts, temp, rh)
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let ts = parse_timestamp("2025-08-01T06:00:00-03:00").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), -3 * 3600);
        assert_eq!(ts.hour(), 6);
    }

    #[test]
    fn parses_space_separated_with_offset() {
        let ts = parse_timestamp("2025-08-01 06:00:00+00:00").unwrap();
        assert_eq!(ts.date_naive(), NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
    }

    #[test]
    fn parses_offsets_without_colon() {
        for text in [
            "2025-08-01T06:00:00+0300",
            "2025-08-01T06:00:00+03",
            "2025-08-01T06:00:00.5+0300",
            "2025-08-01 06:00:00+03",
            "2025-08-01T06:00+0300",
            "2025-08-01 06:00+03",
        ] {
            let ts = parse_timestamp(text).unwrap_or_else(|| panic!("{text} did not parse"));
            assert_eq!(ts.offset().local_minus_utc(), 3 * 3600, "{text}");
            assert_eq!(ts.hour(), 6, "{text}");
        }
        let ts = parse_timestamp("2025-08-01T06:00:00-0530").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), -(5 * 3600 + 30 * 60));
    }

    #[test]
    fn naive_timestamps_are_utc() {
        let ts = parse_timestamp("2025-08-01T06:00").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 0);
        let ts = parse_timestamp("2025-08-01 06:30:00").unwrap();
        assert_eq!(ts.minute(), 30);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2025-13-01T00:00:00Z").is_none());
    }

    #[test]
    fn clamps_humidity() {
        let out = normalize(&[
            raw("2025-08-01T00:00:00Z", 10.0, -5.0),
            raw("2025-08-01T01:00:00Z", 10.0, 137.0),
            raw("2025-08-01T02:00:00Z", 10.0, 55.0),
        ])
        .unwrap();
        let rh: Vec<f64> = out.iter().map(|o| o.relative_humidity).collect();
        assert_eq!(rh, vec![0.0, 100.0, 55.0]);
    }

    #[test]
    fn sorts_by_instant_and_keeps_tie_order() {
        let out = normalize(&[
            raw("2025-08-01T02:00:00Z", 1.0, 50.0),
            raw("2025-08-01T00:00:00Z", 2.0, 50.0),
            raw("2025-08-01T02:00:00Z", 3.0, 50.0),
            // same instant as 02:00Z, different offset
            raw("2025-08-01T04:00:00+02:00", 4.0, 50.0),
        ])
        .unwrap();
        let temps: Vec<f64> = out.iter().map(|o| o.temperature_c).collect();
        assert_eq!(temps, vec![2.0, 1.0, 3.0, 4.0]);
    }

    #[test]
    fn one_bad_timestamp_fails_everything() {
        let err = normalize(&[
            raw("2025-08-01T00:00:00Z", 10.0, 90.0),
            raw("not-a-time", 10.0, 90.0),
            raw("2025-08-01T02:00:00Z", 10.0, 90.0),
        ])
        .unwrap_err();
        match err {
            BlightError::InvalidInput { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("not-a-time"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_finite_readings_are_invalid() {
        let err = normalize(&[raw("2025-08-01T00:00:00Z", f64::NAN, 90.0)]).unwrap_err();
        assert!(matches!(err, BlightError::InvalidInput { index: 0, .. }));

        let err = normalize(&[raw("2025-08-01T00:00:00Z", 10.0, f64::INFINITY)]).unwrap_err();
        assert!(matches!(err, BlightError::InvalidInput { index: 0, .. }));
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(normalize(&[]).unwrap().is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let out = normalize(&[
            raw("2025-08-01T00:00:00Z", 10.0, 90.0),
            raw("2025-08-01T00:00:00Z", 10.0, 90.0),
        ])
        .unwrap();
        assert_eq!(out.len(), 2);
    }
}
