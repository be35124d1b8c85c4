//! # blight-types
//!
//! Value objects shared by the late-blight rule engine and its callers.
//!
//! ```text
//!   RawObservation ──normalize──▶ Observation ──aggregate──▶ DailyAggregate
//!                                                               │
//!                          RuleBook / RuleParameters ──────────▶│ evaluate
//!                                                               ▼
//!                                              RuleVerdict ─▶ EvaluationReport
//! ```
//!
//! Every type here is an immutable value built and consumed within one
//! evaluation call. Nothing is cached between calls.

#![deny(unsafe_code)]

pub mod daily;
pub mod error;
pub mod observation;
pub mod params;
pub mod verdict;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use daily::{DailyAggregate, RH_HUMID, RH_SATURATED};
pub use error::{BlightError, BlightResult};
pub use observation::{clamp_humidity, Observation, RawObservation, RH_MAX, RH_MIN};
pub use params::{RuleBook, RuleName, RuleParameters};
pub use verdict::{EvaluationReport, RiskLabel, RuleVerdict, Thresholds, VerdictDetails};
