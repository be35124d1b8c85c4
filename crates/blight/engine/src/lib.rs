//! # blight-engine
//!
//! Late-blight rule evaluation over hourly field weather.
//!
//! ## Pipeline
//!
//! ```text
//!   &[RawObservation]
//!         │ normalize   parse timestamps, clamp RH to [0, 100], stable sort
//!         ▼
//!   Vec<Observation>
//!         │ aggregate   one bucket per local calendar day
//!         ▼
//!   Vec<DailyAggregate>
//!         │ RuleSpec::evaluate   day predicate → longest run → verdict
//!         ▼
//!   EvaluationReport { rule_set, days, result }
//! ```
//!
//! Every call is a pure function of its inputs. Nothing is cached or shared,
//! so independent evaluations can run on separate threads without
//! coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use blight_engine::evaluate;
//! use blight_types::{RawObservation, RuleBook, RuleName, RuleParameters};
//!
//! let book = RuleBook::new().with_rule(
//!     RuleName::Hutton,
//!     RuleParameters::new()
//!         .with("min_temp_c", 10)
//!         .with("rh_threshold", 90)
//!         .with("min_hours_per_day", 6)
//!         .with("consecutive_days", 2),
//! );
//! let observations = vec![RawObservation::new("2025-08-01T00:00:00Z", 12.0, 95.0)];
//!
//! let report = evaluate(&observations, &book, "Hutton").unwrap();
//! assert_eq!(report.days, 1);
//! assert!(!report.result.triggered);
//! ```

#![deny(unsafe_code)]

pub mod aggregate;
pub mod evaluate;
pub mod normalize;
pub mod rules;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use aggregate::aggregate;
pub use evaluate::{evaluate, evaluate_aggregates};
pub use normalize::{normalize, parse_timestamp};
pub use rules::{
    evaluate_days, longest_true_run, DayRule, HumidRunParams, HuttonRule, LocalAndesParams,
    LocalAndesRule, RuleSpec, SmithRule,
};
