//! # blight-advisor
//!
//! The advisory layer around the rule engine: loading weather, field and
//! rule files (CSV, JSON or YAML), reference literature, and turning a
//! weather verdict plus a diagnosis into a recommendation.
//!
//! ```text
//!   sources ──────► RawObservation / RuleBook ──► blight_engine::evaluate
//!   fields ───────► FieldRecord (variety, last spray)      │
//!   literature ───► Passage                                 ▼
//!   recommendation ◄──────────────── triggered + diagnosis + spray age
//!   assessment = all of the above for one field
//! ```

#![deny(unsafe_code)]

pub mod assessment;
pub mod error;
pub mod fields;
pub mod literature;
pub mod recommendation;
pub mod sources;
mod tabular;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use assessment::{default_rule_book, Advisor, Assessment, AssessmentRequest};
pub use error::{AdvisorError, AdvisorResult};
pub use fields::{FieldRecord, FieldRegistry};
pub use literature::{LiteratureIndex, Passage};
pub use recommendation::{synthesize, Action, Recommendation, Urgency, LATE_BLIGHT};
pub use sources::{
    load_observations, load_rule_book, read_document, DocumentFormat, FailoverSource,
    FileWeatherSource, InMemoryWeatherSource, WeatherSource,
};
