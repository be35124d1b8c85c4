//! Full advisory chain for one field.
//!
//! ```text
//!   field id ──► FieldRegistry ──► variety, days since spray
//!   WeatherSource ──► evaluate(rule set) ──► EvaluationReport
//!   diagnosis, variety ──► LiteratureIndex::search ──► passages
//!   triggered + diagnosis + days since spray ──► synthesize ──► Recommendation
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use blight_engine::evaluate;
use blight_types::{EvaluationReport, RuleBook, RuleName, RuleParameters};

use crate::error::AdvisorResult;
use crate::fields::{FieldRecord, FieldRegistry};
use crate::literature::{LiteratureIndex, Passage};
use crate::recommendation::{synthesize, Recommendation};
use crate::sources::WeatherSource;

/// Rule book used when no rules file is supplied: Hutton with its
/// published thresholds.
pub fn default_rule_book() -> RuleBook {
    RuleBook::new().with_rule(
        RuleName::Hutton,
        RuleParameters::new()
            .with("min_temp_c", 10)
            .with("rh_threshold", 90)
            .with("min_hours_per_day", 6)
            .with("consecutive_days", 2),
    )
}

/// What to assess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssessmentRequest {
    pub field_id: String,
    /// Diagnosis label produced upstream, e.g. `late_blight`.
    pub diagnosis: String,
    pub rule_set: String,
    pub today: NaiveDate,
}

/// Everything gathered for one field, plus the resulting recommendation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub field: FieldRecord,
    pub days_since_spray: i64,
    pub diagnosis: String,
    pub weather: EvaluationReport,
    pub disease_literature: Vec<Passage>,
    pub variety_literature: Vec<Passage>,
    pub recommendation: Recommendation,
}

/// Ties the field registry, literature and rule book together.
#[derive(Clone, Debug)]
pub struct Advisor {
    fields: FieldRegistry,
    literature: LiteratureIndex,
    rules: RuleBook,
}

impl Advisor {
    pub fn new(fields: FieldRegistry, literature: LiteratureIndex, rules: RuleBook) -> Self {
        Self {
            fields,
            literature,
            rules,
        }
    }

    pub fn fields(&self) -> &FieldRegistry {
        &self.fields
    }

    pub fn literature(&self) -> &LiteratureIndex {
        &self.literature
    }

    /// Run the chain. Any failure (unknown field, weather unavailable, bad
    /// rule parameters) stops it with no partial assessment.
    pub fn assess(
        &self,
        request: &AssessmentRequest,
        weather: &dyn WeatherSource,
    ) -> AdvisorResult<Assessment> {
        let field = self.fields.require(&request.field_id)?.clone();
        let days_since_spray = field.days_since_spray(request.today);

        let observations = weather.observations()?;
        let report = evaluate(&observations, &self.rules, &request.rule_set)?;

        let disease_literature = self.literature.search(&request.diagnosis);
        let variety_literature = self.literature.search(&field.potato_variety);

        let recommendation =
            synthesize(report.result.triggered, &request.diagnosis, days_since_spray);

        debug!(
            field = %field.field_id,
            source = weather.name(),
            triggered = report.result.triggered,
            days_since_spray,
            disease_passages = disease_literature.len(),
            variety_passages = variety_literature.len(),
            urgency = ?recommendation.urgency,
            "assessment complete"
        );

        Ok(Assessment {
            field,
            days_since_spray,
            diagnosis: request.diagnosis.clone(),
            weather: report,
            disease_literature,
            variety_literature,
            recommendation,
        })
    }
}
