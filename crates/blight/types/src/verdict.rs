//! Verdict and report shapes.
//!
//! Field names and field order are part of the wire contract: downstream
//! summary and synthesis code matches on them directly. Optional sections are
//! omitted entirely rather than serialized as `null`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Three-level risk label used by LocalAndes. Ordered `Low < Moderate < High`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    Low,
    Moderate,
    High,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low",
            RiskLabel::Moderate => "Moderate",
            RiskLabel::High => "High",
        }
    }

    /// Moderate and High count as triggered.
    pub fn is_elevated(&self) -> bool {
        *self >= RiskLabel::Moderate
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thresholds echoed back by LocalAndes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub rh_threshold: i64,
    pub min_temp_c: f64,
    pub min_hours_per_day: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerdictDetails {
    pub consecutive_true_max: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_consecutive_days: Option<u32>,
    /// Every qualifying day, chronological, as `YYYY-MM-DD`.
    pub days_meeting_criteria: Vec<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,
}

/// Outcome of one rule over one sequence of daily aggregates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleVerdict {
    pub rule: String,
    pub triggered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_label: Option<RiskLabel>,
    pub details: VerdictDetails,
}

impl RuleVerdict {
    pub fn evidence_days(&self) -> &[NaiveDate] {
        &self.details.days_meeting_criteria
    }

    /// One-line human summary.
    ///
    /// Labelled rules report the label and evidence count; boolean rules
    /// report the run against the required run.
    pub fn summary(&self) -> String {
        match (self.risk_label, self.details.required_consecutive_days) {
            (Some(label), _) => format!(
                "{} risk: {} (days meeting criteria: {})",
                self.rule,
                label,
                self.details.days_meeting_criteria.len()
            ),
            (None, Some(required)) => format!(
                "{} triggered: {} (run={}/{})",
                self.rule, self.triggered, self.details.consecutive_true_max, required
            ),
            (None, None) => format!(
                "{} triggered: {} (run={})",
                self.rule, self.triggered, self.details.consecutive_true_max
            ),
        }
    }
}

/// The orchestrator's output: the verdict wrapped with the day count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub rule_set: String,
    /// Number of daily aggregates evaluated, not the number of observations.
    pub days: usize,
    pub result: RuleVerdict,
}

impl EvaluationReport {
    pub fn summary(&self) -> String {
        self.result.summary()
    }
}
