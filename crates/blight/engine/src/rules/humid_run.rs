//! Shared day predicate for rules that count consecutive warm, saturated days.
//!
//! Hutton and Smith both build on this today. They remain separate rule
//! types so either can change its parameters or predicate independently.

use chrono::NaiveDate;

use blight_types::{
    BlightResult, DailyAggregate, RuleName, RuleParameters, RuleVerdict, VerdictDetails,
};

/// Thresholds for a warm-and-saturated run rule.
#[derive(Clone, Debug, PartialEq)]
pub struct HumidRunParams {
    pub min_temp_c: f64,
    /// Carried through from configuration but not used by the predicate,
    /// which always counts hours at or above 90% RH.
    pub rh_threshold: Option<i64>,
    pub min_hours_per_day: u32,
    pub consecutive_days: u32,
}

impl HumidRunParams {
    pub fn from_parameters(rule: RuleName, params: &RuleParameters) -> BlightResult<Self> {
        Ok(Self {
            min_temp_c: params.require_f64(rule, "min_temp_c")?,
            rh_threshold: params.optional_integer(rule, "rh_threshold")?,
            min_hours_per_day: params.require_count(rule, "min_hours_per_day")?,
            consecutive_days: params.require_count(rule, "consecutive_days")?,
        })
    }

    /// Minimum temperature reaches the threshold and enough hours hit 90% RH.
    pub fn qualifies(&self, day: &DailyAggregate) -> bool {
        day.min_temperature_c >= self.min_temp_c && day.hours_rh_ge_90 >= self.min_hours_per_day
    }

    pub fn verdict(&self, rule: RuleName, longest_run: u32, evidence: Vec<NaiveDate>) -> RuleVerdict {
        RuleVerdict {
            rule: rule.to_string(),
            triggered: longest_run >= self.consecutive_days,
            risk_label: None,
            details: VerdictDetails {
                consecutive_true_max: longest_run,
                required_consecutive_days: Some(self.consecutive_days),
                days_meeting_criteria: evidence,
                thresholds: None,
            },
        }
    }
}
