//! LocalAndes: a humid-hours rule calibrated for highland growing areas,
//! reporting a three-level risk label instead of a single trigger.

use chrono::NaiveDate;

use blight_types::{
    BlightResult, DailyAggregate, RiskLabel, RuleName, RuleParameters, RuleVerdict, Thresholds,
    VerdictDetails,
};

use super::DayRule;

#[derive(Clone, Debug, PartialEq)]
pub struct LocalAndesParams {
    pub min_temp_c: f64,
    pub rh_threshold: i64,
    pub min_hours_per_day: u32,
    pub consecutive_days_high: u32,
    pub consecutive_days_mod: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LocalAndesRule {
    pub params: LocalAndesParams,
}

impl LocalAndesRule {
    pub fn new(params: LocalAndesParams) -> Self {
        Self { params }
    }

    pub fn from_parameters(params: &RuleParameters) -> BlightResult<Self> {
        let rule = RuleName::LocalAndes;
        Ok(Self::new(LocalAndesParams {
            min_temp_c: params.require_f64(rule, "min_temp_c")?,
            rh_threshold: params.require_integer(rule, "rh_threshold")?,
            min_hours_per_day: params.require_count(rule, "min_hours_per_day")?,
            consecutive_days_high: params.require_count(rule, "consecutive_days_high")?,
            consecutive_days_mod: params.require_count(rule, "consecutive_days_mod")?,
        }))
    }

    /// High is checked before Moderate, so a `mod` above `high` never yields
    /// Moderate for runs that already reach High.
    pub fn label_for(&self, longest_run: u32) -> RiskLabel {
        if longest_run >= self.params.consecutive_days_high {
            RiskLabel::High
        } else if longest_run >= self.params.consecutive_days_mod {
            RiskLabel::Moderate
        } else {
            RiskLabel::Low
        }
    }
}

impl DayRule for LocalAndesRule {
    fn name(&self) -> RuleName {
        RuleName::LocalAndes
    }

    /// Enough hours at or above 80% RH, and the mean temperature over those
    /// hours reaches the minimum. A day with no humid hours has no mean and
    /// never qualifies.
    fn qualifies(&self, day: &DailyAggregate) -> bool {
        day.hours_rh_ge_80 >= self.params.min_hours_per_day
            && day.mean_temp_when_humid_at_least(self.params.min_temp_c)
    }

    fn verdict(&self, longest_run: u32, evidence: Vec<NaiveDate>) -> RuleVerdict {
        let label = self.label_for(longest_run);
        RuleVerdict {
            rule: RuleName::LocalAndes.to_string(),
            triggered: label.is_elevated(),
            risk_label: Some(label),
            details: VerdictDetails {
                consecutive_true_max: longest_run,
                required_consecutive_days: None,
                days_meeting_criteria: evidence,
                thresholds: Some(Thresholds {
                    rh_threshold: self.params.rh_threshold,
                    min_temp_c: self.params.min_temp_c,
                    min_hours_per_day: self.params.min_hours_per_day,
                }),
            },
        }
    }
}
