//! Smith period rule.
//!
//! Currently the same predicate and trigger as Hutton. It is kept as its own
//! rule so its parameters and, if needed, its predicate can diverge without
//! touching Hutton.

use chrono::NaiveDate;

use blight_types::{BlightResult, DailyAggregate, RuleName, RuleParameters, RuleVerdict};

use super::humid_run::HumidRunParams;
use super::DayRule;

#[derive(Clone, Debug, PartialEq)]
pub struct SmithRule {
    pub params: HumidRunParams,
}

impl SmithRule {
    pub fn new(params: HumidRunParams) -> Self {
        Self { params }
    }

    pub fn from_parameters(params: &RuleParameters) -> BlightResult<Self> {
        HumidRunParams::from_parameters(RuleName::Smith, params).map(Self::new)
    }
}

impl DayRule for SmithRule {
    fn name(&self) -> RuleName {
        RuleName::Smith
    }

    fn qualifies(&self, day: &DailyAggregate) -> bool {
        self.params.qualifies(day)
    }

    fn verdict(&self, longest_run: u32, evidence: Vec<NaiveDate>) -> RuleVerdict {
        self.params.verdict(RuleName::Smith, longest_run, evidence)
    }
}
