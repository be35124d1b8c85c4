//! Hutton criteria: consecutive days with a warm minimum temperature and
//! prolonged saturation.

use chrono::NaiveDate;

use blight_types::{BlightResult, DailyAggregate, RuleName, RuleParameters, RuleVerdict};

use super::humid_run::HumidRunParams;
use super::DayRule;

#[derive(Clone, Debug, PartialEq)]
pub struct HuttonRule {
    pub params: HumidRunParams,
}

impl HuttonRule {
    pub fn new(params: HumidRunParams) -> Self {
        Self { params }
    }

    pub fn from_parameters(params: &RuleParameters) -> BlightResult<Self> {
        HumidRunParams::from_parameters(RuleName::Hutton, params).map(Self::new)
    }
}

impl DayRule for HuttonRule {
    fn name(&self) -> RuleName {
        RuleName::Hutton
    }

    fn qualifies(&self, day: &DailyAggregate) -> bool {
        self.params.qualifies(day)
    }

    fn verdict(&self, longest_run: u32, evidence: Vec<NaiveDate>) -> RuleVerdict {
        self.params.verdict(RuleName::Hutton, longest_run, evidence)
    }
}
