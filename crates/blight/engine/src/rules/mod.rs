//! Rule evaluation.
//!
//! Each rule supplies a per-day predicate and a verdict policy through
//! [`DayRule`]. [`evaluate_days`] does the rest the same way for every rule:
//! flag each day, take the longest run of flagged days, collect every flagged
//! day as evidence.

pub mod humid_run;
pub mod hutton;
pub mod local_andes;
pub mod run_length;
pub mod smith;

use chrono::NaiveDate;
use tracing::debug;

use blight_types::{BlightResult, DailyAggregate, RuleBook, RuleName, RuleParameters, RuleVerdict};

pub use humid_run::HumidRunParams;
pub use hutton::HuttonRule;
pub use local_andes::{LocalAndesParams, LocalAndesRule};
pub use run_length::longest_true_run;
pub use smith::SmithRule;

/// A forecasting rule expressed as a day predicate plus a verdict policy.
pub trait DayRule {
    fn name(&self) -> RuleName;

    /// Whether one day satisfies the rule on its own.
    fn qualifies(&self, day: &DailyAggregate) -> bool;

    /// Build the verdict from the longest qualifying run and all qualifying days.
    fn verdict(&self, longest_run: u32, evidence: Vec<NaiveDate>) -> RuleVerdict;
}

/// Apply a rule to a chronological sequence of daily aggregates.
///
/// The run is computed positionally over `days`; evidence lists every
/// qualifying day, inside the longest run or not.
pub fn evaluate_days<R>(rule: &R, days: &[DailyAggregate]) -> RuleVerdict
where
    R: DayRule + ?Sized,
{
    let flags: Vec<bool> = days.iter().map(|day| rule.qualifies(day)).collect();
    let longest_run = longest_true_run(flags.iter().copied());
    let evidence: Vec<NaiveDate> = days
        .iter()
        .zip(&flags)
        .filter_map(|(day, &flag)| flag.then_some(day.day))
        .collect();

    let verdict = rule.verdict(longest_run, evidence);
    debug!(
        rule = %rule.name(),
        days = days.len(),
        qualifying = verdict.details.days_meeting_criteria.len(),
        longest_run,
        triggered = verdict.triggered,
        "rule evaluated"
    );
    verdict
}

/// A rule resolved from its name and validated parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleSpec {
    Hutton(HuttonRule),
    Smith(SmithRule),
    LocalAndes(LocalAndesRule),
}

impl RuleSpec {
    /// Look up `rule_set` in the rule book and validate its parameters.
    ///
    /// Fails with `UnknownRule` for an unrecognized name, `MissingRuleSet`
    /// when the book has no section for it, and `MissingParameter` or
    /// `InvalidParameter` for bad keys.
    pub fn resolve(rule_set: &str, book: &RuleBook) -> BlightResult<Self> {
        let name: RuleName = rule_set.parse()?;
        Self::from_parameters(name, book.parameters(name)?)
    }

    pub fn from_parameters(name: RuleName, params: &RuleParameters) -> BlightResult<Self> {
        Ok(match name {
            RuleName::Hutton => RuleSpec::Hutton(HuttonRule::from_parameters(params)?),
            RuleName::Smith => RuleSpec::Smith(SmithRule::from_parameters(params)?),
            RuleName::LocalAndes => {
                RuleSpec::LocalAndes(LocalAndesRule::from_parameters(params)?)
            }
        })
    }

    pub fn name(&self) -> RuleName {
        self.as_day_rule().name()
    }

    pub fn as_day_rule(&self) -> &dyn DayRule {
        match self {
            RuleSpec::Hutton(rule) => rule,
            RuleSpec::Smith(rule) => rule,
            RuleSpec::LocalAndes(rule) => rule,
        }
    }

    pub fn evaluate(&self, days: &[DailyAggregate]) -> RuleVerdict {
        evaluate_days(self.as_day_rule(), days)
    }
}
