//! The engine's entry point: observations and a rule book in, report out.

use tracing::debug;

use blight_types::{BlightResult, DailyAggregate, EvaluationReport, RawObservation, RuleBook};

use crate::aggregate::aggregate;
use crate::normalize::normalize;
use crate::rules::RuleSpec;

/// Normalize, aggregate and evaluate `rule_set` against the observations.
///
/// The rule and its parameters are resolved first, so an unknown rule or a
/// bad parameter is reported without touching the observations. Errors from
/// any step are returned unchanged.
pub fn evaluate(
    observations: &[RawObservation],
    book: &RuleBook,
    rule_set: &str,
) -> BlightResult<EvaluationReport> {
    let rule = RuleSpec::resolve(rule_set, book)?;
    let normalized = normalize(observations)?;
    let days = aggregate(&normalized);
    let report = evaluate_aggregates(&days, &rule);
    debug!(rule_set, days = report.days, "evaluation complete");
    Ok(report)
}

/// Evaluate an already resolved rule over already aggregated days.
pub fn evaluate_aggregates(days: &[DailyAggregate], rule: &RuleSpec) -> EvaluationReport {
    EvaluationReport {
        rule_set: rule.name().to_string(),
        days: days.len(),
        result: rule.evaluate(days),
    }
}
