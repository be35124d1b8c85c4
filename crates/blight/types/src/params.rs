//! Rule names, caller-supplied rule parameters and the rule book.
//!
//! Parameters stay loosely typed until a rule is resolved, so that a missing
//! or malformed key can be reported by name. Nothing in this module invents a
//! default value.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BlightError, BlightResult};

// ── Rule names ──────────────────────────────────────────────────────────

/// The recognized forecasting rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleName {
    Hutton,
    Smith,
    LocalAndes,
}

impl RuleName {
    pub const ALL: [RuleName; 3] = [RuleName::Hutton, RuleName::Smith, RuleName::LocalAndes];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::Hutton => "Hutton",
            RuleName::Smith => "Smith",
            RuleName::LocalAndes => "LocalAndes",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = BlightError;

    /// Exact, case-sensitive match on the rule's literal name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| BlightError::UnknownRule(s.to_string()))
    }
}

// ── Rule parameters ─────────────────────────────────────────────────────

/// Key/value parameters for one rule, exactly as the caller supplied them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleParameters(BTreeMap<String, Value>);

impl RuleParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// A floating-point threshold. Integers are accepted.
    pub fn require_f64(&self, rule: RuleName, key: &str) -> BlightResult<f64> {
        let value = self.require(rule, key)?;
        value
            .as_f64()
            .ok_or_else(|| BlightError::invalid_parameter(rule.as_str(), key, "expected a number"))
    }

    /// A non-negative whole count (hours or days).
    pub fn require_count(&self, rule: RuleName, key: &str) -> BlightResult<u32> {
        let value = self.require(rule, key)?;
        let whole = integral(value).ok_or_else(|| {
            BlightError::invalid_parameter(rule.as_str(), key, "expected a whole number")
        })?;
        u32::try_from(whole).map_err(|_| {
            BlightError::invalid_parameter(
                rule.as_str(),
                key,
                format!("expected a non-negative count, got {whole}"),
            )
        })
    }

    /// A signed whole number.
    pub fn require_integer(&self, rule: RuleName, key: &str) -> BlightResult<i64> {
        let value = self.require(rule, key)?;
        integral(value).ok_or_else(|| {
            BlightError::invalid_parameter(rule.as_str(), key, "expected a whole number")
        })
    }

    /// A signed whole number that may be absent.
    pub fn optional_integer(&self, rule: RuleName, key: &str) -> BlightResult<Option<i64>> {
        match self.lookup(key) {
            None => Ok(None),
            Some(value) => integral(value).map(Some).ok_or_else(|| {
                BlightError::invalid_parameter(rule.as_str(), key, "expected a whole number")
            }),
        }
    }

    fn require(&self, rule: RuleName, key: &str) -> BlightResult<&Value> {
        self.lookup(key)
            .ok_or_else(|| BlightError::missing_parameter(rule.as_str(), key))
    }

    // An explicit null counts as absent.
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }
}

fn integral(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    let f = value.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

// ── Rule book ───────────────────────────────────────────────────────────

/// Every rule's parameters, keyed by rule name (the shape of `rules.yaml`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleBook(BTreeMap<String, RuleParameters>);

impl RuleBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: RuleName, params: RuleParameters) -> Self {
        self.insert(rule, params);
        self
    }

    pub fn insert(&mut self, rule: RuleName, params: RuleParameters) {
        self.0.insert(rule.as_str().to_string(), params);
    }

    /// Parameters for a recognized rule.
    pub fn parameters(&self, rule: RuleName) -> BlightResult<&RuleParameters> {
        self.0
            .get(rule.as_str())
            .ok_or_else(|| BlightError::MissingRuleSet(rule.as_str().to_string()))
    }

    /// Names of the sections present, recognized or not.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
