//! Recommendation synthesis from weather risk, diagnosis and spray history.

use serde::{Deserialize, Serialize};

/// Diagnosis label that escalates a weather alert.
pub const LATE_BLIGHT: &str = "late_blight";

/// A spray within this many days still counts as protection.
pub const SPRAY_PROTECTION_DAYS: i64 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ImmediateAction,
    MonitorClosely,
    PrecautionaryAlert,
    NoAction,
}

impl Action {
    pub fn message(self) -> &'static str {
        match self {
            Action::ImmediateAction => {
                "IMMEDIATE ACTION RECOMMENDED: weather risk is high and late blight \
                 symptoms are visible. The last spray was over a week ago; consult the \
                 literature on effective fungicides."
            }
            Action::MonitorClosely => {
                "MONITOR CLOSELY: weather risk is high and symptoms are present, but a \
                 recent spray may still protect the crop. Assess spray effectiveness."
            }
            Action::PrecautionaryAlert => {
                "PRECAUTIONARY ALERT: weather is favorable for late blight. Scout fields, \
                 especially susceptible varieties."
            }
            Action::NoAction => "No action needed at this time.",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub urgency: Urgency,
    pub action: Action,
    pub message: String,
}

impl Recommendation {
    fn from_action(urgency: Urgency, action: Action) -> Self {
        Self {
            urgency,
            action,
            message: action.message().to_string(),
        }
    }
}

/// Combine the weather verdict, diagnosis label and days since the last spray.
///
/// Without a weather trigger the answer is always `NoAction`, whatever the
/// diagnosis says.
pub fn synthesize(weather_triggered: bool, diagnosis: &str, days_since_spray: i64) -> Recommendation {
    let (urgency, action) = match (weather_triggered, diagnosis == LATE_BLIGHT) {
        (true, true) if days_since_spray > SPRAY_PROTECTION_DAYS => {
            (Urgency::High, Action::ImmediateAction)
        }
        (true, true) => (Urgency::Medium, Action::MonitorClosely),
        (true, false) => (Urgency::Medium, Action::PrecautionaryAlert),
        (false, _) => (Urgency::Low, Action::NoAction),
    };
    Recommendation::from_action(urgency, action)
}
