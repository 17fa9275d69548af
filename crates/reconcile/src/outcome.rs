//! Per-action outcome reporting.

use serde::Serialize;
use serde_json::Value;

/// Disposition of one proposed action.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Applied,
    Warned,
    Rejected,
}

/// The audit record for one proposed action.
///
/// A reconciliation pass returns exactly one outcome per input action, in
/// input order; no outcome is silently dropped. `message` is human-readable
/// and suitable for direct display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionOutcome {
    /// Echo of the raw input record this outcome refers to.
    pub action: Value,
    pub status: OutcomeStatus,
    pub message: String,
}

impl ActionOutcome {
    pub fn applied(action: &Value, message: impl Into<String>) -> Self {
        Self {
            action: action.clone(),
            status: OutcomeStatus::Applied,
            message: message.into(),
        }
    }

    pub fn warned(action: &Value, message: impl Into<String>) -> Self {
        Self {
            action: action.clone(),
            status: OutcomeStatus::Warned,
            message: message.into(),
        }
    }

    pub fn rejected(action: &Value, message: impl Into<String>) -> Self {
        Self {
            action: action.clone(),
            status: OutcomeStatus::Rejected,
            message: message.into(),
        }
    }
}
