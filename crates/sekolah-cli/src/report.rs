//! JSON output for decisions evaluated by the CLI.

use serde::Serialize;
use serde_json::Value;
use sekolah_observability::track_access_decision;

/// One evaluated decision, printed as a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub operation: &'static str,
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl Decision {
    pub fn new(operation: &'static str, allowed: bool) -> Self {
        Self {
            operation,
            allowed,
            detail: None,
        }
    }

    /// Deny used when a referenced record is not in the dataset.
    pub fn missing(operation: &'static str, what: &str) -> Self {
        Self::new(operation, false).with_detail(serde_json::json!({ "missing": what }))
    }

    pub fn with_detail(mut self, detail: impl Serialize) -> Self {
        self.detail = serde_json::to_value(detail).ok();
        self
    }

    /// Counts the decision in the access metrics.
    ///
    /// Meeting decisions are already counted inside the access layer and must
    /// not go through here.
    pub fn tracked(self) -> Self {
        track_access_decision(self.operation, self.allowed);
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
