//! Correlation types for reconciliation-pass tracking
//!
//! A driver processes one snapshot delivery at a time; every log event
//! emitted during that pass carries the same `UpdateId` so that a diff
//! failure, the fallback reload and the completion signal can be tied
//! back to the delivery that caused them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single reconciliation pass (one snapshot delivery)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateId(String);

impl UpdateId {
    /// Generate a new random UpdateId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for UpdateId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UpdateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
