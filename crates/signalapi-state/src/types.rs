//! Domain types for the signal store.

use serde::{Deserialize, Serialize};

/// Unique identifier of a telemetry point.
pub type NodeId = String;

/// Configuration of a single telemetry point.
///
/// Optional fields are independently nullable: `None` means the value was
/// never configured, not zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub node_id: NodeId,
    /// Polling period in milliseconds.
    pub sampling_interval_ms: Option<u32>,
    /// Threshold below which a value change is not significant.
    pub deadband_value: Option<i32>,
    /// Free-form deadband category, e.g. "ABSOLUTE" or "RELATIVE".
    pub deadband_type: Option<String>,
    pub active: bool,
}

impl Signal {
    /// Table key for this signal.
    pub fn table_key(&self) -> &str {
        &self.node_id
    }
}
