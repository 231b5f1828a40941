//! Domain models for `servers/{id}/resources`.

use serde::{Deserialize, Serialize};

/// Power state reported by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerState {
    Running,
    Offline,
    Starting,
    Stopping,
    /// Any state this crate does not know about yet.
    #[serde(other)]
    Unknown,
}

/// Resource counters. Absent counters stay `None` and are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ServerResources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_bytes: Option<u64>,
    /// CPU usage as an absolute percentage (100.0 is one full core).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_absolute: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_rx_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_tx_bytes: Option<u64>,
}

/// The flat attributes of a resources response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ResourceUsage {
    pub current_state: ServerState,
    #[serde(default)]
    pub is_suspended: bool,
    #[serde(default)]
    pub resources: ServerResources,
}

/// A point-in-time usage reading. Never cached.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UsageSnapshot {
    pub state: ServerState,
    pub resources: ServerResources,
}

impl ResourceUsage {
    pub(crate) fn into_snapshot(self) -> UsageSnapshot {
        UsageSnapshot {
            state: self.current_state,
            resources: self.resources,
        }
    }
}
