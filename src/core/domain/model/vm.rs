//! Domain model for QEMU guests from the `/nodes/{node}/qemu` endpoint.

use serde::{Deserialize, Serialize};

/// A virtual machine as listed for one node.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VmSummary {
    /// The VM identifier (unique per cluster).
    pub vmid: u32,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Current status (e.g., "running", "stopped").
    #[serde(default)]
    pub status: String,
    /// CPU usage as a fraction (0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,
    /// Memory usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem: Option<u64>,
    /// Maximum memory in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxmem: Option<u64>,
    /// Uptime in seconds (if running).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
}
