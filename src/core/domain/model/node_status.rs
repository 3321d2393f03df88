//! Domain model for node status from the `/nodes/{node}/status` endpoint.

use super::serde_helpers::load_average;
use serde::{Deserialize, Serialize};

/// Detailed status information for a Proxmox node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NodeStatus {
    /// CPU usage as a fraction (0.0 to 1.0).
    #[serde(default)]
    pub cpu: f64,
    /// Memory usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryInfo>,
    /// System uptime in seconds.
    #[serde(default)]
    pub uptime: u64,
    /// Kernel version string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kversion: Option<String>,
    /// Load average over 1, 5, and 15 minutes.
    #[serde(
        default,
        with = "load_average",
        skip_serializing_if = "Option::is_none"
    )]
    pub loadavg: Option<[f64; 3]>,
    /// Proxmox VE manager version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pveversion: Option<String>,
}

/// Memory usage information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MemoryInfo {
    /// Total memory in bytes.
    pub total: u64,
    /// Used memory in bytes.
    pub used: u64,
    /// Free memory in bytes.
    pub free: u64,
}
