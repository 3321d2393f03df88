//! Domain model for node list items from the `/nodes` endpoint.

use serde::{Deserialize, Serialize};

/// A node in the Proxmox cluster as returned by `/api2/json/nodes`.
///
/// Every numeric field is optional: offline nodes are reported with little
/// more than their name and status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NodeRecord {
    /// The node name (e.g., "pve1").
    pub node: String,
    /// Raw node status (e.g., "online", "offline", "unknown").
    #[serde(default)]
    pub status: String,
    /// Uptime in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// CPU usage as a fraction (0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,
    /// Memory usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem: Option<u64>,
    /// Maximum memory in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxmem: Option<u64>,
    /// Disk usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<u64>,
    /// Maximum disk space in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxdisk: Option<u64>,
    /// Resource type, always "node" for this endpoint.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Support subscription level (e.g., "c", "b", or empty).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Unique node identifier (e.g., "node/pve1").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl NodeRecord {
    /// Returns `true` when the cluster reports the node as online.
    pub fn is_online(&self) -> bool {
        self.status == "online"
    }
}
