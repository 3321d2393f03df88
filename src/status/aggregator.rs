//! Pure mapping from raw cluster node records to client-facing status records.

use crate::{NodeDetails, NodeRecord, NodeStatus, ServerState, ServerStatus};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Name of the synthetic record emitted when the cluster answers with no nodes.
pub const EMPTY_CLUSTER_NAME: &str = "Cluster Information";
pub const EMPTY_CLUSTER_MESSAGE: &str = "Connected to Proxmox cluster but no nodes visible";

/// One node as listed by the cluster, with its detail record when the
/// per-node status call succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSnapshot {
    pub record: NodeRecord,
    pub detail: Option<NodeStatus>,
}

impl From<NodeRecord> for NodeSnapshot {
    fn from(record: NodeRecord) -> Self {
        Self {
            record,
            detail: None,
        }
    }
}

/// What a single target returned when asked for its nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterOutcome {
    /// The node list was fetched; `round_trip` is how long the list call took.
    Reachable {
        nodes: Vec<NodeSnapshot>,
        round_trip: Duration,
    },
    /// The node list could not be fetched at all.
    Unreachable { error: String },
}

/// Renders an uptime in seconds as `"{d}d {h}h"`, or `"{h}h"` under a day.
pub fn uptime_string(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    if days > 0 {
        format!("{}d {}h", days, hours)
    } else {
        format!("{}h", hours)
    }
}

/// `round(used / max * 100)`, with a `max` of zero treated as one.
pub fn usage_percent(used: u64, max: u64) -> u64 {
    let max = max.max(1);
    ((used as f64 / max as f64) * 100.0).round() as u64
}

/// `round(cpu * 100)` for a fractional CPU load; negative input clamps to 0.
pub fn cpu_percent(cpu: f64) -> u64 {
    (cpu * 100.0).round().max(0.0) as u64
}

/// Maps one node to its normalized record.
pub fn server_from_node(
    snapshot: &NodeSnapshot,
    round_trip: Duration,
    checked_at: DateTime<Utc>,
) -> ServerStatus {
    let node = &snapshot.record;
    let status = if node.is_online() {
        ServerState::Online
    } else {
        ServerState::Offline
    };

    let mut server = ServerStatus::new(
        node.node.clone(),
        status,
        uptime_string(node.uptime.unwrap_or(0)),
        checked_at,
    )
    .with_response_time(millis(round_trip));
    server.cpu_usage = Some(cpu_percent(node.cpu.unwrap_or(0.0)));
    server.memory_usage = Some(usage_percent(
        node.mem.unwrap_or(0),
        node.maxmem.unwrap_or(0),
    ));
    server.disk_usage = Some(usage_percent(
        node.disk.unwrap_or(0),
        node.maxdisk.unwrap_or(0),
    ));
    server.node_details = Some(NodeDetails {
        kind: node.kind.clone().unwrap_or_else(|| "node".to_string()),
        level: node.level.clone().unwrap_or_default(),
        id: node.id.clone().unwrap_or_else(|| node.node.clone()),
        kernel_version: snapshot.detail.as_ref().and_then(|d| d.kversion.clone()),
        load_average: snapshot.detail.as_ref().and_then(|d| d.loadavg),
    });
    server
}

/// Folds one target's outcome into server records.
///
/// An unreachable target becomes a single offline record carrying the error;
/// a reachable target with no nodes becomes a single online record, so the
/// two cases stay distinguishable on the dashboard.
pub fn aggregate(host: &str, outcome: &ClusterOutcome, checked_at: DateTime<Utc>) -> Vec<ServerStatus> {
    match outcome {
        ClusterOutcome::Unreachable { error } => {
            let mut server = ServerStatus::new(
                format!("Cluster {}", host),
                ServerState::Offline,
                "0%",
                checked_at,
            );
            server.error = Some(format!("Connection failed: {}", error));
            vec![server]
        }
        ClusterOutcome::Reachable { nodes, round_trip } if nodes.is_empty() => {
            let mut server =
                ServerStatus::new(EMPTY_CLUSTER_NAME, ServerState::Online, "Connected", checked_at)
                    .with_response_time(millis(*round_trip));
            server.message = Some(EMPTY_CLUSTER_MESSAGE.to_string());
            vec![server]
        }
        ClusterOutcome::Reachable { nodes, round_trip } => nodes
            .iter()
            .map(|node| server_from_node(node, *round_trip, checked_at))
            .collect(),
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
