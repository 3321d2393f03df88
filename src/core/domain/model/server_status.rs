//! Client-facing status records served by the JSON API and rendered by the dashboard.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Health of one server card.
///
/// `Maintenance` is part of the client contract and has its own styling in
/// the dashboard, but no status source currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerState {
    Online,
    Offline,
    Maintenance,
}

impl ServerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerState::Online => "online",
            ServerState::Offline => "offline",
            ServerState::Maintenance => "maintenance",
        }
    }
}

/// Identifying fields copied from the cluster's node record, plus whatever
/// the per-node status call returned.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetails {
    #[serde(rename = "type")]
    pub kind: String,
    pub level: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_average: Option<[f64; 3]>,
}

/// One normalized server record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub name: String,
    pub status: ServerState,
    pub uptime: String,
    pub last_checked: String,
    /// Milliseconds; serialized as `null` when the target did not answer.
    pub response_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_usage: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_usage: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_details: Option<NodeDetails>,
}

impl ServerStatus {
    /// A record with only the mandatory fields set.
    pub fn new(
        name: impl Into<String>,
        status: ServerState,
        uptime: impl Into<String>,
        checked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            uptime: uptime.into(),
            last_checked: iso_timestamp(checked_at),
            response_time: None,
            cpu_usage: None,
            memory_usage: None,
            disk_usage: None,
            message: None,
            error: None,
            node_details: None,
        }
    }

    pub fn with_response_time(mut self, millis: u64) -> Self {
        self.response_time = Some(millis);
        self
    }

    pub fn is_online(&self) -> bool {
        self.status == ServerState::Online
    }
}

/// Summary counts over a list of server records.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub total_servers: usize,
    pub online_servers: usize,
    pub offline_servers: usize,
    pub last_update: String,
    /// Present only when the data comes from a live cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_host: Option<String>,
}

/// The body of both `/api/status` and `/api/proxmox/status`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub servers: Vec<ServerStatus>,
    pub system_info: SystemInfo,
}

impl StatusReport {
    /// Builds a report whose summary is computed from `servers`, so that
    /// `total == online + offline == servers.len()` always holds.
    pub fn from_servers(
        servers: Vec<ServerStatus>,
        updated_at: DateTime<Utc>,
        cluster_host: Option<String>,
    ) -> Self {
        let online_servers = servers.iter().filter(|s| s.is_online()).count();
        let system_info = SystemInfo {
            total_servers: servers.len(),
            online_servers,
            offline_servers: servers.len() - online_servers,
            last_update: iso_timestamp(updated_at),
            cluster_host,
        };
        Self {
            servers,
            system_info,
        }
    }

    /// Whether the report came from a live cluster.
    pub fn is_live(&self) -> bool {
        self.system_info.cluster_host.is_some()
    }
}

/// Response of the single-target ping endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResult {
    pub server_name: String,
    pub status: ServerState,
    pub response_time: Option<u64>,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PingResult {
    pub fn online(server_name: impl Into<String>, millis: u64, at: DateTime<Utc>) -> Self {
        Self {
            server_name: server_name.into(),
            status: ServerState::Online,
            response_time: Some(millis),
            timestamp: iso_timestamp(at),
            error: None,
        }
    }

    pub fn offline(server_name: impl Into<String>, error: Option<String>, at: DateTime<Utc>) -> Self {
        Self {
            server_name: server_name.into(),
            status: ServerState::Offline,
            response_time: None,
            timestamp: iso_timestamp(at),
            error,
        }
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
