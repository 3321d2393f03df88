//! Live status pulled from one or more Proxmox hosts.

use crate::{
    HypervisorClient, PingResult, ProxmoxResult, StatusReport,
    status::{
        aggregator::{ClusterOutcome, NodeSnapshot, aggregate},
        source::StatusSource,
    },
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, warn};

/// Status source backed by Proxmox clients.
///
/// The first client is the primary target; its host is reported as
/// `clusterHost`. Further clients are queried the same way and their records
/// appended, so a single cluster address and a list of standalone hosts are
/// both just configurations of this one type.
#[derive(Debug, Clone)]
pub struct ClusterStatus {
    targets: Vec<Arc<HypervisorClient>>,
}

impl ClusterStatus {
    pub fn new(primary: Arc<HypervisorClient>) -> Self {
        Self {
            targets: vec![primary],
        }
    }

    /// Adds another host to query and ping.
    pub fn with_target(mut self, client: Arc<HypervisorClient>) -> Self {
        self.targets.push(client);
        self
    }

    pub fn primary_host(&self) -> &str {
        self.targets[0].host()
    }

    pub fn targets(&self) -> &[Arc<HypervisorClient>] {
        &self.targets
    }

    /// Lists the target's nodes, then fetches each node's detail record.
    /// A failed detail fetch is logged and the node kept with its base data.
    pub async fn collect(client: &HypervisorClient) -> ClusterOutcome {
        let started = Instant::now();
        let records = match client.get_nodes().await {
            Ok(records) => records,
            Err(e) => {
                error!(host = %client.host(), error = %e, "proxmox cluster connection failed");
                return ClusterOutcome::Unreachable {
                    error: e.to_string(),
                };
            }
        };
        let round_trip = started.elapsed();
        debug!(host = %client.host(), nodes = records.len(), ?round_trip, "fetched node list");

        let mut nodes = Vec::with_capacity(records.len());
        for record in records {
            let detail = match client.get_node_status(&record.node).await {
                Ok(detail) => Some(detail),
                Err(e) => {
                    warn!(host = %client.host(), node = %record.node, error = %e,
                        "could not fetch node details");
                    None
                }
            };
            nodes.push(NodeSnapshot { record, detail });
        }
        ClusterOutcome::Reachable { nodes, round_trip }
    }
}

#[async_trait]
impl StatusSource for ClusterStatus {
    async fn fetch_status(&self) -> ProxmoxResult<StatusReport> {
        let mut servers = Vec::new();
        for client in &self.targets {
            let outcome = Self::collect(client).await;
            servers.extend(aggregate(client.host(), &outcome, Utc::now()));
        }
        Ok(StatusReport::from_servers(
            servers,
            Utc::now(),
            Some(self.primary_host().to_string()),
        ))
    }

    async fn ping(&self, server_name: &str) -> ProxmoxResult<Option<PingResult>> {
        let Some(client) = self.targets.iter().find(|c| c.host() == server_name) else {
            return Ok(None);
        };

        let started = Instant::now();
        let result = match client.get_nodes().await {
            Ok(_) => {
                let millis = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                PingResult::online(server_name, millis, Utc::now())
            }
            Err(e) => {
                warn!(host = %client.host(), error = %e, "ping failed");
                PingResult::offline(server_name, Some(e.to_string()), Utc::now())
            }
        };
        Ok(Some(result))
    }
}
