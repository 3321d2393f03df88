//! Dashboard view state: `Idle -> Loading -> {Success, Error}`.

use crate::{ServerState, ServerStatus, StatusReport, SystemInfo};
use chrono::{DateTime, Utc};

pub const FALLBACK_ERROR: &str = "Failed to fetch server status. Using demo data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Everything the page renderer needs. Servers and summary are kept while a
/// new poll is loading so the page never blanks between refreshes.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub phase: ViewPhase,
    pub servers: Vec<ServerStatus>,
    pub system_info: Option<SystemInfo>,
    pub error: Option<String>,
    pub last_refresh: Option<DateTime<Utc>>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self {
            phase: ViewPhase::Idle,
            servers: Vec::new(),
            system_info: None,
            error: None,
            last_refresh: None,
        }
    }
}

impl DashboardView {
    pub fn is_loading(&self) -> bool {
        self.phase == ViewPhase::Loading
    }

    /// Whether the shown data came from a live cluster.
    pub fn is_live(&self) -> bool {
        self.system_info
            .as_ref()
            .is_some_and(|info| info.cluster_host.is_some())
    }

    /// Enters `Loading`, clearing any previous error.
    pub fn begin_loading(&mut self) {
        self.phase = ViewPhase::Loading;
        self.error = None;
    }

    pub fn succeed(&mut self, report: StatusReport, at: DateTime<Utc>) {
        self.phase = ViewPhase::Success;
        self.servers = report.servers;
        self.system_info = Some(report.system_info);
        self.error = None;
        self.last_refresh = Some(at);
    }

    /// Enters `Error` and shows the last-resort payload alongside the message.
    pub fn fail(&mut self, message: impl Into<String>, at: DateTime<Utc>) {
        let report = last_resort_report(at);
        self.phase = ViewPhase::Error;
        self.servers = report.servers;
        self.system_info = Some(report.system_info);
        self.error = Some(message.into());
        self.last_refresh = Some(at);
    }
}

/// Shown when neither the live nor the simulated source produced a report.
pub fn demo_report(at: DateTime<Utc>) -> StatusReport {
    let servers = [
        ("TMMNets-Server-01", "99.9%", 15),
        ("TMMNets-Server-02", "99.7%", 23),
        ("TMMNets-Server-03", "99.8%", 18),
    ]
    .into_iter()
    .map(|(name, uptime, millis)| {
        ServerStatus::new(name, ServerState::Online, uptime, at).with_response_time(millis)
    })
    .collect();
    StatusReport::from_servers(servers, at, None)
}

/// Shown when the poll itself failed.
pub fn last_resort_report(at: DateTime<Utc>) -> StatusReport {
    let server =
        ServerStatus::new("TMMNets-Demo-01", ServerState::Online, "Demo", at).with_response_time(10);
    StatusReport::from_servers(vec![server], at, None)
}
