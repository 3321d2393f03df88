use crate::{PingResult, ProxmoxResult, StatusReport};
use async_trait::async_trait;

/// A producer of status reports and single-target pings.
///
/// Implementations report unreachable upstreams as data (offline records);
/// an `Err` means the source itself failed and maps to an HTTP 500.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Builds a full report of every server this source knows about.
    async fn fetch_status(&self) -> ProxmoxResult<StatusReport>;

    /// Probes one target. `Ok(None)` means the name is not a known target.
    async fn ping(&self, server_name: &str) -> ProxmoxResult<Option<PingResult>>;
}
