//! Status dashboard and JSON API for a Proxmox VE cluster.
//!
//! The crate serves two status sources behind one HTTP router:
//!
//! - a simulated source that fabricates three healthy servers, and
//! - a live source that logs in to one or more Proxmox hosts, lists their
//!   nodes, and folds them into normalized [`ServerStatus`] records.
//!
//! A background poller keeps a server-rendered dashboard page up to date.
//!
//! # Examples
//!
//! ```no_run
//! use proxdash::{ClientConfig, HypervisorClient, ProxmoxConnection, ProxmoxResult};
//! use proxdash::{ProxmoxHost, ProxmoxPassword, ProxmoxPort, ProxmoxRealm, ProxmoxUsername};
//!
//! #[tokio::main]
//! async fn main() -> ProxmoxResult<()> {
//!     let connection = ProxmoxConnection::new(
//!         ProxmoxHost::new("192.168.1.100")?,
//!         ProxmoxPort::new(8006)?,
//!         ProxmoxUsername::new("root")?,
//!         ProxmoxPassword::new("secret")?,
//!         ProxmoxRealm::new("pam")?,
//!         true,
//!         true,
//!     )?;
//!     let client = HypervisorClient::new(connection, &ClientConfig::default())?;
//!
//!     for node in client.get_nodes().await? {
//!         println!("{}: {}", node.node, node.status);
//!     }
//!     Ok(())
//! }
//! ```

mod auth;
pub mod config;
mod core;
pub mod dashboard;
pub mod server;
pub mod status;
pub mod telemetry;


pub use crate::core::domain::error::{ProxmoxError, ProxmoxResult, ValidationError};
pub use crate::core::domain::model::{
    node_record::NodeRecord,
    node_status::{MemoryInfo, NodeStatus},
    proxmox_auth::ProxmoxAuth,
    proxmox_connection::ProxmoxConnection,
    server_status::{
        NodeDetails, PingResult, ServerState, ServerStatus, StatusReport, SystemInfo,
        iso_timestamp,
    },
    vm::VmSummary,
};
pub use crate::core::domain::value_object::{
    ProxmoxCSRFToken, ProxmoxHost, ProxmoxPassword, ProxmoxPort, ProxmoxRealm, ProxmoxTicket,
    ProxmoxUrl, ProxmoxUsername,
};
pub use crate::core::infrastructure::hypervisor_client::{
    ClientConfig, HypervisorClient, RateLimitConfig,
};
