pub(crate) mod envelope;
pub mod node_record;
pub mod node_status;
pub mod proxmox_auth;
pub mod proxmox_connection;
mod serde_helpers;
pub mod server_status;
pub mod vm;
