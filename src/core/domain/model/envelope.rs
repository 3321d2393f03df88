use serde::Deserialize;

/// Every Proxmox API response wraps its payload in a `data` member.
///
/// A missing or `null` member deserializes to `None`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope<T> {
    pub data: Option<T>,
}
