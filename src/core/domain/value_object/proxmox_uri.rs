use crate::core::domain::{
    error::ValidationError,
    value_object::{proxmox_host::ProxmoxHost, proxmox_port::ProxmoxPort},
};
use url::Url;

/// Base URL of a Proxmox VE API endpoint, e.g. `https://pve.example.com:8006/`.
///
/// API paths are appended segment by segment under `/api2/json`, so node
/// names are percent-encoded rather than spliced into the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxmoxUrl(Url);

impl ProxmoxUrl {
    /// Builds the base URL from a host, port, and scheme choice.
    pub fn new(host: &ProxmoxHost, port: ProxmoxPort, secure: bool) -> Result<Self, ValidationError> {
        let scheme = if secure { "https" } else { "http" };
        let host = if host.as_str().contains(':') {
            format!("[{}]", host.as_str())
        } else {
            host.as_str().to_string()
        };
        let raw = format!("{}://{}:{}/", scheme, host, port.get());
        validate_url(&raw)?;
        Url::parse(&raw)
            .map(Self)
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))
    }

    /// Returns the base URL.
    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the full URL of an API resource below `/api2/json`.
    pub fn api_endpoint(&self, segments: &[&str]) -> Result<Url, ValidationError> {
        let mut url = self.0.clone();
        url.path_segments_mut()
            .map_err(|_| ValidationError::Format("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["api2", "json"])
            .extend(segments);
        Ok(url)
    }
}

/// Validates a base URL: http(s) scheme, a host, and an empty path.
pub(crate) fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }
    let parsed =
        Url::parse(url).map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::ConstraintViolation(
            "Invalid scheme. Must be one of: http, https".to_string(),
        ));
    }
    if parsed.host_str().is_none() {
        return Err(ValidationError::ConstraintViolation(
            "URL must contain a host".to_string(),
        ));
    }
    if parsed.path() != "/" {
        return Err(ValidationError::ConstraintViolation(
            "Base URL must not contain a path".to_string(),
        ));
    }
    Ok(())
}
