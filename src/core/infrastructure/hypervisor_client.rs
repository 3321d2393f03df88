//! HTTP client for one Proxmox VE host: login, session reuse, and the handful
//! of read-only endpoints the dashboard needs.

use crate::{
    ProxmoxAuth, ProxmoxConnection, ProxmoxError, ProxmoxResult,
    auth::application::service::login_service::LoginService,
    core::domain::model::{
        envelope::ApiEnvelope, node_record::NodeRecord, node_status::NodeStatus, vm::VmSummary,
    },
};
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{Client, StatusCode};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// Outbound request budget for the optional rate limiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests_per_second: NonZeroU32,
    pub burst_size: NonZeroU32,
}

/// Transport settings shared by every request a client sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Deadline for a whole request, connect through body.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(3),
            rate_limit: None,
        }
    }
}

/// Authenticated client for a single Proxmox host.
///
/// The session is created lazily on the first call that needs it. Logins are
/// serialized: concurrent callers that find no session wait for one login
/// instead of racing to overwrite each other's ticket. There is no expiry
/// tracking; when the cluster answers `401` the session that request carried
/// is dropped and the next call logs in again. The rejected call itself is
/// not retried. With a rate limit configured, logins count against it too.
#[derive(Debug)]
pub struct HypervisorClient {
    http_client: Client,
    connection: Arc<ProxmoxConnection>,
    auth: Arc<RwLock<Option<ProxmoxAuth>>>,
    login_lock: Mutex<()>,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl HypervisorClient {
    /// Creates a new client. The client starts unauthenticated.
    ///
    /// # Errors
    /// Returns `ProxmoxError::Network` if the HTTP client cannot be built.
    pub fn new(connection: ProxmoxConnection, config: &ClientConfig) -> ProxmoxResult<Self> {
        let http_client = Client::builder()
            .danger_accept_invalid_certs(connection.accepts_invalid_certs())
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ProxmoxError::Network(e.to_string()))?;

        let rate_limiter = config.rate_limit.map(|rl| {
            let quota = Quota::per_second(rl.requests_per_second).allow_burst(rl.burst_size);
            Arc::new(DefaultDirectRateLimiter::direct(quota))
        });

        Ok(Self {
            http_client,
            connection: Arc::new(connection),
            auth: Arc::new(RwLock::new(None)),
            login_lock: Mutex::new(()),
            rate_limiter,
        })
    }

    /// Returns the configured host name.
    pub fn host(&self) -> &str {
        self.connection.proxmox_host().as_str()
    }

    /// Replaces the session (used to resume a known session).
    pub async fn set_auth(&self, auth: ProxmoxAuth) {
        *self.auth.write().await = Some(auth);
    }

    /// Returns the current session, if any.
    pub async fn auth(&self) -> Option<ProxmoxAuth> {
        self.auth.read().await.clone()
    }

    /// Returns `true` if a session is held.
    pub async fn is_authenticated(&self) -> bool {
        self.auth.read().await.is_some()
    }

    /// Logs in with the configured credentials and stores the new session.
    ///
    /// # Errors
    /// `ProxmoxError::Authentication` when the credentials are rejected or the
    /// response has no ticket; `Network`/`Parse` for transport and body errors.
    pub async fn authenticate(&self) -> ProxmoxResult<()> {
        self.throttle().await;
        let auth = LoginService::new()
            .execute(&self.http_client, &self.connection)
            .await
            .inspect_err(|e| warn!(host = %self.host(), error = %e, "proxmox authentication failed"))?;
        *self.auth.write().await = Some(auth);
        debug!(host = %self.host(), "proxmox session established");
        Ok(())
    }

    /// Lists the cluster's nodes. A response without `data` is an empty list.
    pub async fn get_nodes(&self) -> ProxmoxResult<Vec<NodeRecord>> {
        let nodes = self.get::<Vec<NodeRecord>>(&["nodes"]).await?;
        Ok(nodes.unwrap_or_default())
    }

    /// Fetches the detailed status of one node.
    pub async fn get_node_status(&self, node: &str) -> ProxmoxResult<NodeStatus> {
        self.get::<NodeStatus>(&["nodes", node, "status"])
            .await?
            .ok_or_else(|| {
                ProxmoxError::Parse(format!("status response for node {} had no data", node))
            })
    }

    /// Lists the QEMU guests of one node.
    ///
    /// Unlike the other calls this never fails: errors are logged and an
    /// empty list is returned.
    pub async fn get_vms(&self, node: &str) -> Vec<VmSummary> {
        match self.get::<Vec<VmSummary>>(&["nodes", node, "qemu"]).await {
            Ok(vms) => vms.unwrap_or_default(),
            Err(e) => {
                warn!(host = %self.host(), node, error = %e, "error fetching VMs");
                Vec::new()
            }
        }
    }

    /// Performs an authenticated GET and unwraps the `data` member.
    async fn get<T>(&self, segments: &[&str]) -> ProxmoxResult<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        self.ensure_authenticated().await?;
        self.throttle().await;

        let url = self.connection.proxmox_url().api_endpoint(segments)?;
        let mut req_builder = self.http_client.get(url);

        let sent = self.auth.read().await.clone();
        if let Some(auth) = &sent {
            req_builder = req_builder
                .header("Cookie", auth.ticket().as_cookie_header())
                .header("CSRFPreventionToken", auth.csrf_token().as_str());
        }

        let response = req_builder
            .send()
            .await
            .map_err(ProxmoxError::from_transport)?;

        if response.status() == StatusCode::UNAUTHORIZED {
            // Only drop the session this request carried; a newer login stays.
            let mut guard = self.auth.write().await;
            if *guard == sent {
                guard.take();
            }
            return Err(ProxmoxError::Authentication(
                "session ticket was rejected".to_string(),
            ));
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(ProxmoxError::Network(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(ProxmoxError::from_transport)?;
        let envelope: ApiEnvelope<T> = serde_json::from_slice(&body)
            .map_err(|e| ProxmoxError::Parse(format!("JSON parse error: {}", e)))?;
        Ok(envelope.data)
    }

    async fn throttle(&self) {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }
    }

    /// Logs in when no session is held. Holding `login_lock` across the
    /// re-check makes concurrent callers share one login.
    async fn ensure_authenticated(&self) -> ProxmoxResult<()> {
        if self.auth.read().await.is_some() {
            return Ok(());
        }
        let _login = self.login_lock.lock().await;
        if self.auth.read().await.is_some() {
            return Ok(());
        }
        self.authenticate().await
    }
}
