//! Command-line and environment configuration.

use crate::{
    ClientConfig, ProxmoxConnection, ProxmoxHost, ProxmoxPassword, ProxmoxPort, ProxmoxRealm,
    ProxmoxResult, ProxmoxUsername, RateLimitConfig,
};
use clap::{ArgAction, Parser};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Address the HTTP server listens on.
    #[arg(long, env = "PROXDASH_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: String,

    /// Message returned by `GET /api/ping`.
    #[arg(long, env = "PING_MESSAGE", default_value = "ping")]
    pub ping_message: String,

    /// Primary Proxmox host; reported as the cluster host.
    #[arg(long, env = "PROXMOX_CLUSTER_HOST", default_value = "192.168.1.100")]
    pub cluster_host: String,

    /// Further standalone hosts queried with the same credentials.
    #[arg(long, env = "PROXMOX_EXTRA_HOSTS", value_delimiter = ',')]
    pub extra_hosts: Vec<String>,

    #[arg(long, env = "PROXMOX_PORT", default_value_t = 8006)]
    pub port: u16,

    #[arg(long, env = "PROXMOX_USER", default_value = "root")]
    pub user: String,

    #[arg(
        long,
        env = "PROXMOX_PASSWORD",
        default_value = "your-password",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub password: String,

    #[arg(long, env = "PROXMOX_REALM", default_value = "pam")]
    pub realm: String,

    /// Use `https` for the management API.
    #[arg(long, env = "PROXMOX_SECURE", default_value_t = true, action = ArgAction::Set)]
    pub secure: bool,

    /// Accept self-signed certificates.
    #[arg(
        long,
        env = "PROXMOX_ACCEPT_INVALID_CERTS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub accept_invalid_certs: bool,

    /// Per-request deadline for calls to Proxmox, in seconds.
    #[arg(long, env = "PROXMOX_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Outbound requests per second; unlimited when unset.
    #[arg(long, env = "PROXMOX_RATE_LIMIT_RPS")]
    pub rate_limit_rps: Option<NonZeroU32>,

    /// Burst size for the outbound limiter; defaults to the rate.
    #[arg(long, env = "PROXMOX_RATE_LIMIT_BURST")]
    pub rate_limit_burst: Option<NonZeroU32>,

    /// Dashboard refresh interval, in seconds.
    #[arg(long, env = "PROXDASH_POLL_SECS", default_value_t = 30)]
    pub poll_secs: u64,
}

impl Args {
    /// One validated connection per target, primary first. Blank and
    /// duplicate extra hosts are skipped.
    pub fn connections(&self) -> ProxmoxResult<Vec<ProxmoxConnection>> {
        let mut hosts: Vec<&str> = vec![self.cluster_host.trim()];
        for host in self.extra_hosts.iter().map(|h| h.trim()) {
            if !host.is_empty() && !hosts.contains(&host) {
                hosts.push(host);
            }
        }

        hosts
            .into_iter()
            .map(|host| {
                ProxmoxConnection::new(
                    ProxmoxHost::new(host)?,
                    ProxmoxPort::new(self.port)?,
                    ProxmoxUsername::new(self.user.as_str())?,
                    ProxmoxPassword::new(self.password.as_str())?,
                    ProxmoxRealm::new(self.realm.as_str())?,
                    self.secure,
                    self.accept_invalid_certs,
                )
            })
            .collect()
    }

    pub fn client_config(&self) -> ClientConfig {
        let rate_limit = self.rate_limit_rps.map(|rps| RateLimitConfig {
            requests_per_second: rps,
            burst_size: self.rate_limit_burst.unwrap_or(rps),
        });
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
            rate_limit,
            ..ClientConfig::default()
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_secs.max(1))
    }
}

/// Loads `.env` from the working directory. A missing file is not an error.
///
/// Runs before logging is set up, so the outcome is returned for the caller
/// to report.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    load_env_file(Path::new(".env"))
}

/// Loads an environment file, leaving already-set variables alone.
fn load_env_file(path: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(Some(path.to_path_buf())),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
