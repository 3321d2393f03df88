use crate::core::domain::{
    error::ProxmoxResult,
    value_object::{
        ProxmoxHost, ProxmoxPassword, ProxmoxPort, ProxmoxRealm, ProxmoxUrl, ProxmoxUsername,
    },
};

/// Everything needed to reach and log in to one Proxmox host.
#[derive(Debug, Clone)]
pub struct ProxmoxConnection {
    proxmox_host: ProxmoxHost,
    proxmox_port: ProxmoxPort,
    proxmox_username: ProxmoxUsername,
    proxmox_password: ProxmoxPassword,
    proxmox_realm: ProxmoxRealm,
    accept_invalid_certs: bool,
    proxmox_url: ProxmoxUrl,
}

impl ProxmoxConnection {
    pub fn new(
        proxmox_host: ProxmoxHost,
        proxmox_port: ProxmoxPort,
        proxmox_username: ProxmoxUsername,
        proxmox_password: ProxmoxPassword,
        proxmox_realm: ProxmoxRealm,
        secure: bool,
        accept_invalid_certs: bool,
    ) -> ProxmoxResult<Self> {
        let proxmox_url = ProxmoxUrl::new(&proxmox_host, proxmox_port, secure)?;
        Ok(Self {
            proxmox_host,
            proxmox_port,
            proxmox_username,
            proxmox_password,
            proxmox_realm,
            accept_invalid_certs,
            proxmox_url,
        })
    }

    pub fn proxmox_host(&self) -> &ProxmoxHost {
        &self.proxmox_host
    }

    pub fn proxmox_port(&self) -> ProxmoxPort {
        self.proxmox_port
    }

    pub fn proxmox_password(&self) -> &ProxmoxPassword {
        &self.proxmox_password
    }

    /// The login name in `user@realm` form.
    pub fn login_name(&self) -> String {
        format!(
            "{}@{}",
            self.proxmox_username.as_str(),
            self.proxmox_realm.as_str()
        )
    }

    pub fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    pub fn proxmox_url(&self) -> &ProxmoxUrl {
        &self.proxmox_url
    }
}
