use crate::{
    dashboard::{DashboardHandle, DashboardLink, PageRenderer, Poller, default_links},
    status::StatusSource,
};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    /// Backs `/api/status` and `/api/ping/:serverName`.
    pub simulated: Arc<dyn StatusSource>,
    /// Backs the `/api/proxmox` routes.
    pub live: Arc<dyn StatusSource>,
    pub ping_message: Arc<str>,
    pub dashboard: Arc<DashboardHandle>,
    pub links: Arc<[DashboardLink]>,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    /// Wires both sources into the API and starts the dashboard poller.
    /// Must be called from within a tokio runtime.
    pub fn new(
        live: Arc<dyn StatusSource>,
        simulated: Arc<dyn StatusSource>,
        ping_message: impl Into<Arc<str>>,
        poll_interval: Duration,
    ) -> tera::Result<Self> {
        let pages = PageRenderer::new()?;
        let dashboard = Poller::new(Arc::clone(&live), Arc::clone(&simulated), poll_interval).spawn();
        Ok(Self {
            simulated,
            live,
            ping_message: ping_message.into(),
            dashboard: Arc::new(dashboard),
            links: default_links().into(),
            pages: Arc::new(pages),
        })
    }
}
