//! Background refresh of the dashboard view.

use crate::{
    StatusReport,
    dashboard::view::{DashboardView, FALLBACK_ERROR, demo_report},
    status::StatusSource,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

/// Shortest allowed poll interval.
pub const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Fetches a report for the dashboard, falling back from the live source to
/// the simulated one and finally to a fixed demo payload.
#[derive(Clone)]
pub struct Poller {
    live: Arc<dyn StatusSource>,
    simulated: Arc<dyn StatusSource>,
    interval: Duration,
}

impl Poller {
    /// Intervals shorter than [`MIN_INTERVAL`] are raised to it.
    pub fn new(
        live: Arc<dyn StatusSource>,
        simulated: Arc<dyn StatusSource>,
        interval: Duration,
    ) -> Self {
        Self {
            live,
            simulated,
            interval: interval.max(MIN_INTERVAL),
        }
    }

    /// One poll. A live report is used only if it holds at least one server.
    pub async fn poll_once(&self) -> StatusReport {
        match self.live.fetch_status().await {
            Ok(report) if !report.servers.is_empty() => return report,
            Ok(_) => debug!("live source returned no servers"),
            Err(e) => warn!(error = %e, "live status unavailable"),
        }

        match self.simulated.fetch_status().await {
            Ok(report) => report,
            Err(e) => {
                warn!(error = %e, "simulated status unavailable, using demo data");
                demo_report(Utc::now())
            }
        }
    }

    /// Starts polling: once immediately, then on every interval tick or
    /// whenever [`DashboardHandle::refresh_now`] is called.
    pub fn spawn(self) -> DashboardHandle {
        let (tx, rx) = watch::channel(DashboardView::default());
        let notify = Arc::new(Notify::new());
        let interval = self.interval;
        let wake = Arc::clone(&notify);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!(every = ?self.interval, "dashboard poller started");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = wake.notified() => ticker.reset(),
                }

                tx.send_modify(DashboardView::begin_loading);
                let poller = self.clone();
                // A panicking source must not take the poller down with it.
                match tokio::spawn(async move { poller.poll_once().await }).await {
                    Ok(report) => {
                        debug!(servers = report.servers.len(), live = report.is_live(), "dashboard refreshed");
                        tx.send_modify(|view| view.succeed(report, Utc::now()));
                    }
                    Err(e) => {
                        error!(error = %e, "dashboard poll failed");
                        tx.send_modify(|view| view.fail(FALLBACK_ERROR, Utc::now()));
                    }
                }
            }
        });

        DashboardHandle {
            rx,
            notify,
            task,
            interval,
        }
    }
}

/// Owner side of a running poller.
#[derive(Debug)]
pub struct DashboardHandle {
    rx: watch::Receiver<DashboardView>,
    notify: Arc<Notify>,
    task: JoinHandle<()>,
    interval: Duration,
}

impl DashboardHandle {
    /// The most recently published view.
    pub fn snapshot(&self) -> DashboardView {
        self.rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardView> {
        self.rx.clone()
    }

    /// Requests a poll without waiting for the next tick. Requests made while
    /// a poll is running are coalesced into one follow-up poll.
    pub fn refresh_now(&self) {
        self.notify.notify_one();
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stops the poller. Any poll in flight is abandoned.
    pub fn shutdown(&self) {
        self.task.abort();
    }
}

impl Drop for DashboardHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
