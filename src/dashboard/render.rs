//! Server-side HTML rendering of the dashboard page.
//!
//! The page is a tera template compiled once into a [`PageRenderer`].
//! Rendering is a pure function of the view, the link catalog, and the
//! current time. The page reloads itself on the poll interval.

use crate::{
    ServerState, ServerStatus,
    dashboard::{
        links::{DashboardLink, group_by_category},
        view::DashboardView,
    },
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "dashboard.html";
const TITLE: &str = "TMMNets Home Dashboard";
const SKELETON_CARDS: usize = 3;

#[derive(Serialize)]
struct Summary<'a> {
    online: usize,
    total: usize,
    cluster_host: Option<&'a str>,
    last_refresh: Option<String>,
}

#[derive(Serialize)]
struct Usage {
    label: &'static str,
    percent: u64,
}

#[derive(Serialize)]
struct Card<'a> {
    name: &'a str,
    state: &'static str,
    icon: &'static str,
    uptime: &'a str,
    last_checked: String,
    response_time: Option<u64>,
    usage: Vec<Usage>,
    note: Option<&'a str>,
}

#[derive(Serialize)]
struct LinkGroup<'a> {
    category: &'static str,
    links: Vec<&'a DashboardLink>,
}

/// Holds the compiled page template.
#[derive(Debug)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> tera::Result<Self> {
        // `.html` names get autoescaping.
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, include_str!("templates/dashboard.html"))?;
        Ok(Self { tera })
    }

    /// Renders the complete dashboard page.
    pub fn render(
        &self,
        view: &DashboardView,
        links: &[DashboardLink],
        refresh_every: Duration,
        now: DateTime<Utc>,
    ) -> tera::Result<String> {
        let summary = view.system_info.as_ref().map(|info| Summary {
            online: info.online_servers,
            total: info.total_servers,
            cluster_host: info.cluster_host.as_deref(),
            last_refresh: view.last_refresh.map(|at| relative_time(at, now)),
        });
        let skeletons = if view.servers.is_empty() && view.is_loading() {
            SKELETON_CARDS
        } else {
            0
        };
        let cards: Vec<Card<'_>> = view.servers.iter().map(|s| card(s, now)).collect();
        let link_groups: Vec<LinkGroup<'_>> = group_by_category(links)
            .into_iter()
            .map(|(category, links)| LinkGroup { category, links })
            .collect();

        let mut context = Context::new();
        context.insert("title", TITLE);
        context.insert("refresh_secs", &refresh_every.as_secs().max(1));
        context.insert("summary", &summary);
        context.insert("live", &view.is_live());
        context.insert("error", &view.error);
        context.insert("skeletons", &skeletons);
        context.insert("cards", &cards);
        context.insert("link_groups", &link_groups);

        self.tera.render(TEMPLATE_NAME, &context)
    }
}

fn card(server: &ServerStatus, now: DateTime<Utc>) -> Card<'_> {
    let icon = match server.status {
        ServerState::Online => "📶",
        ServerState::Offline => "🚫",
        ServerState::Maintenance => "🛠",
    };
    let last_checked = DateTime::parse_from_rfc3339(&server.last_checked)
        .map(|at| relative_time(at.with_timezone(&Utc), now))
        .unwrap_or_else(|_| server.last_checked.clone());
    let usage = [
        ("CPU", server.cpu_usage),
        ("Memory", server.memory_usage),
        ("Disk", server.disk_usage),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|percent| Usage { label, percent }))
    .collect();

    Card {
        name: &server.name,
        state: server.status.as_str(),
        icon,
        uptime: &server.uptime,
        last_checked,
        response_time: server.response_time.filter(|ms| *ms > 0),
        usage,
        note: server.error.as_deref().or(server.message.as_deref()),
    }
}

/// "Just now", "N minutes ago", or "N hours ago".
pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - at).num_seconds();
    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3_600 {
        format!("{} minutes ago", seconds / 60)
    } else {
        format!("{} hours ago", seconds / 3_600)
    }
}
