//! The static catalog of admin tools shown under the server cards.

use serde::Serialize;

/// Whether a linked tool is usable; offline links render disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkState {
    Online,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardLink {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub state: LinkState,
    pub category: &'static str,
}

pub fn default_links() -> Vec<DashboardLink> {
    vec![
        DashboardLink {
            id: "analytics",
            title: "Analytics Dashboard",
            description: "View website traffic, user behavior, and performance metrics",
            url: "https://analytics.example.com",
            icon: "📊",
            state: LinkState::Online,
            category: "Analytics",
        },
        DashboardLink {
            id: "user-management",
            title: "User Management",
            description: "Manage users, roles, and permissions across all systems",
            url: "https://users.example.com",
            icon: "👥",
            state: LinkState::Online,
            category: "Management",
        },
        DashboardLink {
            id: "server-monitor",
            title: "Server Monitoring",
            description: "Real-time server performance and health monitoring",
            url: "https://monitoring.example.com",
            icon: "📈",
            state: LinkState::Online,
            category: "Infrastructure",
        },
        DashboardLink {
            id: "security",
            title: "Security Center",
            description: "Security logs, threat detection, and vulnerability scanning",
            url: "https://security.example.com",
            icon: "🛡",
            state: LinkState::Online,
            category: "Security",
        },
        DashboardLink {
            id: "database",
            title: "Database Admin",
            description: "Database management, queries, and performance optimization",
            url: "https://db.example.com",
            icon: "🗄",
            state: LinkState::Online,
            category: "Infrastructure",
        },
        DashboardLink {
            id: "settings",
            title: "System Settings",
            description: "Configure system-wide settings and preferences",
            url: "https://settings.example.com",
            icon: "⚙",
            state: LinkState::Online,
            category: "Management",
        },
    ]
}

/// Groups links by category, categories in order of first appearance.
pub fn group_by_category(links: &[DashboardLink]) -> Vec<(&'static str, Vec<&DashboardLink>)> {
    let mut groups: Vec<(&'static str, Vec<&DashboardLink>)> = Vec::new();
    for link in links {
        match groups.iter_mut().find(|(category, _)| *category == link.category) {
            Some((_, members)) => members.push(link),
            None => groups.push((link.category, vec![link])),
        }
    }
    groups
}
