//! Fabricated status data for demo mode.

use crate::{
    PingResult, ProxmoxResult, ServerState, ServerStatus, StatusReport,
    status::source::StatusSource,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::ops::Range;

/// Value ranges for one simulated server. Ranges are half-open.
struct SimulatedServer {
    name: &'static str,
    uptime: &'static str,
    response_time: Range<u64>,
    cpu_usage: Range<u64>,
    memory_usage: Range<u64>,
}

const SERVERS: [SimulatedServer; 3] = [
    SimulatedServer {
        name: "Main Server",
        uptime: "99.9%",
        response_time: 10..60,
        cpu_usage: 20..50,
        memory_usage: 30..70,
    },
    SimulatedServer {
        name: "Database Server",
        uptime: "99.7%",
        response_time: 15..45,
        cpu_usage: 15..40,
        memory_usage: 40..75,
    },
    SimulatedServer {
        name: "API Gateway",
        uptime: "99.8%",
        response_time: 20..60,
        cpu_usage: 10..30,
        memory_usage: 25..55,
    },
];

const PING_ONLINE_PROBABILITY: f64 = 0.95;

/// Three always-online servers with randomized metrics.
pub fn simulated_report<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> StatusReport {
    let servers = SERVERS
        .iter()
        .map(|profile| {
            let mut server = ServerStatus::new(profile.name, ServerState::Online, profile.uptime, now)
                .with_response_time(rng.gen_range(profile.response_time.clone()));
            server.cpu_usage = Some(rng.gen_range(profile.cpu_usage.clone()));
            server.memory_usage = Some(rng.gen_range(profile.memory_usage.clone()));
            server
        })
        .collect();
    StatusReport::from_servers(servers, now, None)
}

/// A ping that answers for any name: online 95 % of the time with 10-109 ms.
pub fn simulated_ping<R: Rng + ?Sized>(
    rng: &mut R,
    server_name: &str,
    now: DateTime<Utc>,
) -> PingResult {
    let ping_time = rng.gen_range(10..110);
    if rng.gen_bool(PING_ONLINE_PROBABILITY) {
        PingResult::online(server_name, ping_time, now)
    } else {
        PingResult::offline(server_name, None, now)
    }
}

/// Demo-mode status source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedStatus;

#[async_trait]
impl StatusSource for SimulatedStatus {
    async fn fetch_status(&self) -> ProxmoxResult<StatusReport> {
        Ok(simulated_report(&mut rand::thread_rng(), Utc::now()))
    }

    async fn ping(&self, server_name: &str) -> ProxmoxResult<Option<PingResult>> {
        Ok(Some(simulated_ping(
            &mut rand::thread_rng(),
            server_name,
            Utc::now(),
        )))
    }
}
