//! Shared fixtures for tests that talk to a wiremock stand-in for Proxmox.

use crate::{
    ClientConfig, HypervisorClient, ProxmoxAuth, ProxmoxCSRFToken, ProxmoxConnection, ProxmoxHost,
    ProxmoxPassword, ProxmoxPort, ProxmoxRealm, ProxmoxTicket, ProxmoxUsername,
};
use std::net::TcpListener;
use std::sync::Arc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub(crate) const TEST_TICKET: &str = "PVE:testuser@pam:4EEC61E2::sig";
pub(crate) const TEST_CSRF: &str = "4EEC61E2:token";

fn connection(host: &str, port: u16) -> ProxmoxConnection {
    ProxmoxConnection::new(
        ProxmoxHost::new(host).unwrap(),
        ProxmoxPort::new(port).unwrap(),
        ProxmoxUsername::new("testuser").unwrap(),
        ProxmoxPassword::new("testpass").unwrap(),
        ProxmoxRealm::new("pam").unwrap(),
        false,
        true,
    )
    .unwrap()
}

/// Plain-http connection to the mock server.
pub(crate) fn connection_for(server: &MockServer) -> ProxmoxConnection {
    let address = server.address();
    connection(&address.ip().to_string(), address.port())
}

/// Connection to a local port nothing listens on.
pub(crate) fn unreachable_connection() -> ProxmoxConnection {
    let port = TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .unwrap()
        .port();
    connection("127.0.0.1", port)
}

pub(crate) fn test_auth() -> ProxmoxAuth {
    ProxmoxAuth::new(
        ProxmoxTicket::new_unchecked(TEST_TICKET.to_string()),
        ProxmoxCSRFToken::new_unchecked(TEST_CSRF.to_string()),
    )
}

pub(crate) fn client_for(server: &MockServer) -> Arc<HypervisorClient> {
    Arc::new(HypervisorClient::new(connection_for(server), &ClientConfig::default()).unwrap())
}

/// Mounts a successful ticket endpoint that must be hit exactly `times` times.
pub(crate) async fn mount_login(server: &MockServer, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api2/json/access/ticket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "ticket": TEST_TICKET,
                "CSRFPreventionToken": TEST_CSRF,
                "username": "testuser@pam"
            }
        })))
        .expect(times)
        .mount(server)
        .await;
}

/// Mounts a node list with the given `(name, status)` pairs.
pub(crate) async fn mount_nodes(server: &MockServer, nodes: &[(&str, &str)]) {
    let data: Vec<_> = nodes
        .iter()
        .map(|(node, status)| {
            serde_json::json!({
                "node": node,
                "status": status,
                "type": "node",
                "id": format!("node/{}", node),
                "level": "",
                "uptime": 90_000,
                "cpu": 0.25,
                "mem": 4_294_967_296_u64,
                "maxmem": 17_179_869_184_u64,
                "disk": 10_737_418_240_u64,
                "maxdisk": 107_374_182_400_u64
            })
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": data })))
        .mount(server)
        .await;
}
