use crate::{
    ProxmoxError,
    tests::support::{client_for, test_auth},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

async fn authenticated_server() -> (MockServer, std::sync::Arc<crate::HypervisorClient>) {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);
    client.set_auth(test_auth()).await;
    (mock_server, client)
}

#[tokio::test]
async fn test_nodes_list_success() {
    let (mock_server, client) = authenticated_server().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "node": "pve1",
                    "status": "online",
                    "type": "node",
                    "level": "c",
                    "cpu": 0.15,
                    "maxcpu": 8,
                    "mem": 8589934592_u64,
                    "maxmem": 17179869184_u64,
                    "disk": 1099511627776_u64,
                    "maxdisk": 2199023255552_u64,
                    "uptime": 1234567,
                    "id": "node/pve1",
                    "ssl_fingerprint": "AA:BB:CC:DD:EE:FF"
                },
                {
                    "node": "pve2",
                    "status": "offline",
                    "id": "node/pve2"
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let nodes = client.get_nodes().await.unwrap();
    assert_eq!(nodes.len(), 2);

    let node1 = &nodes[0];
    assert_eq!(node1.node, "pve1");
    assert!(node1.is_online());
    assert_eq!(node1.cpu, Some(0.15));
    assert_eq!(node1.mem, Some(8589934592));
    assert_eq!(node1.maxmem, Some(17179869184));
    assert_eq!(node1.disk, Some(1099511627776));
    assert_eq!(node1.maxdisk, Some(2199023255552));
    assert_eq!(node1.uptime, Some(1234567));
    assert_eq!(node1.kind.as_deref(), Some("node"));
    assert_eq!(node1.level.as_deref(), Some("c"));
    assert_eq!(node1.id.as_deref(), Some("node/pve1"));

    let node2 = &nodes[1];
    assert_eq!(node2.node, "pve2");
    assert!(!node2.is_online());
    assert_eq!(node2.uptime, None);
    assert_eq!(node2.maxmem, None);
}

#[tokio::test]
async fn test_nodes_list_empty() {
    let (mock_server, client) = authenticated_server().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": []
        })))
        .mount(&mock_server)
        .await;

    assert!(client.get_nodes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_nodes_list_without_data_is_empty() {
    let (mock_server, client) = authenticated_server().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    assert!(client.get_nodes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_node_status_success() {
    let (mock_server, client) = authenticated_server().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "cpu": 0.22,
                "uptime": 1234567,
                "kversion": "Linux 6.8.12-4-pve #1 SMP PREEMPT_DYNAMIC PMX 6.8.12-4",
                "loadavg": ["0.45", "0.31", "0.28"],
                "pveversion": "pve-manager/8.2.7/3e0176e6bb2ade3b",
                "memory": {
                    "total": 17179869184_u64,
                    "used": 8589934592_u64,
                    "free": 8589934592_u64
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let status = client.get_node_status("pve1").await.unwrap();
    assert_eq!(status.cpu, 0.22);
    assert_eq!(status.uptime, 1234567);
    assert!(status.kversion.unwrap().starts_with("Linux 6.8.12"));
    assert_eq!(status.loadavg, Some([0.45, 0.31, 0.28]));
    assert_eq!(status.memory.unwrap().total, 17179869184);
}

#[tokio::test]
async fn test_node_status_propagates_errors() {
    let (mock_server, client) = authenticated_server().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/ghost/status"))
        .respond_with(ResponseTemplate::new(500).set_body_string("no such node 'ghost'"))
        .mount(&mock_server)
        .await;

    match client.get_node_status("ghost").await {
        Err(ProxmoxError::Network(message)) => assert!(message.contains("ghost")),
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_node_status_without_data_is_parse_error() {
    let (mock_server, client) = authenticated_server().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": null
        })))
        .mount(&mock_server)
        .await;

    assert!(matches!(
        client.get_node_status("pve1").await,
        Err(ProxmoxError::Parse(_))
    ));
}

#[tokio::test]
async fn test_node_name_is_path_encoded() {
    let (mock_server, client) = authenticated_server().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/a%2Fb/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"cpu": 0.0, "uptime": 1}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.get_node_status("a/b").await.unwrap();
}

#[tokio::test]
async fn test_vms_list_success() {
    let (mock_server, client) = authenticated_server().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/qemu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "vmid": 100,
                    "name": "web",
                    "status": "running",
                    "cpu": 0.03,
                    "mem": 1073741824_u64,
                    "maxmem": 4294967296_u64,
                    "uptime": 3600
                },
                {
                    "vmid": 101,
                    "name": "db",
                    "status": "stopped"
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let vms = client.get_vms("pve1").await;
    assert_eq!(vms.len(), 2);
    assert_eq!(vms[0].vmid, 100);
    assert_eq!(vms[0].name, "web");
    assert_eq!(vms[0].maxmem, Some(4294967296));
    assert_eq!(vms[1].status, "stopped");
    assert_eq!(vms[1].cpu, None);
}

#[tokio::test]
async fn test_vms_list_swallows_errors() {
    let (mock_server, client) = authenticated_server().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/qemu"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert!(client.get_vms("pve1").await.is_empty());
}

#[tokio::test]
async fn test_vms_list_swallows_parse_errors() {
    let (mock_server, client) = authenticated_server().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/qemu"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&mock_server)
        .await;

    assert!(client.get_vms("pve1").await.is_empty());
}
