use directlink::{ClientConfig, DirectLink, ListPortsOptions};
use httpmock::prelude::*;

fn client_for(server: &MockServer) -> DirectLink {
    DirectLink::new(ClientConfig::new(server.base_url(), "2024-10-30")).unwrap()
}

fn port_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "label": format!("XCR-{}", id),
        "location_name": "dal10",
        "location_display_name": "Dallas 10",
        "provider_name": "provider-co",
        "direct_link_count": 0,
        "supported_link_speeds": [1000, 2000]
    })
}

#[tokio::test]
async fn test_pager_walks_three_pages() {
    let server = MockServer::start();

    let page1 = server.mock(|when, then| {
        when.method(GET)
            .path("/ports")
            .query_param("limit", "2")
            .matches(|req| {
                !req.query_params().iter().any(|(k, _)| k == "start")
            });
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "ports": [port_json("port-1"), port_json("port-2")],
                "limit": 2,
                "total_count": 5,
                "first": {"href": "https://example.test/v1/ports?limit=2"},
                "next": {"href": "https://example.test/v1/ports?start=t2&limit=2", "start": "t2"}
            }));
    });
    let page2 = server.mock(|when, then| {
        when.method(GET)
            .path("/ports")
            .query_param("limit", "2")
            .query_param("start", "t2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "ports": [port_json("port-3"), port_json("port-4")],
                "limit": 2,
                "total_count": 5,
                "first": {"href": "https://example.test/v1/ports?limit=2"},
                "next": {"href": "https://example.test/v1/ports?start=t3&limit=2", "start": "t3"}
            }));
    });
    let page3 = server.mock(|when, then| {
        when.method(GET)
            .path("/ports")
            .query_param("limit", "2")
            .query_param("start", "t3");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "ports": [port_json("port-5")],
                "limit": 2,
                "total_count": 5,
                "first": {"href": "https://example.test/v1/ports?limit=2"}
            }));
    });

    let client = client_for(&server);
    let ports = client
        .ports_pager(ListPortsOptions {
            limit: Some(2),
            ..Default::default()
        })
        .all()
        .await
        .unwrap();

    page1.assert();
    page2.assert();
    page3.assert();

    assert_eq!(ports.len(), 5);
    let ids: Vec<&str> = ports.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["port-1", "port-2", "port-3", "port-4", "port-5"]);
}

#[tokio::test]
async fn test_pager_single_page_collection() {
    let server = MockServer::start();
    let only_page = server.mock(|when, then| {
        when.method(GET).path("/ports");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "ports": [port_json("port-1")],
                "total_count": 1
            }));
    });

    let client = client_for(&server);
    let mut pager = client.ports_pager(ListPortsOptions::default());

    assert!(pager.has_next());
    let page = pager.next_page().await.unwrap().unwrap();
    assert_eq!(page.len(), 1);
    assert!(!pager.has_next());
    assert!(pager.next_page().await.unwrap().is_none());

    only_page.assert();
}

#[tokio::test]
async fn test_pager_forwards_location_filter() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/ports")
            .query_param("location_name", "fra04");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"ports": [port_json("port-9")]}));
    });

    let client = client_for(&server);
    let ports = client
        .ports_pager(ListPortsOptions {
            location_name: Some("fra04".to_string()),
            ..Default::default()
        })
        .all()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(ports.len(), 1);
}

#[tokio::test]
async fn test_pager_resumes_from_explicit_start() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/ports").query_param("start", "resume-here");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"ports": [port_json("port-7")]}));
    });

    let client = client_for(&server);
    let mut pager = client.ports_pager(ListPortsOptions {
        start: Some("resume-here".to_string()),
        ..Default::default()
    });

    let page = pager.next_page().await.unwrap().unwrap();
    mock.assert();
    assert_eq!(page[0].id, "port-7");
}
