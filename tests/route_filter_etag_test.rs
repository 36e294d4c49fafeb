use directlink::domain::route_filter::{RouteFilterAction, RouteFilterPatch, RouteFilterTemplate};
use directlink::{ClientConfig, DirectLink};
use httpmock::prelude::*;

fn client_for(server: &MockServer) -> DirectLink {
    DirectLink::new(ClientConfig::new(server.base_url(), "2024-10-30")).unwrap()
}

#[tokio::test]
async fn test_export_filters_list_then_replace_with_etag() {
    let server = MockServer::start();

    let list = server.mock(|when, then| {
        when.method(GET).path("/gateways/gw-1/export_route_filters");
        then.status(200)
            .header("Content-Type", "application/json")
            .header("ETag", "W/\"rev-7\"")
            .json_body(serde_json::json!({
                "export_route_filters": [
                    {"id": "erf-1", "action": "permit", "prefix": "192.168.100.0/24"}
                ]
            }));
    });
    let replace = server.mock(|when, then| {
        when.method(PUT)
            .path("/gateways/gw-1/export_route_filters")
            .header("If-Match", "W/\"rev-7\"")
            .json_body(serde_json::json!({
                "export_route_filters": [
                    {"action": "permit", "prefix": "192.168.100.0/24"},
                    {"action": "deny", "prefix": "0.0.0.0/0"}
                ]
            }));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "export_route_filters": [
                    {"id": "erf-1", "action": "permit", "prefix": "192.168.100.0/24"},
                    {"id": "erf-2", "action": "deny", "prefix": "0.0.0.0/0"}
                ]
            }));
    });

    let client = client_for(&server);

    let listed = client.list_gateway_export_route_filters("gw-1").await.unwrap();
    let etag = listed.etag.expect("list response should carry an ETag");
    assert_eq!(listed.value.export_route_filters.len(), 1);

    let replacement = vec![
        RouteFilterTemplate::new(RouteFilterAction::Permit, "192.168.100.0/24"),
        RouteFilterTemplate::new(RouteFilterAction::Deny, "0.0.0.0/0"),
    ];
    let replaced = client
        .replace_gateway_export_route_filters("gw-1", &etag, &replacement)
        .await
        .unwrap();

    list.assert();
    replace.assert();
    assert_eq!(replaced.export_route_filters.len(), 2);
    assert_eq!(replaced.export_route_filters[1].action, RouteFilterAction::Deny);
}

#[tokio::test]
async fn test_stale_etag_conflict_surfaces_as_api_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT)
            .path("/gateways/gw-1/import_route_filters")
            .header("If-Match", "W/\"stale\"");
        then.status(412)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "errors": [{"code": "precondition_failed", "message": "If-Match does not match"}],
                "trace": "trace-412"
            }));
    });

    let client = client_for(&server);
    let err = client
        .replace_gateway_import_route_filters(
            "gw-1",
            "W/\"stale\"",
            &[RouteFilterTemplate::new(RouteFilterAction::Permit, "10.0.0.0/8")],
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(412));
    assert!(err.to_string().contains("If-Match does not match"));
}

#[tokio::test]
async fn test_import_filter_ordering_with_before() {
    let server = MockServer::start();

    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/gateways/gw-1/import_route_filters")
            .json_body(serde_json::json!({
                "action": "permit",
                "prefix": "172.16.0.0/12",
                "before": "irf-2"
            }));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": "irf-3",
                "action": "permit",
                "prefix": "172.16.0.0/12",
                "before": "irf-2"
            }));
    });
    let reorder = server.mock(|when, then| {
        when.method(httpmock::Method::PATCH)
            .path("/gateways/gw-1/import_route_filters/irf-3")
            .header("Content-Type", "application/merge-patch+json")
            .json_body(serde_json::json!({"before": "irf-1"}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": "irf-3",
                "action": "permit",
                "prefix": "172.16.0.0/12",
                "before": "irf-1"
            }));
    });

    let client = client_for(&server);

    let mut template = RouteFilterTemplate::new(RouteFilterAction::Permit, "172.16.0.0/12");
    template.before = Some("irf-2".to_string());
    let created = client
        .create_gateway_import_route_filter("gw-1", &template)
        .await
        .unwrap();
    assert_eq!(created.before.as_deref(), Some("irf-2"));

    let patch = RouteFilterPatch {
        before: Some("irf-1".to_string()),
        ..Default::default()
    };
    let moved = client
        .update_gateway_import_route_filter("gw-1", &created.id, &patch)
        .await
        .unwrap();

    create.assert();
    reorder.assert();
    assert_eq!(moved.before.as_deref(), Some("irf-1"));
}
