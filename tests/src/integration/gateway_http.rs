//! HTTP-level tests driving the gateway router directly, no socket.

use crate::TestNode;
use awp_gateway::{GatewayConfig, GatewayService};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

fn gateway(node: &TestNode, max_batch_size: usize) -> Router {
    let config = GatewayConfig {
        max_batch_size,
        ..GatewayConfig::default()
    };
    GatewayService::new(
        config,
        node.platform.onboard.clone(),
        node.platform.get_ready.clone(),
    )
    .unwrap()
    .router()
}

async fn post(router: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_single_call_over_http() {
    let node = TestNode::start();
    let router = gateway(&node, 50);

    let (status, body) = post(
        router,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "schools.create",
            "params": { "name": "Springfield Elementary" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["result"]["name"], "Springfield Elementary");
}

#[tokio::test]
async fn test_batch_is_answered_in_order() {
    let node = TestNode::start();
    let router = gateway(&node, 50);

    let (status, body) = post(
        router,
        json!([
            { "id": 1, "method": "schools.create", "params": { "name": "Springfield Elementary" } },
            { "id": 2, "method": "schools.create", "params": { "name": "" } },
            { "id": 3, "method": "schools.list" }
        ]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let responses = body.as_array().unwrap();
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["id"], 1);
    assert!(responses[0].get("error").is_none());
    assert_eq!(responses[1]["error"]["code"], -32602);
    // The failing neighbour did not affect the list
    assert_eq!(responses[2]["result"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_oversized_batch_is_rejected() {
    let node = TestNode::start();
    let router = gateway(&node, 2);

    let calls: Vec<Value> = (0..3)
        .map(|i| json!({ "id": i, "method": "schools.list" }))
        .collect();
    let (status, body) = post(router, Value::Array(calls)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], -32005);
}

#[tokio::test]
async fn test_malformed_json_is_a_parse_error() {
    let node = TestNode::start();
    let router = gateway(&node, 50);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], -32700);
}

#[tokio::test]
async fn test_health_probe() {
    let node = TestNode::start();
    let router = gateway(&node, 50);

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
