//! End-to-end smoke tests for the full inimockd stack.
//!
//! Each test builds the complete application (seeded in-memory registry, real
//! dispatcher, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::fmt::Write;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use inimock_adapter_http_axum::router;
use inimock_adapter_http_axum::state::AppState;
use inimock_app::registry::InMemoryScenarioRegistry;
use inimock_app::services::dispatcher::Dispatcher;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router and keep a handle on its dispatcher.
fn app() -> (axum::Router, Arc<Dispatcher<InMemoryScenarioRegistry>>) {
    let dispatcher = Arc::new(Dispatcher::new(InMemoryScenarioRegistry::seeded()));
    let router = router::build(AppState::from_arc(Arc::clone(&dispatcher)));
    (router, dispatcher)
}

fn encode(raw: &str) -> String {
    raw.bytes().fold(String::new(), |mut out, b| {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(b));
        } else {
            write!(out, "%{b:02X}").unwrap();
        }
        out
    })
}

/// Send one call with `req` set to the raw string and decode the JSON body.
async fn call_raw(app: &axum::Router, req: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/?req={}", encode(req)))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn call(app: &axum::Router, req: &Value) -> (StatusCode, Value) {
    call_raw(app, &req.to_string()).await
}

/// Envelope as the real client builds it.
fn client_request(method: &str, params: Value) -> Value {
    json!({
        "Node": "inimhome",
        "Name": "it.inim.inimutenti",
        "ClientIP": "127.0.0.1",
        "Method": method,
        "Token": "e255f93b-467c-4248-9315-879fa727d82d",
        "ClientId": "integration-test",
        "Context": null,
        "Params": params,
    })
}

fn activate(device_id: &str, scenario_id: &str) -> Value {
    client_request(
        "ActivateScenario",
        json!({"DeviceId": device_id, "ScenarioId": scenario_id}),
    )
}

async fn active_scenario(app: &axum::Router) -> Value {
    let (status, body) = call(
        app,
        &client_request("GetDevicesExtended", json!({"Info": "17301503"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let devices = body["Data"]["Devices"].as_array().unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0]["DeviceId"], 545_002);
    devices[0]["ActiveScenario"].clone()
}

// ---------------------------------------------------------------------------
// Login methods
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_fixed_token_for_both_login_methods() {
    let (app, _) = app();

    let mut tokens = Vec::new();
    for method in ["RegisterClient", "Authenticate", "Authenticate"] {
        let (status, body) = call(&app, &client_request(method, json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Status"], 0);
        let token = body["Data"]["Token"].as_str().unwrap().to_string();
        assert!(!token.is_empty());
        assert!(body["Data"]["TTL"].as_u64().unwrap() > 0);
        tokens.push(token);
    }

    assert!(tokens.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(active_scenario(&app).await, 1);
}

#[tokio::test]
async fn should_ignore_credentials_on_register_client() {
    let (app, _) = app();
    let (status, body) = call(
        &app,
        &client_request(
            "RegisterClient",
            json!({"Username": "nobody", "Password": "wrong", "Role": 1, "Brand": 0}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Data"]["TTL"], 3600);
}

// ---------------------------------------------------------------------------
// Devices and scenarios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_catalog_device_with_seed_scenario() {
    let (app, _) = app();
    let (status, body) = call(&app, &client_request("GetDevicesExtended", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "Status": 0,
            "Data": {
                "Devices": [{
                    "DeviceId": 545_002,
                    "ActiveScenario": 1,
                    "Name": "BLUEBERR 3",
                    "Scenarios": [
                        {"ScenarioId": 0, "Name": "ARM"},
                        {"ScenarioId": 1, "Name": "DISARM"},
                        {"ScenarioId": 2, "Name": "STAY"},
                    ],
                }],
            },
        })
    );
}

#[tokio::test]
async fn should_read_back_activated_scenario() {
    let (app, _) = app();

    let (status, body) = call(&app, &activate("545002", "2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Status": 0, "Data": {}}));

    assert_eq!(active_scenario(&app).await, 2);

    call(&app, &activate("545002", "0")).await;
    assert_eq!(active_scenario(&app).await, 0);
}

#[tokio::test]
async fn should_reject_non_numeric_scenario_and_keep_state() {
    let (app, _) = app();

    let (status, body) = call(&app, &activate("545002", "abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Invalid parameters"));
    assert!(message.contains("ScenarioId"));

    assert_eq!(active_scenario(&app).await, 1);
}

#[tokio::test]
async fn should_reject_non_numeric_device() {
    let (app, dispatcher) = app();

    let (status, _) = call(&app, &activate("blueberry", "2")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(dispatcher.registry().snapshot().len(), 1);
}

#[tokio::test]
async fn should_reject_activation_with_numeric_json_values() {
    let (app, _) = app();
    let (status, body) = call(
        &app,
        &client_request(
            "ActivateScenario",
            json!({"DeviceId": 545_002, "ScenarioId": 2}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("must be a string"));
    assert_eq!(active_scenario(&app).await, 1);
}

#[tokio::test]
async fn should_reject_activation_without_params() {
    let (app, _) = app();
    let (status, body) = call(&app, &json!({"Method": "ActivateScenario"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("missing parameter"));
}

// ---------------------------------------------------------------------------
// Envelope errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_invalid_json_regardless_of_method() {
    let (app, _) = app();

    for raw in ["not json", "{\"Method\": \"Authenticate\"", "42", ""] {
        let (status, body) = call_raw(&app, raw).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "req = {raw:?}");
        assert_eq!(body, json!({"error": "Invalid JSON request"}));
    }
}

#[tokio::test]
async fn should_reject_array_envelope() {
    let (app, dispatcher) = app();

    let positional = json!([
        "ActivateScenario",
        {"DeviceId": "545002", "ScenarioId": "2"},
    ]);
    let (status, body) = call(&app, &positional).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid JSON request"}));

    let (status, body) = call_raw(&app, "[]").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid JSON request"}));

    assert_eq!(dispatcher.registry().snapshot().len(), 1);
    assert_eq!(active_scenario(&app).await, 1);
}

#[tokio::test]
async fn should_reject_unknown_method() {
    let (app, _) = app();
    let (status, body) = call(&app, &json!({"Method": "DoesNotExist"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Unknown method"}));
}

#[tokio::test]
async fn should_keep_serving_after_errors() {
    let (app, _) = app();

    call_raw(&app, "garbage").await;
    call(&app, &json!({"Method": "DoesNotExist"})).await;
    call(&app, &activate("545002", "x")).await;

    let (status, _) = call(&app, &client_request("Authenticate", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn should_not_lose_concurrent_activations() {
    let (app, dispatcher) = app();

    let handles: Vec<_> = (1..=50_i64)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move {
                let device_id = (1_000 + n).to_string();
                let scenario_id = (n % 3).to_string();
                let (status, _) = call(&app, &activate(&device_id, &scenario_id)).await;
                assert_eq!(status, StatusCode::OK);
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let snapshot = dispatcher.registry().snapshot();
    assert_eq!(snapshot.len(), 51);
    for n in 1..=50_i64 {
        let entry = snapshot
            .iter()
            .find(|(device, _)| device.get() == 1_000 + n)
            .map(|(_, scenario)| scenario.get());
        assert_eq!(entry, Some(n % 3));
    }
    assert_eq!(active_scenario(&app).await, 1);
}
