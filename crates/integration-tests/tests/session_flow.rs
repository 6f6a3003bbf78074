//! Integration tests for the session workbench flow.
//!
//! These tests require a running server (cargo run -p qrforge-server).
//!
//! Run with: cargo test -p qrforge-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use qrforge_core::payload::build_wifi;
use qrforge_core::types::{WifiNetwork, WifiSecurity};
use qrforge_integration_tests::base_url;

async fn create_session(client: &Client) -> Value {
    let resp = client
        .post(format!("{}/api/sessions", base_url()))
        .send()
        .await
        .expect("Failed to create session");
    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to parse snapshot")
}

#[tokio::test]
#[ignore = "Requires running qrforge-server"]
async fn test_wifi_input_recomputes_payload() {
    let client = Client::new();
    let session = create_session(&client).await;
    let id = session["id"].as_str().expect("session id");

    let resp = client
        .put(format!("{}/api/sessions/{id}/input", base_url()))
        .json(&json!({
            "mode": "wifi",
            "ssid": "my;net",
            "password": "p:a\\ss",
            "security": "WPA2",
            "hidden": false
        }))
        .send()
        .await
        .expect("Failed to set input");
    assert_eq!(resp.status(), StatusCode::OK);

    let snapshot: Value = resp.json().await.expect("snapshot");
    assert_eq!(
        snapshot["payload"],
        "WIFI:T:WPA2;S:my\\;net;P:p\\:a\\\\ss;H:false;;"
    );

    // The server's payload is bit-exact with the core builder.
    let expected = build_wifi(&WifiNetwork {
        ssid: "my;net".to_string(),
        password: "p:a\\ss".to_string(),
        security: WifiSecurity::Wpa2,
        hidden: false,
    });
    assert_eq!(snapshot["payload"], expected);
}

#[tokio::test]
#[ignore = "Requires running qrforge-server"]
async fn test_mode_switch_resets_fields() {
    let client = Client::new();
    let session = create_session(&client).await;
    let id = session["id"].as_str().expect("session id");

    client
        .put(format!("{}/api/sessions/{id}/input", base_url()))
        .json(&json!({"mode": "text", "text": "hello"}))
        .send()
        .await
        .expect("Failed to set input");

    let resp = client
        .put(format!("{}/api/sessions/{id}/mode", base_url()))
        .json(&json!({"mode": "wifi"}))
        .send()
        .await
        .expect("Failed to switch mode");
    let snapshot: Value = resp.json().await.expect("snapshot");
    assert_eq!(snapshot["mode"], "wifi");
    assert_eq!(snapshot["payload"], "WIFI:T:WPA2;S:;P:;H:false;;");

    // Switching back lands on the text default, not the old value.
    let resp = client
        .put(format!("{}/api/sessions/{id}/mode", base_url()))
        .json(&json!({"mode": "text"}))
        .send()
        .await
        .expect("Failed to switch back");
    let snapshot: Value = resp.json().await.expect("snapshot");
    assert_eq!(snapshot["payload"], "");
}

#[tokio::test]
#[ignore = "Requires running qrforge-server"]
async fn test_crypto_advisories_never_block_payload() {
    let client = Client::new();
    let session = create_session(&client).await;
    let id = session["id"].as_str().expect("session id");

    let resp = client
        .put(format!("{}/api/sessions/{id}/input", base_url()))
        .json(&json!({
            "mode": "crypto",
            "kind": "bitcoin",
            "address": "notanaddress"
        }))
        .send()
        .await
        .expect("Failed to set input");
    let snapshot: Value = resp.json().await.expect("snapshot");
    assert_eq!(snapshot["validation"]["valid"], false);
    assert_eq!(
        snapshot["validation"]["message"],
        "Invalid Bitcoin address format"
    );
    assert_eq!(snapshot["payload"], "bitcoin:notanaddress");
}

#[tokio::test]
#[ignore = "Requires running qrforge-server"]
async fn test_erc20_toggle_clears_token_fields() {
    let client = Client::new();
    let session = create_session(&client).await;
    let id = session["id"].as_str().expect("session id");

    client
        .put(format!("{}/api/sessions/{id}/input", base_url()))
        .json(&json!({
            "mode": "crypto",
            "kind": "ethereum",
            "erc20": true,
            "token_contract": "0xA0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
            "recipient_address": "0xab5801a7d398351b8be11c439e05c5b3259aec9b",
            "amount": "1000000",
            "chain_id": "1"
        }))
        .send()
        .await
        .expect("Failed to set input");

    // Re-enabling ERC-20 clears the token addresses.
    let resp = client
        .post(format!("{}/api/sessions/{id}/crypto/erc20", base_url()))
        .json(&json!({"enabled": true}))
        .send()
        .await
        .expect("Failed to toggle erc20");
    let snapshot: Value = resp.json().await.expect("snapshot");
    assert_eq!(snapshot["payload"], "ethereum:@1");
}

#[tokio::test]
#[ignore = "Requires running qrforge-server"]
async fn test_config_patch_and_contrast_advisory() {
    let client = Client::new();
    let session = create_session(&client).await;
    let id = session["id"].as_str().expect("session id");

    let resp = client
        .patch(format!("{}/api/sessions/{id}/config", base_url()))
        .json(&json!({
            "background_transparent": false,
            "background_color": "#FFFFFF",
            "theme": {"custom": {"color1": "#FFFF00"}}
        }))
        .send()
        .await
        .expect("Failed to patch config");
    let snapshot: Value = resp.json().await.expect("snapshot");
    assert_eq!(snapshot["low_contrast"], true);

    // Reset restores the defaults (and the advisory goes away).
    let resp = client
        .post(format!("{}/api/sessions/{id}/config/reset", base_url()))
        .send()
        .await
        .expect("Failed to reset config");
    let snapshot: Value = resp.json().await.expect("snapshot");
    assert_eq!(snapshot["low_contrast"], false);
    assert_eq!(snapshot["config"]["size"], 1000);
}

#[tokio::test]
#[ignore = "Requires running qrforge-server"]
async fn test_unknown_session_is_404() {
    let client = Client::new();
    let resp = client
        .get(format!(
            "{}/api/sessions/00000000-0000-0000-0000-000000000000",
            base_url()
        ))
        .send()
        .await
        .expect("Failed to query");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running qrforge-server"]
async fn test_png_export_carries_signature() {
    let client = Client::new();
    let session = create_session(&client).await;
    let id = session["id"].as_str().expect("session id");

    client
        .put(format!("{}/api/sessions/{id}/input", base_url()))
        .json(&json!({"mode": "text", "text": "hello"}))
        .send()
        .await
        .expect("Failed to set input");

    let resp = client
        .get(format!("{}/api/sessions/{id}/export/png", base_url()))
        .send()
        .await
        .expect("Failed to export");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
    let bytes = resp.bytes().await.expect("body");
    assert_eq!(
        bytes.get(..8),
        Some(&[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'][..])
    );
}

#[tokio::test]
#[ignore = "Requires running qrforge-server"]
async fn test_logo_upload_and_removal() {
    let client = Client::new();
    let session = create_session(&client).await;
    let id = session["id"].as_str().expect("session id");

    // Any rendered symbol is a handy valid PNG.
    let png = client
        .get(format!("{}/api/sessions/{id}/export/png", base_url()))
        .send()
        .await
        .expect("Failed to render")
        .bytes()
        .await
        .expect("body");

    let form = reqwest::multipart::Form::new().part(
        "file",
        reqwest::multipart::Part::bytes(png.to_vec()).file_name("logo.png"),
    );
    let resp = client
        .post(format!("{}/api/sessions/{id}/logo", base_url()))
        .multipart(form)
        .send()
        .await
        .expect("Failed to upload logo");
    assert_eq!(resp.status(), StatusCode::OK);
    let snapshot: Value = resp.json().await.expect("snapshot");
    assert_eq!(snapshot["config"]["logo"]["size_percent"], 18);

    let resp = client
        .delete(format!("{}/api/sessions/{id}/logo", base_url()))
        .send()
        .await
        .expect("Failed to remove logo");
    let snapshot: Value = resp.json().await.expect("snapshot");
    assert!(snapshot["config"].get("logo").is_none());
}
