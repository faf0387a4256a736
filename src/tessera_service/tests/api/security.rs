use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn backup_codes_require_mfa() {
    let app = TestApp::new().await;
    let token = app.signed_in("ada@example.com").await;

    let response = app
        .post("/security/mfa/backup-codes", &json!({}), Some(&token))
        .await;

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn enabling_mfa_then_regenerating_backup_codes() {
    let app = TestApp::new().await;
    let token = app.signed_in("ada@example.com").await;

    let response = app
        .put(
            "/security/mfa",
            &json!({ "enabled": true, "method": "totp" }),
            &token,
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let mfa: Value = response.json().await.unwrap();
    assert_eq!(mfa["enabled"], true);
    assert_eq!(mfa["method"], "totp");

    let response = app
        .post("/security/mfa/backup-codes", &json!({}), Some(&token))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let codes: Value = response.json().await.unwrap();
    let total = codes["totalCount"].as_u64().unwrap();
    assert_eq!(codes["backupCodes"].as_array().unwrap().len() as u64, total);
    assert_eq!(codes["usedCount"], 0);
}

#[tokio::test]
async fn enabling_mfa_without_a_method_is_rejected() {
    let app = TestApp::new().await;
    let token = app.signed_in("ada@example.com").await;

    let response = app
        .put("/security/mfa", &json!({ "enabled": true }), &token)
        .await;

    assert_eq!(response.status().as_u16(), 400);
}
