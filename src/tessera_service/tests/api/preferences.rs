use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn protected_routes_require_a_bearer_token() {
    let app = TestApp::new().await;

    let response = app.get("/preferences", None).await;
    assert_eq!(response.status().as_u16(), 401);

    let response = app.get("/preferences", Some("not-a-jwt")).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn new_accounts_start_with_default_preferences() {
    let app = TestApp::new().await;
    let token = app.signed_in("ada@example.com").await;

    let response = app.get("/preferences", Some(&token)).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["theme"]["theme"], "system");
    assert_eq!(body["highContrast"]["enabled"], false);
    assert_eq!(body["mfa"]["enabled"], false);
}

#[tokio::test]
async fn set_theme_echoes_the_saved_theme() {
    let app = TestApp::new().await;
    let token = app.signed_in("ada@example.com").await;
    let body = json!({ "theme": "dark", "colorScheme": "blue", "customColors": [] });

    let response = app.put("/preferences/theme", &body, &token).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["theme"], "dark");
    assert_eq!(body["colorScheme"], "blue");
    assert_eq!(body["customColors"], json!([]));
    assert!(body["updatedAt"].is_string());

    let stored: Value = app.get("/preferences", Some(&token)).await.json().await.unwrap();
    assert_eq!(stored["theme"]["theme"], "dark");
}

#[tokio::test]
async fn set_theme_rejects_bad_colors() {
    let app = TestApp::new().await;
    let token = app.signed_in("ada@example.com").await;
    let body = json!({ "theme": "dark", "colorScheme": "blue", "customColors": ["red"] });

    let response = app.put("/preferences/theme", &body, &token).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn set_high_contrast_returns_the_user_id() {
    let app = TestApp::new().await;
    let registered: Value = app.register("ada@example.com").await.json().await.unwrap();
    let token = app.access_token("ada@example.com").await;
    let body = json!({ "enabled": true, "theme": "dark" });

    let response = app.put("/preferences/high-contrast", &body, &token).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], registered["id"]);
    assert_eq!(body["enabled"], true);
    assert_eq!(body["theme"], "dark");
}

#[tokio::test]
async fn set_currency_saves_code_and_symbol() {
    let app = TestApp::new().await;
    let token = app.signed_in("ada@example.com").await;
    let body = json!({ "currency": "EUR" });

    let response = app.put("/preferences/currency", &body, &token).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["currency"], "EUR");
    assert!(!body["symbol"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn set_timezone_accepts_iana_names_only() {
    let app = TestApp::new().await;
    let token = app.signed_in("ada@example.com").await;

    let response = app
        .put(
            "/preferences/timezone",
            &json!({ "timezone": "America/New_York" }),
            &token,
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["timezone"], "America/New_York");
    assert!(body["utcOffset"].as_str().unwrap().starts_with('-'));

    let response = app
        .put("/preferences/timezone", &json!({ "timezone": "Mars/Phobos" }), &token)
        .await;
    assert_eq!(response.status().as_u16(), 400);
}
