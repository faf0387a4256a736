use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn export_returns_json_document() {
    let app = TestApp::new().await;
    let token = app.signed_in("ada@example.com").await;

    let response = app
        .post("/account/export", &json!({ "format": "json" }), Some(&token))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["format"], "json");
    assert!(body["fileName"].as_str().unwrap().ends_with(".json"));
    let document: Value = serde_json::from_str(body["content"].as_str().unwrap()).unwrap();
    assert_eq!(document["profile"]["email"], "ada@example.com");
}

#[tokio::test]
async fn export_returns_csv_document() {
    let app = TestApp::new().await;
    let token = app.signed_in("ada@example.com").await;

    let response = app
        .post("/account/export", &json!({ "format": "csv" }), Some(&token))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let content = body["content"].as_str().unwrap();
    assert!(content.starts_with("section,field,value"));
    assert!(content.contains("ada@example.com"));
}

#[tokio::test]
async fn export_rejects_unknown_formats() {
    let app = TestApp::new().await;
    let token = app.signed_in("ada@example.com").await;

    let response = app
        .post("/account/export", &json!({ "format": "xml" }), Some(&token))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}
