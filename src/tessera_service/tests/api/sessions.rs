use std::time::Duration;

use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn active_sessions_flags_the_current_one() {
    let app = TestApp::new().await;
    let _first = app.signed_in("ada@example.com").await;
    let second = app.access_token("ada@example.com").await;

    let response = app.get("/sessions", Some(&second)).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["totalCount"], 2);
    assert_eq!(body["currentSessionCount"], 1);
    assert_eq!(body["sessions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn logout_all_devices_revokes_every_session() {
    let app = TestApp::new().await;
    let first = app.signed_in("ada@example.com").await;
    let second = app.access_token("ada@example.com").await;

    let response = app
        .post("/sessions/logout-all", &json!({}), Some(&first))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["sessionsTerminated"], 2);

    assert_eq!(app.get("/sessions", Some(&first)).await.status().as_u16(), 401);
    assert_eq!(app.get("/sessions", Some(&second)).await.status().as_u16(), 401);
}

#[tokio::test]
async fn sessions_of_other_users_are_not_listed() {
    let app = TestApp::new().await;
    let ada = app.signed_in("ada@example.com").await;
    app.signed_in("grace@example.com").await;

    let body: Value = app.get("/sessions", Some(&ada)).await.json().await.unwrap();

    assert_eq!(body["totalCount"], 1);
}

#[tokio::test]
async fn sessions_expire_with_their_token() {
    let app = TestApp::with_token_ttl(1).await;
    app.signed_in("ada@example.com").await;
    app.access_token("ada@example.com").await;

    tokio::time::sleep(Duration::from_millis(2100)).await;
    let fresh = app.access_token("ada@example.com").await;

    let body: Value = app.get("/sessions", Some(&fresh)).await.json().await.unwrap();

    assert_eq!(body["totalCount"], 1);
    assert_eq!(body["currentSessionCount"], 1);
}

#[tokio::test]
async fn listing_sessions_marks_the_caller_as_seen() {
    let app = TestApp::new().await;
    let token = app.signed_in("ada@example.com").await;

    tokio::time::sleep(Duration::from_millis(50)).await;
    let body: Value = app.get("/sessions", Some(&token)).await.json().await.unwrap();

    let session = &body["sessions"][0];
    let created: chrono::DateTime<chrono::Utc> =
        session["createdAt"].as_str().unwrap().parse().unwrap();
    let last_seen: chrono::DateTime<chrono::Utc> =
        session["lastSeenAt"].as_str().unwrap().parse().unwrap();
    assert!(last_seen > created);
}
