use serde_json::{Value, json};

use crate::helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn health_check_returns_200() {
    let app = TestApp::new().await;

    let response = app.get("/health_check", None).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn register_returns_201_with_an_unverified_user() {
    let app = TestApp::new().await;

    let response = app.register("ada@example.com").await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["role"], "user");
    assert_eq!(body["emailVerified"], false);
    assert_eq!(body["id"].as_str().unwrap().len(), 12);
    assert!(app.email_client.last_code_for("ada@example.com").await.is_some());
}

#[tokio::test]
async fn register_returns_409_for_a_taken_email() {
    let app = TestApp::new().await;
    app.register("ada@example.com").await;

    let response = app.register("ada@example.com").await;

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn register_returns_400_with_every_failing_field() {
    let app = TestApp::new().await;
    let body = json!({
        "email": "not-an-email",
        "password": PASSWORD,
        "confirmPassword": "something-else-1",
    });

    let response = app.post("/auth/register", &body, None).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Validation failed");
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|detail| detail["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"confirmPassword"));
}

#[tokio::test]
async fn register_returns_400_for_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/auth/register", app.address))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn login_returns_a_bearer_token() {
    let app = TestApp::new().await;
    app.register("ada@example.com").await;

    let response = app.login("ada@example.com").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["tokenType"], "Bearer");
    assert!(body["expiresIn"].as_i64().unwrap() > 0);
    assert_eq!(body["user"]["email"], "ada@example.com");
}

#[tokio::test]
async fn login_returns_401_for_wrong_password_or_unknown_email() {
    let app = TestApp::new().await;
    app.register("ada@example.com").await;

    let wrong_password = json!({ "email": "ada@example.com", "password": "wrong-pass-1" });
    let response = app.post("/auth/login", &wrong_password, None).await;
    assert_eq!(response.status().as_u16(), 401);

    let response = app.login("nobody@example.com").await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn verify_email_marks_the_account_verified() {
    let app = TestApp::new().await;
    app.register("ada@example.com").await;
    let code = app
        .email_client
        .last_code_for("ada@example.com")
        .await
        .unwrap();

    let body = json!({ "email": "ada@example.com", "code": code });
    let response = app.post("/auth/verify-email", &body, None).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["verified"], true);

    let login: Value = app.login("ada@example.com").await.json().await.unwrap();
    assert_eq!(login["user"]["emailVerified"], true);
}

#[tokio::test]
async fn verify_email_returns_400_for_a_wrong_code() {
    let app = TestApp::new().await;
    app.register("ada@example.com").await;
    let code = app
        .email_client
        .last_code_for("ada@example.com")
        .await
        .unwrap();
    let wrong = if code == "000000" { "111111" } else { "000000" };

    let body = json!({ "email": "ada@example.com", "code": wrong });
    let response = app.post("/auth/verify-email", &body, None).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn resend_verification_returns_202_then_409_once_verified() {
    let app = TestApp::new().await;
    app.register("ada@example.com").await;
    let resend = json!({ "email": "ada@example.com" });

    let response = app.post("/auth/resend-verification", &resend, None).await;
    assert_eq!(response.status().as_u16(), 202);

    let code = app
        .email_client
        .last_code_for("ada@example.com")
        .await
        .unwrap();
    let verify = json!({ "email": "ada@example.com", "code": code });
    app.post("/auth/verify-email", &verify, None).await;

    let response = app.post("/auth/resend-verification", &resend, None).await;
    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn verify_email_returns_429_once_guesses_run_out() {
    let app = TestApp::new().await;
    app.register("ada@example.com").await;
    let code = app
        .email_client
        .last_code_for("ada@example.com")
        .await
        .unwrap();
    let wrong = if code == "000000" { "111111" } else { "000000" };
    let guess = json!({ "email": "ada@example.com", "code": wrong });

    for _ in 0..4 {
        let response = app.post("/auth/verify-email", &guess, None).await;
        assert_eq!(response.status().as_u16(), 400);
    }
    let response = app.post("/auth/verify-email", &guess, None).await;
    assert_eq!(response.status().as_u16(), 429);

    let correct = json!({ "email": "ada@example.com", "code": code });
    let response = app.post("/auth/verify-email", &correct, None).await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn resend_verification_does_not_reveal_unknown_addresses() {
    let app = TestApp::new().await;
    app.register("ada@example.com").await;

    let known = app
        .post(
            "/auth/resend-verification",
            &json!({ "email": "ada@example.com" }),
            None,
        )
        .await;
    let unknown = app
        .post(
            "/auth/resend-verification",
            &json!({ "email": "ghost@example.com" }),
            None,
        )
        .await;

    assert_eq!(known.status().as_u16(), 202);
    assert_eq!(unknown.status().as_u16(), 202);
    let known: Value = known.json().await.unwrap();
    let unknown: Value = unknown.json().await.unwrap();
    assert_eq!(known, unknown);
    assert!(
        app.email_client
            .last_code_for("ghost@example.com")
            .await
            .is_none()
    );
}

#[tokio::test]
async fn logout_revokes_only_the_current_session() {
    let app = TestApp::new().await;
    let first = app.signed_in("ada@example.com").await;
    let second = app.access_token("ada@example.com").await;

    let response = app.post("/auth/logout", &json!({}), Some(&first)).await;
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(app.get("/preferences", Some(&first)).await.status().as_u16(), 401);
    assert_eq!(app.get("/preferences", Some(&second)).await.status().as_u16(), 200);
}
