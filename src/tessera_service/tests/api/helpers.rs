use std::sync::Arc;

use reqwest::{Client, Response};
use secrecy::Secret;
use serde_json::{Value, json};
use tessera_adapters::{
    AppState, Argon2PasswordHasher, HashMapPreferenceStore, HashMapSessionStore,
    HashMapUserRepository, HashMapVerificationCodeStore, JwtTokenService,
    config::{defaults, test},
};
use tessera_core::{Email, EmailClient};
use tessera_service::AccountService;
use tokio::sync::RwLock;

pub const PASSWORD: &str = "correct-horse-1";

/// Keeps every mail so tests can read the verification code back.
#[derive(Clone, Default)]
pub struct CapturingEmailClient {
    sent: Arc<RwLock<Vec<(String, String)>>>,
}

impl CapturingEmailClient {
    pub async fn last_code_for(&self, recipient: &str) -> Option<String> {
        let sent = self.sent.read().await;
        let (_, content) = sent.iter().rev().find(|(to, _)| to == recipient)?;
        content
            .split_whitespace()
            .map(|word| word.trim_end_matches('.'))
            .find(|word| word.len() == 6 && word.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_owned)
    }
}

#[async_trait::async_trait]
impl EmailClient for CapturingEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        _subject: &str,
        content: &str,
    ) -> Result<(), String> {
        self.sent
            .write()
            .await
            .push((recipient.as_str().to_owned(), content.to_owned()));
        Ok(())
    }
}

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub email_client: CapturingEmailClient,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_token_ttl(defaults::TOKEN_TTL_SECONDS).await
    }

    pub async fn with_token_ttl(token_ttl_seconds: i64) -> Self {
        let email_client = CapturingEmailClient::default();

        let state = AppState {
            users: Arc::new(HashMapUserRepository::new()),
            preferences: Arc::new(HashMapPreferenceStore::new()),
            sessions: Arc::new(HashMapSessionStore::new()),
            verification_codes: Arc::new(HashMapVerificationCodeStore::new()),
            password_hasher: Arc::new(Argon2PasswordHasher::new()),
            tokens: Arc::new(JwtTokenService::new(
                Secret::new(test::JWT_SECRET.to_owned()),
                token_ttl_seconds,
            )),
            email_client: Arc::new(email_client.clone()),
            verification_code_ttl: chrono::Duration::seconds(
                defaults::VERIFICATION_CODE_TTL_SECONDS,
            ),
        };

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = AccountService::new(state);
        tokio::spawn(async move {
            service
                .run_standalone(listener, None)
                .await
                .expect("Failed to run account service");
        });

        Self {
            address,
            http_client: Client::new(),
            email_client,
        }
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Response {
        let mut request = self.http_client.get(format!("{}{}", self.address, path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn post(&self, path: &str, body: &Value, token: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .post(format!("{}{}", self.address, path))
            .json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn put(&self, path: &str, body: &Value, token: &str) -> Response {
        self.http_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn register(&self, email: &str) -> Response {
        let body = json!({
            "email": email,
            "password": PASSWORD,
            "confirmPassword": PASSWORD,
        });
        self.post("/auth/register", &body, None).await
    }

    pub async fn login(&self, email: &str) -> Response {
        let body = json!({ "email": email, "password": PASSWORD });
        self.post("/auth/login", &body, None).await
    }

    /// Registers `email` and returns a fresh access token for it.
    pub async fn signed_in(&self, email: &str) -> String {
        assert_eq!(self.register(email).await.status().as_u16(), 201);
        self.access_token(email).await
    }

    pub async fn access_token(&self, email: &str) -> String {
        let response = self.login(email).await;
        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.unwrap();
        body["accessToken"].as_str().unwrap().to_owned()
    }
}
