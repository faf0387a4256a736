use std::sync::Arc;

use color_eyre::eyre::Result;
use reqwest::Client as HttpClient;
use tessera::{
    AccountService, AppState, Argon2PasswordHasher, Email, EmailClient, HashMapPreferenceStore,
    HashMapSessionStore, HashMapUserRepository, HashMapVerificationCodeStore, JwtTokenService,
    LogEmailClient, PostmarkEmailClient,
    adapters::config::{EmailClientKind, EmailClientSettings, Settings},
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let config = Settings::load()?;

    let state = AppState {
        users: Arc::new(HashMapUserRepository::new()),
        preferences: Arc::new(HashMapPreferenceStore::new()),
        sessions: Arc::new(HashMapSessionStore::new()),
        verification_codes: Arc::new(HashMapVerificationCodeStore::new()),
        password_hasher: Arc::new(Argon2PasswordHasher::new()),
        tokens: Arc::new(JwtTokenService::new(
            config.auth.jwt_secret.clone(),
            config.auth.token_ttl_seconds,
        )),
        email_client: email_client(&config.email_client)?,
        verification_code_ttl: config.auth.verification_code_ttl(),
    };

    let listener = tokio::net::TcpListener::bind(config.application.address()).await?;
    tracing::info!("Starting tessera account service...");

    AccountService::new(state)
        .run_standalone(listener, Some(config.application.allowed_origins.clone()))
        .await?;

    Ok(())
}

fn email_client(settings: &EmailClientSettings) -> Result<Arc<dyn EmailClient>> {
    match settings.kind {
        EmailClientKind::Postmark => {
            let http_client = HttpClient::builder().timeout(settings.timeout()).build()?;
            Ok(Arc::new(PostmarkEmailClient::new(
                settings.base_url.clone(),
                Email::try_from(settings.sender.as_str())?,
                settings.auth_token.clone(),
                http_client,
            )))
        }
        EmailClientKind::Log => Ok(Arc::new(LogEmailClient::new())),
    }
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
