use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    routing::{get, post, put},
};
use tessera_adapters::{
    AppState,
    config::AllowedOrigins,
    http::routes::{
        active_sessions, export_data, generate_backup_codes, get_preferences, health_check, login,
        logout, logout_all_devices, register, resend_verification, set_currency,
        set_high_contrast, set_theme, set_timezone, update_mfa, verify_email,
    },
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Account, preference and session routes over a shared [`AppState`].
pub struct AccountService {
    router: Router,
}

impl AccountService {
    /// Create the service from ports already resolved by the caller.
    pub fn new(state: AppState) -> Self {
        let router = Router::new()
            .route("/health_check", get(health_check))
            .route("/auth/register", post(register))
            .route("/auth/login", post(login))
            .route("/auth/logout", post(logout))
            .route("/auth/verify-email", post(verify_email))
            .route("/auth/resend-verification", post(resend_verification))
            .route("/preferences", get(get_preferences))
            .route("/preferences/theme", put(set_theme))
            .route("/preferences/high-contrast", put(set_high_contrast))
            .route("/preferences/currency", put(set_currency))
            .route("/preferences/timezone", put(set_timezone))
            .route("/security/mfa", put(update_mfa))
            .route("/security/mfa/backup-codes", post(generate_backup_codes))
            .route("/account/export", post(export_data))
            .route("/sessions", get(active_sessions))
            .route("/sessions/logout-all", post(logout_all_devices))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be nested into another application.
    ///
    /// CORS is only applied when `allowed_origins` is given and non-empty.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Serve the routes on `listener` until the process is stopped.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Account service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
