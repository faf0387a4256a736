mod account_service;
mod tracing;

pub use account_service::AccountService;

// Re-export commonly used types
pub use tessera_adapters::{AppState, config::AllowedOrigins};
