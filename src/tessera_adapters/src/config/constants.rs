pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    /// Prefix of nested overrides, e.g. `TESSERA__AUTH__TOKEN_TTL_SECONDS`.
    pub const SETTINGS_ENV_PREFIX: &str = "TESSERA";
    pub const SETTINGS_ENV_SEPARATOR: &str = "__";
}

pub const CONFIG_FILE: &str = "config/default";

pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 3000;
    pub const TOKEN_TTL_SECONDS: i64 = 3600;
    pub const VERIFICATION_CODE_TTL_SECONDS: i64 = 86_400;

    pub mod email_client {
        pub const BASE_URL: &str = "https://api.postmarkapp.com/";
        pub const SENDER: &str = "no-reply@tessera.local";
        pub const TIMEOUT_MILLIS: i64 = 10_000;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hs256";

    pub mod email_client {
        use std::time::Duration;

        pub const SENDER: &str = "test@email.com";
        pub const TIMEOUT: Duration = Duration::from_millis(200);
    }
}
