use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use tessera_core::{AccessToken, Email, Role, TokenError, TokenPayload, TokenService, UserId};

/// HS256 access tokens carrying the user, their role and the session id.
#[derive(Clone)]
pub struct JwtTokenService {
    secret: Secret<String>,
    token_ttl_seconds: i64,
}

impl JwtTokenService {
    pub fn new(secret: Secret<String>, token_ttl_seconds: i64) -> Self {
        Self {
            secret,
            token_ttl_seconds,
        }
    }

    fn secret(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub sid: String,
    pub iat: usize,
    pub exp: usize,
}

impl TokenService for JwtTokenService {
    #[tracing::instrument(name = "Generating access token", skip_all)]
    fn generate_access_token(&self, payload: &TokenPayload) -> Result<AccessToken, TokenError> {
        let delta = chrono::Duration::try_seconds(self.token_ttl_seconds).ok_or(
            TokenError::UnexpectedError("Failed to create token duration".to_string()),
        )?;

        let now = Utc::now();
        let exp = now
            .checked_add_signed(delta)
            .ok_or(TokenError::UnexpectedError(
                "Duration out of range".to_string(),
            ))?
            .timestamp();

        let exp: usize = exp
            .try_into()
            .map_err(|_| TokenError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;
        let iat: usize = now
            .timestamp()
            .try_into()
            .map_err(|_| TokenError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;

        let claims = Claims {
            sub: payload.user_id.to_string(),
            email: payload.email.as_str().to_owned(),
            role: payload.role,
            sid: payload.session_id.to_string(),
            iat,
            exp,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret()),
        )
        .map(AccessToken::new)
        .map_err(|e| TokenError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "Verifying access token", skip_all)]
    fn verify_token(&self, token: &str) -> Result<TokenPayload, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &DecodingKey::from_secret(self.secret()), &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::InvalidToken(e.to_string()))?;

        Ok(TokenPayload {
            user_id: UserId::try_from(claims.sub)
                .map_err(|e| TokenError::InvalidToken(e.to_string()))?,
            email: Email::try_from(claims.email.as_str())
                .map_err(|e| TokenError::InvalidToken(e.to_string()))?,
            role: claims.role,
            session_id: claims
                .sid
                .parse()
                .map_err(|_| TokenError::InvalidToken("Malformed session id".to_string()))?,
        })
    }

    fn token_expires_in(&self) -> i64 {
        self.token_ttl_seconds
    }
}
