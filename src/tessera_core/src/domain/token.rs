use super::{email::Email, role::Role, session::SessionId, user_id::UserId};

/// Identity facts that go into a signed access token and come back out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    pub user_id: UserId,
    pub email: Email,
    pub role: Role,
    pub session_id: SessionId,
}

/// An opaque bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
