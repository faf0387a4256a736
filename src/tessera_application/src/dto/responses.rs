//! Response shapes returned by the use-cases, serialized as camelCase JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tessera_core::{
    ExportFormat, MfaMethod, Preferences, Role, Session, SessionId, Theme, User,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for RegisterUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            email: user.email().as_str().to_owned(),
            role: user.role(),
            email_verified: user.email_verified(),
            created_at: user.created_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub email_verified: bool,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            email: user.email().as_str().to_owned(),
            role: user.role(),
            email_verified: user.email_verified(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
    pub user: UserSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailResponse {
    pub verified: bool,
    pub verified_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub theme: Theme,
    pub color_scheme: String,
    pub custom_colors: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighContrastResponse {
    pub id: String,
    pub enabled: bool,
    pub theme: Theme,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyResponse {
    pub id: String,
    pub currency: String,
    pub symbol: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimezoneResponse {
    pub id: String,
    pub timezone: String,
    pub utc_offset: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MfaResponse {
    pub enabled: bool,
    pub method: Option<MfaMethod>,
    pub backup_codes_remaining: usize,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupCodesResponse {
    pub backup_codes: Vec<String>,
    pub generated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used_count: usize,
    pub total_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutAllDevicesResponse {
    pub success: bool,
    pub sessions_terminated: usize,
    pub terminated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub current: bool,
}

impl SessionSummary {
    pub fn new(session: &Session, current_session: &SessionId) -> Self {
        Self {
            id: session.id.to_string(),
            created_at: session.created_at,
            last_seen_at: session.last_seen_at,
            expires_at: session.expires_at,
            user_agent: session.user_agent.clone(),
            current: session.id == *current_session,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSessionsResponse {
    pub sessions: Vec<SessionSummary>,
    pub total_count: usize,
    pub current_session_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDataResponse {
    pub format: ExportFormat,
    pub file_name: String,
    pub content_type: &'static str,
    pub content: String,
    pub exported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSummary {
    pub theme: Theme,
    pub color_scheme: String,
    pub custom_colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighContrastSummary {
    pub enabled: bool,
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencySummary {
    pub code: String,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimezoneSummary {
    pub name: String,
    pub utc_offset: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MfaSummary {
    pub enabled: bool,
    pub method: Option<MfaMethod>,
    pub backup_codes_remaining: usize,
}

/// The full preference record of one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesResponse {
    pub theme: ThemeSummary,
    pub high_contrast: HighContrastSummary,
    pub currency: CurrencySummary,
    pub timezone: TimezoneSummary,
    pub mfa: MfaSummary,
    pub updated_at: DateTime<Utc>,
}

impl PreferencesResponse {
    /// Offsets and remaining backup codes are evaluated at `now`.
    pub fn new(preferences: &Preferences, now: DateTime<Utc>) -> Self {
        Self {
            theme: ThemeSummary {
                theme: preferences.theme.theme,
                color_scheme: preferences.theme.color_scheme.as_str().to_owned(),
                custom_colors: preferences
                    .theme
                    .custom_colors
                    .iter()
                    .map(|color| color.as_str().to_owned())
                    .collect(),
            },
            high_contrast: HighContrastSummary {
                enabled: preferences.high_contrast.enabled,
                theme: preferences.high_contrast.theme,
            },
            currency: CurrencySummary {
                code: preferences.currency.code().to_owned(),
                symbol: preferences.currency.symbol().to_owned(),
            },
            timezone: TimezoneSummary {
                name: preferences.timezone.name().to_owned(),
                utc_offset: preferences.timezone.utc_offset_at(now),
            },
            mfa: MfaSummary {
                enabled: preferences.mfa.enabled,
                method: preferences.mfa.method,
                backup_codes_remaining: preferences.mfa.backup_codes_remaining(now),
            },
            updated_at: preferences.updated_at(),
        }
    }
}
