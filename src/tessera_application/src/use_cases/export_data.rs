use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tessera_core::{
    ExportFormat, PreferenceStore, PreferenceStoreError, Role, User, UserId, UserRepository,
    UserStoreError,
};

use crate::dto::{ExportDataRequest, ExportDataResponse, PreferencesResponse};

#[derive(Debug, thiserror::Error)]
pub enum ExportDataError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Preference store error: {0}")]
    PreferenceStoreError(#[from] PreferenceStoreError),
    #[error("Failed to serialize export: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileExport {
    id: String,
    email: String,
    role: Role,
    email_verified: bool,
    created_at: DateTime<Utc>,
}

impl From<&User> for ProfileExport {
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument {
    profile: ProfileExport,
    preferences: PreferencesResponse,
    exported_at: DateTime<Utc>,
}

/// Bundles the profile and preferences of a user into a downloadable document.
pub struct ExportDataUseCase<'a, U, P>
where
    U: UserRepository + ?Sized,
    P: PreferenceStore + ?Sized,
{
    users: &'a U,
    preferences: &'a P,
}

impl<'a, U, P> ExportDataUseCase<'a, U, P>
where
    U: UserRepository + ?Sized,
    P: PreferenceStore + ?Sized,
{
    pub fn new(users: &'a U, preferences: &'a P) -> Self {
        Self { users, preferences }
    }

    #[tracing::instrument(name = "ExportDataUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: &UserId,
        request: ExportDataRequest,
    ) -> Result<ExportDataResponse, ExportDataError> {
        let user = self.users.get_user(user_id).await?;
        let preferences = self.preferences.get_preferences(user_id).await?;
        let exported_at = Utc::now();

        let document = ExportDocument {
            profile: ProfileExport::from(&user),
            preferences: PreferencesResponse::new(&preferences, exported_at),
            exported_at,
        };
        let content = match request.format {
            ExportFormat::Json => serde_json::to_string_pretty(&document)?,
            ExportFormat::Csv => to_csv(&document),
        };

        Ok(ExportDataResponse {
            format: request.format,
            file_name: format!(
                "tessera-export-{}-{}.{}",
                user_id,
                exported_at.format("%Y%m%dT%H%M%SZ"),
                request.format.file_extension()
            ),
            content_type: request.format.content_type(),
            content,
            exported_at,
        })
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// One `section,field,value` row per exported fact.
fn to_csv(document: &ExportDocument) -> String {
    let profile = &document.profile;
    let preferences = &document.preferences;
    let rows: Vec<(&str, &str, String)> = vec![
        ("profile", "id", profile.id.clone()),
        ("profile", "email", profile.email.clone()),
        ("profile", "role", profile.role.to_string()),
        ("profile", "emailVerified", profile.email_verified.to_string()),
        ("profile", "createdAt", timestamp(profile.created_at)),
        ("theme", "theme", preferences.theme.theme.as_str().to_owned()),
        ("theme", "colorScheme", preferences.theme.color_scheme.clone()),
        ("theme", "customColors", preferences.theme.custom_colors.join(";")),
        (
            "highContrast",
            "enabled",
            preferences.high_contrast.enabled.to_string(),
        ),
        (
            "highContrast",
            "theme",
            preferences.high_contrast.theme.as_str().to_owned(),
        ),
        ("currency", "code", preferences.currency.code.clone()),
        ("currency", "symbol", preferences.currency.symbol.clone()),
        ("timezone", "name", preferences.timezone.name.clone()),
        ("timezone", "utcOffset", preferences.timezone.utc_offset.clone()),
        ("mfa", "enabled", preferences.mfa.enabled.to_string()),
        (
            "mfa",
            "method",
            preferences
                .mfa
                .method
                .map(|method| method.as_str().to_owned())
                .unwrap_or_default(),
        ),
        (
            "mfa",
            "backupCodesRemaining",
            preferences.mfa.backup_codes_remaining.to_string(),
        ),
        ("preferences", "updatedAt", timestamp(preferences.updated_at)),
        ("export", "exportedAt", timestamp(document.exported_at)),
    ];

    let mut csv = String::from("section,field,value\n");
    for (section, field, value) in rows {
        csv.push_str(&format!("{section},{field},{}\n", escape_csv(&value)));
    }
    csv
}

fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
