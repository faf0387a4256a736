use chrono::Utc;
use tessera_core::{BackupCodeSet, PreferenceStore, PreferenceStoreError, UserId};

use crate::dto::BackupCodesResponse;

#[derive(Debug, thiserror::Error)]
pub enum GenerateBackupCodesError {
    #[error("MFA must be enabled before backup codes can be generated")]
    MfaNotEnabled,
    #[error("Preference store error: {0}")]
    PreferenceStoreError(#[from] PreferenceStoreError),
}

/// Replaces the user's backup codes with a new set.
pub struct GenerateBackupCodesUseCase<'a, P>
where
    P: PreferenceStore + ?Sized,
{
    preferences: &'a P,
}

impl<'a, P> GenerateBackupCodesUseCase<'a, P>
where
    P: PreferenceStore + ?Sized,
{
    pub fn new(preferences: &'a P) -> Self {
        Self { preferences }
    }

    #[tracing::instrument(name = "GenerateBackupCodesUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: &UserId,
    ) -> Result<BackupCodesResponse, GenerateBackupCodesError> {
        let mut preferences = self.preferences.get_preferences(user_id).await?;
        if !preferences.mfa.enabled {
            return Err(GenerateBackupCodesError::MfaNotEnabled);
        }

        let now = Utc::now();
        preferences.mfa.backup_codes = Some(BackupCodeSet::generate(now));
        preferences.touch(now);
        self.preferences.save_preferences(preferences).await?;

        let saved = self.preferences.get_preferences(user_id).await?;
        let codes = saved
            .mfa
            .backup_codes
            .ok_or(PreferenceStoreError::UnexpectedError(
                "backup codes were not persisted".to_owned(),
            ))?;

        Ok(BackupCodesResponse {
            backup_codes: codes.codes().to_vec(),
            generated_at: codes.generated_at(),
            expires_at: codes.expires_at(),
            used_count: codes.used_count(),
            total_count: codes.total_count(),
        })
    }
}
