use chrono::Utc;
use tessera_core::{BackupCodeSet, MfaSettings, PreferenceStore, UserId};

use super::update_preferences::{PreferencesError, update_preferences};
use crate::dto::{MfaResponse, UpdateMfaRequest};

/// Turns multi-factor authentication on or off.
///
/// Enabling issues a fresh set of backup codes unless an unexpired set
/// already exists. Disabling clears the method and discards any codes.
pub struct UpdateMfaUseCase<'a, P>
where
    P: PreferenceStore + ?Sized,
{
    preferences: &'a P,
}

impl<'a, P> UpdateMfaUseCase<'a, P>
where
    P: PreferenceStore + ?Sized,
{
    pub fn new(preferences: &'a P) -> Self {
        Self { preferences }
    }

    #[tracing::instrument(name = "UpdateMfaUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: &UserId,
        request: UpdateMfaRequest,
    ) -> Result<MfaResponse, PreferencesError> {
        let now = Utc::now();
        let saved = update_preferences(self.preferences, user_id, now, |preferences| {
            let mfa = &mut preferences.mfa;
            if request.enabled {
                let has_active_codes = mfa
                    .backup_codes
                    .as_ref()
                    .is_some_and(|codes| !codes.is_expired(now));
                mfa.enabled = true;
                mfa.method = request.method;
                if !has_active_codes {
                    mfa.backup_codes = Some(BackupCodeSet::generate(now));
                }
            } else {
                *mfa = MfaSettings {
                    enabled: false,
                    method: None,
                    backup_codes: None,
                };
            }
        })
        .await?;

        Ok(MfaResponse {
            enabled: saved.mfa.enabled,
            method: saved.mfa.method,
            backup_codes_remaining: saved.mfa.backup_codes_remaining(now),
            updated_at: saved.updated_at(),
        })
    }
}
