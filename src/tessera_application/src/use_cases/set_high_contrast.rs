use chrono::Utc;
use tessera_core::{PreferenceStore, UserId};

use super::update_preferences::{PreferencesError, update_preferences};
use crate::dto::{HighContrastResponse, SetHighContrastRequest};

pub struct SetHighContrastUseCase<'a, P>
where
    P: PreferenceStore + ?Sized,
{
    preferences: &'a P,
}

impl<'a, P> SetHighContrastUseCase<'a, P>
where
    P: PreferenceStore + ?Sized,
{
    pub fn new(preferences: &'a P) -> Self {
        Self { preferences }
    }

    #[tracing::instrument(name = "SetHighContrastUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: &UserId,
        request: SetHighContrastRequest,
    ) -> Result<HighContrastResponse, PreferencesError> {
        let saved = update_preferences(self.preferences, user_id, Utc::now(), |preferences| {
            preferences.high_contrast.enabled = request.enabled;
            if let Some(theme) = request.theme {
                preferences.high_contrast.theme = theme;
            }
        })
        .await?;

        Ok(HighContrastResponse {
            id: saved.user_id().to_string(),
            enabled: saved.high_contrast.enabled,
            theme: saved.high_contrast.theme,
            updated_at: saved.updated_at(),
        })
    }
}
