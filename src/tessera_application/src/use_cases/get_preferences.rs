use chrono::Utc;
use tessera_core::{PreferenceStore, UserId};

use super::update_preferences::PreferencesError;
use crate::dto::PreferencesResponse;

pub struct GetPreferencesUseCase<'a, P>
where
    P: PreferenceStore + ?Sized,
{
    preferences: &'a P,
}

impl<'a, P> GetPreferencesUseCase<'a, P>
where
    P: PreferenceStore + ?Sized,
{
    pub fn new(preferences: &'a P) -> Self {
        Self { preferences }
    }

    #[tracing::instrument(name = "GetPreferencesUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: &UserId) -> Result<PreferencesResponse, PreferencesError> {
        let preferences = self.preferences.get_preferences(user_id).await?;
        Ok(PreferencesResponse::new(&preferences, Utc::now()))
    }
}
