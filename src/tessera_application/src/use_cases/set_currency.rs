use chrono::Utc;
use tessera_core::{PreferenceStore, UserId};

use super::update_preferences::{PreferencesError, update_preferences};
use crate::dto::{CurrencyResponse, SetCurrencyRequest};

pub struct SetCurrencyUseCase<'a, P>
where
    P: PreferenceStore + ?Sized,
{
    preferences: &'a P,
}

impl<'a, P> SetCurrencyUseCase<'a, P>
where
    P: PreferenceStore + ?Sized,
{
    pub fn new(preferences: &'a P) -> Self {
        Self { preferences }
    }

    #[tracing::instrument(name = "SetCurrencyUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: &UserId,
        request: SetCurrencyRequest,
    ) -> Result<CurrencyResponse, PreferencesError> {
        let saved = update_preferences(self.preferences, user_id, Utc::now(), |preferences| {
            preferences.currency = request.currency;
        })
        .await?;

        Ok(CurrencyResponse {
            id: saved.user_id().to_string(),
            currency: saved.currency.code().to_owned(),
            symbol: saved.currency.symbol().to_owned(),
            updated_at: saved.updated_at(),
        })
    }
}
