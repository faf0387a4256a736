use chrono::Utc;
use tessera_core::{PreferenceStore, UserId};

use super::update_preferences::{PreferencesError, update_preferences};
use crate::dto::{SetTimezoneRequest, TimezoneResponse};

pub struct SetTimezoneUseCase<'a, P>
where
    P: PreferenceStore + ?Sized,
{
    preferences: &'a P,
}

impl<'a, P> SetTimezoneUseCase<'a, P>
where
    P: PreferenceStore + ?Sized,
{
    pub fn new(preferences: &'a P) -> Self {
        Self { preferences }
    }

    /// The reported offset is the one in effect at the time of the call.
    #[tracing::instrument(name = "SetTimezoneUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: &UserId,
        request: SetTimezoneRequest,
    ) -> Result<TimezoneResponse, PreferencesError> {
        let now = Utc::now();
        let saved = update_preferences(self.preferences, user_id, now, |preferences| {
            preferences.timezone = request.timezone;
        })
        .await?;

        Ok(TimezoneResponse {
            id: saved.user_id().to_string(),
            timezone: saved.timezone.name().to_owned(),
            utc_offset: saved.timezone.utc_offset_at(now),
            updated_at: saved.updated_at(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_doubles::{MockPreferenceStore, seed_preferences};
    use tessera_core::Timezone;

    #[tokio::test]
    async fn reports_name_and_offset() {
        let store = MockPreferenceStore::default();
        let user_id = UserId::generate();
        seed_preferences(&store, &user_id).await;

        let response = SetTimezoneUseCase::new(&store)
            .execute(
                &user_id,
                SetTimezoneRequest {
                    timezone: Timezone::try_from("Asia/Kolkata").unwrap(),
                },
            )
            .await
            .unwrap();

        assert_eq!(response.timezone, "Asia/Kolkata");
        assert_eq!(response.utc_offset, "+05:30");
        assert_eq!(
            store.get_preferences(&user_id).await.unwrap().timezone.name(),
            "Asia/Kolkata"
        );
    }
}
