use chrono::Utc;
use tessera_core::{PreferenceStore, UserId};

use super::update_preferences::{PreferencesError, update_preferences};
use crate::dto::{SetThemeRequest, ThemeResponse};

/// Stores the base theme, colour scheme and custom colours.
pub struct SetThemeUseCase<'a, P>
where
    P: PreferenceStore + ?Sized,
{
    preferences: &'a P,
}

impl<'a, P> SetThemeUseCase<'a, P>
where
    P: PreferenceStore + ?Sized,
{
    pub fn new(preferences: &'a P) -> Self {
        Self { preferences }
    }

    #[tracing::instrument(name = "SetThemeUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: &UserId,
        request: SetThemeRequest,
    ) -> Result<ThemeResponse, PreferencesError> {
        let saved = update_preferences(self.preferences, user_id, Utc::now(), |preferences| {
            preferences.theme.theme = request.theme;
            preferences.theme.color_scheme = request.color_scheme;
            preferences.theme.custom_colors = request.custom_colors;
        })
        .await?;

        Ok(ThemeResponse {
            theme: saved.theme.theme,
            color_scheme: saved.theme.color_scheme.as_str().to_owned(),
            custom_colors: saved
                .theme
                .custom_colors
                .iter()
                .map(|color| color.as_str().to_owned())
                .collect(),
            updated_at: saved.updated_at(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_doubles::{MockPreferenceStore, seed_preferences};
    use serde_json::json;
    use tessera_core::{Theme, ValidateRequest};

    #[tokio::test]
    async fn echoes_the_persisted_theme() {
        let store = MockPreferenceStore::default();
        let user_id = UserId::generate();
        seed_preferences(&store, &user_id).await;
        let request = SetThemeRequest::validate(
            &json!({ "theme": "dark", "colorScheme": "blue", "customColors": [] }),
        )
        .unwrap();
        let before = Utc::now();

        let response = SetThemeUseCase::new(&store)
            .execute(&user_id, request)
            .await
            .unwrap();

        assert_eq!(response.theme, Theme::Dark);
        assert_eq!(response.color_scheme, "blue");
        assert!(response.custom_colors.is_empty());
        assert!(response.updated_at >= before);

        let stored = store.get_preferences(&user_id).await.unwrap();
        assert_eq!(stored.theme.theme, Theme::Dark);
        assert_eq!(stored.theme.color_scheme.as_str(), "blue");
    }

    #[tokio::test]
    async fn replaces_previous_custom_colors() {
        let store = MockPreferenceStore::default();
        let user_id = UserId::generate();
        seed_preferences(&store, &user_id).await;
        let use_case = SetThemeUseCase::new(&store);

        let first = SetThemeRequest::validate(&json!({
            "theme": "light",
            "colorScheme": "ocean",
            "customColors": ["#fff", "#000000"]
        }))
        .unwrap();
        use_case.execute(&user_id, first).await.unwrap();

        let second = SetThemeRequest::validate(&json!({
            "theme": "light",
            "colorScheme": "ocean",
            "customColors": ["#123"]
        }))
        .unwrap();
        let response = use_case.execute(&user_id, second).await.unwrap();

        assert_eq!(response.custom_colors, vec!["#123".to_owned()]);
    }
}
