use chrono::{DateTime, Utc};
use tessera_core::{PreferenceStore, PreferenceStoreError, Preferences, UserId};

/// Error shared by the use-cases that read or change a single preference.
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("Preference store error: {0}")]
    PreferenceStoreError(#[from] PreferenceStoreError),
}

/// Applies `change` to the stored record, stamps it and returns what the
/// store holds afterwards.
pub(crate) async fn update_preferences<P>(
    store: &P,
    user_id: &UserId,
    now: DateTime<Utc>,
    change: impl FnOnce(&mut Preferences),
) -> Result<Preferences, PreferenceStoreError>
where
    P: PreferenceStore + ?Sized,
{
    let mut preferences = store.get_preferences(user_id).await?;
    change(&mut preferences);
    preferences.touch(now);
    store.save_preferences(preferences).await?;

    store.get_preferences(user_id).await
}
