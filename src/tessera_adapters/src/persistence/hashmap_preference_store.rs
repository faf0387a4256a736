use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use tessera_core::{PreferenceStore, PreferenceStoreError, Preferences, UserId};

#[derive(Default, Clone)]
pub struct HashMapPreferenceStore {
    preferences: Arc<RwLock<HashMap<UserId, Preferences>>>,
}

impl HashMapPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl PreferenceStore for HashMapPreferenceStore {
    async fn save_preferences(&self, preferences: Preferences) -> Result<(), PreferenceStoreError> {
        self.preferences
            .write()
            .await
            .insert(preferences.user_id().clone(), preferences);
        Ok(())
    }

    async fn get_preferences(&self, user_id: &UserId) -> Result<Preferences, PreferenceStoreError> {
        self.preferences
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or(PreferenceStoreError::NotFound)
    }
}
