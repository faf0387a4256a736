use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use tessera_core::{Email, PendingVerification, VerificationCodeStore, VerificationCodeStoreError};

/// Holds at most one pending code per address; storing a new one replaces it.
#[derive(Default, Clone)]
pub struct HashMapVerificationCodeStore {
    codes: Arc<RwLock<HashMap<Email, PendingVerification>>>,
}

impl HashMapVerificationCodeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl VerificationCodeStore for HashMapVerificationCodeStore {
    async fn store_code(
        &self,
        email: Email,
        pending: PendingVerification,
    ) -> Result<(), VerificationCodeStoreError> {
        self.codes.write().await.insert(email, pending);
        Ok(())
    }

    async fn get_code(
        &self,
        email: &Email,
    ) -> Result<PendingVerification, VerificationCodeStoreError> {
        self.codes
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(VerificationCodeStoreError::NotFound)
    }

    async fn delete_code(&self, email: &Email) -> Result<(), VerificationCodeStoreError> {
        self.codes.write().await.remove(email);
        Ok(())
    }
}
