use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use tessera_core::{Email, User, UserId, UserRepository, UserStoreError};

#[derive(Default, Clone)]
pub struct HashMapUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl HashMapUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for HashMapUserRepository {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let email_taken = users
            .values()
            .any(|existing| existing.email() == user.email());
        if email_taken || users.contains_key(user.id()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.id().clone(), user);
        Ok(())
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.email() == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn update_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let existing = users
            .get_mut(user.id())
            .ok_or(UserStoreError::UserNotFound)?;

        *existing = user;
        Ok(())
    }
}
