use crate::core::errors::StoreError;
use crate::core::models::user::User;
use crate::infrastructure::storage::UserStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users_by_email: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        InMemoryUserStore {
            users_by_email: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.users_by_email.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users_by_email.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users_by_email = self.users_by_email.read().await;
        Ok(users_by_email.get(email).cloned())
    }

    async fn save(&self, user: User) -> Result<(), StoreError> {
        let mut users_by_email = self.users_by_email.write().await;
        users_by_email.insert(user.email.clone(), user);
        Ok(())
    }

    async fn insert_if_absent(&self, user: User) -> Result<bool, StoreError> {
        let mut users_by_email = self.users_by_email.write().await;
        match users_by_email.entry(user.email.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(user);
                Ok(true)
            }
        }
    }
}
