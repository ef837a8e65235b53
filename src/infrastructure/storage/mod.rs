pub mod in_memory;

use crate::core::errors::StoreError;
use crate::core::models::user::User;
use async_trait::async_trait;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Writes `user`, replacing any record with the same email.
    async fn save(&self, user: User) -> Result<(), StoreError>;

    /// Writes `user` only if no record with its email exists. Returns `false`
    /// when the email is already taken. The existence check and the write
    /// happen as one operation.
    async fn insert_if_absent(&self, user: User) -> Result<bool, StoreError>;
}
