pub mod bcrypt_hasher;

use crate::core::errors::HashError;
use async_trait::async_trait;

/// A freshly generated salt together with the work factor it was made for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Salt {
    pub cost: u32,
    pub bytes: [u8; 16],
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn generate_salt(&self, cost: u32) -> Result<Salt, HashError>;
    async fn hash(&self, plaintext: &str, salt: &Salt) -> Result<String, HashError>;
}
