use crate::core::errors::HashError;
use crate::infrastructure::hashing::{PasswordHasher, Salt};
use async_trait::async_trait;
use bcrypt::Version;

// Work factors bcrypt accepts.
const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

/// bcrypt on the blocking thread pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct BcryptHasher;

impl BcryptHasher {
    pub fn new() -> Self {
        BcryptHasher
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn generate_salt(&self, cost: u32) -> Result<Salt, HashError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(HashError::Bcrypt(bcrypt::BcryptError::CostNotAllowed(cost)));
        }
        Ok(Salt {
            cost,
            bytes: rand::random(),
        })
    }

    async fn hash(&self, plaintext: &str, salt: &Salt) -> Result<String, HashError> {
        let plaintext = plaintext.to_owned();
        let Salt { cost, bytes } = salt.clone();
        let parts = tokio::task::spawn_blocking(move || bcrypt::hash_with_salt(plaintext, cost, bytes)).await??;
        Ok(parts.format_for_version(Version::TwoB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_verifies_against_plaintext() {
        let hasher = BcryptHasher::new();
        let salt = hasher.generate_salt(4).await.unwrap();
        let hashed = hasher.hash("secret1", &salt).await.unwrap();

        assert!(hashed.starts_with("$2b$04$"));
        assert_ne!(hashed, "secret1");
        assert!(bcrypt::verify("secret1", &hashed).unwrap());
        assert!(!bcrypt::verify("secret2", &hashed).unwrap());
    }

    #[tokio::test]
    async fn same_salt_gives_same_hash() {
        let hasher = BcryptHasher::new();
        let salt = hasher.generate_salt(4).await.unwrap();
        assert_eq!(
            hasher.hash("secret1", &salt).await.unwrap(),
            hasher.hash("secret1", &salt).await.unwrap()
        );
    }

    #[tokio::test]
    async fn fresh_salts_differ() {
        let hasher = BcryptHasher::new();
        let first = hasher.generate_salt(4).await.unwrap();
        let second = hasher.generate_salt(4).await.unwrap();
        assert_ne!(first.bytes, second.bytes);
        assert_ne!(
            hasher.hash("secret1", &first).await.unwrap(),
            hasher.hash("secret1", &second).await.unwrap()
        );
    }

    #[tokio::test]
    async fn rejects_cost_outside_bcrypt_range() {
        let hasher = BcryptHasher::new();
        assert!(matches!(
            hasher.generate_salt(3).await,
            Err(HashError::Bcrypt(bcrypt::BcryptError::CostNotAllowed(3)))
        ));
        assert!(hasher.generate_salt(32).await.is_err());
    }
}
