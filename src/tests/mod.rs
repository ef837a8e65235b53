
use crate::core::errors::StoreError;
use crate::core::models::user::{NewUser, User};
use crate::core::services::RegistrationService;
use crate::infrastructure::avatar::gravatar::GravatarGenerator;
use crate::infrastructure::hashing::bcrypt_hasher::BcryptHasher;
use crate::infrastructure::storage::UserStore;
use crate::infrastructure::storage::in_memory::InMemoryUserStore;
use async_trait::async_trait;

// Lowest cost bcrypt accepts, to keep tests fast.
pub const TEST_BCRYPT_COST: u32 = 4;

pub type TestService<S = InMemoryUserStore> = RegistrationService<S, BcryptHasher, GravatarGenerator>;

pub fn create_test_service() -> TestService {
    service_with_store(InMemoryUserStore::new())
}

pub fn service_with_store<S: UserStore>(store: S) -> TestService<S> {
    RegistrationService::new(store, BcryptHasher::new(), GravatarGenerator::default()).with_bcrypt_cost(TEST_BCRYPT_COST)
}

pub fn new_user(name: &str, email: &str, password: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Store whose lookups succeed but whose writes always fail.
#[derive(Default)]
pub struct FailingWriteStore;

#[async_trait]
impl UserStore for FailingWriteStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Ok(None)
    }

    async fn save(&self, _user: User) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("simulated write failure".to_string()))
    }

    async fn insert_if_absent(&self, _user: User) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("simulated write failure".to_string()))
    }
}

/// Store that is unreachable for every operation.
#[derive(Default)]
pub struct UnreachableStore;

#[async_trait]
impl UserStore for UnreachableStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn save(&self, _user: User) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn insert_if_absent(&self, _user: User) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// Store whose lookup never sees the existing record, so only the
/// conditional insert can catch the duplicate.
pub struct StaleReadStore(pub InMemoryUserStore);

#[async_trait]
impl UserStore for StaleReadStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Ok(None)
    }

    async fn save(&self, user: User) -> Result<(), StoreError> {
        self.0.save(user).await
    }

    async fn insert_if_absent(&self, user: User) -> Result<bool, StoreError> {
        self.0.insert_if_absent(user).await
    }
}
