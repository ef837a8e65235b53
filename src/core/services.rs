use crate::constants::DEFAULT_BCRYPT_COST;
use crate::core::errors::RegistrationError;
use crate::core::models::user::{NewUser, User};
use crate::core::validation::validate_registration;
use crate::infrastructure::avatar::{AvatarGenerator, AvatarOptions};
use crate::infrastructure::hashing::PasswordHasher;
use crate::infrastructure::storage::UserStore;
use tracing::{debug, info, warn};

pub struct RegistrationService<S: UserStore, H: PasswordHasher, A: AvatarGenerator> {
    storage: S,
    hasher: H,
    avatar: A,
    bcrypt_cost: u32,
}

impl<S: UserStore, H: PasswordHasher, A: AvatarGenerator> RegistrationService<S, H, A> {
    pub fn new(storage: S, hasher: H, avatar: A) -> Self {
        RegistrationService {
            storage,
            hasher,
            avatar,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost
    }

    /// Validates `request`, rejects a taken email, then persists a new user
    /// with a gravatar avatar and a bcrypt hash in place of the plaintext.
    pub async fn register(&self, request: NewUser) -> Result<User, RegistrationError> {
        validate_registration(&request)?;
        let NewUser { name, email, password } = request;

        if self.storage.find_by_email(&email).await?.is_some() {
            warn!(%email, "Registration rejected: email already registered");
            return Err(RegistrationError::UserAlreadyExists);
        }

        let avatar = self.avatar.avatar_url(&email, &AvatarOptions::default())?;
        let mut user = User::new(name, email, avatar, password);

        let salt = self.hasher.generate_salt(self.bcrypt_cost).await?;
        user.password = self.hasher.hash(&user.password, &salt).await?;
        debug!(user_id = %user.id, cost = salt.cost, "Password hashed");

        // A concurrent registration may have taken the email since the lookup.
        if !self.storage.insert_if_absent(user.clone()).await? {
            warn!(email = %user.email, "Registration rejected: email taken concurrently");
            return Err(RegistrationError::UserAlreadyExists);
        }

        info!(user_id = %user.id, email = %user.email, "User registered");
        Ok(user)
    }
}
