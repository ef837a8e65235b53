pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::RegistrationError;
pub use crate::core::services::RegistrationService;
pub use crate::infrastructure::avatar::gravatar::GravatarGenerator;
pub use crate::infrastructure::hashing::bcrypt_hasher::BcryptHasher;
pub use crate::infrastructure::storage::in_memory::InMemoryUserStore;

#[cfg(test)]
mod tests; // Service and HTTP tests
