pub mod gravatar;

use crate::constants::{AVATAR_DEFAULT_IMAGE, AVATAR_RATING, AVATAR_SIZE};
use crate::core::errors::AvatarError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarOptions {
    pub size: u16,
    pub rating: String,
    pub default_image: String,
}

impl Default for AvatarOptions {
    // 200px, "pg" rating, mystery-man fallback
    fn default() -> Self {
        AvatarOptions {
            size: AVATAR_SIZE,
            rating: AVATAR_RATING.to_string(),
            default_image: AVATAR_DEFAULT_IMAGE.to_string(),
        }
    }
}

/// Maps an email to an avatar image URL. Implementations are pure: the same
/// email and options always give the same URL.
pub trait AvatarGenerator: Send + Sync {
    fn avatar_url(&self, email: &str, options: &AvatarOptions) -> Result<String, AvatarError>;
}
