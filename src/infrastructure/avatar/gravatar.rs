use md5::{Digest, Md5};

use crate::constants::DEFAULT_AVATAR_BASE_URL;
use crate::core::errors::AvatarError;
use crate::infrastructure::avatar::{AvatarGenerator, AvatarOptions};

const MAX_SIZE: u16 = 2048;

#[derive(Clone, Debug)]
pub struct GravatarGenerator {
    base_url: String,
}

impl GravatarGenerator {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        GravatarGenerator {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for GravatarGenerator {
    fn default() -> Self {
        GravatarGenerator::new(DEFAULT_AVATAR_BASE_URL)
    }
}

/// Hex MD5 of the trimmed, lowercased address.
pub fn gravatar_hash(email: &str) -> String {
    hex::encode(Md5::digest(email.trim().to_lowercase().as_bytes()))
}

impl AvatarGenerator for GravatarGenerator {
    fn avatar_url(&self, email: &str, options: &AvatarOptions) -> Result<String, AvatarError> {
        if email.trim().is_empty() {
            return Err(AvatarError::EmptyEmail);
        }
        if options.size == 0 || options.size > MAX_SIZE {
            return Err(AvatarError::InvalidSize(options.size));
        }
        Ok(format!(
            "{}/{}?s={}&r={}&d={}",
            self.base_url,
            gravatar_hash(email),
            options.size,
            options.rating,
            options.default_image
        ))
    }
}
