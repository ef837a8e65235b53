use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub password: String, // bcrypt hash once persisted
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, avatar: String, password: String) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            avatar,
            password,
            created_at: Utc::now(),
        }
    }
}

/// Body of `POST /api/users`. Absent and `null` fields deserialize as empty
/// strings so that validation reports them.
#[derive(Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct NewUser {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(
        email(message = "Please include a valid email"),
        custom(function = "crate::core::validation::validate_email_tld")
    )]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    pub password: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
