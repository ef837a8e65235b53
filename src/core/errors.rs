use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// One entry of the `errors` array returned with a 400 response.
///
/// Validation failures carry the offending `param`, its `value` and the
/// `location` of the input. Conflicts and malformed bodies carry only `msg`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl FieldError {
    pub fn message(msg: impl Into<String>) -> Self {
        FieldError {
            msg: msg.into(),
            param: None,
            value: None,
            location: None,
        }
    }

    pub fn body_field(param: &str, msg: impl Into<String>, value: Option<String>) -> Self {
        FieldError {
            msg: msg.into(),
            param: Some(param.to_string()),
            value,
            location: Some("body".to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("User store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum HashError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("Hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Error, Debug)]
pub enum AvatarError {
    #[error("Cannot derive an avatar from an empty email")]
    EmptyEmail,
    #[error("Avatar size {0} out of range (1..=2048)")]
    InvalidSize(u16),
}

#[derive(Error, Debug)]
pub enum RegistrationError {
    /// One entry per violated input rule
    #[error("Validation failed: {} error(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Request body could not be parsed as JSON
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// A user with this email is already persisted
    #[error("User already exists")]
    UserAlreadyExists,

    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),

    #[error("Password hashing failed: {0}")]
    HashFailure(#[from] HashError),

    #[error("Avatar derivation failed: {0}")]
    AvatarFailure(#[from] AvatarError),
}

impl RegistrationError {
    /// Only store I/O may succeed on a later attempt; input, conflict and
    /// hashing/avatar failures are deterministic for the same request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RegistrationError::StoreUnavailable(_))
    }

    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RegistrationError::Validation(_) | RegistrationError::MalformedBody(_) | RegistrationError::UserAlreadyExists
        )
    }
}
