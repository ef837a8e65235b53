use std::borrow::Cow;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::core::errors::{FieldError, RegistrationError};
use crate::core::models::user::NewUser;

// Report order of the registration fields.
const FIELD_ORDER: [&str; 3] = ["name", "email", "password"];

/// Runs every rule on `request` and collects all failures, not just the
/// first one.
pub fn validate_registration(request: &NewUser) -> Result<(), RegistrationError> {
    match request.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(RegistrationError::Validation(to_field_errors(request, &errors))),
    }
}

fn to_field_errors(request: &NewUser, errors: &ValidationErrors) -> Vec<FieldError> {
    let by_field = errors.field_errors();
    FIELD_ORDER
        .iter()
        .filter_map(|field| by_field.get(*field).map(|errs| (*field, errs)))
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                FieldError::body_field(field, msg, submitted_value(request, field))
            })
        })
        .collect()
}

/// Rejects syntactically valid addresses whose domain has no top-level
/// label, such as `ann@localhost` or `ann@[127.0.0.1]`. Addresses the email
/// rule already rejects pass here so each failure is reported once.
pub fn validate_email_tld(email: &str) -> Result<(), ValidationError> {
    if !email.to_owned().validate_email() || has_tld(email) {
        return Ok(());
    }
    let mut error = ValidationError::new("email_tld");
    error.message = Some(Cow::Borrowed("Please include a valid email"));
    Err(error)
}

fn has_tld(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    let mut labels = domain.rsplit('.');
    let tld = labels.next().unwrap_or_default();
    let has_host = labels.next().is_some_and(|label| !label.is_empty());
    let tld_ok = tld.starts_with("xn--") || (tld.len() >= 2 && tld.chars().all(|c| c.is_alphabetic()));
    has_host && tld_ok
}

// Passwords are never echoed back.
fn submitted_value(request: &NewUser, field: &str) -> Option<String> {
    match field {
        "name" => Some(request.name.clone()),
        "email" => Some(request.email.clone()),
        _ => None,
    }
}
