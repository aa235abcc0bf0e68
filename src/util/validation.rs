//! Inline form field validation.
//!
//! Runs when a field loses focus. The message shown next to the field is the
//! `Display` of [`FieldError`]; the server repeats every check, so these rules
//! only need to catch obvious mistakes early.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Field name whose value `password2` must repeat.
pub const PASSWORD_FIELD: &str = "password";
pub const PASSWORD_CONFIRM_FIELD: &str = "password2";

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// What validation needs to know about a control.
#[derive(Clone, Copy, Debug)]
pub struct FieldInput<'a> {
    pub name: &'a str,
    /// The `type` attribute, lowercase (`text`, `email`, `password`, ...).
    pub input_type: &'a str,
    pub value: &'a str,
    pub required: bool,
}

/// Validate one field. `password` is the current value of the form's
/// `password` field, used to check the confirmation field.
pub fn validate_field(field: &FieldInput<'_>, password: Option<&str>) -> Result<(), FieldError> {
    let value = field.value.trim();

    if value.is_empty() {
        return if field.required { Err(FieldError::Required) } else { Ok(()) };
    }

    if field.input_type == "email" && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }

    if field.input_type == "password" && field.name == PASSWORD_FIELD && value.chars().count() < MIN_PASSWORD_LEN {
        return Err(FieldError::PasswordTooShort);
    }

    if field.name == PASSWORD_CONFIRM_FIELD {
        if let Some(password) = password {
            if value != password {
                return Err(FieldError::PasswordMismatch);
            }
        }
    }

    Ok(())
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
