use super::*;

fn input<'a>(name: &'a str, input_type: &'a str, value: &'a str, required: bool) -> FieldInput<'a> {
    FieldInput {
        name,
        input_type,
        value,
        required,
    }
}

// =============================================================
// Required
// =============================================================

#[test]
fn required_field_rejects_blank() {
    let err = validate_field(&input("title", "text", "   ", true), None).unwrap_err();
    assert_eq!(err, FieldError::Required);
    assert_eq!(err.to_string(), "This field is required");
}

#[test]
fn optional_blank_field_passes() {
    assert!(validate_field(&input("organization", "text", "", false), None).is_ok());
    assert!(validate_field(&input("email", "email", "", false), None).is_ok());
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_shape_is_checked() {
    assert!(validate_field(&input("email", "email", "ada@example.com", true), None).is_ok());
    assert_eq!(
        validate_field(&input("email", "email", "ada@example", true), None),
        Err(FieldError::InvalidEmail)
    );
}

#[test]
fn email_value_is_trimmed_first() {
    assert!(validate_field(&input("email", "email", "  ada@example.com ", true), None).is_ok());
}

#[test]
fn is_valid_email_edge_cases() {
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("first.last@sub.domain.org"));
    assert!(is_valid_email("a@b..c"));
    assert!(!is_valid_email("@b.c"));
    assert!(!is_valid_email("a@.c"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a@@b.c"));
    assert!(!is_valid_email("a@b@c.d"));
    assert!(!is_valid_email("a b@c.d"));
    assert!(!is_valid_email("plainaddress"));
}

// =============================================================
// Passwords
// =============================================================

#[test]
fn short_password_is_rejected() {
    let err = validate_field(&input("password", "password", "abc12", true), None).unwrap_err();
    assert_eq!(err.to_string(), "Password must be at least 6 characters long");
    assert!(validate_field(&input("password", "password", "abc123", true), None).is_ok());
}

#[test]
fn length_rule_only_applies_to_primary_password() {
    assert!(validate_field(&input("current", "password", "abc", true), None).is_ok());
}

#[test]
fn confirmation_must_match_password() {
    assert_eq!(
        validate_field(&input("password2", "password", "secret1", true), Some("secret2")),
        Err(FieldError::PasswordMismatch)
    );
    assert!(validate_field(&input("password2", "password", "secret1", true), Some("secret1")).is_ok());
}

#[test]
fn confirmation_without_password_field_passes() {
    assert!(validate_field(&input("password2", "password", "secret1", true), None).is_ok());
}

#[test]
fn blank_confirmation_reports_required_not_mismatch() {
    assert_eq!(
        validate_field(&input("password2", "password", "", true), Some("secret1")),
        Err(FieldError::Required)
    );
}
