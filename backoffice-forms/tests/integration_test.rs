//! Integration tests for backoffice-forms

use backoffice_forms::*;

#[test]
fn test_not_empty_validator() {
    assert!(NotEmpty::validate("hello", "name").is_ok());
    assert!(NotEmpty::validate("", "name").is_err());
    assert!(NotEmpty::validate("  \t ", "name").is_err());
}

#[test]
fn test_length_validators() {
    assert!(MinLength(3).validate("hello", "name").is_ok());
    assert!(MinLength(3).validate("hi", "name").is_err());
    assert!(MaxLength(5).validate("hello", "name").is_ok());
    assert!(MaxLength(5).validate("hello world", "name").is_err());
}

#[test]
fn test_is_email_validator() {
    assert!(IsEmail::validate("admin@example.com", "email").is_ok());
    assert!(IsEmail::validate("test.user@domain.co.uk", "email").is_ok());
    assert!(IsEmail::validate("invalid-email", "email").is_err());
    assert!(IsEmail::validate("@example.com", "email").is_err());
}

#[test]
fn test_exact_digits_validator() {
    assert!(ExactDigits(6).validate("400001", "pinCode").is_ok());
    assert!(ExactDigits(6).validate("12345", "pinCode").is_err());
    assert!(ExactDigits(6).validate("12345a", "pinCode").is_err());

    let err = ExactDigits(6).validate("12345", "pinCode").unwrap_err();
    assert!(err.message.contains("6 digits"));
}

#[test]
fn test_phone_validator() {
    assert!(Phone::validate("9876543210", "phone").is_ok());
    assert!(Phone::validate("12345", "phone").is_err());
    assert!(Phone::validate("98765-4321", "phone").is_err());
}

#[test]
fn test_password_strength_policy() {
    let policy = PasswordStrength::default();
    assert!(policy.validate("Str0ng!pass", "password").is_ok());

    let errors = policy.validate("weak", "password").unwrap_err();
    assert!(errors.len() >= 3);
    assert!(errors.iter().all(|e| e.field == "password"));
}

#[test]
fn test_address_form_accepts_valid_input() {
    let address = Address {
        full_name: "Asha Patel".to_string(),
        phone: "9876543210".to_string(),
        pin_code: "400001".to_string(),
        address_line1: "14 Marine Drive".to_string(),
        city: "Mumbai".to_string(),
        state: "Maharashtra".to_string(),
        ..Address::default()
    };
    assert!(address.validate().is_ok());
}

#[test]
fn test_address_form_collects_field_scoped_errors() {
    let address = Address {
        full_name: "Asha Patel".to_string(),
        phone: "12".to_string(),
        pin_code: "12345".to_string(),
        address_line1: "14 Marine Drive".to_string(),
        city: "Mumbai".to_string(),
        state: "Maharashtra".to_string(),
        ..Address::default()
    };

    let errors = address.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.field_errors("phone").len(), 1);
    assert_eq!(errors.field_errors("pinCode").len(), 1);
    assert!(errors.field_errors("city").is_empty());
}

#[test]
fn test_validation_error_display() {
    let err = ValidationError::new("pinCode", "must be exactly 6 digits");
    assert_eq!(err.to_string(), "pinCode: must be exactly 6 digits");
}
