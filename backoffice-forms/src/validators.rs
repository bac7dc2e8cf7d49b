// Built-in field validators

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ValidationError;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").unwrap()
});

static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Validates that a string is not blank
pub struct NotEmpty;

impl NotEmpty {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(
                ValidationError::new(field, format!("{field} should not be empty"))
                    .with_constraint("notEmpty"),
            )
        } else {
            Ok(())
        }
    }
}

/// Validates minimum string length
pub struct MinLength(pub usize);

impl MinLength {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if value.chars().count() < self.0 {
            Err(ValidationError::new(
                field,
                format!("{} must be at least {} characters", field, self.0),
            )
            .with_constraint("minLength"))
        } else {
            Ok(())
        }
    }
}

/// Validates maximum string length
pub struct MaxLength(pub usize);

impl MaxLength {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if value.chars().count() > self.0 {
            Err(ValidationError::new(
                field,
                format!("{} must be at most {} characters", field, self.0),
            )
            .with_constraint("maxLength"))
        } else {
            Ok(())
        }
    }
}

/// Validates email format
pub struct IsEmail;

impl IsEmail {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if EMAIL_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(
                ValidationError::new(field, format!("{field} must be a valid email"))
                    .with_constraint("isEmail"),
            )
        }
    }
}

/// Validates an exact count of ASCII digits and nothing else.
///
/// Used for PIN codes (6 digits) and similar fixed-width numeric fields.
pub struct ExactDigits(pub usize);

impl ExactDigits {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if DIGITS_REGEX.is_match(value) && value.len() == self.0 {
            Ok(())
        } else {
            Err(ValidationError::new(
                field,
                format!("{} must be exactly {} digits", field, self.0),
            )
            .with_constraint("exactDigits"))
        }
    }
}

/// Validates a 10-digit phone number
pub struct Phone;

impl Phone {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if DIGITS_REGEX.is_match(value) && value.len() == 10 {
            Ok(())
        } else {
            Err(ValidationError::new(
                field,
                format!("{field} must be a valid 10-digit phone number"),
            )
            .with_constraint("isPhone"))
        }
    }
}

/// Password policy: minimum length plus one character from each class.
///
/// Returns every unmet requirement, not just the first, so the form can show
/// the full checklist at once.
#[derive(Debug, Clone)]
pub struct PasswordStrength {
    pub min_length: usize,
}

impl Default for PasswordStrength {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl PasswordStrength {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if value.chars().count() < self.min_length {
            errors.push(
                ValidationError::new(
                    field,
                    format!("{} must be at least {} characters", field, self.min_length),
                )
                .with_constraint("minLength"),
            );
        }
        if !value.chars().any(|c| c.is_ascii_uppercase()) {
            errors.push(
                ValidationError::new(field, format!("{field} must contain an uppercase letter"))
                    .with_constraint("hasUppercase"),
            );
        }
        if !value.chars().any(|c| c.is_ascii_lowercase()) {
            errors.push(
                ValidationError::new(field, format!("{field} must contain a lowercase letter"))
                    .with_constraint("hasLowercase"),
            );
        }
        if !value.chars().any(|c| c.is_ascii_digit()) {
            errors.push(
                ValidationError::new(field, format!("{field} must contain a digit"))
                    .with_constraint("hasDigit"),
            );
        }
        if !value.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()) {
            errors.push(
                ValidationError::new(field, format!("{field} must contain a special character"))
                    .with_constraint("hasSpecial"),
            );
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
