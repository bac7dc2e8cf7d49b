//! Form field validation for the Backoffice SDK
//!
//! Admin forms validate locally before anything goes on the wire: a form
//! with field errors never produces a request. Errors are field-scoped so
//! hosts can render them next to the offending input.
//!
//! ## Features
//!
//! - **Field Validators** - Emptiness, length, email, digit-count, phone
//! - **Password Policy** - Length plus character-class requirements
//! - **Address Form** - Shipping address with the 6-digit PIN code rule
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backoffice_forms::{Address, ExactDigits};
//!
//! // Single field
//! let err = ExactDigits(6).validate("12345", "pinCode").unwrap_err();
//! assert!(err.message.contains("6 digits"));
//!
//! // Whole form
//! let address = Address { pin_code: "400001".into(), ..Default::default() };
//! match address.validate() {
//!     Ok(()) => { /* submit */ }
//!     Err(errors) => {
//!         for e in errors.field_errors("phone") { /* render inline */ }
//!     }
//! }
//! ```

pub mod address;
pub mod errors;
pub mod validators;

pub use address::Address;
pub use errors::{ValidationError, ValidationErrors};
pub use validators::{
    ExactDigits, IsEmail, MaxLength, MinLength, NotEmpty, PasswordStrength, Phone,
};
