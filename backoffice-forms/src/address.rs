//! Shipping address form
//!
//! Field names follow the wire format (camelCase). `validate` collects every
//! failing field in one pass; callers must not submit while it errs.

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationErrors};
use crate::validators::{ExactDigits, NotEmpty, Phone};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub full_name: String,
    pub phone: String,
    pub pin_code: String,
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    pub city: String,
    pub state: String,
}

impl Address {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let collect = |errors: &mut ValidationErrors, outcome: Result<(), ValidationError>| {
            if let Err(e) = outcome {
                errors.push(e);
            }
        };

        collect(&mut errors, NotEmpty::validate(&self.full_name, "fullName"));
        collect(&mut errors, Phone::validate(&self.phone, "phone"));
        collect(&mut errors, ExactDigits(6).validate(&self.pin_code, "pinCode"));
        collect(&mut errors, NotEmpty::validate(&self.address_line1, "addressLine1"));
        collect(&mut errors, NotEmpty::validate(&self.city, "city"));
        collect(&mut errors, NotEmpty::validate(&self.state, "state"));

        errors.into_result()
    }
}
