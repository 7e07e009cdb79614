//! Field-level validation for customer-supplied booking data.
//!
//! Plain functions returning `CoreError::Validation`; handlers call them
//! before touching the database, and the rules are unit-tested here
//! independently of any HTTP plumbing.

use crate::error::CoreError;

/// A customer mobile number must be exactly 10 ASCII digits.
pub fn validate_mobile(mobile: &str) -> Result<(), CoreError> {
    if mobile.len() == 10 && mobile.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Mobile number must be exactly 10 digits".into(),
        ))
    }
}

/// Minimal structural email check: one `@`, non-empty local part, and a
/// domain containing a dot. Deliverability is not our problem.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid email address: {email}")))
    }
}

/// Reject empty or whitespace-only required fields, naming the field.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}
