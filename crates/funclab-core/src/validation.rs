//! # Validation Module
//!
//! Input validation helpers for users, prices and free-form fields.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    validate_user(name, email, age)                      │
//! │                                                                         │
//! │  1. name blank?          → Required { field: "name" }                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  2. email lacks '@'/'.'? → InvalidFormat { field: "email" }            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  3. age outside 0..=120? → OutOfRange { field: "age", 0, 120 }         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Ok(())                                                                 │
//! │                                                                         │
//! │  The first failing check wins; later checks are not run.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use funclab_core::validation::validate_user;
//!
//! assert!(validate_user("Jane", "a@b.com", 30).is_ok());
//! assert!(validate_user("", "a@b.com", 30).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{AgeGroup, FieldCheck, User};
use crate::{ADULT_AGE, MAX_AGE, SENIOR_AGE};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a user name.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must contain both '@' and '.'
///
/// This is a deliberately shallow check; `a@b.c` passes.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if !email.contains('@') || !email.contains('.') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must contain '@' and '.'".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an age.
///
/// ## Rules
/// - Must be between 0 and MAX_AGE (120), inclusive
pub fn validate_age(age: i64) -> ValidationResult<()> {
    if !(0..=MAX_AGE).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: 0,
            max: MAX_AGE,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be positive (> 0); free items are not quotable
///
/// ## Example
/// ```rust
/// use funclab_core::money::Money;
/// use funclab_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1)).is_ok());
/// assert!(validate_price(Money::from_cents(0)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Sorts an age into a bracket.
///
/// ## Rules
/// - Negative ages are rejected
/// - `< 18` minor, `< 65` adult, otherwise senior
///
/// No upper bound is enforced here; that is `validate_age`'s job.
pub fn classify_age(age: i64) -> ValidationResult<AgeGroup> {
    if age < 0 {
        return Err(ValidationError::Negative {
            field: "age".to_string(),
        });
    }

    let group = if age < ADULT_AGE {
        AgeGroup::Minor
    } else if age < SENIOR_AGE {
        AgeGroup::Adult
    } else {
        AgeGroup::Senior
    };

    Ok(group)
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates the three user fields in order: name, email, age.
pub fn validate_user(name: &str, email: &str, age: i64) -> ValidationResult<()> {
    validate_name(name)?;
    validate_email(email)?;
    validate_age(age)?;
    Ok(())
}

impl User {
    /// Runs `validate_user` over this record.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_user(&self.name, &self.email, self.age)
    }
}

/// Checks that every field has non-blank content.
///
/// Blank fields are reported by 1-based position.
///
/// ## Example
/// ```rust
/// use funclab_core::validation::check_fields;
///
/// let check = check_fields(&["María", "", "987654321"]);
/// assert!(!check.valid);
/// assert_eq!(check.empty_fields, vec!["field 2 is empty"]);
/// ```
pub fn check_fields(fields: &[&str]) -> FieldCheck {
    let empty_fields: Vec<String> = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.trim().is_empty())
        .map(|(i, _)| format!("field {} is empty", i + 1))
        .collect();

    FieldCheck {
        valid: empty_fields.is_empty(),
        empty_fields,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
