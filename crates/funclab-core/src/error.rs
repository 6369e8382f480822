//! # Error Types
//!
//! Domain-specific error types for funclab-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  funclab-core errors (this file)                                       │
//! │  ├── CoreError        - Operation failures (no input, bad op, I/O)     │
//! │  └── ValidationError  - Input outside the helper's domain              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → "❌ Error: ..." line in the demo   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, operation, file)
//! 3. Errors are enum variants, never String
//! 4. Every failure is caught by the caller that triggered it

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by the aggregation, SQL and resource helpers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A fold was asked to run over an empty sequence.
    ///
    /// ## When This Occurs
    /// - `operate("sum", &[])`
    ///
    /// `statistics(&[])` does NOT raise this; it returns an all-zero result.
    #[error("at least one number is required")]
    NoInput,

    /// Operation name is not one the helper knows.
    #[error("operation '{0}' is not supported")]
    UnsupportedOperation(String),

    /// The simulated resource failed while being processed.
    ///
    /// ## User Workflow
    /// ```text
    /// open("error.txt")
    ///      │
    ///      ▼
    /// process() ──► ProcessingFailed { name: "error.txt" }
    ///      │
    ///      ▼
    /// drop ──► "🔒 Closing file: error.txt" (still runs)
    /// ```
    #[error("failed to process {name}")]
    ProcessingFailed { name: String },

    /// Writing demo output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a helper receives a value outside its domain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Invalid format (e.g., an email without '@').
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Divisor was zero.
    #[error("division by zero is not allowed")]
    DivisionByZero,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::NoInput.to_string(),
            "at least one number is required"
        );
        assert_eq!(
            CoreError::UnsupportedOperation("modulo".to_string()).to_string(),
            "operation 'modulo' is not supported"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "age".to_string(),
            min: 0,
            max: 120,
        };
        assert_eq!(err.to_string(), "age must be between 0 and 120");

        assert_eq!(
            ValidationError::DivisionByZero.to_string(),
            "division by zero is not allowed"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation error: price must be positive");
    }
}
