//! # Validation Module
//!
//! Structured, accumulating validation results.
//!
//! Unlike [`SalesError`], a failed validation is not an error return: every
//! rule is evaluated and each violated one adds a [`ValidationFailure`], so a
//! caller can show all reasons at once.
//!
//! ## Usage
//! ```rust
//! use nerdstore_sales::validation::Rules;
//!
//! let code = "";
//! let result = Rules::new()
//!     .ensure(!code.is_empty(), "code", "Code is required")
//!     .ensure(code.len() <= 20, "code", "Code is too long")
//!     .finish();
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.messages(), vec!["Code is required"]);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{SalesError, SalesResult};

// =============================================================================
// Validation Failure
// =============================================================================

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationFailure {
    /// Name of the checked property (`"code"`, `"expires_at"`, ...).
    pub property: String,

    /// Human-readable reason.
    pub message: String,
}

// =============================================================================
// Validation Result
// =============================================================================

/// Outcome of a validation pass: valid when no failure was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationResult {
    errors: Vec<ValidationFailure>,
}

impl ValidationResult {
    /// A result without failures.
    pub fn valid() -> Self {
        ValidationResult::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failures in the order the rules were evaluated.
    pub fn errors(&self) -> &[ValidationFailure] {
        &self.errors
    }

    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    pub fn contains_message(&self, message: &str) -> bool {
        self.errors.iter().any(|e| e.message == message)
    }

    /// Converts an invalid result into [`SalesError::VoucherRejected`] for
    /// callers that prefer `?` over inspecting the value.
    pub fn into_result(self) -> SalesResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SalesError::VoucherRejected(self))
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "valid");
        }
        write!(f, "{}", self.messages().join("; "))
    }
}

// =============================================================================
// Rules Builder
// =============================================================================

/// Accumulates failures without short-circuiting.
#[derive(Debug, Default)]
pub struct Rules {
    errors: Vec<ValidationFailure>,
}

impl Rules {
    pub fn new() -> Self {
        Rules::default()
    }

    /// Records `message` against `property` when `condition` is false.
    pub fn ensure(mut self, condition: bool, property: &str, message: &str) -> Self {
        if !condition {
            self.errors.push(ValidationFailure {
                property: property.to_string(),
                message: message.to_string(),
            });
        }
        self
    }

    pub fn finish(self) -> ValidationResult {
        ValidationResult {
            errors: self.errors,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
