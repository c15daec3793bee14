//! # Error Types
//!
//! Domain-specific error types for nerdstore-sales.
//!
//! ## Two Channels
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Failure Channels                                │
//! │                                                                         │
//! │  SalesError (this file)          ValidationResult (validation.rs)      │
//! │  ─────────────────────           ────────────────────────────────      │
//! │  Business-rule violation         Voucher not applicable                │
//! │  Returned as Err(..)             Returned as a plain value             │
//! │  Caller bug or bad input         Expected outcome, shown to the user   │
//! │  Operation aborted, no change    Every failed rule listed at once      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, quantities, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;
use uuid::Uuid;

use crate::validation::ValidationResult;

// =============================================================================
// Sales Error
// =============================================================================

/// Business-rule violations raised by the order aggregate and its items.
#[derive(Debug, Error)]
pub enum SalesError {
    /// A line item was built with fewer units than allowed.
    #[error("Quantity {requested} is below the minimum of {min} units per item")]
    QuantityBelowMinimum { requested: i64, min: i64 },

    /// A single incoming item carries more units than allowed.
    #[error("Quantity {requested} exceeds the maximum of {max} units per item")]
    QuantityAboveMaximum { requested: i64, max: i64 },

    /// Merging an incoming item with the existing one would exceed the cap.
    ///
    /// ## When This Occurs
    /// ```text
    /// Order has product P × 2
    ///      │
    ///      ▼
    /// add_item(P × 15)
    ///      │
    ///      ▼
    /// 2 + 15 = 17 > 15
    ///      │
    ///      ▼
    /// MergedQuantityAboveMaximum { existing: 2, requested: 15, max: 15 }
    /// ```
    #[error("Product {product_id}: {existing} + {requested} units exceeds the maximum of {max} per order")]
    MergedQuantityAboveMaximum {
        product_id: Uuid,
        existing: i64,
        requested: i64,
        max: i64,
    },

    /// Update or removal referenced a product the order does not contain.
    #[error("Product {0} is not in the order")]
    ItemNotInOrder(Uuid),

    /// A voucher failed its applicability check and the caller asked for it
    /// as an error (see [`ValidationResult::into_result`]).
    #[error("Voucher rejected: {0}")]
    VoucherRejected(ValidationResult),

    /// Order limits configuration is inconsistent.
    #[error("Invalid order configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

// =============================================================================
// Config Error
// =============================================================================

/// Rejected [`OrderLimits`](crate::config::OrderLimits).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_units_per_item must be at least 1, got {0}")]
    MinimumTooLow(i64),

    #[error("max_units_per_item ({max}) must not be below min_units_per_item ({min})")]
    MaximumBelowMinimum { min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with SalesError.
pub type SalesResult<T> = Result<T, SalesError>;

// =============================================================================
// Unit Tests
// =============================================================================
