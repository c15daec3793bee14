//! # Vouchers
//!
//! Discount offers and their applicability rules.
//!
//! A voucher is a snapshot: it is built from whatever the caller loaded and
//! only judged when an order tries to use it.
//!
//! ## Applicability Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                                   Message constant               │
//! │  ─────────────────────────────────────  ───────────────────────────    │
//! │  code is not empty                      CODE_REQUIRED_MSG              │
//! │  usage_limit > 0                        USAGE_LIMIT_MSG                │
//! │  is_active                              INACTIVE_MSG                   │
//! │  !is_used                               ALREADY_USED_MSG               │
//! │  expires_at > now                       EXPIRED_MSG                    │
//! │  Percentage → percentage present, > 0   PERCENTAGE_DISCOUNT_MSG        │
//! │  FixedAmount → amount present, > 0      FIXED_DISCOUNT_MSG             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Every rule runs; a voucher can fail several at once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{DiscountRate, Money};
use crate::validation::{Rules, ValidationResult};

pub const CODE_REQUIRED_MSG: &str = "Voucher code is required";
pub const USAGE_LIMIT_MSG: &str = "This voucher is no longer available";
pub const INACTIVE_MSG: &str = "This voucher is no longer active";
pub const ALREADY_USED_MSG: &str = "This voucher has already been used";
pub const EXPIRED_MSG: &str = "This voucher has expired";
pub const PERCENTAGE_DISCOUNT_MSG: &str = "Discount percentage must be greater than zero";
pub const FIXED_DISCOUNT_MSG: &str = "Discount amount must be greater than zero";

/// How a voucher reduces the order total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum VoucherKind {
    /// A flat amount off the total.
    FixedAmount,
    /// A percentage of the total.
    Percentage,
}

/// A discount voucher as loaded by the caller.
///
/// Only the discount field matching `kind` matters; the other one may be
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Voucher {
    pub code: String,
    pub percentage_discount: Option<DiscountRate>,
    pub fixed_discount: Option<Money>,
    /// Remaining uses.
    pub usage_limit: i64,
    #[ts(as = "String")]
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
    pub is_used: bool,
    pub kind: VoucherKind,
}

impl Voucher {
    /// Stores the fields as given. Nothing is checked until
    /// [`validate_applicability`](Self::validate_applicability).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: impl Into<String>,
        percentage_discount: Option<DiscountRate>,
        fixed_discount: Option<Money>,
        usage_limit: i64,
        expires_at: DateTime<Utc>,
        is_active: bool,
        is_used: bool,
        kind: VoucherKind,
    ) -> Self {
        Voucher {
            code: code.into(),
            percentage_discount,
            fixed_discount,
            usage_limit,
            expires_at,
            is_active,
            is_used,
            kind,
        }
    }

    /// Checks every applicability rule against the current time.
    pub fn validate_applicability(&self) -> ValidationResult {
        self.validate_applicability_at(Utc::now())
    }

    /// Checks every applicability rule as of `now`.
    pub fn validate_applicability_at(&self, now: DateTime<Utc>) -> ValidationResult {
        let rules = Rules::new()
            .ensure(!self.code.is_empty(), "code", CODE_REQUIRED_MSG)
            .ensure(self.usage_limit > 0, "usage_limit", USAGE_LIMIT_MSG)
            .ensure(self.is_active, "is_active", INACTIVE_MSG)
            .ensure(!self.is_used, "is_used", ALREADY_USED_MSG)
            .ensure(self.expires_at > now, "expires_at", EXPIRED_MSG);

        let rules = match self.kind {
            VoucherKind::Percentage => rules.ensure(
                self.percentage_discount.is_some_and(|rate| !rate.is_zero()),
                "percentage_discount",
                PERCENTAGE_DISCOUNT_MSG,
            ),
            VoucherKind::FixedAmount => rules.ensure(
                self.fixed_discount.is_some_and(|amount| amount.is_positive()),
                "fixed_discount",
                FIXED_DISCOUNT_MSG,
            ),
        };

        rules.finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
