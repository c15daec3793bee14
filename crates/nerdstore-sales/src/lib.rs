//! # nerdstore-sales: Pure Sales Domain
//!
//! The order aggregate of the NerdStore sales context: line items, totals
//! and discount vouchers, as pure in-memory computation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Storefront / checkout services (outside this workspace)              │
//! │          │ build LineItems and Vouchers, call Order operations          │
//! │          ▼                                                              │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              ★ nerdstore-sales (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   order   │  │ line_item │  │  voucher  │  │   money   │  │   │
//! │  │   │   Order   │  │ LineItem  │  │  Voucher  │  │   Money   │  │   │
//! │  │   │  limits   │  │           │  │   rules   │  │ Discount  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • SINGLE-THREADED          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`order`] - The `Order` aggregate and its quantity limits
//! - [`line_item`] - `LineItem`
//! - [`voucher`] - `Voucher` and its applicability rules
//! - [`validation`] - Accumulating validation results
//! - [`money`] - Integer-cent `Money` and basis-point `DiscountRate`
//! - [`config`] - `OrderLimits`
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use nerdstore_sales::{LineItem, Money, Order, Voucher, VoucherKind};
//! use uuid::Uuid;
//!
//! let mut order = Order::new_draft(Uuid::new_v4());
//! order.add_item(LineItem::new(Uuid::new_v4(), "Keyboard", 2, Money::from_major(100))?)?;
//!
//! let voucher = Voucher::new(
//!     "PROMO-15",
//!     None,
//!     Some(Money::from_major(15)),
//!     1,
//!     Utc::now() + Duration::days(14),
//!     true,
//!     false,
//!     VoucherKind::FixedAmount,
//! );
//! assert!(order.apply_voucher(voucher).is_valid());
//! assert_eq!(order.total(), Money::from_major(185));
//! # Ok::<(), nerdstore_sales::SalesError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod line_item;
pub mod money;
pub mod order;
pub mod validation;
pub mod voucher;

#[cfg(test)]
mod test_support;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::OrderLimits;
pub use error::{ConfigError, SalesError, SalesResult};
pub use line_item::LineItem;
pub use money::{DiscountRate, Money};
pub use order::{Order, OrderStatus, MAX_UNITS_PER_ITEM, MIN_UNITS_PER_ITEM};
pub use validation::{ValidationFailure, ValidationResult};
pub use voucher::{Voucher, VoucherKind};
