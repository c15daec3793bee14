//! # Order Aggregate
//!
//! The order owns its line items and is the only thing allowed to change
//! them or its total.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Operations                                  │
//! │                                                                         │
//! │  Operation          Checks                        Effect                │
//! │  ─────────          ──────                        ──────                │
//! │                                                                         │
//! │  add_item ────────► quantity caps ──────────────► merge or push,       │
//! │                                                   recompute total       │
//! │                                                                         │
//! │  update_item ─────► item exists, quantity caps ─► replace line          │
//! │                                                   (total NOT recomputed)│
//! │                                                                         │
//! │  remove_item ─────► item exists ────────────────► drop line,           │
//! │                                                   recompute total       │
//! │                                                                         │
//! │  apply_voucher ───► voucher rules ──────────────► attach voucher,      │
//! │                     (returned, not raised)        recompute total       │
//! │                                                                         │
//! │  Failed checks leave the order untouched.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Total
//! `total = max(0, Σ line values − discount)`. The discount itself is kept
//! as computed, even when it is larger than the sum of the lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::config::OrderLimits;
use crate::error::{SalesError, SalesResult};
use crate::line_item::LineItem;
use crate::money::Money;
use crate::validation::ValidationResult;
use crate::voucher::{Voucher, VoucherKind};

// =============================================================================
// Limits
// =============================================================================

/// Smallest quantity a line item can be built with.
pub const MIN_UNITS_PER_ITEM: i64 = 1;

/// Largest quantity one product may reach within an order.
///
/// ## Business Reason
/// Orders are retail-sized; bulk purchases go through a separate channel.
pub const MAX_UNITS_PER_ITEM: i64 = 15;

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle status of an order. Orders are created as drafts; later
/// states belong to checkout and are not modelled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum OrderStatus {
    /// Items are still being added.
    #[default]
    Draft,
}

// =============================================================================
// Order
// =============================================================================

/// The order aggregate.
///
/// ## Invariants
/// - At most one line per product id
/// - No line holds more than `limits.max_units_per_item` units
/// - `total` is Σ line values minus `discount`, floored at zero, as of the
///   last recomputing operation
/// - `discount` is non-zero only after a voucher was applied
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Order {
    #[ts(as = "String")]
    customer_id: Uuid,
    total: Money,
    items: Vec<LineItem>,
    status: OrderStatus,
    voucher: Option<Voucher>,
    voucher_applied: bool,
    discount: Money,
    limits: OrderLimits,
}

impl Order {
    /// Creates an empty draft order with the default limits.
    ///
    /// ```rust
    /// use nerdstore_sales::{Order, OrderStatus};
    /// use uuid::Uuid;
    ///
    /// let order = Order::new_draft(Uuid::new_v4());
    /// assert_eq!(order.status(), OrderStatus::Draft);
    /// assert!(order.items().is_empty());
    /// assert!(order.total().is_zero());
    /// ```
    pub fn new_draft(customer_id: Uuid) -> Self {
        let mut order = Order {
            customer_id,
            total: Money::zero(),
            items: Vec::new(),
            status: OrderStatus::default(),
            voucher: None,
            voucher_applied: false,
            discount: Money::zero(),
            limits: OrderLimits::default(),
        };
        order.mark_as_draft();

        debug!(customer_id = %customer_id, "draft order created");
        order
    }

    /// Creates an empty draft order with custom limits.
    ///
    /// ## Errors
    /// [`SalesError::InvalidConfig`] when the limits fail
    /// [`OrderLimits::validate`].
    pub fn new_draft_with_limits(customer_id: Uuid, limits: OrderLimits) -> SalesResult<Self> {
        limits.validate()?;

        let mut order = Order::new_draft(customer_id);
        order.limits = limits;
        Ok(order)
    }

    /// Puts the order in draft status. Calling it again changes nothing.
    pub fn mark_as_draft(&mut self) {
        self.status = OrderStatus::Draft;
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    pub fn customer_id(&self) -> Uuid {
        self.customer_id
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// Line items in insertion order. A merged or replaced line moves to the
    /// end.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item(&self, product_id: Uuid) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn voucher(&self) -> Option<&Voucher> {
        self.voucher.as_ref()
    }

    pub fn voucher_applied(&self) -> bool {
        self.voucher_applied
    }

    pub fn discount(&self) -> Money {
        self.discount
    }

    pub fn limits(&self) -> OrderLimits {
        self.limits
    }

    // -------------------------------------------------------------------------
    // Item operations
    // -------------------------------------------------------------------------

    /// Adds an item, merging it into the existing line for the same product.
    ///
    /// ## Errors
    /// - [`SalesError::MergedQuantityAboveMaximum`] when existing + incoming
    ///   units exceed the cap
    /// - [`SalesError::QuantityAboveMaximum`] when the incoming item alone
    ///   exceeds the cap
    ///
    /// ```rust
    /// use nerdstore_sales::{LineItem, Money, Order};
    /// use uuid::Uuid;
    ///
    /// let product_id = Uuid::new_v4();
    /// let mut order = Order::new_draft(Uuid::new_v4());
    /// order.add_item(LineItem::new(product_id, "Test Product", 2, Money::from_major(100))?)?;
    /// order.add_item(LineItem::new(product_id, "Test Product", 1, Money::from_major(100))?)?;
    ///
    /// assert_eq!(order.item_count(), 1);
    /// assert_eq!(order.total(), Money::from_major(300));
    /// # Ok::<(), nerdstore_sales::SalesError>(())
    /// ```
    pub fn add_item(&mut self, item: LineItem) -> SalesResult<()> {
        self.validate_item_quantity(&item)?;

        let product_id = item.product_id();
        let item = match self.position_of(product_id) {
            Some(index) => {
                let mut existing = self.items.remove(index);
                existing.increase_quantity(item.quantity());
                existing
            }
            None => item,
        };
        let quantity = item.quantity();

        self.items.push(item);
        self.recompute_total();

        debug!(
            product_id = %product_id,
            quantity = quantity,
            total = %self.total,
            "item added to order"
        );
        Ok(())
    }

    /// Replaces the line for `item`'s product with `item`.
    ///
    /// The cap is checked as for [`add_item`](Self::add_item): existing
    /// units plus incoming units, even though the line is replaced.
    ///
    /// The total is NOT recomputed; it catches up on the next
    /// [`add_item`](Self::add_item), [`remove_item`](Self::remove_item) or
    /// [`apply_voucher`](Self::apply_voucher).
    ///
    /// ## Errors
    /// - [`SalesError::ItemNotInOrder`] when the product has no line
    /// - the quantity errors of [`add_item`](Self::add_item)
    pub fn update_item(&mut self, item: LineItem) -> SalesResult<()> {
        let product_id = item.product_id();
        let index = self.position_of(product_id).ok_or_else(|| {
            warn!(product_id = %product_id, "update of a product not in the order");
            SalesError::ItemNotInOrder(product_id)
        })?;
        self.validate_item_quantity(&item)?;

        let quantity = item.quantity();
        self.items.remove(index);
        self.items.push(item);

        debug!(product_id = %product_id, quantity = quantity, "order item replaced");
        Ok(())
    }

    /// Removes the line for `item`'s product.
    ///
    /// ## Errors
    /// [`SalesError::ItemNotInOrder`] when the product has no line.
    pub fn remove_item(&mut self, item: &LineItem) -> SalesResult<()> {
        let product_id = item.product_id();
        let index = self.position_of(product_id).ok_or_else(|| {
            warn!(product_id = %product_id, "removal of a product not in the order");
            SalesError::ItemNotInOrder(product_id)
        })?;

        self.items.remove(index);
        self.recompute_total();

        debug!(product_id = %product_id, total = %self.total, "item removed from order");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Voucher
    // -------------------------------------------------------------------------

    /// Applies `voucher` if it passes its applicability rules right now.
    ///
    /// A rejected voucher is not an error: its [`ValidationResult`] comes
    /// back unchanged and the order is left as it was.
    pub fn apply_voucher(&mut self, voucher: Voucher) -> ValidationResult {
        self.apply_voucher_at(voucher, Utc::now())
    }

    /// Like [`apply_voucher`](Self::apply_voucher), judging expiration as of
    /// `now`.
    pub fn apply_voucher_at(&mut self, voucher: Voucher, now: DateTime<Utc>) -> ValidationResult {
        let result = voucher.validate_applicability_at(now);
        if !result.is_valid() {
            warn!(code = %voucher.code, reasons = %result, "voucher rejected");
            return result;
        }

        let code = voucher.code.clone();
        self.voucher = Some(voucher);
        self.voucher_applied = true;
        self.recompute_total();

        debug!(
            code = %code,
            discount = %self.discount,
            total = %self.total,
            "voucher applied to order"
        );
        ValidationResult::valid()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn position_of(&self, product_id: Uuid) -> Option<usize> {
        self.items.iter().position(|i| i.product_id() == product_id)
    }

    fn validate_item_quantity(&self, item: &LineItem) -> SalesResult<()> {
        let max = self.limits.max_units_per_item;

        if item.quantity() < self.limits.min_units_per_item {
            return Err(SalesError::QuantityBelowMinimum {
                requested: item.quantity(),
                min: self.limits.min_units_per_item,
            });
        }

        if let Some(existing) = self.item(item.product_id()) {
            // An overflowing sum is above any cap
            let merged = existing.quantity().checked_add(item.quantity());
            if merged.map_or(true, |merged| merged > max) {
                warn!(
                    product_id = %item.product_id(),
                    existing = existing.quantity(),
                    requested = item.quantity(),
                    "merged quantity above maximum"
                );
                return Err(SalesError::MergedQuantityAboveMaximum {
                    product_id: item.product_id(),
                    existing: existing.quantity(),
                    requested: item.quantity(),
                    max,
                });
            }
        }

        if item.quantity() > max {
            warn!(
                product_id = %item.product_id(),
                requested = item.quantity(),
                "quantity above maximum"
            );
            return Err(SalesError::QuantityAboveMaximum {
                requested: item.quantity(),
                max,
            });
        }

        Ok(())
    }

    /// Recomputes the total from the lines, then takes off the discount.
    pub(crate) fn recompute_total(&mut self) {
        self.total = self.items.iter().map(LineItem::compute_value).sum();
        self.apply_discount();
    }

    fn apply_discount(&mut self) {
        let voucher = match &self.voucher {
            Some(voucher) if self.voucher_applied => voucher,
            _ => {
                self.discount = Money::zero();
                return;
            }
        };

        let discount = match voucher.kind {
            VoucherKind::FixedAmount => voucher.fixed_discount.unwrap_or_default(),
            VoucherKind::Percentage => voucher
                .percentage_discount
                .map(|rate| self.total.percentage_of(rate))
                .unwrap_or_default(),
        };

        self.total = (self.total - discount).floor_zero();
        self.discount = discount;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
