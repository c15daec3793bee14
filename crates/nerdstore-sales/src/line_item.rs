//! # Line Items
//!
//! One product line of an order: who, how many, at what unit price.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{SalesError, SalesResult};
use crate::money::Money;
use crate::order::MIN_UNITS_PER_ITEM;

/// A product line inside an [`Order`](crate::order::Order).
///
/// ## Design Notes
/// - `product_id` identifies the line; an order never holds two lines for
///   the same product
/// - `unit_price` is frozen when the line is built, catalog changes do not
///   reach it
/// - Only `quantity` can change afterwards, and only by growing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    #[ts(as = "String")]
    product_id: Uuid,
    product_name: String,
    quantity: i64,
    unit_price: Money,
}

impl LineItem {
    /// Builds a line item.
    ///
    /// ## Errors
    /// [`SalesError::QuantityBelowMinimum`] when `quantity` is below
    /// [`MIN_UNITS_PER_ITEM`].
    ///
    /// ```rust
    /// use nerdstore_sales::{LineItem, Money};
    /// use uuid::Uuid;
    ///
    /// let item = LineItem::new(Uuid::new_v4(), "Keyboard", 2, Money::from_major(100)).unwrap();
    /// assert_eq!(item.compute_value(), Money::from_major(200));
    ///
    /// assert!(LineItem::new(Uuid::new_v4(), "Test Product", 0, Money::from_major(100)).is_err());
    /// ```
    pub fn new(
        product_id: Uuid,
        product_name: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> SalesResult<Self> {
        if quantity < MIN_UNITS_PER_ITEM {
            return Err(SalesError::QuantityBelowMinimum {
                requested: quantity,
                min: MIN_UNITS_PER_ITEM,
            });
        }

        Ok(LineItem {
            product_id,
            product_name: product_name.into(),
            quantity,
            unit_price,
        })
    }

    #[inline]
    pub fn product_id(&self) -> Uuid {
        self.product_id
    }

    #[inline]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Adds `units` to the quantity.
    ///
    /// No upper bound is checked here; the owning order enforces its cap
    /// before merging. The quantity saturates at `i64::MAX`.
    pub fn increase_quantity(&mut self, units: i64) {
        self.quantity = self.quantity.saturating_add(units);
    }

    /// Line value: quantity × unit price.
    #[inline]
    pub fn compute_value(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_quantity_below_minimum() {
        for quantity in [0, -1, -15] {
            let err =
                LineItem::new(Uuid::new_v4(), "Test Product", quantity, Money::from_major(100))
                    .unwrap_err();
            assert!(matches!(
                err,
                SalesError::QuantityBelowMinimum { requested, min }
                    if requested == quantity && min == MIN_UNITS_PER_ITEM
            ));
        }
    }

    #[test]
    fn test_new_keeps_fields() {
        let product_id = Uuid::new_v4();
        let item = LineItem::new(product_id, "Test Product", 3, Money::from_cents(1500)).unwrap();

        assert_eq!(item.product_id(), product_id);
        assert_eq!(item.product_name(), "Test Product");
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.unit_price(), Money::from_cents(1500));
    }

    #[test]
    fn test_compute_value() {
        let item =
            LineItem::new(Uuid::new_v4(), "Test Product", 3, Money::from_major(15)).unwrap();
        assert_eq!(item.compute_value(), Money::from_major(45));
        // Repeated reads do not change anything
        assert_eq!(item.compute_value(), item.compute_value());
    }

    #[test]
    fn test_zero_price_item_is_allowed() {
        let item = LineItem::new(Uuid::new_v4(), "Free Sample", 4, Money::zero()).unwrap();
        assert!(item.compute_value().is_zero());
    }

    #[test]
    fn test_increase_quantity() {
        let mut item =
            LineItem::new(Uuid::new_v4(), "Test Product", 2, Money::from_major(100)).unwrap();
        item.increase_quantity(1);

        assert_eq!(item.quantity(), 3);
        assert_eq!(item.compute_value(), Money::from_major(300));
    }

    #[test]
    fn test_huge_quantities_saturate_instead_of_overflowing() {
        let mut item =
            LineItem::new(Uuid::new_v4(), "Test Product", 2, Money::from_cents(3)).unwrap();
        item.increase_quantity(i64::MAX);

        assert_eq!(item.quantity(), i64::MAX);
        assert_eq!(item.compute_value().cents(), i64::MAX);
    }
}
