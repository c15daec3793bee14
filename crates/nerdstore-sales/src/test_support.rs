//! Builders shared by the unit tests.

use chrono::{Duration, Utc};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::line_item::LineItem;
use crate::money::{DiscountRate, Money};
use crate::voucher::{Voucher, VoucherKind};

/// Routes `tracing` output through the test harness.
///
/// `RUST_LOG` overrides the default `debug` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// A line item priced in whole currency units.
pub fn item(product_id: Uuid, quantity: i64, unit_price_major: i64) -> LineItem {
    LineItem::new(product_id, "Test Product", quantity, Money::from_major(unit_price_major))
        .expect("test item quantity must be valid")
}

pub fn fixed_voucher(amount: Money) -> Voucher {
    Voucher::new(
        "PROMO-15",
        None,
        Some(amount),
        1,
        Utc::now() + Duration::days(14),
        true,
        false,
        VoucherKind::FixedAmount,
    )
}

pub fn percentage_voucher(rate: DiscountRate) -> Voucher {
    Voucher::new(
        "PROMO-15-OFF",
        Some(rate),
        None,
        1,
        Utc::now() + Duration::days(10),
        true,
        false,
        VoucherKind::Percentage,
    )
}
