//! # Order Limits Configuration
//!
//! Per-item quantity limits an [`Order`](crate::order::Order) enforces.
//!
//! ## Configuration File Format
//! Host applications typically embed the limits in their own config file:
//! ```toml
//! [order_limits]
//! min_units_per_item = 1
//! max_units_per_item = 15
//! ```
//! Missing fields fall back to [`MIN_UNITS_PER_ITEM`] and [`MAX_UNITS_PER_ITEM`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ConfigError;
use crate::order::{MAX_UNITS_PER_ITEM, MIN_UNITS_PER_ITEM};

/// Quantity limits owned by one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLimits {
    /// Smallest quantity a single line may hold.
    #[serde(default = "default_min_units")]
    pub min_units_per_item: i64,

    /// Largest quantity a single line may hold, including after a merge.
    #[serde(default = "default_max_units")]
    pub max_units_per_item: i64,
}

fn default_min_units() -> i64 {
    MIN_UNITS_PER_ITEM
}

fn default_max_units() -> i64 {
    MAX_UNITS_PER_ITEM
}

impl Default for OrderLimits {
    fn default() -> Self {
        OrderLimits {
            min_units_per_item: default_min_units(),
            max_units_per_item: default_max_units(),
        }
    }
}

impl OrderLimits {
    /// Checks the limits are usable.
    ///
    /// ## Rules
    /// - `min_units_per_item >= 1`
    /// - `max_units_per_item >= min_units_per_item`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_units_per_item < 1 {
            return Err(ConfigError::MinimumTooLow(self.min_units_per_item));
        }

        if self.max_units_per_item < self.min_units_per_item {
            return Err(ConfigError::MaximumBelowMinimum {
                min: self.min_units_per_item,
                max: self.max_units_per_item,
            });
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
