//! Named defaults for the engine and the overridable parameter set.

use serde::{Deserialize, Serialize};

/// Trailing window used for the daily sales rate and the storage holding cap.
pub const SALES_WINDOW_DAYS: f64 = 30.0;

/// Storage rate (currency per unit per day) assumed when a product has none.
pub const DEFAULT_DAILY_STORAGE_UNIT_COST: f64 = 5.0;

pub const DEFAULT_TARGET_MARGIN_PERCENT: f64 = 30.0;

/// Upper clamp for target margins; keeps `1 - m / 100` strictly positive.
pub const MAX_TARGET_MARGIN_PERCENT: f64 = 95.0;

/// A price change within this many currency units counts as "optimal".
pub const PRICE_TOLERANCE_ABSOLUTE: f64 = 1.0;

/// A price change within this fraction of the sale price counts as "optimal".
pub const PRICE_TOLERANCE_RATIO: f64 = 0.01;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineParams {
    pub window_days: f64,
    pub default_daily_storage_unit_cost: f64,
    pub target_margin_percent: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            window_days: SALES_WINDOW_DAYS,
            default_daily_storage_unit_cost: DEFAULT_DAILY_STORAGE_UNIT_COST,
            target_margin_percent: DEFAULT_TARGET_MARGIN_PERCENT,
        }
    }
}

impl EngineParams {
    /// Replaces unusable values (non-finite, non-positive window, negative
    /// storage rate) with the defaults so a hand-edited settings file can
    /// never poison the engine.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            window_days: if self.window_days.is_finite() && self.window_days > 0.0 {
                self.window_days
            } else {
                defaults.window_days
            },
            default_daily_storage_unit_cost: if self.default_daily_storage_unit_cost.is_finite()
                && self.default_daily_storage_unit_cost >= 0.0
            {
                self.default_daily_storage_unit_cost
            } else {
                defaults.default_daily_storage_unit_cost
            },
            target_margin_percent: if self.target_margin_percent.is_finite() {
                self.target_margin_percent
            } else {
                defaults.target_margin_percent
            },
        }
    }
}
