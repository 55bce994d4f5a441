//! Storage accrual: how much warehouse fee the current stock will cost,
//! given how fast it sells.

use super::settings::SALES_WINDOW_DAYS;

/// Negative and non-finite figures contribute nothing to an accrual.
fn clamp_input(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Like [`clamp_input`], but an unbounded rate is the fastest possible seller
/// rather than no seller at all. NaN and negative rates read as stagnant.
fn clamp_rate(value: f64) -> f64 {
    if value == f64::INFINITY {
        f64::MAX
    } else {
        clamp_input(value)
    }
}

/// Units sold per day over a trailing window.
pub fn daily_sales_rate(quantity_sold: u32, window_days: f64) -> f64 {
    if window_days.is_finite() && window_days > 0.0 {
        quantity_sold as f64 / window_days
    } else {
        0.0
    }
}

/// Days the current inventory is expected to stay in the warehouse.
///
/// Stock that does not sell at all is charged for the full window instead
/// of forever; stock that sells out sooner is charged only until then.
pub fn holding_days(current_inventory: f64, daily_sales_rate: f64, window_days: f64) -> f64 {
    let window = clamp_input(window_days);
    let rate = clamp_rate(daily_sales_rate);
    if rate == 0.0 {
        return window;
    }
    (clamp_input(current_inventory) / rate).min(window)
}

pub fn calculate_total_storage_cost(
    current_inventory: f64,
    daily_unit_cost: f64,
    daily_sales_rate: f64,
) -> f64 {
    calculate_total_storage_cost_over(
        current_inventory,
        daily_unit_cost,
        daily_sales_rate,
        SALES_WINDOW_DAYS,
    )
}

pub fn calculate_total_storage_cost_over(
    current_inventory: f64,
    daily_unit_cost: f64,
    daily_sales_rate: f64,
    window_days: f64,
) -> f64 {
    let inventory = clamp_input(current_inventory);
    let unit_cost = clamp_input(daily_unit_cost);
    let cost = inventory * unit_cost * holding_days(inventory, daily_sales_rate, window_days);
    // Saturate instead of overflowing so the accrual stays finite.
    if cost.is_nan() {
        0.0
    } else {
        cost.min(f64::MAX)
    }
}

/// Average units on hand across the window, for display. Never negative.
pub fn calculate_average_quantity(current_quantity: f64, daily_sales_rate: f64) -> f64 {
    calculate_average_quantity_over(current_quantity, daily_sales_rate, SALES_WINDOW_DAYS)
}

pub fn calculate_average_quantity_over(
    current_quantity: f64,
    daily_sales_rate: f64,
    window_days: f64,
) -> f64 {
    let depletion = clamp_rate(daily_sales_rate) * clamp_input(window_days);
    (clamp_input(current_quantity) - depletion / 2.0).max(0.0)
}
