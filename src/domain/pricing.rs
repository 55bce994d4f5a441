//! Price advice.
//!
//! Two tools live here and they intentionally price against different costs:
//! [`analyze_profitability`] amortizes only purchase cost plus storage per
//! unit, while [`calculate_target_price`] loads every expense category
//! (advertising included) onto the unit.

use super::entities::{
    ExpenseBreakdown, PriceAction, PriceRecommendation, ProductAnalysis, ProductFinancials,
    TargetPriceQuote,
};
use super::profitability::compute_profitability_with;
use super::settings::{
    EngineParams, DEFAULT_TARGET_MARGIN_PERCENT, MAX_TARGET_MARGIN_PERCENT,
    PRICE_TOLERANCE_ABSOLUTE, PRICE_TOLERANCE_RATIO,
};
use super::validation::{finite, non_negative, FinancialInputError};

/// Target margin after clamping into `[0, MAX_TARGET_MARGIN_PERCENT]`.
pub fn clamp_target_margin(target_margin_percent: f64) -> f64 {
    target_margin_percent.clamp(0.0, MAX_TARGET_MARGIN_PERCENT)
}

/// Price at which `unit_cost` leaves `target_margin_percent` of the price as
/// margin. The target must already be clamped.
fn price_for_margin(unit_cost: f64, target_margin_percent: f64) -> f64 {
    unit_cost / (1.0 - target_margin_percent / 100.0)
}

/// Width of the band around the recommendation in which the current price is
/// left alone.
pub fn price_tolerance(sale_price: f64) -> f64 {
    PRICE_TOLERANCE_ABSOLUTE.max(sale_price * PRICE_TOLERANCE_RATIO)
}

pub fn classify_price_change(price_change: f64, sale_price: f64) -> PriceAction {
    let tolerance = price_tolerance(sale_price);
    if price_change > tolerance {
        PriceAction::Raise
    } else if price_change < -tolerance {
        PriceAction::Lower
    } else {
        PriceAction::Optimal
    }
}

pub fn analyze_profitability(
    cost_price: f64,
    sale_price: f64,
    storage_cost_per_unit: f64,
    daily_sales_rate: f64,
    target_margin_percent: f64,
) -> Result<PriceRecommendation, FinancialInputError> {
    let cost_price = non_negative("costPrice", cost_price)?;
    let sale_price = non_negative("salePrice", sale_price)?;
    let storage_cost_per_unit = non_negative("storageCostPerUnit", storage_cost_per_unit)?;
    let daily_sales_rate = non_negative("dailySalesRate", daily_sales_rate)?;
    let target = clamp_target_margin(finite("targetMarginPercent", target_margin_percent)?);

    let unit_cost = finite("unitCost", cost_price + storage_cost_per_unit)?;
    let recommended_price = finite("recommendedPrice", price_for_margin(unit_cost, target))?;
    let price_change = recommended_price - sale_price;
    let margin = if sale_price > 0.0 {
        finite("margin", (sale_price - unit_cost) / sale_price * 100.0)?
    } else {
        0.0
    };

    let action = classify_price_change(price_change, sale_price);
    let mut recommendation = match action {
        PriceAction::Optimal => format!("Price is optimal for a {target:.1}% target margin"),
        PriceAction::Raise => format!(
            "Raise price by {:.2} to {:.2} to reach a {target:.1}% margin",
            price_change, recommended_price
        ),
        PriceAction::Lower => format!(
            "Lower price by {:.2} to {:.2}; a {target:.1}% margin still holds",
            -price_change, recommended_price
        ),
    };
    if daily_sales_rate == 0.0 {
        recommendation.push_str(" (no recent sales)");
    }

    Ok(PriceRecommendation {
        recommended_price,
        price_change,
        margin,
        action,
        recommendation,
        unit_cost,
        target_margin_percent: target,
    })
}

/// [`analyze_profitability`] at the default target margin.
pub fn analyze_profitability_default(
    cost_price: f64,
    sale_price: f64,
    storage_cost_per_unit: f64,
    daily_sales_rate: f64,
) -> Result<PriceRecommendation, FinancialInputError> {
    analyze_profitability(
        cost_price,
        sale_price,
        storage_cost_per_unit,
        daily_sales_rate,
        DEFAULT_TARGET_MARGIN_PERCENT,
    )
}

/// Price needed to keep `target_margin_percent` after the purchase cost and
/// every expense category have been paid. `expenses` are per-unit figures
/// chosen by the caller.
pub fn calculate_target_price(
    cost_price: f64,
    expenses: &ExpenseBreakdown,
    target_margin_percent: f64,
) -> Result<TargetPriceQuote, FinancialInputError> {
    let cost_price = non_negative("costPrice", cost_price)?;
    expenses.validate()?;
    let target = clamp_target_margin(finite("targetMarginPercent", target_margin_percent)?);

    let total_expenses = finite("totalExpenses", expenses.total())?;
    let unit_cost = finite("unitCost", cost_price + total_expenses)?;
    let target_price = finite("targetPrice", price_for_margin(unit_cost, target))?;

    Ok(TargetPriceQuote {
        unit_cost,
        total_expenses,
        target_price,
        profit_per_unit: target_price - unit_cost,
        target_margin_percent: target,
    })
}

/// Runs accrual, profitability and price advice for one product in order.
///
/// Products without a cost price get no advice: there is nothing to anchor
/// the price floor to.
pub fn analyze_product(
    pf: &ProductFinancials,
    params: &EngineParams,
) -> Result<ProductAnalysis, FinancialInputError> {
    let profitability = compute_profitability_with(pf, params)?;
    let recommendation = if pf.cost_price > 0.0 {
        Some(analyze_profitability(
            pf.cost_price,
            pf.sale_price,
            profitability.storage_cost_per_unit,
            profitability.daily_sales_rate,
            params.target_margin_percent,
        )?)
    } else {
        None
    };

    Ok(ProductAnalysis {
        profitability,
        recommendation,
    })
}
