//! Period profit and margin for a product, and the store-level roll-up.

use serde::{Deserialize, Serialize};

use super::entities::{MarginBasis, ProductFinancials, ProfitabilityResult};
use super::settings::EngineParams;
use super::storage::{calculate_total_storage_cost_over, daily_sales_rate};
use super::validation::{finite, FinancialInputError};

pub fn compute_profitability(
    pf: &ProductFinancials,
) -> Result<ProfitabilityResult, FinancialInputError> {
    compute_profitability_with(pf, &EngineParams::default())
}

pub fn compute_profitability_with(
    pf: &ProductFinancials,
    params: &EngineParams,
) -> Result<ProfitabilityResult, FinancialInputError> {
    pf.validate()?;

    let quantity_sold = pf.quantity_sold as f64;
    let cost_price_total = finite("costPriceTotal", pf.cost_price * quantity_sold)?;
    let sales_rate = daily_sales_rate(pf.quantity_sold, params.window_days);

    let calculated_storage_cost = calculate_total_storage_cost_over(
        pf.current_inventory as f64,
        pf.storage_unit_cost(params),
        sales_rate,
        params.window_days,
    );
    let storage_cost_per_unit = if pf.quantity_sold > 0 {
        calculated_storage_cost / quantity_sold
    } else {
        0.0
    };

    // Valid inputs can still overflow once multiplied or summed.
    let total_expenses = finite(
        "totalExpenses",
        pf.expenses.period_charges() + calculated_storage_cost,
    )?;
    let net_profit = finite(
        "netProfit",
        pf.remitted_amount - cost_price_total - total_expenses,
    )?;
    let (margin, margin_basis) = margin_on_cost(net_profit, cost_price_total);
    let margin = finite("margin", margin)?;

    Ok(ProfitabilityResult {
        net_profit,
        margin,
        total_expenses,
        calculated_storage_cost,
        storage_cost_per_unit,
        cost_price_total,
        daily_sales_rate: sales_rate,
        margin_basis,
    })
}

/// Margin as a percentage of cost basis.
///
/// Without a cost basis there is nothing to divide by: a profit then reads as
/// 100% and anything else as 0%.
pub fn margin_on_cost(net_profit: f64, cost_price_total: f64) -> (f64, MarginBasis) {
    if cost_price_total > 0.0 {
        (
            net_profit / cost_price_total * 100.0,
            MarginBasis::CostBasis,
        )
    } else if net_profit > 0.0 {
        (100.0, MarginBasis::NoCostBasisProfit)
    } else {
        (0.0, MarginBasis::NoCostBasisLoss)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSummary {
    pub products: usize,
    pub unprofitable_products: usize,
    pub remitted_amount: f64,
    pub cost_price_total: f64,
    pub total_expenses: f64,
    pub calculated_storage_cost: f64,
    pub net_profit: f64,
    pub margin: f64,
    /// Reported alongside, never subtracted from `net_profit`.
    pub advertising: f64,
}

impl StoreSummary {
    /// Adds one product whose profitability has already been computed.
    pub fn record(&mut self, pf: &ProductFinancials, result: &ProfitabilityResult) {
        self.products += 1;
        if result.net_profit < 0.0 {
            self.unprofitable_products += 1;
        }
        self.remitted_amount += pf.remitted_amount;
        self.cost_price_total += result.cost_price_total;
        self.total_expenses += result.total_expenses;
        self.calculated_storage_cost += result.calculated_storage_cost;
        self.net_profit += result.net_profit;
        self.advertising += pf.expenses.advertising;
    }

    /// Computes the store margin once every product has been recorded.
    pub fn finish(mut self) -> Result<Self, FinancialInputError> {
        finite("remittedAmount", self.remitted_amount)?;
        finite("costPriceTotal", self.cost_price_total)?;
        finite("totalExpenses", self.total_expenses)?;
        finite("calculatedStorageCost", self.calculated_storage_cost)?;
        finite("netProfit", self.net_profit)?;
        finite("advertising", self.advertising)?;
        self.margin = finite(
            "margin",
            margin_on_cost(self.net_profit, self.cost_price_total).0,
        )?;
        Ok(self)
    }
}

/// Rolls every product of one store and one period into a single figure.
pub fn summarize_store(
    products: &[ProductFinancials],
    params: &EngineParams,
) -> Result<StoreSummary, FinancialInputError> {
    let mut summary = StoreSummary::default();
    for pf in products {
        let result = compute_profitability_with(pf, params)?;
        summary.record(pf, &result);
    }
    summary.finish()
}
