use serde::{Deserialize, Serialize};

use super::settings::EngineParams;
use super::validation::{finite, non_negative, FinancialInputError};

/// Period totals for one product or one store, grouped by expense category.
///
/// Every category is a non-negative accumulation; anything missing from the
/// source data is zero, never an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseBreakdown {
    pub logistics: f64,
    /// Storage fee as reported by the marketplace. Profitability ignores it
    /// and recomputes storage from inventory and sell-through.
    pub storage: f64,
    pub penalties: f64,
    pub acceptance: f64,
    pub deductions: f64,
    /// Advertising spend, tracked separately from per-product expenses.
    pub advertising: f64,
}

impl ExpenseBreakdown {
    /// Expenses charged against a product's period profit. Storage comes from
    /// the accrual calculator instead, and advertising is not included.
    pub fn period_charges(&self) -> f64 {
        self.logistics + self.penalties + self.acceptance + self.deductions
    }

    /// Every category summed, advertising and reported storage included.
    pub fn total(&self) -> f64 {
        self.logistics
            + self.storage
            + self.penalties
            + self.acceptance
            + self.advertising
            + self.deductions
    }

    pub(crate) fn validate(&self) -> Result<(), FinancialInputError> {
        non_negative("expenses.logistics", self.logistics)?;
        non_negative("expenses.storage", self.storage)?;
        non_negative("expenses.penalties", self.penalties)?;
        non_negative("expenses.acceptance", self.acceptance)?;
        non_negative("expenses.deductions", self.deductions)?;
        non_negative("expenses.advertising", self.advertising)?;
        Ok(())
    }
}

/// Everything the engine needs to know about one product for one period.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFinancials {
    /// Unit purchase cost.
    pub cost_price: f64,
    /// Current listed (discounted) price.
    pub sale_price: f64,
    /// Units sold within the observation window.
    pub quantity_sold: u32,
    /// Units currently held in the warehouse.
    pub current_inventory: u32,
    /// Currency per unit per day; `None` falls back to the configured default.
    pub daily_storage_unit_cost: Option<f64>,
    /// What the marketplace actually paid out after its own cut. Can go
    /// negative when returns outweigh sales.
    pub remitted_amount: f64,
    pub expenses: ExpenseBreakdown,
}

impl ProductFinancials {
    pub fn storage_unit_cost(&self, params: &EngineParams) -> f64 {
        self.daily_storage_unit_cost
            .unwrap_or(params.default_daily_storage_unit_cost)
    }

    pub(crate) fn validate(&self) -> Result<(), FinancialInputError> {
        non_negative("costPrice", self.cost_price)?;
        non_negative("salePrice", self.sale_price)?;
        if let Some(rate) = self.daily_storage_unit_cost {
            non_negative("dailyStorageUnitCost", rate)?;
        }
        finite("remittedAmount", self.remitted_amount)?;
        self.expenses.validate()
    }
}

/// Which branch of the margin rule produced [`ProfitabilityResult::margin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarginBasis {
    /// Net profit relative to the cost basis.
    CostBasis,
    /// No cost basis but a positive profit: reported as 100%.
    NoCostBasisProfit,
    /// No cost basis and no profit: reported as 0%.
    NoCostBasisLoss,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilityResult {
    pub net_profit: f64,
    /// Percent of cost basis; negative when the period lost money.
    pub margin: f64,
    pub total_expenses: f64,
    pub calculated_storage_cost: f64,
    pub storage_cost_per_unit: f64,
    pub cost_price_total: f64,
    pub daily_sales_rate: f64,
    pub margin_basis: MarginBasis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceAction {
    Raise,
    Lower,
    Optimal,
}

impl PriceAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Raise => "raise",
            Self::Lower => "lower",
            Self::Optimal => "optimal",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecommendation {
    pub recommended_price: f64,
    /// Positive means raise the price, negative means lower it.
    pub price_change: f64,
    /// Margin on sale price at the *current* price.
    pub margin: f64,
    pub action: PriceAction,
    pub recommendation: String,
    /// Cost price plus per-unit storage burden.
    pub unit_cost: f64,
    /// Target margin after clamping.
    pub target_margin_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetPriceQuote {
    pub unit_cost: f64,
    pub total_expenses: f64,
    pub target_price: f64,
    pub profit_per_unit: f64,
    pub target_margin_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAnalysis {
    pub profitability: ProfitabilityResult,
    /// Only present when the product has a cost price to price against.
    pub recommendation: Option<PriceRecommendation>,
}
