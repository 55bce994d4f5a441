//! Cost allocation and pricing logic lives here. Nothing in this module does
//! I/O or keeps state between calls.

pub mod entities;
pub mod pricing;
pub mod profitability;
pub mod settings;
pub mod storage;
pub mod validation;

pub use entities::{
    ExpenseBreakdown, MarginBasis, PriceAction, PriceRecommendation, ProductAnalysis,
    ProductFinancials, ProfitabilityResult, TargetPriceQuote,
};
pub use pricing::{
    analyze_product, analyze_profitability, analyze_profitability_default,
    calculate_target_price, classify_price_change, clamp_target_margin, price_tolerance,
};
pub use profitability::{
    compute_profitability, compute_profitability_with, margin_on_cost, summarize_store,
    StoreSummary,
};
pub use settings::{
    EngineParams, DEFAULT_DAILY_STORAGE_UNIT_COST, DEFAULT_TARGET_MARGIN_PERCENT,
    MAX_TARGET_MARGIN_PERCENT, PRICE_TOLERANCE_ABSOLUTE, PRICE_TOLERANCE_RATIO, SALES_WINDOW_DAYS,
};
pub use storage::{
    calculate_average_quantity, calculate_average_quantity_over, calculate_total_storage_cost,
    calculate_total_storage_cost_over, daily_sales_rate, holding_days,
};
pub use validation::FinancialInputError;
