//! Profitability and pricing advice for marketplace sellers.
//!
//! The [`domain`] module is the engine: storage accrual, period profit and
//! margin, and price recommendations, all as pure functions over plain
//! values. The remaining modules load statistics exports, persist engine
//! settings and render reports for the `seller-pricing` binary.
//!
//! ```
//! use seller_pricing::domain::{analyze_profitability, PriceAction};
//!
//! let advice = analyze_profitability(100.0, 200.0, 10.0, 1.0, 30.0).unwrap();
//! assert_eq!(advice.action, PriceAction::Lower);
//! ```

pub mod domain;
pub mod infra;
pub mod ui;
pub mod util;
