//! Invariants of the engine that must hold for any sane input.

use proptest::prelude::*;
use proptest::test_runner::Config;
use seller_pricing::domain::{
    analyze_profitability, calculate_average_quantity, calculate_target_price,
    calculate_total_storage_cost, compute_profitability, price_tolerance, ExpenseBreakdown,
    FinancialInputError, PriceAction, ProductFinancials,
};

fn money() -> impl Strategy<Value = f64> {
    0.0..100_000.0_f64
}

fn expenses() -> impl Strategy<Value = ExpenseBreakdown> {
    (money(), money(), money(), money(), money(), money()).prop_map(
        |(logistics, storage, penalties, acceptance, deductions, advertising)| ExpenseBreakdown {
            logistics,
            storage,
            penalties,
            acceptance,
            deductions,
            advertising,
        },
    )
}

fn financials() -> impl Strategy<Value = ProductFinancials> {
    (
        money(),
        money(),
        0_u32..10_000,
        0_u32..10_000,
        proptest::option::of(0.0..50.0_f64),
        -100_000.0..1_000_000.0_f64,
        expenses(),
    )
        .prop_map(
            |(
                cost_price,
                sale_price,
                quantity_sold,
                current_inventory,
                daily_storage_unit_cost,
                remitted_amount,
                expenses,
            )| ProductFinancials {
                cost_price,
                sale_price,
                quantity_sold,
                current_inventory,
                daily_storage_unit_cost,
                remitted_amount,
                expenses,
            },
        )
}

/// Any valid amount, with the extremes of the `f64` range well represented.
fn any_amount() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(f64::MAX),
        0.0..100_000.0_f64,
        0.0..f64::MAX,
    ]
}

/// Anything a caller could pass to the infallible storage helpers.
fn any_float() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(f64::MAX),
        -f64::MAX..0.0_f64,
        0.0..f64::MAX,
    ]
}

fn any_expenses() -> impl Strategy<Value = ExpenseBreakdown> {
    (
        any_amount(),
        any_amount(),
        any_amount(),
        any_amount(),
        any_amount(),
        any_amount(),
    )
        .prop_map(
            |(logistics, storage, penalties, acceptance, deductions, advertising)| {
                ExpenseBreakdown {
                    logistics,
                    storage,
                    penalties,
                    acceptance,
                    deductions,
                    advertising,
                }
            },
        )
}

fn any_financials() -> impl Strategy<Value = ProductFinancials> {
    (
        any_amount(),
        any_amount(),
        any::<u32>(),
        any::<u32>(),
        proptest::option::of(any_amount()),
        prop_oneof![-f64::MAX..0.0_f64, any_amount()],
        any_expenses(),
    )
        .prop_map(
            |(
                cost_price,
                sale_price,
                quantity_sold,
                current_inventory,
                daily_storage_unit_cost,
                remitted_amount,
                expenses,
            )| ProductFinancials {
                cost_price,
                sale_price,
                quantity_sold,
                current_inventory,
                daily_storage_unit_cost,
                remitted_amount,
                expenses,
            },
        )
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn storage_cost_stays_finite_over_full_range(
        inventory in any_float(),
        unit_cost in any_float(),
        rate in any_float(),
    ) {
        let cost = calculate_total_storage_cost(inventory, unit_cost, rate);
        prop_assert!(cost.is_finite());
        prop_assert!(cost >= 0.0);
        let avg = calculate_average_quantity(inventory, rate);
        prop_assert!(avg.is_finite());
        prop_assert!(avg >= 0.0);
    }

    #[test]
    fn profitability_is_finite_or_rejected_over_full_range(pf in any_financials()) {
        match compute_profitability(&pf) {
            Ok(result) => {
                for value in [
                    result.cost_price_total,
                    result.daily_sales_rate,
                    result.calculated_storage_cost,
                    result.storage_cost_per_unit,
                    result.total_expenses,
                    result.net_profit,
                    result.margin,
                ] {
                    prop_assert!(value.is_finite());
                }
            }
            Err(err) => {
                prop_assert!(matches!(err, FinancialInputError::NonFinite { .. }), "{err}");
            }
        }
    }

    #[test]
    fn advice_is_finite_or_rejected_over_full_range(
        cost in any_amount(),
        sale in any_amount(),
        storage in any_amount(),
        target in -50.0..150.0_f64,
    ) {
        match analyze_profitability(cost, sale, storage, 1.0, target) {
            Ok(rec) => {
                prop_assert!(rec.unit_cost.is_finite());
                prop_assert!(rec.recommended_price.is_finite());
                prop_assert!(rec.price_change.is_finite());
                prop_assert!(rec.margin.is_finite());
            }
            Err(err) => {
                prop_assert!(matches!(err, FinancialInputError::NonFinite { .. }), "{err}");
            }
        }
    }

    #[test]
    fn target_price_is_finite_or_rejected_over_full_range(
        cost in any_amount(),
        expenses in any_expenses(),
        target in 0.0..200.0_f64,
    ) {
        match calculate_target_price(cost, &expenses, target) {
            Ok(quote) => {
                prop_assert!(quote.total_expenses.is_finite());
                prop_assert!(quote.unit_cost.is_finite());
                prop_assert!(quote.target_price.is_finite());
                prop_assert!(quote.profit_per_unit.is_finite());
            }
            Err(err) => {
                prop_assert!(matches!(err, FinancialInputError::NonFinite { .. }), "{err}");
            }
        }
    }

    #[test]
    fn storage_cost_is_finite_and_non_negative(
        inventory in 0.0..1_000_000.0_f64,
        unit_cost in 0.0..100.0_f64,
        rate in 0.0..10_000.0_f64,
    ) {
        let cost = calculate_total_storage_cost(inventory, unit_cost, rate);
        prop_assert!(cost.is_finite());
        prop_assert!(cost >= 0.0);
    }

    #[test]
    fn storage_cost_grows_with_inventory_and_unit_cost(
        inventory in 0.0..100_000.0_f64,
        extra in 0.0..1_000.0_f64,
        unit_cost in 0.0..100.0_f64,
        extra_cost in 0.0..10.0_f64,
        rate in 0.0..1_000.0_f64,
    ) {
        let base = calculate_total_storage_cost(inventory, unit_cost, rate);
        prop_assert!(calculate_total_storage_cost(inventory + extra, unit_cost, rate) >= base);
        prop_assert!(calculate_total_storage_cost(inventory, unit_cost + extra_cost, rate) >= base);
    }

    #[test]
    fn faster_sales_never_raise_storage_cost(
        inventory in 0.0..100_000.0_f64,
        unit_cost in 0.0..100.0_f64,
        rate in 0.001..1_000.0_f64,
        faster in 0.0..1_000.0_f64,
    ) {
        let slow = calculate_total_storage_cost(inventory, unit_cost, rate);
        let fast = calculate_total_storage_cost(inventory, unit_cost, rate + faster);
        prop_assert!(fast <= slow);
    }

    #[test]
    fn empty_inventory_never_accrues(unit_cost in 0.0..100.0_f64, rate in 0.0..1_000.0_f64) {
        prop_assert_eq!(calculate_total_storage_cost(0.0, unit_cost, rate), 0.0);
    }

    #[test]
    fn average_quantity_never_negative(current in 0.0..10_000.0_f64, rate in 0.0..1_000.0_f64) {
        let avg = calculate_average_quantity(current, rate);
        prop_assert!(avg >= 0.0);
        prop_assert!(avg <= current);
    }

    #[test]
    fn profitability_is_always_finite(pf in financials()) {
        let result = compute_profitability(&pf).unwrap();
        for value in [
            result.net_profit,
            result.margin,
            result.total_expenses,
            result.calculated_storage_cost,
            result.storage_cost_per_unit,
        ] {
            prop_assert!(value.is_finite());
        }
        prop_assert!(result.total_expenses >= 0.0);
    }

    #[test]
    fn profitability_is_deterministic(pf in financials()) {
        let first = compute_profitability(&pf).unwrap();
        let second = compute_profitability(&pf).unwrap();
        prop_assert_eq!(first.net_profit.to_bits(), second.net_profit.to_bits());
        prop_assert_eq!(first.margin.to_bits(), second.margin.to_bits());
    }

    #[test]
    fn advice_direction_matches_price_change(
        cost in 0.0..10_000.0_f64,
        sale in 0.0..20_000.0_f64,
        storage in 0.0..500.0_f64,
        target in -50.0..150.0_f64,
    ) {
        let rec = analyze_profitability(cost, sale, storage, 1.0, target).unwrap();
        prop_assert!(rec.recommended_price.is_finite());
        prop_assert!(rec.recommended_price >= rec.unit_cost);
        match rec.action {
            PriceAction::Raise => {
                prop_assert!(rec.price_change > 0.0);
            }
            PriceAction::Lower => {
                prop_assert!(rec.price_change < 0.0);
            }
            PriceAction::Optimal => {
                prop_assert!(rec.price_change.abs() <= price_tolerance(sale));
            }
        }
    }

    #[test]
    fn target_price_covers_unit_cost(
        cost in 0.0..10_000.0_f64,
        expenses in expenses(),
        target in 0.0..200.0_f64,
    ) {
        let quote = calculate_target_price(cost, &expenses, target).unwrap();
        prop_assert!(quote.target_price.is_finite());
        prop_assert!(quote.profit_per_unit >= 0.0);
    }
}
