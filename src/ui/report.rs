//! Plain-text and JSON rendering of engine output. Rounding to cents happens
//! here and nowhere else.

use std::fmt::Write as _;

use serde::Serialize;

use crate::domain::{ProductAnalysis, StoreSummary, TargetPriceQuote};
use crate::infra::statistics::ProductRecord;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub id: String,
    pub name: String,
    pub net_profit: f64,
    pub margin: f64,
    pub total_expenses: f64,
    pub storage_cost: f64,
    pub storage_cost_per_unit: f64,
    pub recommended_price: Option<f64>,
    pub price_change: Option<f64>,
    pub action: Option<&'static str>,
    pub recommendation: Option<String>,
}

impl ReportRow {
    pub fn new(record: &ProductRecord, analysis: &ProductAnalysis) -> Self {
        let p = &analysis.profitability;
        let rec = analysis.recommendation.as_ref();
        Self {
            id: record.id.clone(),
            name: record.display_name().to_string(),
            net_profit: round2(p.net_profit),
            margin: round2(p.margin),
            total_expenses: round2(p.total_expenses),
            storage_cost: round2(p.calculated_storage_cost),
            storage_cost_per_unit: round2(p.storage_cost_per_unit),
            recommended_price: rec.map(|r| round2(r.recommended_price)),
            price_change: rec.map(|r| round2(r.price_change)),
            action: rec.map(|r| r.action.label()),
            recommendation: rec.map(|r| r.recommendation.clone()),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub store_id: Option<String>,
    pub date: Option<String>,
    pub products: Vec<ReportRow>,
    pub summary: StoreSummary,
}

impl Report {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut summary = self.summary.clone();
        for value in [
            &mut summary.remitted_amount,
            &mut summary.cost_price_total,
            &mut summary.total_expenses,
            &mut summary.calculated_storage_cost,
            &mut summary.net_profit,
            &mut summary.margin,
            &mut summary.advertising,
        ] {
            *value = round2(*value);
        }
        serde_json::to_string_pretty(&Report {
            summary,
            ..self.clone()
        })
    }

    pub fn to_table(&self) -> String {
        let mut out = String::new();
        if let Some(store) = &self.store_id {
            let _ = write!(out, "Store {store}");
            if let Some(date) = &self.date {
                let _ = write!(out, " / {date}");
            }
            out.push('\n');
        }

        let _ = writeln!(
            out,
            "{:<24} {:>12} {:>9} {:>12} {:>10} {:>12}  {}",
            "Product", "Net profit", "Margin", "Expenses", "Storage", "Target", "Advice"
        );
        for row in &self.products {
            let target = row
                .recommended_price
                .map(|p| format!("{p:.2}"))
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(
                out,
                "{:<24} {:>12.2} {:>8.2}% {:>12.2} {:>10.2} {:>12}  {}",
                truncate(&row.name, 24),
                row.net_profit,
                row.margin,
                row.total_expenses,
                row.storage_cost,
                target,
                row.recommendation.as_deref().unwrap_or("no cost price set"),
            );
        }

        let s = &self.summary;
        let _ = writeln!(
            out,
            "\n{} products, {} unprofitable | remitted {:.2} | cost basis {:.2} | expenses {:.2} | net {:.2} ({:.2}%)",
            s.products,
            s.unprofitable_products,
            s.remitted_amount,
            s.cost_price_total,
            s.total_expenses,
            s.net_profit,
            s.margin,
        );
        if s.advertising > 0.0 {
            let _ = writeln!(out, "advertising (not included above): {:.2}", s.advertising);
        }
        out
    }
}

pub fn render_target_quote(quote: &TargetPriceQuote) -> String {
    format!(
        "unit cost {:.2} (expenses {:.2})\ntarget price {:.2} for a {:.1}% margin, {:.2} profit per unit\n",
        quote.unit_cost,
        quote.total_expenses,
        quote.target_price,
        quote.target_margin_percent,
        quote.profit_per_unit,
    )
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let mut cut: String = value.chars().take(max - 1).collect();
        cut.push('…');
        cut
    }
}
