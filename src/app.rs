use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use seller_pricing::{
    domain::{
        analyze_product, calculate_target_price, EngineParams, ExpenseBreakdown,
        FinancialInputError, StoreSummary,
    },
    infra::statistics::{load_statistics, StatisticsLoadError},
    ui::report::{render_target_quote, Report, ReportRow},
    util::{
        persistence::{
            load_engine_params, save_engine_params, settings_file, PersistSaveError,
        },
        version::APP_NAME,
    },
};
use thiserror::Error;

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(about = "Profitability and pricing advice for marketplace sellers")]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Print version information and exit.
    #[arg(long, default_value_t = false)]
    pub version: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Profit, margin and price advice for every product in a statistics export.
    Analyze {
        file: PathBuf,
        #[command(flatten)]
        overrides: ParamOverrides,
        /// Emit JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Price needed to keep a target margin after every per-unit expense.
    TargetPrice {
        #[arg(long)]
        cost_price: f64,
        #[arg(long, default_value_t = 0.0)]
        logistics: f64,
        #[arg(long, default_value_t = 0.0)]
        storage: f64,
        #[arg(long, default_value_t = 0.0)]
        penalties: f64,
        #[arg(long, default_value_t = 0.0)]
        acceptance: f64,
        #[arg(long, default_value_t = 0.0)]
        advertising: f64,
        #[arg(long, default_value_t = 0.0)]
        deductions: f64,
        #[arg(long)]
        target_margin: Option<f64>,
    },
    /// Show or change the stored engine settings.
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    Show,
    Set {
        #[command(flatten)]
        overrides: ParamOverrides,
    },
}

#[derive(Args, Clone, Debug, Default)]
pub struct ParamOverrides {
    /// Target margin in percent.
    #[arg(long)]
    pub target_margin: Option<f64>,
    /// Length of the trailing sales window in days.
    #[arg(long)]
    pub window_days: Option<f64>,
    /// Storage rate used for products without one.
    #[arg(long)]
    pub storage_unit_cost: Option<f64>,
}

impl ParamOverrides {
    pub fn apply(&self, mut params: EngineParams) -> EngineParams {
        if let Some(value) = self.target_margin {
            params.target_margin_percent = value;
        }
        if let Some(value) = self.window_days {
            params.window_days = value;
        }
        if let Some(value) = self.storage_unit_cost {
            params.default_daily_storage_unit_cost = value;
        }
        params.sanitized()
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Statistics(#[from] StatisticsLoadError),
    #[error(transparent)]
    Settings(#[from] PersistSaveError),
    #[error("product {id}: {source}")]
    Product {
        id: String,
        source: FinancialInputError,
    },
    #[error(transparent)]
    Input(#[from] FinancialInputError),
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

pub fn run(command: Command) -> Result<String, AppError> {
    match command {
        Command::Analyze {
            file,
            overrides,
            json,
        } => analyze(&file, overrides.apply(load_engine_params()), json),
        Command::TargetPrice {
            cost_price,
            logistics,
            storage,
            penalties,
            acceptance,
            advertising,
            deductions,
            target_margin,
        } => {
            let expenses = ExpenseBreakdown {
                logistics,
                storage,
                penalties,
                acceptance,
                deductions,
                advertising,
            };
            let target =
                target_margin.unwrap_or_else(|| load_engine_params().target_margin_percent);
            let quote = calculate_target_price(cost_price, &expenses, target)?;
            Ok(render_target_quote(&quote))
        }
        Command::Settings { command } => match command {
            SettingsCommand::Show => {
                let params = load_engine_params();
                let location = settings_file()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unavailable>".to_string());
                Ok(format!(
                    "{}\n(stored at {location})\n",
                    serde_json::to_string_pretty(&params)?
                ))
            }
            SettingsCommand::Set { overrides } => {
                let params = overrides.apply(load_engine_params());
                let path = save_engine_params(&params)?;
                Ok(format!("saved settings to {}\n", path.display()))
            }
        },
    }
}

fn analyze(file: &Path, params: EngineParams, json: bool) -> Result<String, AppError> {
    let snapshot = load_statistics(file)?;
    tracing::info!(
        products = snapshot.products.len(),
        window_days = params.window_days,
        target_margin = params.target_margin_percent,
        "analyzing statistics"
    );

    let mut rows = Vec::with_capacity(snapshot.products.len());
    let mut summary = StoreSummary::default();
    for record in &snapshot.products {
        let analysis =
            analyze_product(&record.financials, &params).map_err(|source| AppError::Product {
                id: record.id.clone(),
                source,
            })?;
        summary.record(&record.financials, &analysis.profitability);
        rows.push(ReportRow::new(record, &analysis));
    }
    let summary = summary.finish()?;

    let report = Report {
        store_id: snapshot.store_id,
        date: snapshot.date,
        products: rows,
        summary,
    };
    if json {
        Ok(report.to_json()?)
    } else {
        Ok(report.to_table())
    }
}
