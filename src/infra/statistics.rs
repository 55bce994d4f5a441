//! Decoding of exported period statistics.
//!
//! The dashboard stores one JSON blob per store and date. Older exports are a
//! bare array of products; newer ones wrap the array with store metadata.
//! Both shapes are accepted.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ProductFinancials;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub financials: ProductFinancials,
}

impl ProductRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSnapshot {
    #[serde(default)]
    pub store_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    pub products: Vec<ProductRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatisticsPayload {
    Snapshot(PeriodSnapshot),
    Products(Vec<ProductRecord>),
}

#[derive(Debug, Error)]
pub enum StatisticsLoadError {
    #[error("failed to read statistics: {0}")]
    Io(#[from] io::Error),
    #[error("malformed statistics: {0}")]
    Json(#[from] serde_json::Error),
    #[error("statistics contain no products")]
    Empty,
}

pub fn parse_statistics(raw: &str) -> Result<PeriodSnapshot, StatisticsLoadError> {
    let snapshot = match serde_json::from_str::<StatisticsPayload>(raw)? {
        StatisticsPayload::Snapshot(snapshot) => snapshot,
        StatisticsPayload::Products(products) => PeriodSnapshot {
            products,
            ..Default::default()
        },
    };

    if snapshot.products.is_empty() {
        return Err(StatisticsLoadError::Empty);
    }
    Ok(snapshot)
}

pub fn load_statistics(path: &Path) -> Result<PeriodSnapshot, StatisticsLoadError> {
    let raw = fs::read_to_string(path)?;
    let snapshot = parse_statistics(&raw)?;
    tracing::debug!(
        path = %path.display(),
        store = snapshot.store_id.as_deref().unwrap_or("-"),
        products = snapshot.products.len(),
        "loaded period statistics"
    );
    Ok(snapshot)
}
