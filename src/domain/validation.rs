use thiserror::Error;

/// Raised when a caller hands the engine numbers it cannot reason about.
///
/// Degenerate-but-valid inputs (zero sales, zero inventory, zero cost basis)
/// never produce this error.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FinancialInputError {
    #[error("invalid financial input: {field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("invalid financial input: {field} must be a finite number")]
    NonFinite { field: &'static str },
}

impl FinancialInputError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Negative { field, .. } | Self::NonFinite { field } => field,
        }
    }
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, FinancialInputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FinancialInputError::NonFinite { field })
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, FinancialInputError> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(FinancialInputError::Negative { field, value });
    }
    Ok(value)
}
