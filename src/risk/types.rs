//! Lot sizing types

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::instrument::CatalogError;

/// Lot sizing errors
#[derive(Debug, Error)]
pub enum SizingError {
    /// Catalog lookup or spec consistency failure, message passed through as-is
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Non-positive risk amount or stop distance
    #[error("{field} must be > 0 (got {value})")]
    InvalidArgument { field: &'static str, value: Decimal },
}

/// Limit applied when the quantized lot fell outside the instrument range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClampBound {
    /// Raised to the instrument's minimum lot
    Min,
    /// Cut to the instrument's maximum lot
    Max,
}

impl ClampBound {
    /// Lower-case label used in CLI and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            ClampBound::Min => "min",
            ClampBound::Max => "max",
        }
    }
}

impl fmt::Display for ClampBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full breakdown of one sizing calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LotSizing {
    pub symbol: String,
    pub risk_amount: Decimal,
    pub sl_distance_points: Decimal,
    /// Money lost at the stop when holding one lot
    pub risk_per_lot: Decimal,
    /// Unquantized lot that would risk exactly `risk_amount`
    pub raw_lot: Decimal,
    /// `raw_lot` floored to the lot step
    pub quantized_lot: Decimal,
    /// Final lot after clamping
    pub lot: Decimal,
    pub clamp: Option<ClampBound>,
}

impl LotSizing {
    /// Money at risk if the stop is hit at the final lot
    ///
    /// Exceeds `risk_amount` only when the minimum lot clamp applied.
    /// Saturates at `Decimal::MAX`.
    pub fn risk_at_lot(&self) -> Decimal {
        self.lot
            .checked_mul(self.risk_per_lot)
            .unwrap_or(Decimal::MAX)
    }
}
