//! Risk-to-lot position sizing
//!
//! Converts a money risk budget and a stop distance in points into a lot size
//! that honours the instrument's step, minimum and maximum. Quantization is a
//! floor so the sized position never risks more than the raw calculation
//! allows, except where the minimum lot forces it up.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::{ClampBound, LotSizing, SizingError};
use crate::instrument::{CatalogError, CatalogHandle, InstrumentCatalog, InstrumentSpec};

#[derive(Debug, Clone)]
enum CatalogSource {
    Fixed(Arc<InstrumentCatalog>),
    Live(Arc<CatalogHandle>),
}

impl CatalogSource {
    fn snapshot(&self) -> Arc<InstrumentCatalog> {
        match self {
            CatalogSource::Fixed(catalog) => Arc::clone(catalog),
            CatalogSource::Live(handle) => handle.current(),
        }
    }
}

/// Stateless lot sizing over an instrument catalog
#[derive(Debug, Clone)]
pub struct SizingEngine {
    source: CatalogSource,
}

impl SizingEngine {
    /// Size against a fixed catalog
    pub fn new(catalog: Arc<InstrumentCatalog>) -> Self {
        Self {
            source: CatalogSource::Fixed(catalog),
        }
    }

    /// Size against whatever catalog the handle publishes at call time
    pub fn from_handle(handle: Arc<CatalogHandle>) -> Self {
        Self {
            source: CatalogSource::Live(handle),
        }
    }

    /// Lot size for risking `risk_amount` with a stop `sl_distance_points` away
    pub fn calc_lot_from_risk(
        &self,
        risk_amount: Decimal,
        sl_distance_points: Decimal,
        symbol: &str,
    ) -> Result<Decimal, SizingError> {
        Ok(self.size(risk_amount, sl_distance_points, symbol)?.lot)
    }

    /// Same calculation as [`SizingEngine::calc_lot_from_risk`], with every intermediate value
    ///
    /// The symbol is resolved before the arguments are checked, so an unknown
    /// symbol is reported even when the amounts are also invalid.
    pub fn size(
        &self,
        risk_amount: Decimal,
        sl_distance_points: Decimal,
        symbol: &str,
    ) -> Result<LotSizing, SizingError> {
        let catalog = self.source.snapshot();
        let spec = catalog.get(symbol)?;

        ensure_positive("risk_amount", risk_amount)?;
        ensure_positive("sl_distance_points", sl_distance_points)?;
        ensure_spec_positive(spec, "point_value", spec.point_value())?;
        ensure_spec_positive(spec, "lot_step", spec.lot_step())?;

        // Overflow saturates: an unrepresentable risk per lot floors to the
        // minimum lot, an unrepresentable lot count clamps to the maximum
        let risk_per_lot = sl_distance_points
            .checked_mul(spec.point_value())
            .unwrap_or(Decimal::MAX);
        let raw_lot = risk_amount
            .checked_div(risk_per_lot)
            .unwrap_or(Decimal::MAX);
        let quantized_lot = floor_to_step(raw_lot, spec.lot_step()).unwrap_or(Decimal::MAX);
        let (lot, clamp) = clamp_lot(quantized_lot, spec.min_lot(), spec.max_lot());

        tracing::debug!(
            symbol,
            %risk_amount,
            %sl_distance_points,
            %risk_per_lot,
            %raw_lot,
            %quantized_lot,
            %lot,
            clamp = ?clamp,
            "Sized lot from risk"
        );

        Ok(LotSizing {
            symbol: spec.symbol().to_string(),
            risk_amount,
            sl_distance_points,
            risk_per_lot,
            raw_lot,
            quantized_lot,
            lot,
            clamp,
        })
    }
}

fn ensure_positive(field: &'static str, value: Decimal) -> Result<(), SizingError> {
    if value <= Decimal::ZERO {
        return Err(SizingError::InvalidArgument { field, value });
    }
    Ok(())
}

// Guards the divisions below when the catalog was never validated
fn ensure_spec_positive(
    spec: &InstrumentSpec,
    field: &'static str,
    value: Decimal,
) -> Result<(), SizingError> {
    if value <= Decimal::ZERO {
        return Err(CatalogError::Validation {
            symbol: spec.symbol().to_string(),
            field,
            reason: format!("must be > 0, got {value}"),
        }
        .into());
    }
    Ok(())
}

/// Largest multiple of `step` not above `value`
fn floor_to_step(value: Decimal, step: Decimal) -> Option<Decimal> {
    value.checked_div(step)?.floor().checked_mul(step)
}

/// Min is checked before max, matching an unvalidated spec with min > max
fn clamp_lot(lot: Decimal, min_lot: Decimal, max_lot: Decimal) -> (Decimal, Option<ClampBound>) {
    if lot < min_lot {
        (min_lot, Some(ClampBound::Min))
    } else if lot > max_lot {
        (max_lot, Some(ClampBound::Max))
    } else {
        (lot, None)
    }
}
