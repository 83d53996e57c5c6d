//! Per-instrument trading constraints

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::CatalogError;

/// Instrument category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetClass {
    Fx,
    Commodity,
    Index,
    Crypto,
    Equity,
    /// Any label not covered above, kept verbatim
    Other(String),
}

impl AssetClass {
    /// Upper-case label, or the original text for [`AssetClass::Other`]
    pub fn as_str(&self) -> &str {
        match self {
            AssetClass::Fx => "FX",
            AssetClass::Commodity => "COMMODITY",
            AssetClass::Index => "INDEX",
            AssetClass::Crypto => "CRYPTO",
            AssetClass::Equity => "EQUITY",
            AssetClass::Other(label) => label,
        }
    }
}

impl From<String> for AssetClass {
    fn from(label: String) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "FX" => AssetClass::Fx,
            "COMMODITY" => AssetClass::Commodity,
            "INDEX" => AssetClass::Index,
            "CRYPTO" => AssetClass::Crypto,
            "EQUITY" => AssetClass::Equity,
            _ => AssetClass::Other(label),
        }
    }
}

impl From<&str> for AssetClass {
    fn from(label: &str) -> Self {
        AssetClass::from(label.to_string())
    }
}

impl From<AssetClass> for String {
    fn from(class: AssetClass) -> Self {
        class.as_str().to_string()
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable descriptor for a single tradeable instrument
///
/// Fields are private and only exposed through getters, so a spec handed out
/// by the catalog can never be changed in place. Construction does not check
/// numeric ranges; call [`InstrumentSpec::validate`] for that.
///
/// Fields cannot be assigned from outside the crate:
///
/// ```compile_fail
/// use lot_sizer::InstrumentSpec;
///
/// let mut spec = InstrumentSpec::new("EURUSD", "FX", "USD");
/// spec.min_lot = rust_decimal::Decimal::ONE;
/// ```
///
/// The metadata view is shared, so its contents cannot be edited:
///
/// ```compile_fail
/// use lot_sizer::InstrumentSpec;
///
/// let spec = InstrumentSpec::new("EURUSD", "FX", "USD").with_metadata("session", "24x5");
/// spec.metadata().insert("session".to_string(), toml::Value::from("closed"));
/// ```
///
/// A catalog only lends specs out immutably:
///
/// ```compile_fail
/// use lot_sizer::{InstrumentCatalog, InstrumentSpec};
///
/// let catalog =
///     InstrumentCatalog::from_specs(vec![InstrumentSpec::new("EURUSD", "FX", "USD")]).unwrap();
/// let spec: &mut InstrumentSpec = catalog.get("EURUSD").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentSpec {
    symbol: String,
    asset_class: AssetClass,
    #[serde(alias = "pip_size")]
    tick_size: Decimal,
    point_value: Decimal,
    contract_size: Decimal,
    currency: String,
    #[serde(default = "default_min_lot")]
    min_lot: Decimal,
    max_lot: Decimal,
    #[serde(default = "default_lot_step")]
    lot_step: Decimal,
    #[serde(default)]
    metadata: BTreeMap<String, toml::Value>,
}

fn default_min_lot() -> Decimal {
    Decimal::new(1, 2) // 0.01
}
fn default_lot_step() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

impl InstrumentSpec {
    /// Create a spec with programmatic defaults
    ///
    /// Tick size, point value and contract size start at 1. Lot limits start
    /// at min 0.01, max 100, step 0.01. An instrument file has no default
    /// for `max_lot` and must set it.
    pub fn new(
        symbol: impl Into<String>,
        asset_class: impl Into<AssetClass>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            asset_class: asset_class.into(),
            tick_size: dec!(1),
            point_value: dec!(1),
            contract_size: dec!(1),
            currency: currency.into(),
            min_lot: default_min_lot(),
            max_lot: dec!(100),
            lot_step: default_lot_step(),
            metadata: BTreeMap::new(),
        }
    }

    /// Set the minimum price increment
    pub fn with_tick_size(mut self, tick_size: Decimal) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Set the money value of a one point move for one lot
    pub fn with_point_value(mut self, point_value: Decimal) -> Self {
        self.point_value = point_value;
        self
    }

    /// Set units per lot
    pub fn with_contract_size(mut self, contract_size: Decimal) -> Self {
        self.contract_size = contract_size;
        self
    }

    /// Set min lot, max lot and lot step together
    pub fn with_lot_limits(mut self, min_lot: Decimal, max_lot: Decimal, lot_step: Decimal) -> Self {
        self.min_lot = min_lot;
        self.max_lot = max_lot;
        self.lot_step = lot_step;
        self
    }

    /// Add a free-form annotation
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Unique instrument identifier
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Instrument category
    pub fn asset_class(&self) -> &AssetClass {
        &self.asset_class
    }

    /// Minimum price increment
    pub fn tick_size(&self) -> Decimal {
        self.tick_size
    }

    /// Same value as [`InstrumentSpec::tick_size`], under its FX name
    pub fn pip_size(&self) -> Decimal {
        self.tick_size
    }

    /// Money value of a one point move for one lot
    pub fn point_value(&self) -> Decimal {
        self.point_value
    }

    /// Units represented by one lot
    pub fn contract_size(&self) -> Decimal {
        self.contract_size
    }

    /// Denomination of contract value
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Smallest tradable size
    pub fn min_lot(&self) -> Decimal {
        self.min_lot
    }

    /// Largest tradable size
    pub fn max_lot(&self) -> Decimal {
        self.max_lot
    }

    /// Size increment
    pub fn lot_step(&self) -> Decimal {
        self.lot_step
    }

    /// Read-only view of free-form annotations
    pub fn metadata(&self) -> &BTreeMap<String, toml::Value> {
        &self.metadata
    }

    /// Check this spec against the consistency rules
    ///
    /// Returns the first violation found, in field declaration order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let fail = |field: &'static str, reason: String| {
            Err(CatalogError::Validation {
                symbol: self.symbol.clone(),
                field,
                reason,
            })
        };

        if self.symbol.trim().is_empty() {
            return fail("symbol", "must not be empty".to_string());
        }
        if self.asset_class.as_str().trim().is_empty() {
            return fail("asset_class", "must not be empty".to_string());
        }
        if self.currency.trim().is_empty() {
            return fail("currency", "must not be empty".to_string());
        }

        let positive = [
            ("tick_size", self.tick_size),
            ("point_value", self.point_value),
            ("contract_size", self.contract_size),
            ("min_lot", self.min_lot),
            ("max_lot", self.max_lot),
            ("lot_step", self.lot_step),
        ];
        for (field, value) in positive {
            if value <= Decimal::ZERO {
                return fail(field, format!("must be > 0, got {value}"));
            }
        }

        if self.min_lot > self.max_lot {
            return fail(
                "min_lot",
                format!("must be <= max_lot ({}), got {}", self.max_lot, self.min_lot),
            );
        }
        if self.lot_step > self.max_lot {
            return fail(
                "lot_step",
                format!("must be <= max_lot ({}), got {}", self.max_lot, self.lot_step),
            );
        }
        if !(self.min_lot % self.lot_step).is_zero() {
            return fail(
                "min_lot",
                format!(
                    "must be a multiple of lot_step ({}), got {}",
                    self.lot_step, self.min_lot
                ),
            );
        }

        Ok(())
    }
}
