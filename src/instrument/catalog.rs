//! Symbol-keyed catalog of instrument specs

use std::collections::HashMap;

use super::{CatalogError, InstrumentSpec};

/// Immutable collection of instrument specs
///
/// Specs are kept in configuration order. There is no `&mut self` API, so a
/// catalog shared behind an `Arc` can be read from any thread without locks.
#[derive(Debug, Clone, Default)]
pub struct InstrumentCatalog {
    specs: Vec<InstrumentSpec>,
    index: HashMap<String, usize>,
}

impl InstrumentCatalog {
    /// Build a catalog from specs, keeping their order
    ///
    /// Fails on a repeated symbol. Numeric ranges are not checked here.
    pub fn from_specs(specs: impl IntoIterator<Item = InstrumentSpec>) -> Result<Self, CatalogError> {
        let specs: Vec<InstrumentSpec> = specs.into_iter().collect();
        let mut index = HashMap::with_capacity(specs.len());

        for (position, spec) in specs.iter().enumerate() {
            if index.insert(spec.symbol().to_string(), position).is_some() {
                return Err(CatalogError::DuplicateSymbol(spec.symbol().to_string()));
            }
        }

        Ok(Self { specs, index })
    }

    /// Exact-match lookup
    pub fn get(&self, symbol: &str) -> Result<&InstrumentSpec, CatalogError> {
        self.index
            .get(symbol)
            .map(|&position| &self.specs[position])
            .ok_or_else(|| CatalogError::NotFound(symbol.to_string()))
    }

    /// Whether `symbol` is in the catalog
    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// All symbols in configuration order
    pub fn list_symbols(&self) -> Vec<&str> {
        self.specs.iter().map(InstrumentSpec::symbol).collect()
    }

    /// Specs in configuration order
    pub fn iter(&self) -> impl Iterator<Item = &InstrumentSpec> {
        self.specs.iter()
    }

    /// Number of instruments
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the catalog holds no instruments
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Validate every spec, stopping at the first violation
    pub fn validate(&self) -> Result<(), CatalogError> {
        for spec in &self.specs {
            spec.validate()?;
        }
        tracing::debug!(instruments = self.specs.len(), "Instrument catalog validated");
        Ok(())
    }
}
