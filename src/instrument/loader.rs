//! TOML instrument file loading
//!
//! The file is a list of `[[instrument]]` tables, so configuration order is
//! preserved:
//!
//! ```toml
//! [[instrument]]
//! symbol = "EURUSD"
//! asset_class = "FX"
//! tick_size = 0.00001
//! point_value = 10.0
//! contract_size = 100000
//! currency = "USD"
//! min_lot = 0.01
//! max_lot = 100.0
//! lot_step = 0.01
//!
//! [instrument.metadata]
//! description = "Euro / US Dollar"
//! ```

use std::path::Path;

use serde::Deserialize;

use super::{CatalogError, InstrumentCatalog, InstrumentSpec};

#[derive(Debug, Deserialize)]
struct InstrumentFile {
    #[serde(default, rename = "instrument")]
    instruments: Vec<InstrumentSpec>,
}

impl InstrumentCatalog {
    /// Load a catalog from a TOML instrument file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            instruments = catalog.len(),
            "Loaded instrument catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: InstrumentFile = toml::from_str(content)?;
        Self::from_specs(file.instruments)
    }
}
