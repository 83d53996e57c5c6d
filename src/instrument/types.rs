//! Instrument catalog types

use std::path::PathBuf;

use thiserror::Error;

/// Instrument catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Lookup of a symbol the catalog does not hold
    #[error("Symbol '{0}' not found in instrument catalog")]
    NotFound(String),
    /// A stored spec breaks a consistency rule
    #[error("Invalid instrument spec for '{symbol}': {field} {reason}")]
    Validation {
        symbol: String,
        field: &'static str,
        reason: String,
    },
    /// Same symbol configured twice
    #[error("Duplicate symbol '{0}' in instrument catalog")]
    DuplicateSymbol(String),
    /// Instrument file could not be read
    #[error("Failed to read instrument file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Instrument file is not valid TOML for the expected layout
    #[error("Failed to parse instrument file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl CatalogError {
    /// Symbol the error refers to, if any
    pub fn symbol(&self) -> Option<&str> {
        match self {
            CatalogError::NotFound(symbol) | CatalogError::DuplicateSymbol(symbol) => {
                Some(symbol.as_str())
            }
            CatalogError::Validation { symbol, .. } => Some(symbol.as_str()),
            CatalogError::Io { .. } | CatalogError::Parse(_) => None,
        }
    }
}
