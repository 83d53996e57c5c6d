//! lot-sizer: Risk-based lot sizing for an algorithmic trading system
//!
//! This library provides:
//! - An immutable, symbol-keyed catalog of instrument trading constraints
//! - TOML loading, validation and atomic hot reload of that catalog
//! - Lot sizing from a risk budget and stop-loss distance, floored to the
//!   instrument's lot step and clamped to its min/max lot
//! - Structured logging and a small CLI host

pub mod cli;
pub mod config;
pub mod instrument;
pub mod risk;
pub mod telemetry;

pub use instrument::{AssetClass, CatalogError, CatalogHandle, InstrumentCatalog, InstrumentSpec};
pub use risk::{ClampBound, LotSizing, SizingEngine, SizingError};
