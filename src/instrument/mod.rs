//! Instrument catalog module
//!
//! Immutable per-instrument trading constraints, their TOML loader and the
//! hot-reload handle.

mod catalog;
mod handle;
mod loader;
mod spec;
mod types;

pub use catalog::InstrumentCatalog;
pub use handle::CatalogHandle;
pub use spec::{AssetClass, InstrumentSpec};
pub use types::CatalogError;
