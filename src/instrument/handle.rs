//! Atomic catalog replacement for hot reload

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use super::{CatalogError, InstrumentCatalog};

/// Shared pointer to the currently published catalog
///
/// Catalogs are never edited in place. A reload builds and validates a whole
/// new catalog and swaps the pointer, so readers holding the previous `Arc`
/// keep a consistent view until they drop it.
#[derive(Debug)]
pub struct CatalogHandle {
    current: RwLock<Arc<InstrumentCatalog>>,
}

impl CatalogHandle {
    /// Publish `catalog` as the initial snapshot
    pub fn new(catalog: InstrumentCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Snapshot of the published catalog
    pub fn current(&self) -> Arc<InstrumentCatalog> {
        // The guarded value is a plain pointer, so a poisoned lock still holds a valid one
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Publish a new catalog, returning the one it replaced
    pub fn replace(&self, catalog: InstrumentCatalog) -> Arc<InstrumentCatalog> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(catalog))
    }

    /// Load and validate a catalog from `path`, publishing it on success
    ///
    /// On any error the previously published catalog stays in place.
    pub fn reload(&self, path: impl AsRef<Path>) -> Result<usize, CatalogError> {
        let path = path.as_ref();
        let catalog = InstrumentCatalog::load(path)
            .and_then(|catalog| catalog.validate().map(|()| catalog))
            .inspect_err(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Instrument catalog reload rejected");
            })?;

        let count = catalog.len();
        self.replace(catalog);
        tracing::info!(path = %path.display(), instruments = count, "Instrument catalog reloaded");
        Ok(count)
    }
}

impl From<InstrumentCatalog> for CatalogHandle {
    fn from(catalog: InstrumentCatalog) -> Self {
        Self::new(catalog)
    }
}
