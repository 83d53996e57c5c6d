//! Show command implementation

use clap::Args;

use crate::instrument::InstrumentCatalog;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Instrument symbol
    pub symbol: String,
}

impl ShowArgs {
    pub fn execute(&self, catalog: &InstrumentCatalog) -> anyhow::Result<()> {
        let spec = catalog.get(&self.symbol)?;
        println!("{}", serde_json::to_string_pretty(spec)?);
        Ok(())
    }
}
