//! Size command implementation

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

use crate::risk::{LotSizing, SizingEngine};

/// Output format for sizing results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug)]
pub struct SizeArgs {
    /// Instrument symbol
    #[arg(short, long)]
    pub symbol: String,

    /// Money at risk if the stop is hit
    #[arg(short, long)]
    pub risk: Decimal,

    /// Stop-loss distance in points
    #[arg(long)]
    pub sl: Decimal,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl SizeArgs {
    pub fn execute(&self, engine: &SizingEngine) -> anyhow::Result<()> {
        let sizing = engine.size(self.risk, self.sl, &self.symbol)?;
        println!("{}", render(&sizing, self.format)?);
        Ok(())
    }
}

fn render(sizing: &LotSizing, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(sizing)?),
        OutputFormat::Table => {
            let clamp = match sizing.clamp {
                Some(bound) => bound.to_string(),
                None => "-".to_string(),
            };
            Ok(format!(
                "Symbol:        {}\n\
                 Risk amount:   {}\n\
                 Stop distance: {} pts\n\
                 Risk per lot:  {}\n\
                 Raw lot:       {}\n\
                 Quantized lot: {}\n\
                 Clamp:         {}\n\
                 Lot:           {}\n\
                 Risk at lot:   {}",
                sizing.symbol,
                sizing.risk_amount,
                sizing.sl_distance_points,
                sizing.risk_per_lot,
                sizing.raw_lot.round_dp(8),
                sizing.quantized_lot,
                clamp,
                sizing.lot,
                sizing.risk_at_lot(),
            ))
        }
    }
}
