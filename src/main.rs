use std::sync::Arc;

use clap::Parser;
use lot_sizer::cli::{print_symbols, run_validate, Cli, Commands};
use lot_sizer::config::Config;
use lot_sizer::{InstrumentCatalog, SizingEngine};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            toml::from_str(include_str!("../config.toml.example"))?
        }
    };

    // Initialize telemetry
    lot_sizer::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Size(args) => {
            let engine = SizingEngine::new(load_catalog(&config)?);
            args.execute(&engine)?;
        }
        Commands::Symbols => print_symbols(&*load_catalog(&config)?),
        Commands::Show(args) => args.execute(&*load_catalog(&config)?)?,
        Commands::Validate => {
            // Validation errors are the report here, so skip validate_on_load
            let catalog = InstrumentCatalog::load(&config.catalog.instruments_path)?;
            run_validate(&catalog)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn load_catalog(config: &Config) -> anyhow::Result<Arc<InstrumentCatalog>> {
    let catalog = InstrumentCatalog::load(&config.catalog.instruments_path)?;
    if config.catalog.validate_on_load {
        catalog.validate()?;
    }
    Ok(Arc::new(catalog))
}
