//! End-to-end integration tests

use std::io::Write;
use std::sync::Arc;

use lot_sizer::config::Config;
use lot_sizer::{CatalogHandle, InstrumentCatalog, SizingEngine};
use rust_decimal_macros::dec;

#[test]
fn test_config_points_at_loadable_catalog() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(&config.catalog.instruments_path);

    let catalog = InstrumentCatalog::load(path).unwrap();
    assert!(catalog.validate().is_ok());
}

#[test]
fn test_hot_reload_changes_sizing() {
    let original = concat!(env!("CARGO_MANIFEST_DIR"), "/config/instruments.toml");
    let handle = Arc::new(CatalogHandle::new(InstrumentCatalog::load(original).unwrap()));
    let engine = SizingEngine::from_handle(Arc::clone(&handle));

    assert_eq!(
        engine.calc_lot_from_risk(dec!(100), dec!(50), "EURUSD").unwrap(),
        dec!(0.2)
    );

    // Broker switches EURUSD to a whole-lot step
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"
        [[instrument]]
        symbol = "EURUSD"
        asset_class = "FX"
        tick_size = 0.00001
        point_value = 10.0
        contract_size = 100000
        currency = "USD"
        min_lot = 1
        max_lot = 10
        lot_step = 1
    "#,
    )
    .unwrap();

    assert_eq!(handle.reload(file.path()).unwrap(), 1);
    assert_eq!(
        engine.calc_lot_from_risk(dec!(100), dec!(50), "EURUSD").unwrap(),
        dec!(1)
    );
    assert!(engine
        .calc_lot_from_risk(dec!(100), dec!(50), "XAUUSD")
        .is_err());
}
