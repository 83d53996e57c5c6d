//! Integration tests for the instrument catalog

use lot_sizer::{CatalogError, InstrumentCatalog};
use rust_decimal_macros::dec;

fn load() -> InstrumentCatalog {
    InstrumentCatalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config/instruments.toml")).unwrap()
}

#[test]
fn test_load_and_validate_shipped_catalog() {
    let catalog = load();
    assert!(catalog.len() >= 3);
    assert!(catalog.validate().is_ok());
}

#[test]
fn test_list_symbols_in_file_order() {
    let catalog = load();
    assert_eq!(catalog.list_symbols(), vec!["XAUUSD", "EURUSD", "US100"]);
}

#[test]
fn test_spec_fields_match_file() {
    let catalog = load();

    let xau = catalog.get("XAUUSD").unwrap();
    assert_eq!(xau.symbol(), "XAUUSD");
    assert_eq!(xau.tick_size(), dec!(0.01));
    assert_eq!(xau.point_value(), dec!(100));
    assert_eq!(xau.contract_size(), dec!(100));
    assert_eq!(xau.min_lot(), dec!(0.01));
    assert_eq!(xau.max_lot(), dec!(100));
    assert_eq!(xau.lot_step(), dec!(0.01));

    let eur = catalog.get("EURUSD").unwrap();
    assert_eq!(eur.tick_size(), dec!(0.00001));
    assert_eq!(eur.point_value(), dec!(10));
    assert_eq!(eur.min_lot(), dec!(0.01));
    assert_eq!(eur.max_lot(), dec!(100));

    let us100 = catalog.get("US100").unwrap();
    assert_eq!(us100.min_lot(), dec!(0.1));
    assert_eq!(us100.max_lot(), dec!(50));
    assert_eq!(us100.lot_step(), dec!(0.1));
}

#[test]
fn test_every_spec_positive() {
    let catalog = load();
    for spec in catalog.iter() {
        assert!(spec.tick_size() > dec!(0));
        assert!(spec.point_value() > dec!(0));
        assert!(spec.contract_size() > dec!(0));
        assert!(spec.min_lot() > dec!(0));
        assert!(spec.max_lot() >= spec.min_lot());
        assert!(spec.lot_step() > dec!(0));
    }
}

#[test]
fn test_get_nonexistent_symbol() {
    let catalog = load();
    let err = catalog.get("INVALID").unwrap_err();

    assert!(matches!(err, CatalogError::NotFound(_)));
    assert_eq!(err.symbol(), Some("INVALID"));
    assert!(err.to_string().contains("INVALID"));
    assert!(err.to_string().to_lowercase().contains("not found"));
}

#[test]
fn test_metadata_loaded() {
    let catalog = load();
    let eur = catalog.get("EURUSD").unwrap();
    assert_eq!(
        eur.metadata().get("digits").and_then(|v| v.as_integer()),
        Some(5)
    );
}
