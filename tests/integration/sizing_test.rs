//! Integration tests for lot sizing against the shipped catalog

use std::sync::Arc;

use lot_sizer::{CatalogError, ClampBound, InstrumentCatalog, SizingEngine, SizingError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn engine() -> SizingEngine {
    let catalog =
        InstrumentCatalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config/instruments.toml"))
            .unwrap();
    SizingEngine::new(Arc::new(catalog))
}

#[test]
fn test_reference_scenarios() {
    let engine = engine();

    let cases = [
        (dec!(100), dec!(50), "EURUSD", dec!(0.2)),
        (dec!(1000), dec!(10), "XAUUSD", dec!(1.0)),
        (dec!(0.10), dec!(100), "XAUUSD", dec!(0.01)),
        (dec!(100000), dec!(1), "EURUSD", dec!(100)),
        (dec!(100), dec!(33), "EURUSD", dec!(0.30)),
        (dec!(0.50), dec!(1000), "US100", dec!(0.1)),
        (dec!(50000), dec!(1), "US100", dec!(50)),
        (dec!(100), dec!(7), "US100", dec!(1.4)),
        (dec!(99), dec!(33), "EURUSD", dec!(0.30)),
    ];

    for (risk, sl, symbol, expected) in cases {
        let lot = engine.calc_lot_from_risk(risk, sl, symbol).unwrap();
        assert_eq!(lot, expected, "risk={risk} sl={sl} symbol={symbol}");
    }
}

#[test]
fn test_clamp_is_reported() {
    let engine = engine();

    let low = engine.size(dec!(0.10), dec!(100), "XAUUSD").unwrap();
    assert_eq!(low.clamp, Some(ClampBound::Min));

    let high = engine.size(dec!(100000), dec!(1), "EURUSD").unwrap();
    assert_eq!(high.clamp, Some(ClampBound::Max));
}

#[test]
fn test_extreme_inputs_stay_within_lot_range() {
    let engine = engine();

    let lot = engine
        .calc_lot_from_risk(dec!(100000000000000000000), dec!(0.0000000001), "EURUSD")
        .unwrap();
    assert_eq!(lot, dec!(100));

    let lot = engine
        .calc_lot_from_risk(dec!(100), Decimal::MAX, "XAUUSD")
        .unwrap();
    assert_eq!(lot, dec!(0.01));
}

#[test]
fn test_invalid_arguments() {
    let engine = engine();

    let err = engine
        .calc_lot_from_risk(dec!(-100), dec!(50), "EURUSD")
        .unwrap_err();
    assert!(matches!(err, SizingError::InvalidArgument { .. }));
    assert!(err.to_string().contains("risk_amount must be > 0"));

    let err = engine
        .calc_lot_from_risk(dec!(100), dec!(0), "EURUSD")
        .unwrap_err();
    assert!(err.to_string().contains("sl_distance_points must be > 0"));
}

#[test]
fn test_invalid_symbol() {
    let engine = engine();

    let err = engine
        .calc_lot_from_risk(dec!(100), dec!(50), "INVALID")
        .unwrap_err();
    assert!(matches!(err, SizingError::Catalog(CatalogError::NotFound(_))));
    assert!(err.to_string().contains("INVALID"));
}

#[test]
fn test_shared_across_threads() {
    let engine = Arc::new(engine());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                engine
                    .calc_lot_from_risk(dec!(100), dec!(33), "EURUSD")
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), dec!(0.30));
    }
}
