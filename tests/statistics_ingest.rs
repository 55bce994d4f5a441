use std::fs;

use seller_pricing::infra::statistics::{load_statistics, StatisticsLoadError};
use tempfile::tempdir;

#[test]
fn missing_export_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_statistics(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, StatisticsLoadError::Io(_)));
}

#[test]
fn legacy_array_export_loads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("2026-09-01.json");
    fs::write(
        &path,
        r#"[
            {"id": "a", "costPrice": 3, "remittedAmount": 10},
            {"id": "b", "name": "Spoon", "quantitySold": 4, "currentInventory": 8}
        ]"#,
    )
    .unwrap();

    let snapshot = load_statistics(&path).unwrap();
    assert_eq!(snapshot.store_id, None);
    assert_eq!(snapshot.products.len(), 2);
    assert_eq!(snapshot.products[1].display_name(), "Spoon");
    assert_eq!(snapshot.products[1].financials.current_inventory, 8);
}

#[test]
fn fractional_quantity_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"[{"id": "a", "quantitySold": 2.5}]"#).unwrap();

    assert!(matches!(
        load_statistics(&path),
        Err(StatisticsLoadError::Json(_))
    ));
}
