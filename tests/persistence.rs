use std::fs;

use tempfile::tempdir;

use techstore::core::inventory::Inventory;
use techstore::core::persist::{self, LoadOutcome};

fn populated() -> Inventory {
    let mut inventory = Inventory::new();
    inventory.add("Mouse", 10.50, 5).expect("add mouse");
    inventory.add("Keyboard", 25.00, 2).expect("add keyboard");
    inventory.add("USB Cable", 3.99, 40).expect("add cable");
    inventory
}

#[test]
fn round_trip_preserves_names_prices_quantities_and_order() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("inventory.json");

    let original = populated();
    persist::save(&path, &original).expect("save");

    match persist::load(&path) {
        LoadOutcome::Loaded(loaded) => assert_eq!(loaded, original),
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[test]
fn round_trip_of_empty_inventory() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("inventory.json");

    persist::save(&path, &Inventory::new()).expect("save");

    match persist::load(&path) {
        LoadOutcome::Loaded(loaded) => assert!(loaded.is_empty()),
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[test]
fn saved_file_is_human_readable_and_stable() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("inventory.json");

    let inventory = populated();
    persist::save(&path, &inventory).expect("save");
    let first = fs::read_to_string(&path).expect("read");
    assert!(first.contains("\"name\": \"Mouse\""));
    assert!(first.contains('\n'), "expected pretty-printed output");

    persist::save(&path, &inventory).expect("save again");
    let second = fs::read_to_string(&path).expect("read again");
    assert_eq!(first, second, "formatting must be stable across saves");
}

#[test]
fn loading_a_missing_path_yields_missing_outcome() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("does-not-exist.json");

    let outcome = persist::load(&path);
    assert_eq!(outcome, LoadOutcome::Missing);
    assert!(outcome.into_inventory().is_empty());
}

#[test]
fn loading_corrupt_content_yields_discarded_outcome() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("inventory.json");

    for corrupt in [
        "not json at all",
        "{\"wrong\": \"shape\"}",
        "[{\"name\": \"Mouse\"}]",
        "[{\"name\": \"Mouse\", \"price\": 1.0, \"quantity\": -3}]",
    ] {
        fs::write(&path, corrupt).expect("write corrupt");
        let outcome = persist::load(&path);
        assert_eq!(outcome, LoadOutcome::Discarded, "content: {corrupt}");
        assert!(outcome.into_inventory().is_empty());
    }
}

#[test]
fn loading_inconsistent_records_yields_discarded_outcome() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("inventory.json");

    // Parses as the right shape but breaks the store invariants.
    let duplicate_names = r#"[
        {"name": "Mouse", "price": 10.5, "quantity": 5},
        {"name": "MOUSE", "price": 9.0, "quantity": 1}
    ]"#;
    fs::write(&path, duplicate_names).expect("write");
    assert_eq!(persist::load(&path), LoadOutcome::Discarded);

    let negative_price = r#"[{"name": "Mouse", "price": -10.5, "quantity": 5}]"#;
    fs::write(&path, negative_price).expect("write");
    assert_eq!(persist::load(&path), LoadOutcome::Discarded);
}

#[test]
fn save_failure_reports_error_without_panicking() {
    let dir = tempdir().expect("tempdir");
    // A directory at the target path makes the write fail.
    let path = dir.path().join("inventory.json");
    fs::create_dir(&path).expect("create blocking dir");

    let err = persist::save(&path, &populated()).expect_err("save must fail");
    assert!(!err.to_string().is_empty());
}
