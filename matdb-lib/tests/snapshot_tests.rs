#![cfg(feature = "snapshot")]

use matdb::matdb_data::{MaterialRecord, StoreSnapshot};
use matdb::{MatDbError, MaterialStore, MemoryStore, NewMaterial};

fn encode(snapshot: &StoreSnapshot) -> Vec<u8> {
    postcard::to_allocvec(snapshot).unwrap()
}

fn record(id: u64, formula: &str, density: f64) -> MaterialRecord {
    MaterialRecord {
        id,
        formula: formula.to_string(),
        density,
    }
}

fn assert_rejected(next_id: u64, records: Vec<MaterialRecord>) {
    let bytes = encode(&StoreSnapshot { next_id, records });
    assert!(matches!(
        MemoryStore::from_snapshot(&bytes),
        Err(MatDbError::Snapshot(_))
    ));
}

#[test]
fn test_snapshot_round_trip_keeps_ids() {
    let mut store = MemoryStore::new();
    store.create(NewMaterial::new("H2O", 1.0)).unwrap();
    store.create(NewMaterial::new("CO2", 1.87)).unwrap();

    let bytes = store.to_snapshot().unwrap();
    let mut restored = MemoryStore::from_snapshot(&bytes).unwrap();

    assert_eq!(restored.list(), store.list());
    // id allocation continues where it left off
    assert_eq!(restored.create(NewMaterial::new("He", 0.18)).unwrap(), 3);
}

#[test]
fn test_snapshot_rejects_garbage() {
    let err = MemoryStore::from_snapshot(&[0xff, 0xff, 0xff]).unwrap_err();
    assert!(matches!(err, MatDbError::Snapshot(_)));
    assert_eq!(err.status_code(), 500);
}

#[test]
fn test_snapshot_rejects_duplicate_formula() {
    assert_rejected(3, vec![record(1, "H2O", 1.0), record(2, "H2O", 0.9)]);
}

#[test]
fn test_snapshot_rejects_duplicate_id() {
    assert_rejected(3, vec![record(1, "H2O", 1.0), record(1, "CO2", 1.87)]);
}

#[test]
fn test_snapshot_rejects_stale_next_id() {
    assert_rejected(2, vec![record(5, "He", 0.18)]);
}

#[test]
fn test_snapshot_rejects_zero_ids() {
    assert_rejected(0, vec![]);
    assert_rejected(2, vec![record(0, "He", 0.18)]);
}

#[test]
fn test_snapshot_rejects_invalid_records() {
    assert_rejected(2, vec![record(1, "", 1.0)]);
    assert_rejected(2, vec![record(1, "H2O", f64::NAN)]);
    assert_rejected(2, vec![record(1, &"C".repeat(256), 1.0)]);
}

#[test]
fn test_snapshot_at_id_limit_refuses_create() {
    let bytes = encode(&StoreSnapshot {
        next_id: u64::MAX,
        records: vec![record(1, "H2O", 1.0)],
    });
    let mut store = MemoryStore::from_snapshot(&bytes).unwrap();

    let err = store.create(NewMaterial::new("He", 0.18)).unwrap_err();
    assert!(matches!(err, MatDbError::IdsExhausted));
    assert_eq!(store.len(), 1);
}
