use std::collections::BTreeMap;

use matdb_data::{MaterialId, MaterialRecord, NewMaterial};

use crate::constants::MAX_FORMULA_LEN;
use crate::error::{MatDbError, Result};

/// Record store holding materials.
pub trait MaterialStore {
    /// Insert a material and return its new id.
    fn create(&mut self, material: NewMaterial) -> Result<MaterialId>;

    fn get(&self, id: MaterialId) -> Result<MaterialRecord>;

    /// All records, in id order.
    fn list(&self) -> Vec<MaterialRecord>;
}

/// Check a create payload: formula non-empty and at most 255 characters,
/// density finite.
pub fn validate_new_material(material: &NewMaterial) -> Result<()> {
    if material.formula.is_empty() {
        return Err(MatDbError::InvalidMaterial(
            "formula must not be empty".to_string(),
        ));
    }
    let len = material.formula.chars().count();
    if len > MAX_FORMULA_LEN {
        return Err(MatDbError::InvalidMaterial(format!(
            "formula has {len} characters, at most {MAX_FORMULA_LEN} allowed"
        )));
    }
    if !material.density.is_finite() {
        return Err(MatDbError::InvalidMaterial(format!(
            "density must be a finite number, got {}",
            material.density
        )));
    }
    Ok(())
}

/// In-memory store. Ids start at 1 and are never reused; formulas are unique
/// and every record passes [`validate_new_material`].
#[derive(Debug, Clone)]
pub struct MemoryStore {
    records: BTreeMap<MaterialId, MaterialRecord>,
    next_id: MaterialId,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn contains_formula(&self, formula: &str) -> bool {
        self.records.values().any(|r| r.formula == formula)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialStore for MemoryStore {
    fn create(&mut self, material: NewMaterial) -> Result<MaterialId> {
        validate_new_material(&material)?;
        if self.contains_formula(&material.formula) {
            return Err(MatDbError::DuplicateFormula(material.formula));
        }
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(MatDbError::IdsExhausted)?;
        self.records.insert(id, material.into_record(id));
        Ok(id)
    }

    fn get(&self, id: MaterialId) -> Result<MaterialRecord> {
        self.records
            .get(&id)
            .cloned()
            .ok_or(MatDbError::NotFound(id))
    }

    fn list(&self) -> Vec<MaterialRecord> {
        self.records.values().cloned().collect()
    }
}

#[cfg(feature = "snapshot")]
mod snapshot {
    use std::collections::{BTreeMap, HashSet};

    use matdb_data::{NewMaterial, StoreSnapshot};

    use super::{MemoryStore, validate_new_material};
    use crate::error::{MatDbError, Result};

    impl MemoryStore {
        /// Encode the store with postcard.
        pub fn to_snapshot(&self) -> Result<Vec<u8>> {
            let snapshot = StoreSnapshot {
                next_id: self.next_id,
                records: self.records.values().cloned().collect(),
            };
            postcard::to_allocvec(&snapshot).map_err(|e| MatDbError::Snapshot(e.to_string()))
        }

        /// Rebuild a store from [`MemoryStore::to_snapshot`] output.
        pub fn from_snapshot(bytes: &[u8]) -> Result<Self> {
            let snapshot: StoreSnapshot =
                postcard::from_bytes(bytes).map_err(|e| MatDbError::Snapshot(e.to_string()))?;

            if snapshot.next_id == 0 {
                return Err(MatDbError::Snapshot(
                    "next id must be at least 1".to_string(),
                ));
            }

            let mut records = BTreeMap::new();
            let mut formulas = HashSet::new();
            for record in snapshot.records {
                if record.id == 0 {
                    return Err(MatDbError::Snapshot("record id 0 is reserved".to_string()));
                }
                if record.id >= snapshot.next_id {
                    return Err(MatDbError::Snapshot(format!(
                        "record id {} is not below next id {}",
                        record.id, snapshot.next_id
                    )));
                }
                if !formulas.insert(record.formula.clone()) {
                    return Err(MatDbError::Snapshot(format!(
                        "duplicate formula '{}'",
                        record.formula
                    )));
                }
                let id = record.id;
                let material = NewMaterial::new(record.formula.clone(), record.density);
                validate_new_material(&material)
                    .map_err(|e| MatDbError::Snapshot(format!("record {id}: {e}")))?;
                if records.insert(id, record).is_some() {
                    return Err(MatDbError::Snapshot(format!("duplicate id {id}")));
                }
            }

            Ok(MemoryStore {
                records,
                next_id: snapshot.next_id,
            })
        }
    }
}
