use matdb_data::PropertyEntry;

use crate::properties_db::{ELEMENT_WEIGHTS, PROPERTIES};

/// Read-only lookup table of physical properties keyed by chemical formula.
///
/// Cheap to copy: holds a reference to a statically-allocated table.
#[derive(Debug, Clone, Copy)]
pub struct PropertyCatalog {
    entries: &'static [(&'static str, PropertyEntry)],
}

impl PropertyCatalog {
    /// Wrap an arbitrary static table.
    pub const fn new(entries: &'static [(&'static str, PropertyEntry)]) -> Self {
        PropertyCatalog { entries }
    }

    /// The embedded table (H2O, CO2, He, O3).
    pub const fn builtin() -> Self {
        Self::new(PROPERTIES)
    }

    /// Properties of `formula`, or [`PropertyEntry::EMPTY`] if it is not listed.
    ///
    /// Formulas are matched exactly (case-sensitive).
    pub fn lookup(&self, formula: &str) -> PropertyEntry {
        self.entries
            .iter()
            .find(|(key, _)| *key == formula)
            .map(|&(_, entry)| entry)
            .unwrap_or(PropertyEntry::EMPTY)
    }

    pub fn contains(&self, formula: &str) -> bool {
        self.entries.iter().any(|(key, _)| *key == formula)
    }

    pub fn formulas(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|&(key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PropertyCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Atomic weight of an element symbol, if it is in the table.
pub fn atomic_weight(symbol: &str) -> Option<f64> {
    ELEMENT_WEIGHTS
        .iter()
        .find(|(sym, _)| *sym == symbol)
        .map(|&(_, weight)| weight)
}

/// Symbols with a known atomic weight.
pub fn known_elements() -> impl Iterator<Item = &'static str> {
    ELEMENT_WEIGHTS.iter().map(|&(sym, _)| sym)
}
