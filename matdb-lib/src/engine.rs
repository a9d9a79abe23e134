use matdb_data::RoomTempState;
use serde::Serialize;

use crate::catalog::{PropertyCatalog, atomic_weight};
use crate::chemparser::{ParsedFormula, parse_formula};
use crate::state::MaterialState;

/// Every derived quantity for one formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialProfile {
    pub formula: String,
    pub state: MaterialState,
    pub molar_volume: Option<f64>,
    pub molecular_weight: f64,
    pub density: Option<f64>,
}

/// Derives physical properties of a material from its formula.
///
/// Pure and deterministic: every result depends only on the formula, the
/// property catalog and the element weight table.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialPropertyEngine {
    catalog: PropertyCatalog,
}

impl MaterialPropertyEngine {
    pub const fn new(catalog: PropertyCatalog) -> Self {
        MaterialPropertyEngine { catalog }
    }

    pub const fn builtin() -> Self {
        Self::new(PropertyCatalog::builtin())
    }

    pub fn catalog(&self) -> PropertyCatalog {
        self.catalog
    }

    /// Classify the physical state of `formula` from its catalog entry.
    ///
    /// Rules are checked in priority order and the first match wins, so an
    /// entry that is solid at room temperature but has a melting point is
    /// crystalline.
    pub fn classify_state(&self, formula: &str) -> MaterialState {
        let entry = self.catalog.lookup(formula);

        if entry.melting_point.is_some() {
            MaterialState::Crystalline
        } else if entry.state_at_room_temp == Some(RoomTempState::Solid) {
            MaterialState::Solid
        } else if entry.boiling_point.is_some() {
            MaterialState::Liquid
        } else if entry.state_at_room_temp == Some(RoomTempState::Gas) {
            MaterialState::Gas
        } else {
            MaterialState::Unknown
        }
    }

    pub fn molar_volume(&self, state: MaterialState) -> Option<f64> {
        state.molar_volume()
    }

    pub fn parse_formula(&self, formula: &str) -> ParsedFormula {
        parse_formula(formula)
    }

    /// Molecular weight (g/mol). Elements missing from the weight table count
    /// as zero.
    pub fn molecular_weight(&self, formula: &str) -> f64 {
        parse_formula(formula)
            .iter()
            .map(|term| term.count as f64 * atomic_weight(&term.symbol).unwrap_or(0.0))
            .sum()
    }

    /// Density (g/L) as molecular weight over molar volume.
    ///
    /// Returns `None` when the molar volume is missing or zero.
    pub fn density(&self, formula: &str, molar_volume: Option<f64>) -> Option<f64> {
        let molar_volume = molar_volume.filter(|&v| v != 0.0)?;
        Some(self.molecular_weight(formula) / molar_volume)
    }

    /// Density estimated from the classified state of `formula`.
    pub fn derived_property(&self, formula: &str) -> Option<f64> {
        let state = self.classify_state(formula);
        self.density(formula, self.molar_volume(state))
    }

    pub fn profile(&self, formula: &str) -> MaterialProfile {
        let state = self.classify_state(formula);
        let molar_volume = self.molar_volume(state);
        MaterialProfile {
            formula: formula.to_string(),
            state,
            molar_volume,
            molecular_weight: self.molecular_weight(formula),
            density: self.density(formula, molar_volume),
        }
    }
}
