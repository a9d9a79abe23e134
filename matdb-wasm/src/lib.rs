//! WASM bindings for matdb.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p matdb-wasm
//! ```

use js_sys::Array;
use wasm_bindgen::prelude::*;

use matdb::{
    MaterialPropertyEngine, MaterialRecord, MaterialState, PropertyCatalog, SearchCriteria,
    SearchFilterBuilder, parse_element_list,
};

fn engine() -> MaterialPropertyEngine {
    MaterialPropertyEngine::builtin()
}

fn to_js(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn criteria(
    min_density: Option<String>,
    max_density: Option<String>,
    include_elements: &str,
    exclude_elements: &str,
) -> Result<SearchCriteria, JsError> {
    SearchFilterBuilder::new()
        .min_density(min_density.as_deref())
        .max_density(max_density.as_deref())
        .include(parse_element_list(include_elements))
        .exclude(parse_element_list(exclude_elements))
        .build()
        .map_err(to_js)
}

// ── Catalog lookups ──

#[wasm_bindgen]
pub fn melting_point(formula: &str) -> Option<f64> {
    PropertyCatalog::builtin().lookup(formula).melting_point
}

#[wasm_bindgen]
pub fn boiling_point(formula: &str) -> Option<f64> {
    PropertyCatalog::builtin().lookup(formula).boiling_point
}

/// Returns "solid", "liquid", "gas", or undefined when unlisted.
#[wasm_bindgen]
pub fn state_at_room_temp(formula: &str) -> Option<String> {
    PropertyCatalog::builtin()
        .lookup(formula)
        .state_at_room_temp
        .map(|state| state.as_str().to_string())
}

// ── Derivation ──

/// Returns one of "crystalline", "solid", "liquid", "gas", "unknown".
#[wasm_bindgen]
pub fn classify_state(formula: &str) -> String {
    engine().classify_state(formula).to_string()
}

#[wasm_bindgen]
pub fn molar_volume(state: &str) -> Result<Option<f64>, JsError> {
    let state: MaterialState = state.parse().map_err(to_js)?;
    Ok(state.molar_volume())
}

/// Returns an array of `[symbol, count]` pairs.
#[wasm_bindgen]
pub fn parse_formula(formula: &str) -> Array {
    engine()
        .parse_formula(formula)
        .iter()
        .map(|term| {
            let pair = Array::new();
            pair.push(&JsValue::from_str(&term.symbol));
            pair.push(&JsValue::from_f64(term.count as f64));
            JsValue::from(pair)
        })
        .collect()
}

#[wasm_bindgen]
pub fn molecular_weight(formula: &str) -> f64 {
    engine().molecular_weight(formula)
}

#[wasm_bindgen]
pub fn density(formula: &str, molar_volume: Option<f64>) -> Option<f64> {
    engine().density(formula, molar_volume)
}

#[wasm_bindgen]
pub fn derived_property(formula: &str) -> Option<f64> {
    engine().derived_property(formula)
}

// ── Search ──

/// Checks search parameters; element lists use the `[H,O]` form.
#[wasm_bindgen]
pub fn validate_search(
    min_density: Option<String>,
    max_density: Option<String>,
    include_elements: &str,
    exclude_elements: &str,
) -> Result<(), JsError> {
    criteria(min_density, max_density, include_elements, exclude_elements).map(|_| ())
}

#[wasm_bindgen]
pub fn matches_search(
    min_density: Option<String>,
    max_density: Option<String>,
    include_elements: &str,
    exclude_elements: &str,
    formula: &str,
    density: f64,
) -> Result<bool, JsError> {
    let criteria = criteria(min_density, max_density, include_elements, exclude_elements)?;
    let record = MaterialRecord {
        id: 0,
        formula: formula.to_string(),
        density,
    };
    Ok(criteria.matches(&record))
}
