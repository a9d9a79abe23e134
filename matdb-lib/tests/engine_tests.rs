use std::thread;

use approx::assert_relative_eq;
use matdb::{MaterialPropertyEngine, MaterialState, PropertyCatalog, PropertyEntry, RoomTempState};

static WITH_MELTING_POINTS: &[(&str, PropertyEntry)] = &[
    (
        "SiO2",
        PropertyEntry {
            melting_point: Some(1713.0),
            boiling_point: None,
            state_at_room_temp: Some(RoomTempState::Solid),
        },
    ),
    (
        "Hg",
        PropertyEntry {
            melting_point: Some(-38.8),
            boiling_point: Some(356.7),
            state_at_room_temp: Some(RoomTempState::Liquid),
        },
    ),
    (
        "N2",
        PropertyEntry {
            melting_point: Some(-210.0),
            boiling_point: Some(-195.8),
            state_at_room_temp: Some(RoomTempState::Gas),
        },
    ),
    (
        "C",
        PropertyEntry {
            melting_point: Some(3550.0),
            boiling_point: None,
            state_at_room_temp: None,
        },
    ),
];

#[test]
fn test_melting_point_means_crystalline() {
    let engine = MaterialPropertyEngine::new(PropertyCatalog::new(WITH_MELTING_POINTS));
    for formula in engine.catalog().formulas() {
        assert_eq!(
            engine.classify_state(formula),
            MaterialState::Crystalline,
            "{formula}"
        );
    }
}

#[test]
fn test_builtin_states() {
    let engine = MaterialPropertyEngine::builtin();
    assert_eq!(engine.classify_state("H2O"), MaterialState::Liquid);
    assert_eq!(engine.classify_state("CO2"), MaterialState::Gas);
    assert_eq!(engine.classify_state("He"), MaterialState::Gas);
    assert_eq!(engine.classify_state("O3"), MaterialState::Gas);
    assert_eq!(engine.classify_state("NaCl"), MaterialState::Unknown);
    assert_eq!(engine.classify_state(""), MaterialState::Unknown);
}

#[test]
fn test_molar_volumes() {
    let engine = MaterialPropertyEngine::builtin();
    assert_relative_eq!(
        engine.molar_volume(MaterialState::Gas).unwrap(),
        0.0821 * 273.15,
        epsilon = 1e-12
    );
    // close to the textbook STP value
    assert_relative_eq!(
        engine.molar_volume(MaterialState::Gas).unwrap(),
        22.4145,
        max_relative = 1e-3
    );
    assert_eq!(engine.molar_volume(MaterialState::Liquid), Some(24.465));
    assert_eq!(
        engine.molar_volume(MaterialState::Crystalline),
        Some(24.465)
    );
    assert_eq!(engine.molar_volume(MaterialState::Solid), None);
    assert_eq!(engine.molar_volume(MaterialState::Unknown), None);
}

#[test]
fn test_molecular_weight() {
    let engine = MaterialPropertyEngine::builtin();
    assert_relative_eq!(engine.molecular_weight("H2O"), 18.015, epsilon = 1e-9);
    assert_relative_eq!(engine.molecular_weight("CO2"), 44.009, epsilon = 1e-9);
    assert_relative_eq!(engine.molecular_weight("NaCl"), 58.44, epsilon = 1e-9);
    assert_eq!(engine.molecular_weight(""), 0.0);
}

#[test]
fn test_unknown_elements_weigh_nothing() {
    let engine = MaterialPropertyEngine::builtin();
    // Fe is not in the weight table
    assert_relative_eq!(
        engine.molecular_weight("Fe2O3"),
        3.0 * 15.999,
        epsilon = 1e-9
    );
    assert_eq!(engine.molecular_weight("Xx"), 0.0);
}

#[test]
fn test_density_guards() {
    let engine = MaterialPropertyEngine::builtin();
    for formula in ["H2O", "CO2", "He", "Unknown", ""] {
        assert_eq!(engine.density(formula, Some(0.0)), None);
        assert_eq!(engine.density(formula, None), None);
    }
    assert_relative_eq!(
        engine.density("H2O", Some(24.465)).unwrap(),
        18.015 / 24.465,
        epsilon = 1e-12
    );
}

#[test]
fn test_derived_property() {
    let engine = MaterialPropertyEngine::builtin();

    let water = engine.derived_property("H2O").unwrap();
    assert_relative_eq!(water, 18.015 / 24.465, epsilon = 1e-12);

    let co2 = engine.derived_property("CO2").unwrap();
    assert_relative_eq!(co2, 44.009 / (0.0821 * 273.15), epsilon = 1e-12);

    let helium = engine.derived_property("He").unwrap();
    assert_relative_eq!(helium, 4.0026 / (0.0821 * 273.15), epsilon = 1e-12);

    // not in the catalog, so no state and no molar volume
    assert_eq!(engine.derived_property("NaCl"), None);
}

#[test]
fn test_derived_property_is_deterministic() {
    let engine = MaterialPropertyEngine::builtin();
    let first = engine.derived_property("O3");
    for _ in 0..10 {
        assert_eq!(engine.derived_property("O3"), first);
    }
}

#[test]
fn test_profile() {
    let engine = MaterialPropertyEngine::builtin();
    let profile = engine.profile("CO2");
    assert_eq!(profile.formula, "CO2");
    assert_eq!(profile.state, MaterialState::Gas);
    assert_relative_eq!(profile.molecular_weight, 44.009, epsilon = 1e-9);
    assert_eq!(profile.density, engine.derived_property("CO2"));

    let unknown = engine.profile("NaCl");
    assert_eq!(unknown.state, MaterialState::Unknown);
    assert_eq!(unknown.molar_volume, None);
    assert_eq!(unknown.density, None);
}

#[test]
fn test_parse_formula_through_engine() {
    let engine = MaterialPropertyEngine::builtin();
    let parsed = engine.parse_formula("Mg(OH)2");
    let symbols: Vec<&str> = parsed.iter().map(|t| t.symbol.as_str()).collect();
    assert_eq!(symbols, ["Mg", "O", "H"]);
    assert!(engine.parse_formula("!!").is_empty());
}

#[test]
fn test_concurrent_derivation() {
    let mut handles = Vec::new();
    for _ in 0..8 {
        handles.push(thread::spawn(|| {
            let engine = MaterialPropertyEngine::builtin();
            assert_eq!(engine.classify_state("He"), MaterialState::Gas);
            assert!(engine.derived_property("H2O").unwrap() > 0.7);
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
