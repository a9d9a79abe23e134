use matdb_data::{PropertyEntry, RoomTempState};

/// Embedded physical properties keyed by formula.
///
/// Each entry: (formula, properties)
pub(crate) const PROPERTIES: &[(&str, PropertyEntry)] = &[
    (
        "H2O",
        PropertyEntry {
            melting_point: None,
            boiling_point: Some(100.0),
            state_at_room_temp: Some(RoomTempState::Liquid),
        },
    ),
    (
        "CO2",
        PropertyEntry {
            melting_point: None,
            boiling_point: None,
            state_at_room_temp: Some(RoomTempState::Gas),
        },
    ),
    (
        "He",
        PropertyEntry {
            melting_point: None,
            boiling_point: None,
            state_at_room_temp: Some(RoomTempState::Gas),
        },
    ),
    (
        "O3",
        PropertyEntry {
            melting_point: None,
            boiling_point: None,
            state_at_room_temp: Some(RoomTempState::Gas),
        },
    ),
];

/// Standard atomic weights (g/mol) for the light elements.
pub(crate) const ELEMENT_WEIGHTS: &[(&str, f64)] = &[
    ("H", 1.008),
    ("He", 4.0026),
    ("Li", 6.94),
    ("Be", 9.0122),
    ("B", 10.81),
    ("C", 12.011),
    ("N", 14.007),
    ("O", 15.999),
    ("F", 18.998),
    ("Ne", 20.180),
    ("Na", 22.990),
    ("Mg", 24.305),
    ("Al", 26.982),
    ("Si", 28.085),
    ("P", 30.974),
    ("S", 32.06),
    ("Cl", 35.45),
    ("K", 39.098),
    ("Ar", 39.95),
];
