#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Identifier assigned to a material by the record store.
pub type MaterialId = u64;

/// A stored material: chemical formula plus measured density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub id: MaterialId,
    pub formula: String,
    pub density: f64,
}

/// Payload of a create request, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMaterial {
    pub formula: String,
    pub density: f64,
}

impl NewMaterial {
    pub fn new(formula: impl Into<String>, density: f64) -> Self {
        NewMaterial {
            formula: formula.into(),
            density,
        }
    }

    pub fn into_record(self, id: MaterialId) -> MaterialRecord {
        MaterialRecord {
            id,
            formula: self.formula,
            density: self.density,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomTempState {
    Solid,
    Liquid,
    Gas,
}

impl RoomTempState {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomTempState::Solid => "solid",
            RoomTempState::Liquid => "liquid",
            RoomTempState::Gas => "gas",
        }
    }
}

/// Known physical properties of a material. Any field may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyEntry {
    pub melting_point: Option<f64>,
    pub boiling_point: Option<f64>,
    pub state_at_room_temp: Option<RoomTempState>,
}

impl PropertyEntry {
    pub const EMPTY: PropertyEntry = PropertyEntry {
        melting_point: None,
        boiling_point: None,
        state_at_room_temp: None,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

/// Serialized image of an in-memory record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub next_id: MaterialId,
    pub records: Vec<MaterialRecord>,
}
