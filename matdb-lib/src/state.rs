use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{CONDENSED_MOLAR_VOLUME, GAS_CONSTANT, STP_PRESSURE, STP_TEMPERATURE};
use crate::error::MatDbError;

/// Physical state a material is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialState {
    Crystalline,
    Solid,
    Liquid,
    Gas,
    Unknown,
}

impl MaterialState {
    pub const ALL: [MaterialState; 5] = [
        MaterialState::Crystalline,
        MaterialState::Solid,
        MaterialState::Liquid,
        MaterialState::Gas,
        MaterialState::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Crystalline => "crystalline",
            Self::Solid => "solid",
            Self::Liquid => "liquid",
            Self::Gas => "gas",
            Self::Unknown => "unknown",
        }
    }

    /// Molar volume (L/mol) assumed for this state.
    ///
    /// Gases use the ideal gas law at STP; liquids and crystalline solids a
    /// fixed approximation. Plain solids and unknown states have none.
    pub fn molar_volume(self) -> Option<f64> {
        match self {
            Self::Gas => Some((GAS_CONSTANT * STP_TEMPERATURE) / STP_PRESSURE),
            Self::Liquid | Self::Crystalline => Some(CONDENSED_MOLAR_VOLUME),
            Self::Solid | Self::Unknown => None,
        }
    }
}

impl fmt::Display for MaterialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialState {
    type Err = MatDbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MatDbError::UnknownState(s.to_string()))
    }
}
