use thiserror::Error;

use matdb_data::MaterialId;

/// Rejected search parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid {field} value '{value}': please provide a valid numeric value")]
    InvalidNumericInput { field: &'static str, value: String },
    #[error("minimum density ({min}) must be less than maximum density ({max})")]
    InvalidRange { min: f64, max: f64 },
    #[error("elements cannot be both included and excluded: {}", .0.join(", "))]
    ConflictingElementSets(Vec<String>),
}

#[derive(Debug, Error)]
pub enum MatDbError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("invalid material: {0}")]
    InvalidMaterial(String),
    #[error("unknown material state: {0}")]
    UnknownState(String),
    #[error("material not found: {0}")]
    NotFound(MaterialId),
    #[error("material with formula '{0}' already exists")]
    DuplicateFormula(String),
    #[error("material ids exhausted")]
    IdsExhausted,
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

pub type Result<T> = std::result::Result<T, MatDbError>;

impl MatDbError {
    /// HTTP status a transport layer should answer with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::InvalidMaterial(_) | Self::UnknownState(_) => 400,
            Self::NotFound(_) => 404,
            Self::DuplicateFormula(_) => 409,
            Self::IdsExhausted | Self::Snapshot(_) => 500,
        }
    }
}
