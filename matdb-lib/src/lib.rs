pub mod catalog;
pub mod chemparser;
pub mod constants;
pub mod engine;
pub mod error;
pub(crate) mod properties_db;
pub mod search;
pub mod service;
pub mod state;
pub mod store;

pub use catalog::{PropertyCatalog, atomic_weight};
pub use chemparser::{FormulaTerm, ParsedFormula, parse_formula};
pub use engine::{MaterialProfile, MaterialPropertyEngine};
pub use error::{MatDbError, Result, ValidationError};
pub use matdb_data;
pub use matdb_data::{MaterialId, MaterialRecord, NewMaterial, PropertyEntry, RoomTempState};
pub use search::{SearchCriteria, SearchFilterBuilder, SearchParams, parse_element_list};
pub use service::MaterialService;
pub use state::MaterialState;
pub use store::{MaterialStore, MemoryStore, validate_new_material};
