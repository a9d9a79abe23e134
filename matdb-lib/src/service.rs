use matdb_data::{MaterialId, MaterialRecord, NewMaterial};
use tracing::{debug, error, info, warn};

use crate::engine::{MaterialProfile, MaterialPropertyEngine};
use crate::error::Result;
use crate::search::SearchParams;
use crate::store::{MaterialStore, MemoryStore};

/// Material operations over a record store: create, retrieve, search and
/// derived properties.
#[derive(Debug, Clone, Default)]
pub struct MaterialService<S = MemoryStore> {
    store: S,
    engine: MaterialPropertyEngine,
}

impl<S: MaterialStore> MaterialService<S> {
    pub fn new(store: S) -> Self {
        Self::with_engine(store, MaterialPropertyEngine::builtin())
    }

    pub fn with_engine(store: S, engine: MaterialPropertyEngine) -> Self {
        MaterialService { store, engine }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn engine(&self) -> &MaterialPropertyEngine {
        &self.engine
    }

    #[tracing::instrument(skip(self))]
    pub fn create_material(&mut self, formula: &str, density: f64) -> Result<MaterialId> {
        match self.store.create(NewMaterial::new(formula, density)) {
            Ok(id) => {
                info!(id, "material created");
                Ok(id)
            }
            Err(e) => {
                error!(error = %e, "material rejected");
                Err(e)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn material(&self, id: MaterialId) -> Result<MaterialRecord> {
        self.store.get(id).inspect_err(|e| {
            error!(error = %e, "material lookup failed");
        })
    }

    /// Records matching raw search parameters.
    #[tracing::instrument(skip(self))]
    pub fn search(&self, params: &SearchParams) -> Result<Vec<MaterialRecord>> {
        let criteria = params.criteria().inspect_err(|e| {
            warn!(error = %e, "search parameters rejected");
        })?;
        let found = criteria.filter(self.store.list());
        debug!(count = found.len(), "search complete");
        Ok(found)
    }

    /// Density derived from the stored material's formula.
    #[tracing::instrument(skip(self))]
    pub fn advanced_property(&self, id: MaterialId) -> Result<Option<f64>> {
        let record = self.material(id)?;
        let value = self.engine.derived_property(&record.formula);
        debug!(formula = %record.formula, ?value, "advanced property computed");
        Ok(value)
    }

    pub fn profile(&self, id: MaterialId) -> Result<MaterialProfile> {
        let record = self.material(id)?;
        Ok(self.engine.profile(&record.formula))
    }
}
