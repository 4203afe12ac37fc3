//! Business logic services

pub mod catalog;

use std::sync::Arc;

use crate::repository::{CategoryStore, Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services backed by the SQLite repository
    pub fn new(repository: Repository) -> Self {
        Self::with_store(Arc::new(repository.categories))
    }

    /// Create all services on top of an arbitrary category store
    pub fn with_store(store: Arc<dyn CategoryStore>) -> Self {
        Self {
            catalog: catalog::CatalogService::new(store),
        }
    }
}
