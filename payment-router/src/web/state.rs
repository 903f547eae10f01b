//! Application state for the web layer.

use std::sync::Arc;

use crate::normalize::Normalizer;
use crate::routing::{Resolver, RoutingTable};
use crate::transfer::{Validator, ValidatorConfig};

/// Shared application state.
///
/// The table and normalizer are read-only after startup, so handlers build a
/// [`Resolver`] or [`Validator`] per request over the shared values.
#[derive(Clone)]
pub struct AppState {
    /// Routing table loaded at startup
    pub table: Arc<RoutingTable>,

    /// Wire ↔ canonical vocabulary
    pub normalizer: Arc<Normalizer>,

    /// Transfer validation parameters
    pub validator: Arc<ValidatorConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(table: RoutingTable, normalizer: Normalizer, validator: ValidatorConfig) -> Self {
        Self {
            table: Arc::new(table),
            normalizer: Arc::new(normalizer),
            validator: Arc::new(validator),
        }
    }

    /// A resolver over the shared table.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.table, &self.normalizer)
    }

    /// A validator over the shared table and configuration.
    pub fn validator(&self) -> Validator<'_> {
        Validator::new(&self.validator, &self.normalizer, &self.table)
    }
}
