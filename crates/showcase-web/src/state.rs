//! Shared application state for the web server.

use std::sync::Arc;

use showcase_common::error::Result;
use showcase_content::ContentStore;

/// Shared state injected into every Axum handler.
///
/// Read-only after construction; the download payloads are serialized once here so
/// handlers never fail.
#[derive(Clone)]
pub struct AppState {
    pub store: ContentStore,
    pub expression_csv: Vec<u8>,
    pub metabolite_csv: Vec<u8>,
    pub candidate_csv: Vec<u8>,
}

impl AppState {
    pub fn new(store: ContentStore) -> Result<Self> {
        let expression_csv = store.expression.to_csv_bytes()?;
        let metabolite_csv = store.metabolites.to_csv_bytes()?;
        let candidate_csv = store.candidates.to_csv_bytes()?;
        Ok(Self {
            store,
            expression_csv,
            metabolite_csv,
            candidate_csv,
        })
    }
}

pub type SharedState = Arc<AppState>;
