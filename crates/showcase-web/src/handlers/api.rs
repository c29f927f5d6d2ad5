//! JSON API over the loaded content.

use axum::{extract::State, response::Json};
use serde::Serialize;

use showcase_content::{CandidateGene, ContentConfig};

use crate::state::SharedState;

/// Content counts reported by `/api/summary`.
#[derive(Debug, Serialize)]
pub struct ContentSummary {
    pub genes: usize,
    pub metabolites: usize,
    pub candidates: usize,
    pub validated_candidates: usize,
    pub findings: usize,
    pub deliverables: usize,
}

/// GET /api/summary - counts over the loaded content store
pub async fn api_summary(State(state): State<SharedState>) -> Json<ContentSummary> {
    let store = &state.store;
    Json(ContentSummary {
        genes: store.expression.rows.len(),
        metabolites: store.metabolites.rows.len(),
        candidates: store.candidate_genes.len(),
        validated_candidates: store
            .candidate_genes
            .iter()
            .filter(|c| c.in_vitro_validated)
            .count(),
        findings: store.config.findings.len(),
        deliverables: store.config.deliverables.len(),
    })
}

/// GET /api/config - the parsed content configuration
pub async fn api_config(State(state): State<SharedState>) -> Json<ContentConfig> {
    Json(state.store.config.clone())
}

/// GET /api/candidates - typed candidate rows, sorted by priority rank
pub async fn api_candidates(State(state): State<SharedState>) -> Json<Vec<CandidateGene>> {
    Json(state.store.candidate_genes.clone())
}
