//! Download endpoints — re-serve the already-loaded content as attachments.
//!
//! Payloads are serialized once at startup (see [`crate::state::AppState`]); these
//! handlers only attach the fixed file name and MIME type.

use axum::{extract::State, http::header, response::IntoResponse};

use crate::state::SharedState;

fn attachment(
    mime: &'static str,
    filename: &'static str,
    body: Vec<u8>,
) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!(r#"attachment; filename="{filename}""#),
            ),
        ],
        body,
    )
}

pub async fn download_expression(State(state): State<SharedState>) -> impl IntoResponse {
    attachment("text/csv", "expression_matrix_mock.csv", state.expression_csv.clone())
}

pub async fn download_metabolites(State(state): State<SharedState>) -> impl IntoResponse {
    attachment("text/csv", "metabolite_table_mock.csv", state.metabolite_csv.clone())
}

pub async fn download_candidates(State(state): State<SharedState>) -> impl IntoResponse {
    attachment("text/csv", "candidate_genes_mock.csv", state.candidate_csv.clone())
}

pub async fn download_config(State(state): State<SharedState>) -> impl IntoResponse {
    attachment(
        "text/yaml",
        "content_config.yaml",
        state.store.config_text.clone().into_bytes(),
    )
}
