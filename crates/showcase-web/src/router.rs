//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    api::{api_candidates, api_config, api_summary},
    downloads::{download_candidates, download_config, download_expression, download_metabolites},
    findings::findings_page,
    impact::impact_page,
    methods::methods_page,
    overview::overview_page,
    pipeline::pipeline_page,
    resources::resources_page,
    study_design::study_design_page,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",             get(overview_page))
        .route("/study-design", get(study_design_page))
        .route("/methods",      get(methods_page))
        .route("/findings",     get(findings_page))
        .route("/pipeline",     get(pipeline_page))
        .route("/impact",       get(impact_page))
        .route("/resources",    get(resources_page))

        // Mock data downloads
        .route("/download/expression",  get(download_expression))
        .route("/download/metabolites", get(download_metabolites))
        .route("/download/candidates",  get(download_candidates))
        .route("/download/config",      get(download_config))

        // API endpoints
        .route("/api/summary",    get(api_summary))
        .route("/api/config",     get(api_config))
        .route("/api/candidates", get(api_candidates))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
