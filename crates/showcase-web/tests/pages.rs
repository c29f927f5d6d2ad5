//! Smoke tests: every page renders from the shipped content, and the router
//! answers all fixed routes.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use showcase_content::ContentStore;
use showcase_web::handlers::{
    findings::render_findings, impact::render_impact, methods::render_methods,
    overview::render_overview, pipeline::render_pipeline, resources::render_resources,
    study_design::render_study_design,
};
use showcase_web::router::build_router;
use showcase_web::state::AppState;

fn shipped_store() -> ContentStore {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..");
    ContentStore::load(root).expect("shipped content must load")
}

#[test]
fn all_seven_pages_render() {
    let store = shipped_store();
    let pages = [
        render_overview(&store),
        render_study_design(),
        render_methods(&store),
        render_findings(&store),
        render_pipeline(),
        render_impact(&store),
        render_resources(&store),
    ];
    for page in &pages {
        assert!(page.starts_with("<!DOCTYPE html>"));
        // every page carries the shared sidebar
        assert!(page.contains(r#"<a href="/study-design">"#));
    }
}

#[test]
fn overview_shows_deliverables_and_glossary() {
    let store = shipped_store();
    let html = render_overview(&store);
    assert!(html.contains(&store.config.study.title));
    for d in &store.config.deliverables {
        assert!(html.contains(&d.label));
    }
    assert!(html.contains("PMF"));
    assert!(html.contains("Glossary"));
}

#[test]
fn placeholder_fields_are_visually_distinguished() {
    let store = shipped_store();
    let html = render_overview(&store);
    // The shipped config has both populated and pending deliverables; the two
    // styles must both appear and differ.
    assert!(html.contains("#fffbeb"), "pending (amber) style missing");
    assert!(html.contains("#f0fdf4"), "populated (green) style missing");
}

#[test]
fn findings_page_includes_tables_and_evidence_map() {
    let store = shipped_store();
    let html = render_findings(&store);
    assert!(html.contains("Evidence Map"));
    for column in &store.expression.columns {
        assert!(html.contains(&format!("<th>{column}</th>")));
    }
    // validated candidates are highlighted
    assert!(html.contains("background-color: #f0fdf4"));
}

#[test]
fn methods_page_covers_all_modalities() {
    let store = shipped_store();
    let html = render_methods(&store);
    for label in ["Genome", "Transcriptomics", "Metabolomics", "Integration", "Validation"] {
        assert!(html.contains(label), "missing modality section: {label}");
    }
    assert!(html.contains("QC checkpoints"));
}

#[tokio::test]
async fn router_serves_all_routes() {
    let state = AppState::new(shipped_store()).unwrap();
    let app = build_router(state);

    for path in [
        "/",
        "/study-design",
        "/methods",
        "/findings",
        "/pipeline",
        "/impact",
        "/resources",
        "/api/summary",
        "/api/config",
        "/api/candidates",
    ] {
        let response = app
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "route {path}");
    }
}

#[tokio::test]
async fn downloads_carry_fixed_names_and_mime_types() {
    let state = AppState::new(shipped_store()).unwrap();
    let app = build_router(state);

    let cases = [
        ("/download/expression", "text/csv", "expression_matrix_mock.csv"),
        ("/download/metabolites", "text/csv", "metabolite_table_mock.csv"),
        ("/download/candidates", "text/csv", "candidate_genes_mock.csv"),
        ("/download/config", "text/yaml", "content_config.yaml"),
    ];

    for (path, mime, filename) in cases {
        let response = app
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            mime,
            "mime for {path}"
        );
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.contains(filename), "filename for {path}");

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(!body.is_empty(), "empty download body for {path}");
    }
}

#[tokio::test]
async fn candidate_download_round_trips_the_loaded_table() {
    let store = shipped_store();
    let expected_rows = store.candidates.rows.len();
    let state = AppState::new(store).unwrap();
    let app = build_router(state);

    let response = app
        .oneshot(Request::get("/download/candidates").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("gene_id,gene_name,gene_family"));
    assert_eq!(text.lines().count(), expected_rows + 1);
}
