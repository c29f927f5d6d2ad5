//! Overview handler — landing page with summary, deliverables, and glossary.

use axum::{extract::State, response::Html};

use showcase_common::placeholder::card_colors;
use showcase_content::ContentStore;

use crate::state::SharedState;

/// Navigation HTML fragment shared across all pages
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

/// Fixed figure gallery captions; image paths are still pending deposition.
const FIGURE_CAPTIONS: [(&str, &str); 5] = [
    ("Fig. 1", "Genome assembly statistics and Hi-C contact heatmap"),
    ("Fig. 2", "WGCNA co-expression modules correlated with PMF accumulation"),
    ("Fig. 3", "Multi-omics integration workflow and candidate prioritization"),
    ("Fig. 4", "Phylogenetic tree of OMT gene family with validated candidates highlighted"),
    ("Fig. 5", "In vitro enzyme assay results: LC-MS product verification"),
];

pub async fn overview_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_overview(&state.store))
}

pub fn render_overview(store: &ContentStore) -> String {
    let cfg = &store.config;

    let deliverable_cards: String = cfg
        .deliverables
        .iter()
        .map(|d| {
            let (border, bg) = card_colors(&d.detail);
            format!(
                r#"<div class="card" style="border-left: 4px solid {border}; background: {bg};">
                <strong>{}: {}</strong><br>
                <small class="text-muted">{}</small>
            </div>"#,
                d.id, d.label, d.detail
            )
        })
        .collect();

    let figure_cards: String = FIGURE_CAPTIONS
        .iter()
        .map(|(fig_id, caption)| {
            format!(
                r#"<div class="figure-slot">
                <div class="figure-glyph">🖼</div>
                <div class="figure-id">{fig_id}</div>
                <div class="figure-caption">{caption}</div>
            </div>"#
            )
        })
        .collect();

    let glossary_items: String = cfg
        .glossary
        .iter()
        .map(|(term, defn)| format!(r#"<div class="glossary-item"><strong>{term}</strong>: {defn}</div>"#))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Overview — Multi-Omics Showcase</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<div class="app-container">
{nav}
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">{title}</h1>
            <p class="text-muted"><strong>Citation:</strong> {citation}</p>
        </div>
    </div>

    <h2>Study Summary</h2>
    <div class="callout">{summary}</div>

    <hr class="section-divider">

    <h2>Key Deliverables</h2>
    <div class="grid-3">{deliverable_cards}</div>

    <hr class="section-divider">

    <h2>Figure Gallery</h2>
    <div class="placeholder">📊 Figure gallery placeholder — add figure image paths to
    <code>content_config.yaml</code> under a <code>figures</code> key.</div>
    <div class="grid-5">{figure_cards}</div>

    <hr class="section-divider">

    <h2>Glossary</h2>
    <div class="grid-2">{glossary_items}</div>
</main>
</div>
</body>
</html>"#,
        nav = NAV_HTML,
        title = cfg.study.title,
        citation = cfg.study.citation,
        summary = cfg.study.summary,
    )
}
