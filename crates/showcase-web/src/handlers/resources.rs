//! Resources handler — primary links, supplementary tables, and downloads.

use axum::{extract::State, response::Html};

use showcase_common::placeholder::needs_data;
use showcase_content::ContentStore;

use crate::handlers::overview::NAV_HTML;
use crate::state::SharedState;

pub async fn resources_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_resources(&state.store))
}

fn link_row(resource: &str, link: &str) -> String {
    let status = if needs_data(link) {
        r#"<span class="tag tag-amber">pending</span>"#
    } else {
        r#"<span class="tag">available</span>"#
    };
    format!("<tr><td>{resource}</td><td>{link}</td><td>{status}</td></tr>")
}

pub fn render_resources(store: &ContentStore) -> String {
    let r = &store.config.resources;

    let link_rows = [
        link_row("Paper (DOI)", &r.paper_doi),
        link_row("GitHub Repository", &r.github),
        link_row("Genome Accession", &r.genome_accession),
        link_row("RNA-seq Accession", &r.rnaseq_accession),
        link_row("Metabolomics Accession", &r.metabolomics_accession),
    ]
    .join("\n");

    let supp_cards: String = r
        .supplementary_tables
        .iter()
        .map(|t| {
            format!(
                r#"<div class="card"><strong>{}</strong> — <a href="{url}" target="_blank">{url}</a></div>"#,
                t.label,
                url = t.url,
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Resources — Multi-Omics Showcase</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<div class="app-container">
{nav}
<main class="main-content">
    <div class="page-header">
        <h1 class="page-title">Resources</h1>
    </div>

    <h2>Primary Links</h2>
    <table class="table">
        <thead><tr><th>Resource</th><th>Link / Accession</th><th>Status</th></tr></thead>
        <tbody>{link_rows}</tbody>
    </table>

    <hr class="section-divider">

    <h2>Supplementary Tables</h2>
    {supp_cards}

    <hr class="section-divider">

    <h2>Download Mock Data Files</h2>
    <p class="text-muted"><em>Real data files will replace these mock templates after public deposition.</em></p>
    <div class="grid-3">
        <a class="btn" href="/download/expression">⬇ Expression matrix (CSV)</a>
        <a class="btn" href="/download/metabolites">⬇ Metabolite table (CSV)</a>
        <a class="btn" href="/download/candidates">⬇ Candidate gene list (CSV)</a>
    </div>

    <hr class="section-divider">

    <h2>Content Configuration</h2>
    <a class="btn" href="/download/config">⬇ Download content_config.yaml</a>

    <div class="placeholder">PDF one-page summary: [NEED — generate from manuscript or create bespoke summary PDF]</div>
</main>
</div>
</body>
</html>"#,
        nav = NAV_HTML,
    )
}
