//! Findings handler — finding cards, evidence map, and data table previews.

use axum::{extract::State, response::Html};

use showcase_common::placeholder::needs_data;
use showcase_content::{ContentStore, DataTable};

use crate::handlers::overview::NAV_HTML;
use crate::state::SharedState;

pub async fn findings_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_findings(&state.store))
}

/// Render a [`DataTable`] as an HTML table.
pub fn render_table(table: &DataTable) -> String {
    let head: String = table
        .columns
        .iter()
        .map(|c| format!("<th>{c}</th>"))
        .collect();
    let body: String = table
        .rows
        .iter()
        .map(|row| {
            let cells: String = row.iter().map(|cell| format!("<td>{cell}</td>")).collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();
    format!(r#"<table class="table"><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>"#)
}

pub fn render_findings(store: &ContentStore) -> String {
    let cfg = &store.config;

    let finding_cards: String = cfg
        .findings
        .iter()
        .map(|f| {
            // Findings whose claim still carries a placeholder render in the
            // pending (amber) style instead of the validated (blue) one.
            let (color, bg) = if needs_data(&f.claim) {
                ("#92400e", "#fffbeb")
            } else {
                ("#1a56a0", "#f0f7ff")
            };
            let artifacts: String = f
                .artifacts
                .iter()
                .map(|a| format!(r#"<span class="tag tag-blue">{a}</span> "#))
                .collect();
            format!(
                r#"<div class="card" style="border-left: 4px solid {color}; background: {bg};">
                <strong>{id}</strong> — {claim}<br><br>
                <strong>Evidence type:</strong> <span class="tag">{evidence}</span><br><br>
                <strong>Output artifacts:</strong><br>{artifacts}<br><br>
                <strong>Why it matters:</strong> {why}<br><br>
                <strong>Figure reference:</strong> <span class="tag tag-amber">{figure}</span>
            </div>"#,
                id = f.id,
                claim = f.claim,
                evidence = f.evidence_type,
                why = f.why_it_matters,
                figure = f.figure_ref,
            )
        })
        .collect();

    // Evidence map: one row per finding x artifact
    let evidence_rows: String = cfg
        .findings
        .iter()
        .flat_map(|f| {
            let short_claim: String = f.claim.chars().take(60).collect();
            let evidence = f
                .evidence_type
                .split(';')
                .next()
                .unwrap_or(&f.evidence_type)
                .trim()
                .to_string();
            f.artifacts.iter().map(move |artifact| {
                format!(
                    "<tr><td>{}</td><td>{}…</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    f.id, short_claim, evidence, artifact, f.figure_ref
                )
            })
        })
        .collect();

    // Validated vs. pending candidate view, sorted by priority rank at load time
    let candidate_rows: String = store
        .candidate_genes
        .iter()
        .map(|c| {
            let row_style = if c.in_vitro_validated {
                r#" style="background-color: #f0fdf4;""#
            } else {
                ""
            };
            let validated = if c.in_vitro_validated { "yes" } else { "pending" };
            format!(
                r#"<tr{row_style}><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{validated}</td><td>{}</td></tr>"#,
                c.gene_id,
                c.gene_name,
                c.gene_family,
                c.pearson_r_nobiletin,
                c.module_membership,
                c.priority_rank,
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Findings — Multi-Omics Showcase</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<div class="app-container">
{nav}
<main class="main-content">
    <div class="page-header">
        <h1 class="page-title">Findings</h1>
    </div>

    <h2>Finding Cards</h2>
    {finding_cards}

    <hr class="section-divider">

    <h2>Evidence Map</h2>
    <p class="text-muted"><em>Linking findings to evidence types and artifact categories.</em></p>
    <table class="table">
        <thead><tr><th>Finding</th><th>Claim (short)</th><th>Evidence type</th><th>Artifact</th><th>Figure</th></tr></thead>
        <tbody>{evidence_rows}</tbody>
    </table>

    <hr class="section-divider">

    <h2>Data Previews</h2>

    <h3>Expression matrix</h3>
    {expression_table}
    <p class="caption">Mock data — schema: gene_id, gene_name, annotation, [sample columns], module, r_nobiletin, r_tangeretin</p>

    <h3>Metabolite table</h3>
    {metabolite_table}
    <p class="caption">Mock data — schema: metabolite_id, metabolite_name, class, formula, [tissue columns], annotation_source, confidence_level</p>

    <h3>Candidate genes</h3>
    {candidate_table}
    <p class="caption">Mock data — schema: gene_id, gene_family, chromosome, module, pearson_r, module_membership, in_vitro_validated, priority_rank</p>

    <h3>Validated vs. pending candidates</h3>
    <table class="table">
        <thead><tr><th>Gene ID</th><th>Name</th><th>Family</th><th>r (nobiletin)</th><th>Module membership</th><th>Validated</th><th>Rank</th></tr></thead>
        <tbody>{candidate_rows}</tbody>
    </table>
</main>
</div>
</body>
</html>"#,
        nav = NAV_HTML,
        expression_table = render_table(&store.expression),
        metabolite_table = render_table(&store.metabolites),
        candidate_table = render_table(&store.candidates),
    )
}
