//! Methods handler — per-modality inputs, steps, tools, outputs, and QC lines.

use axum::{extract::State, response::Html};

use showcase_content::ContentStore;

use crate::handlers::overview::NAV_HTML;
use crate::state::SharedState;

/// Display labels per modality key, in section order.
const MODALITY_LABELS: [(&str, &str); 5] = [
    ("genome", "🧬 Genome"),
    ("transcriptomics", "📊 Transcriptomics"),
    ("metabolomics", "⚗️ Metabolomics"),
    ("integration", "🔗 Integration"),
    ("validation", "✅ Validation"),
];

/// Fixed QC checkpoint line per modality.
fn qc_checkpoints(key: &str) -> &'static str {
    match key {
        "genome" => "BUSCO completeness > 95%; LTR Assembly Index; mapping rate of RNA-seq reads to assembly > 85%",
        "transcriptomics" => "FastQC per-base quality Q > 30; mapping rate > 80%; library complexity (duplication < 30%)",
        "metabolomics" => "Blank subtraction; CV < 20% across QC pools; annotation confidence ≥ Level 2 for quantified PMFs",
        "integration" => "Module stability (signed R²); Pearson r threshold |r| > 0.8; FDR < 0.05 for module-trait correlation",
        "validation" => "Negative control (boiled enzyme); positive control (known substrate); MS2 spectral match score",
        _ => "",
    }
}

pub async fn methods_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_methods(&state.store))
}

pub fn render_methods(store: &ContentStore) -> String {
    let sections: String = store
        .config
        .methods
        .modalities()
        .into_iter()
        .map(|(key, section)| {
            let label = MODALITY_LABELS
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, l)| *l)
                .unwrap_or(key);

            let inputs: String = section
                .inputs
                .iter()
                .map(|inp| format!("<li>{inp}</li>"))
                .collect();
            let steps: String = section
                .steps
                .iter()
                .enumerate()
                .map(|(i, step)| format!("<li>{}. {step}</li>", i + 1))
                .collect();
            let tools: String = section
                .tools
                .iter()
                .map(|tool| format!(r#"<span class="tag">{tool}</span>"#))
                .collect();
            let outputs: String = section
                .outputs
                .iter()
                .map(|out| format!(r#"<span class="tag tag-blue">{out}</span>"#))
                .collect();

            format!(
                r#"<section class="method-section">
        <h2>{label}</h2>
        <div class="grid-2">
            <div>
                <h4>Inputs</h4>
                <ul>{inputs}</ul>
                <h4>Core Steps</h4>
                <ul class="step-list">{steps}</ul>
            </div>
            <div>
                <h4>Tools / Algorithms</h4>
                <div>{tools}</div>
                <h4>Outputs</h4>
                <div>{outputs}</div>
            </div>
        </div>
        <p class="qc-line"><strong>QC checkpoints</strong> — <em>{qc}</em></p>
    </section>
    <hr class="section-divider">"#,
                qc = qc_checkpoints(key),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Methods — Multi-Omics Showcase</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<div class="app-container">
{nav}
<main class="main-content">
    <div class="page-header">
        <h1 class="page-title">Methods</h1>
    </div>
    {sections}
</main>
</div>
</body>
</html>"#,
        nav = NAV_HTML,
    )
}
