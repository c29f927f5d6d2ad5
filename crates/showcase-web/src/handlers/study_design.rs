//! Study design handler — question, experimental flow, samples, and validation.

use axum::{extract::State, response::Html};

use crate::handlers::overview::NAV_HTML;
use crate::state::SharedState;

/// The six-step experimental flow, fixed for this study.
const FLOW_STEPS: [(&str, &str, &str); 6] = [
    ("1. Genome assembly", "PacBio HiFi + Hi-C → chromosome-level assembly", "🧬"),
    ("2. Annotation", "Repeat masking + ab initio + RNA evidence → gene models", "📋"),
    ("3. Transcriptomics", "RNA-seq across tissues/stages → expression atlas + WGCNA", "📊"),
    ("4. Metabolomics", "LC-MS/MS across same tissues → PMF quantification", "⚗️"),
    ("5. Integration", "Gene-metabolite correlation + module-trait analysis → candidate list", "🔗"),
    ("6. Validation", "Heterologous expression + in vitro assay + LC-MS product ID", "✅"),
];

/// Samples table: tissue, developmental stage, PMF content, replicates.
const SAMPLE_ROWS: [(&str, &str, &str, &str); 4] = [
    ("Pericarp (early)", "[NEED]", "Low", "[NEED N]"),
    ("Pericarp (mid)", "[NEED]", "Medium", "[NEED N]"),
    ("Pericarp (late)", "[NEED]", "High", "[NEED N]"),
    ("Leaf", "Mature", "Trace", "[NEED N]"),
];

/// Assay table: modality, technology, read length / resolution, coverage / depth.
const ASSAY_ROWS: [(&str, &str, &str, &str); 4] = [
    ("Genome", "PacBio HiFi", "[NEED] kb HiFi", "[NEED]×"),
    ("Genome scaffolding", "Hi-C", "150 bp PE", "[NEED]×"),
    ("Transcriptomics", "Illumina RNA-seq", "[NEED] bp PE", "[NEED]M reads/sample"),
    ("Metabolomics", "LC-MS/MS", "MS2 fragmentation", "[NEED] features"),
];

pub async fn study_design_page(State(_state): State<SharedState>) -> Html<String> {
    Html(render_study_design())
}

pub fn render_study_design() -> String {
    let flow_nodes: String = FLOW_STEPS
        .iter()
        .enumerate()
        .map(|(i, (step, detail, icon))| {
            let arrow = if i + 1 < FLOW_STEPS.len() {
                r#"<div class="pipeline-arrow">↓</div>"#
            } else {
                ""
            };
            format!(
                r#"<div class="pipeline-node"><strong>{icon} {step}</strong> — {detail}</div>{arrow}"#
            )
        })
        .collect();

    let sample_rows: String = SAMPLE_ROWS
        .iter()
        .map(|(tissue, stage, pmf, reps)| {
            format!("<tr><td>{tissue}</td><td>{stage}</td><td>{pmf}</td><td>{reps}</td></tr>")
        })
        .collect();

    let assay_rows: String = ASSAY_ROWS
        .iter()
        .map(|(modality, tech, res, depth)| {
            format!("<tr><td>{modality}</td><td>{tech}</td><td>{res}</td><td>{depth}</td></tr>")
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Study Design — Multi-Omics Showcase</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<div class="app-container">
{nav}
<main class="main-content">
    <div class="page-header">
        <h1 class="page-title">Study Design</h1>
    </div>

    <h2>Biological Question</h2>
    <p>Which genes encode the O-methyltransferase and CYP450 enzymes responsible for the
    stepwise methoxylation of flavone scaffolds into polymethoxylated flavonoids (PMFs)
    in <em>Citrus reticulata</em> cv. Chachiensis (Chenpi), and how are they
    transcriptionally regulated?</p>

    <hr class="section-divider">

    <h2>Experimental Flow</h2>
    {flow_nodes}

    <hr class="section-divider">

    <h2>Samples and Contrasts</h2>
    <div class="grid-2">
        <div>
            <h3>Tissues sampled</h3>
            <table class="table">
                <thead><tr><th>Tissue</th><th>Developmental stage</th><th>PMF content</th><th>Replicates</th></tr></thead>
                <tbody>{sample_rows}</tbody>
            </table>
        </div>
        <div>
            <h3>Key contrasts</h3>
            <ul>
                <li>Pericarp early vs. late (developmental PMF accumulation)</li>
                <li>High-PMF vs. low-PMF tissues (metabolite-driven contrast)</li>
                <li>Pericarp vs. leaf (tissue specificity of PMF biosynthesis)</li>
            </ul>
            <div class="placeholder">Exact sample counts: [NEED from paper methods]</div>
        </div>
    </div>

    <hr class="section-divider">

    <h2>Data Types and Assays</h2>
    <table class="table">
        <thead><tr><th>Modality</th><th>Technology</th><th>Read length / resolution</th><th>Coverage / depth</th></tr></thead>
        <tbody>{assay_rows}</tbody>
    </table>

    <hr class="section-divider">

    <h2>Validation Strategy</h2>
    <p>Candidates emerging from computational prioritization (|r| &gt; 0.8, module
    membership &gt; 0.7) were validated by:</p>
    <ol>
        <li><strong>Heterologous expression</strong> in <em>E. coli</em> BL21 or <em>S. cerevisiae</em> with codon-optimized ORFs</li>
        <li><strong>In vitro enzyme assay</strong> using recombinant protein + PMF substrates + SAM cofactor</li>
        <li><strong>LC-MS/MS product verification</strong> confirming methylated product identity and retention time</li>
        <li><strong>Kinetic characterization</strong> (Km, Vmax) for confirmed candidates</li>
    </ol>
</main>
</div>
</body>
</html>"#,
        nav = NAV_HTML,
    )
}
