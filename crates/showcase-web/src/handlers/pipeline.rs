//! Pipeline handler — end-to-end stage flow and the reproducibility block.

use axum::{extract::State, response::Html};

use crate::handlers::overview::NAV_HTML;
use crate::state::SharedState;

struct Stage {
    name: &'static str,
    inputs: &'static str,
    outputs: &'static str,
    repro: &'static str,
    color: &'static str,
}

/// The seven fixed pipeline stages, raw data through handoff.
const STAGES: [Stage; 7] = [
    Stage {
        name: "1 · Raw Data Ingestion",
        inputs: "PacBio HiFi FASTQ, Hi-C FASTQ, RNA-seq FASTQ, LC-MS raw files",
        outputs: "Raw FASTQ archives, .raw / .mzML metabolomics files",
        repro: "MD5 checksums; archived in [NEED repository]",
        color: "#e0f2fe",
    },
    Stage {
        name: "2 · QC & Preprocessing",
        inputs: "Raw reads; raw MS spectra",
        outputs: "Trimmed FASTQ; filtered/aligned BAM; centroided mzML",
        repro: "FastQC HTML reports; MZmine batch XML stored in repo",
        color: "#ede9fe",
    },
    Stage {
        name: "3 · Feature Generation",
        inputs: "Trimmed reads; centroided mzML",
        outputs: "Gene count matrix; metabolite feature table; genome FASTA + GFF3",
        repro: "Snakemake rules per modality; tool versions pinned in conda env",
        color: "#fef3c7",
    },
    Stage {
        name: "4 · Integration Analyses",
        inputs: "Count matrix; metabolite table; module eigengenes",
        outputs: "Co-expression modules; gene-metabolite correlation table; PCA/PLS-DA",
        repro: "R scripts in analysis/integration/; set.seed documented",
        color: "#dcfce7",
    },
    Stage {
        name: "5 · Candidate Prioritization",
        inputs: "Correlation table; module memberships; functional annotations",
        outputs: "Ranked candidate list; phylogenetic tree; filtered OMT/CYP450 shortlist",
        repro: "Filter thresholds in config/prioritization.yaml; reproducible with make candidates",
        color: "#fee2e2",
    },
    Stage {
        name: "6 · Experimental Validation",
        inputs: "Prioritized candidate ORFs; PMF substrates; SAM cofactor",
        outputs: "LC-MS spectra; kinetic parameter table; confirmed activity list",
        repro: "Plasmid maps deposited; raw LC-MS .raw files archived",
        color: "#fce7f3",
    },
    Stage {
        name: "7 · Reporting & Handoff",
        inputs: "All analysis outputs; validated candidates",
        outputs: "Manuscript figures; supplementary tables; public data depositions",
        repro: "Figure scripts in figures/; rendered with R/ggplot2 + Illustrator",
        color: "#f0f4ff",
    },
];

const CONDA_ENV: &str = r#"# conda environment
name: pmf_multiomics
channels:
  - bioconda
  - conda-forge
dependencies:
  - python=3.10
  - snakemake=7.x
  - hisat2=2.2.1
  - subread=2.0.3          # featureCounts
  - busco=5.x
  - r-base=4.3
  - bioconductor-deseq2
  - bioconductor-wgcna
  - r-ggplot2"#;

const CONTAINER: &str = r#"# Docker image (conceptual)
FROM continuumio/miniconda3
COPY environment.yaml .
RUN conda env create -f environment.yaml
SHELL ["conda", "run", "-n", "pmf_multiomics", "/bin/bash", "-c"]

# Push to Docker Hub / Quay.io:
# docker push [NEED registry]/pmf_multiomics:1.0.0"#;

const RERUN: &str = r#"# 1. Clone repo
git clone [NEED GitHub URL]
cd pmf_multiomics

# 2. Restore environment
conda env create -f environment.yaml

# 3. Place raw data under data/raw/
# (download accessions listed in resources page)

# 4. Run pipeline
snakemake --cores 32 --use-conda all

# 5. Generate candidates
make candidates

# 6. Render figures
Rscript figures/render_all.R"#;

pub async fn pipeline_page(State(_state): State<SharedState>) -> Html<String> {
    Html(render_pipeline())
}

pub fn render_pipeline() -> String {
    let stage_nodes: String = STAGES
        .iter()
        .enumerate()
        .map(|(i, stage)| {
            let arrow = if i + 1 < STAGES.len() {
                r#"<div class="pipeline-arrow">↓</div>"#
            } else {
                ""
            };
            format!(
                r#"<div class="pipeline-node" style="background: {color};">
            <strong>{name}</strong><br>
            <span class="stage-detail">
                <b>In:</b> {inputs}<br>
                <b>Out:</b> {outputs}<br>
                <b>Reproducibility:</b> <em>{repro}</em>
            </span>
        </div>{arrow}"#,
                color = stage.color,
                name = stage.name,
                inputs = stage.inputs,
                outputs = stage.outputs,
                repro = stage.repro,
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Pipeline — Multi-Omics Showcase</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<div class="app-container">
{nav}
<main class="main-content">
    <div class="page-header">
        <h1 class="page-title">End-to-End Pipeline</h1>
    </div>

    {stage_nodes}

    <hr class="section-divider">

    <h2>Reproducibility Block</h2>
    <div class="grid-2">
        <div>
            <h4>Environment</h4>
            <pre class="code-block">{conda}</pre>
        </div>
        <div>
            <h4>Container strategy</h4>
            <pre class="code-block">{container}</pre>
            <h4>To rerun (high-level)</h4>
            <pre class="code-block">{rerun}</pre>
        </div>
    </div>
</main>
</div>
</body>
</html>"#,
        nav = NAV_HTML,
        conda = CONDA_ENV,
        container = CONTAINER,
        rerun = RERUN,
    )
}
