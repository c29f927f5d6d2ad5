//! Typed model of `content_config.yaml`.
//!
//! The document is free-form editorial content; deserialization only requires the
//! keys the pages actually read. Sections that may legitimately be empty while the
//! paper is in press carry `#[serde(default)]`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use showcase_common::error::Result;

/// Complete content configuration for the showcase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Study identity: title, citation, summary
    pub study: Study,

    /// Key deliverables shown on the overview page
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,

    /// Term -> definition, rendered as the overview glossary
    #[serde(default)]
    pub glossary: BTreeMap<String, String>,

    /// Per-modality methods sections
    pub methods: Methods,

    /// Finding cards and the derived evidence map
    #[serde(default)]
    pub findings: Vec<Finding>,

    /// Impact statements grouped by audience
    #[serde(default)]
    pub impact: Impact,

    /// External links, accessions, and supplementary tables
    pub resources: Resources,
}

/// Study identity block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Study {
    pub title: String,
    pub short_title: String,
    pub citation: String,
    pub summary: String,
}

/// One key deliverable of the study.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deliverable {
    pub id: String,
    pub label: String,
    pub detail: String,
}

/// Methods sections, one per omics modality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Methods {
    pub genome: MethodSection,
    pub transcriptomics: MethodSection,
    pub metabolomics: MethodSection,
    pub integration: MethodSection,
    pub validation: MethodSection,
}

impl Methods {
    /// Sections in presentation order, keyed the way the methods page labels them.
    pub fn modalities(&self) -> [(&'static str, &MethodSection); 5] {
        [
            ("genome", &self.genome),
            ("transcriptomics", &self.transcriptomics),
            ("metabolomics", &self.metabolomics),
            ("integration", &self.integration),
            ("validation", &self.validation),
        ]
    }
}

/// Inputs / steps / tools / outputs for one modality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodSection {
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

/// A single finding card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,
    pub claim: String,
    pub evidence_type: String,
    #[serde(default)]
    pub artifacts: Vec<String>,
    pub why_it_matters: String,
    pub figure_ref: String,
}

/// Impact statements grouped by audience, plus follow-up directions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Impact {
    #[serde(default)]
    pub scientific: Vec<String>,
    #[serde(default)]
    pub resource: Vec<String>,
    #[serde(default)]
    pub translational: Vec<String>,
    #[serde(default)]
    pub follow_ups: Vec<String>,
}

/// External links and data depositions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resources {
    pub paper_doi: String,
    pub github: String,
    pub genome_accession: String,
    pub rnaseq_accession: String,
    pub metabolomics_accession: String,
    #[serde(default)]
    pub supplementary_tables: Vec<SupplementaryTable>,
}

/// One supplementary table link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementaryTable {
    pub label: String,
    pub url: String,
}

impl ContentConfig {
    /// Parse from a YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load from a YAML file.
    pub fn from_yaml(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
study:
  title: "PMF Biosynthesis in Chenpi"
  short_title: "PMF Biosynthesis"
  citation: "[NEED DOI]"
  summary: "Multi-omics dissection of PMF biosynthesis."
methods:
  genome:
    inputs: ["PacBio HiFi reads"]
    steps: ["Assemble with hifiasm"]
    tools: ["hifiasm"]
    outputs: ["Chromosome-level FASTA"]
  transcriptomics: {}
  metabolomics: {}
  integration: {}
  validation: {}
resources:
  paper_doi: "[NEED]"
  github: "[NEED]"
  genome_accession: "[NEED]"
  rnaseq_accession: "[NEED]"
  metabolomics_accession: "[NEED]"
"#;

    #[test]
    fn test_minimal_config_parses() {
        let cfg = ContentConfig::from_yaml_str(MINIMAL).unwrap();
        assert_eq!(cfg.study.short_title, "PMF Biosynthesis");
        assert!(cfg.deliverables.is_empty());
        assert!(cfg.glossary.is_empty());
        assert_eq!(cfg.methods.genome.tools, vec!["hifiasm".to_string()]);
    }

    #[test]
    fn test_modalities_order_is_fixed() {
        let cfg = ContentConfig::from_yaml_str(MINIMAL).unwrap();
        let keys: Vec<&str> = cfg.methods.modalities().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["genome", "transcriptomics", "metabolomics", "integration", "validation"]
        );
    }

    #[test]
    fn test_yaml_roundtrip() {
        let cfg = ContentConfig::from_yaml_str(MINIMAL).unwrap();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed = ContentConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(cfg.study.title, parsed.study.title);
        assert_eq!(cfg.resources.paper_doi, parsed.resources.paper_doi);
    }

    #[test]
    fn test_missing_study_is_an_error() {
        let err = ContentConfig::from_yaml_str("glossary: {}").unwrap_err();
        assert!(err.to_string().contains("missing field"));
    }
}
