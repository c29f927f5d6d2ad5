//! One-time loaded, immutable content store.

use std::path::{Path, PathBuf};

use tracing::info;

use showcase_common::error::Result;

use crate::config::ContentConfig;
use crate::tables::{
    self, CandidateGene, DataTable, CANDIDATE_COLUMNS, EXPRESSION_COLUMNS, METABOLITE_COLUMNS,
};

/// Content configuration filename, relative to the content directory.
pub const CONFIG_FILE: &str = "content_config.yaml";

/// Mock table filenames, relative to the content directory.
pub const EXPRESSION_FILE: &str = "data/expression_matrix.csv";
pub const METABOLITE_FILE: &str = "data/metabolite_table.csv";
pub const CANDIDATE_FILE: &str = "data/candidate_genes.csv";

/// Everything the pages display, read once at startup.
///
/// The store is shared behind an `Arc` and never mutated; content changes require a
/// process restart.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub config: ContentConfig,
    /// Raw YAML text, served verbatim by the config download endpoint
    pub config_text: String,
    pub expression: DataTable,
    pub metabolites: DataTable,
    pub candidates: DataTable,
    /// Typed candidate rows, sorted by ascending priority rank
    pub candidate_genes: Vec<CandidateGene>,
}

impl ContentStore {
    /// Load all content from `dir`.
    ///
    /// Any missing or malformed file is a hard error; there is no partial load.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        let config_path = dir.join(CONFIG_FILE);
        info!("Loading content configuration from {:?}", config_path);
        let config_text = std::fs::read_to_string(&config_path)?;
        let config = ContentConfig::from_yaml_str(&config_text)?;

        let expression = Self::load_table(dir, EXPRESSION_FILE, "expression_matrix", EXPRESSION_COLUMNS)?;
        let metabolites = Self::load_table(dir, METABOLITE_FILE, "metabolite_table", METABOLITE_COLUMNS)?;
        let candidates = Self::load_table(dir, CANDIDATE_FILE, "candidate_genes", CANDIDATE_COLUMNS)?;

        let candidate_csv = std::fs::read_to_string(dir.join(CANDIDATE_FILE))?;
        let candidate_genes = tables::parse_candidates(&candidate_csv)?;

        info!(
            "Content store ready: {} deliverables, {} findings, {} genes, {} metabolites, {} candidates",
            config.deliverables.len(),
            config.findings.len(),
            expression.rows.len(),
            metabolites.rows.len(),
            candidate_genes.len(),
        );

        Ok(Self {
            config,
            config_text,
            expression,
            metabolites,
            candidates,
            candidate_genes,
        })
    }

    fn load_table(dir: &Path, file: &str, name: &str, expected: &[&str]) -> Result<DataTable> {
        let path: PathBuf = dir.join(file);
        DataTable::load(name, expected, &path.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The workspace root ships the real content files; loading them exercises the
    /// whole startup path.
    fn workspace_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
    }

    #[test]
    fn test_load_shipped_content() {
        let store = ContentStore::load(workspace_root()).unwrap();
        assert!(!store.config.study.title.is_empty());
        assert_eq!(store.expression.columns, EXPRESSION_COLUMNS);
        assert_eq!(store.metabolites.columns, METABOLITE_COLUMNS);
        assert_eq!(store.candidates.columns, CANDIDATE_COLUMNS);
        assert!(!store.candidate_genes.is_empty());
    }

    #[test]
    fn test_candidates_ranked_after_load() {
        let store = ContentStore::load(workspace_root()).unwrap();
        let ranks: Vec<u32> = store.candidate_genes.iter().map(|c| c.priority_rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn test_missing_directory_fails() {
        assert!(ContentStore::load("/nonexistent/content/dir").is_err());
    }
}
