//! Mock CSV table loading.
//!
//! The three tables ship with the repository as mock data and are replaced by the
//! real supplementary tables after public deposition. Each loader checks the header
//! row against the documented schema so a wrong or truncated file fails at startup
//! instead of rendering a half-empty page.

use serde::{Deserialize, Serialize};
use tracing::debug;

use showcase_common::error::{Result, ShowcaseError};

/// Expected header of `expression_matrix.csv`.
pub const EXPRESSION_COLUMNS: &[&str] = &[
    "gene_id",
    "gene_name",
    "annotation",
    "pericarp_early",
    "pericarp_mid",
    "pericarp_late",
    "leaf",
    "module",
    "r_nobiletin",
    "r_tangeretin",
];

/// Expected header of `metabolite_table.csv`.
pub const METABOLITE_COLUMNS: &[&str] = &[
    "metabolite_id",
    "metabolite_name",
    "class",
    "formula",
    "pericarp_early",
    "pericarp_mid",
    "pericarp_late",
    "leaf",
    "annotation_source",
    "confidence_level",
];

/// Expected header of `candidate_genes.csv`.
pub const CANDIDATE_COLUMNS: &[&str] = &[
    "gene_id",
    "gene_name",
    "gene_family",
    "chromosome",
    "module",
    "pearson_r_nobiletin",
    "module_membership",
    "in_vitro_validated",
    "priority_rank",
];

/// A flat table held as strings, exactly as displayed.
#[derive(Debug, Clone, Serialize)]
pub struct DataTable {
    /// Table name used in error messages and logs
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Parse CSV text, checking the header against `expected`.
    pub fn parse(name: &str, expected: &[&str], content: &str) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(content.as_bytes());

        let columns: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if columns != expected {
            return Err(ShowcaseError::MalformedTable {
                table: name.to_string(),
                reason: format!("header {:?} does not match expected {:?}", columns, expected),
            });
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.len() != columns.len() {
                return Err(ShowcaseError::MalformedTable {
                    table: name.to_string(),
                    reason: format!(
                        "row {} has {} fields, expected {}",
                        rows.len() + 1,
                        record.len(),
                        columns.len()
                    ),
                });
            }
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        debug!("Parsed table {}: {} rows", name, rows.len());
        Ok(Self {
            name: name.to_string(),
            columns,
            rows,
        })
    }

    /// Load from a CSV file.
    pub fn load(name: &str, expected: &[&str], path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(name, expected, &content)
    }

    /// Re-serialize as CSV bytes for the download endpoints.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ShowcaseError::Config(format!("CSV serialization failed: {e}")))?;
        Ok(bytes)
    }
}

/// One row of `candidate_genes.csv`, typed for the validated/pending view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateGene {
    pub gene_id: String,
    pub gene_name: String,
    pub gene_family: String,
    pub chromosome: String,
    pub module: String,
    pub pearson_r_nobiletin: f64,
    pub module_membership: f64,
    pub in_vitro_validated: bool,
    pub priority_rank: u32,
}

/// Parse candidate rows from CSV text, sorted by ascending priority rank.
pub fn parse_candidates(content: &str) -> Result<Vec<CandidateGene>> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut candidates = Vec::new();
    for result in reader.deserialize() {
        let row: CandidateGene = result?;
        candidates.push(row);
    }
    candidates.sort_by_key(|c| c.priority_rank);
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANDIDATE_CSV: &str = "\
gene_id,gene_name,gene_family,chromosome,module,pearson_r_nobiletin,module_membership,in_vitro_validated,priority_rank
Cc03g01180,CcOMT3,OMT,chr3,turquoise,0.81,0.79,false,3
Cc05g08820,CcOMT1,OMT,chr5,blue,0.94,0.91,true,1
Cc08g12400,CcCYP450-82C,CYP450,chr8,blue,0.88,0.84,true,2
";

    #[test]
    fn test_parse_matches_schema() {
        let header = CANDIDATE_COLUMNS.join(",");
        let content = format!("{header}\nCc05g08820,CcOMT1,OMT,chr5,blue,0.94,0.91,true,1\n");
        let table = DataTable::parse("candidate_genes", CANDIDATE_COLUMNS, &content).unwrap();
        assert_eq!(table.columns, CANDIDATE_COLUMNS);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], "Cc05g08820");
    }

    #[test]
    fn test_wrong_header_is_rejected() {
        let err = DataTable::parse("expression_matrix", EXPRESSION_COLUMNS, "a,b,c\n1,2,3\n")
            .unwrap_err();
        assert!(matches!(err, ShowcaseError::MalformedTable { .. }));
    }

    #[test]
    fn test_csv_roundtrip_preserves_header() {
        let table = DataTable::parse("candidate_genes", CANDIDATE_COLUMNS, CANDIDATE_CSV).unwrap();
        let bytes = table.to_csv_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("gene_id,gene_name,gene_family"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_candidates_sorted_by_priority() {
        let candidates = parse_candidates(CANDIDATE_CSV).unwrap();
        let ranks: Vec<u32> = candidates.iter().map(|c| c.priority_rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert!(candidates[0].in_vitro_validated);
        assert_eq!(candidates[2].gene_name, "CcOMT3");
    }
}
