//! showcase-content — Content model for the multi-omics showcase.
//!
//! Everything the pages display comes from two sources, both read exactly once at
//! startup and immutable afterwards:
//!   - `content_config.yaml` — study narrative, methods, findings, impact, resources
//!   - `data/*.csv` — three mock tables (expression, metabolites, candidates)

pub mod config;
pub mod store;
pub mod tables;

pub use config::ContentConfig;
pub use store::ContentStore;
pub use tables::{CandidateGene, DataTable};
