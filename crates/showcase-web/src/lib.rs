//! showcase-web — Web GUI for the multi-omics showcase
//! Serves the seven-page research narrative:
//!   - Overview, Study Design, Methods, Findings, Pipeline, Impact, Resources
//!   - Mock data / config download endpoints
//!   - Small JSON API over the loaded content

pub mod handlers;
pub mod router;
pub mod state;
