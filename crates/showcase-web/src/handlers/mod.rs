//! HTTP handlers for all web routes.

pub mod api;
pub mod downloads;
pub mod findings;
pub mod impact;
pub mod methods;
pub mod overview;
pub mod pipeline;
pub mod resources;
pub mod study_design;
