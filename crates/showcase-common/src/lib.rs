//! showcase-common — Shared error type and placeholder helpers used across the
//! showcase crates.

pub mod error;
pub mod placeholder;

pub use placeholder::{needs_data, PLACEHOLDER_MARKER};
