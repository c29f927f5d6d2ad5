//! Placeholder-marker detection.
//!
//! Content fields that still need numbers or links from the published paper carry
//! the literal marker `[NEED ...]` (e.g. `[NEED N]`, `[NEED from paper methods]`).
//! Pages render such fields in the amber "pending" style instead of the normal one.

/// Literal prefix that marks a field as awaiting real data.
pub const PLACEHOLDER_MARKER: &str = "[NEED";

/// True if the text still contains a placeholder marker.
pub fn needs_data(text: &str) -> bool {
    text.contains(PLACEHOLDER_MARKER)
}

/// Card accent colors for a text field: `(border, background)`.
///
/// Placeholder fields get the amber pair, populated fields the green pair.
pub fn card_colors(text: &str) -> (&'static str, &'static str) {
    if needs_data(text) {
        ("#d97706", "#fffbeb")
    } else {
        ("#2d6a4f", "#f0fdf4")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_marker_anywhere() {
        assert!(needs_data("[NEED N] replicates"));
        assert!(needs_data("archived in [NEED repository]"));
        assert!(!needs_data("BUSCO completeness 98.1%"));
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert!(!needs_data("no need for data here"));
    }

    #[test]
    fn test_card_colors_distinguish_placeholder() {
        let pending = card_colors("coverage: [NEED]×");
        let populated = card_colors("coverage: 48×");
        assert_ne!(pending, populated);
        assert_eq!(pending.1, "#fffbeb");
        assert_eq!(populated.1, "#f0fdf4");
    }
}
