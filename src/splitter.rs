//! Splitting of concatenated numbered headings.
//!
//! The line builder merges fragments by vertical proximity alone, so two
//! short headings printed side by side ("1. Scope    2. References") can
//! land on one visual line. This module detects that shape and re-splits
//! the line into independent heading candidates.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A numbered-heading run: a decimal token and its non-digit caption.
    static ref RE_HEADING_RUN: Regex = Regex::new(r"[0-9]+\.[^0-9]+").unwrap();

    /// A following numbering token, used as the run-boundary check.
    static ref RE_NUMBERING_TOKEN: Regex = Regex::new(r"^[0-9]+\.").unwrap();
}

/// Split a line that concatenates several numbered headings.
///
/// Scans for runs of "decimal numbering token followed by non-digit
/// content"; a run only counts when it extends up to the next numbering
/// token or the end of the line (a trailing bare number invalidates its
/// run). Two or more runs make each one an independent candidate; anything
/// less passes the original text through unchanged.
pub fn split_concatenated_headings(text: &str) -> Vec<String> {
    let mut runs = Vec::new();
    for m in RE_HEADING_RUN.find_iter(text) {
        let rest = &text[m.end()..];
        if rest.is_empty() || RE_NUMBERING_TOKEN.is_match(rest) {
            runs.push(m.as_str().trim().to_string());
        }
    }
    if runs.len() > 1 {
        log::trace!("split line into {} headings: {:?}", runs.len(), runs);
        runs
    } else {
        vec![text.to_string()]
    }
}

/// Normalize heading text for output: collapse whitespace and repair two
/// known extraction artifacts that split "You" and "THERE" across a space.
pub fn normalize_heading(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace("Y ou", "You").replace("T HERE", "THERE")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_merged_headings_split() {
        let parts = split_concatenated_headings("1. Scope 2. References");
        assert_eq!(parts, vec!["1. Scope", "2. References"]);
    }

    #[test]
    fn test_three_merged_headings_split() {
        let parts = split_concatenated_headings("1. Scope 2. References 3. Terms");
        assert_eq!(parts, vec!["1. Scope", "2. References", "3. Terms"]);
    }

    #[test]
    fn test_single_heading_passes_through() {
        let parts = split_concatenated_headings("1. Introduction");
        assert_eq!(parts, vec!["1. Introduction"]);
    }

    #[test]
    fn test_plain_text_passes_through() {
        let parts = split_concatenated_headings("No numbering here");
        assert_eq!(parts, vec!["No numbering here"]);
    }

    #[test]
    fn test_trailing_bare_number_invalidates_run() {
        // "3" is not a numbering token, so the second run has no valid
        // boundary and the line is left intact.
        let parts = split_concatenated_headings("1. A 2. B 3");
        assert_eq!(parts, vec!["1. A 2. B 3"]);
    }

    #[test]
    fn test_multilevel_numbering_not_split() {
        // "2.1 Background" has a digit right after the dot; it is one
        // heading, not a concatenation.
        let parts = split_concatenated_headings("2.1 Background");
        assert_eq!(parts, vec!["2.1 Background"]);
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_heading("  1.   Scope \t now "), "1. Scope now");
    }

    #[test]
    fn test_normalize_repairs_spacing_artifacts() {
        assert_eq!(normalize_heading("What Y ou Need"), "What You Need");
        assert_eq!(normalize_heading("T HERE and Back"), "THERE and Back");
    }
}
